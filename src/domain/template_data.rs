//! Flat variable mapping handed to the message renderer.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Raised when two template fragments define the same variable.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("duplicate template variable {0}")]
pub struct DuplicateVariable(pub String);

/// Insertion-ordered mapping of template variable names to values.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TemplateData(Map<String, Value>);

impl TemplateData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert used by the fragment builders.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Appends every variable of `other`, refusing to overwrite an existing key.
    pub fn merge(&mut self, other: TemplateData) -> Result<(), DuplicateVariable> {
        if let Some(key) = other.0.keys().find(|key| self.0.contains_key(*key)) {
            return Err(DuplicateVariable(key.clone()));
        }
        self.0.extend(other.0);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}
