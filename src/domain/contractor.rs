//! Capability shared by every party that can appear in a notification.

/// Anything addressable by id and display name.
pub trait Contractor {
    fn id(&self) -> i64;

    fn name(&self) -> &str;

    /// Display name used in message templates: the name followed by the id.
    fn full_name(&self) -> String {
        format!("{} {}", self.name(), self.id()).trim().to_string()
    }
}
