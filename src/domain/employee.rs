use serde::{Deserialize, Serialize};

use crate::domain::contractor::Contractor;
use crate::domain::types::EmployeeId;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
}

impl Contractor for Employee {
    fn id(&self) -> i64 {
        self.id.get()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
