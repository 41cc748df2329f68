use serde::{Deserialize, Serialize};

use crate::domain::contractor::Contractor;
use crate::domain::types::SellerId;

/// Business on whose behalf notifications are sent.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Seller {
    pub id: SellerId,
    pub name: String,
}

impl Contractor for Seller {
    fn id(&self) -> i64 {
        self.id.get()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
