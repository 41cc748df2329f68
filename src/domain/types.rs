//! Strongly-typed value objects used by domain entities.
//!
//! Identifiers are thin wrappers over the raw integers received from callers.
//! They carry no positivity constraint: request fields are coerced loosely, so
//! a malformed id becomes `0` and is left for the entity store to reject.
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Status code is not part of the return status table.
    #[error("unknown return status code {0}")]
    UnknownStatus(i64),
}

/// Macro to generate lightweight newtypes for entity identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw identifier.
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw `i64` backing this identifier.
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(SellerId, "Unique identifier for a seller (reseller).");
id_newtype!(ClientId, "Unique identifier for a client contractor.");
id_newtype!(EmployeeId, "Unique identifier for an employee.");

/// Kind of return event carried by the `notificationType` request field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationType {
    /// A new position was added to the return.
    New,
    /// The status of a returned position changed.
    Change,
    /// Any other code; accepted but never triggers client notification.
    Unknown(i64),
}

impl NotificationType {
    pub const NEW_CODE: i64 = 1;
    pub const CHANGE_CODE: i64 = 2;

    pub const fn code(self) -> i64 {
        match self {
            NotificationType::New => Self::NEW_CODE,
            NotificationType::Change => Self::CHANGE_CODE,
            NotificationType::Unknown(code) => code,
        }
    }
}

impl From<i64> for NotificationType {
    fn from(code: i64) -> Self {
        match code {
            Self::NEW_CODE => NotificationType::New,
            Self::CHANGE_CODE => NotificationType::Change,
            other => NotificationType::Unknown(other),
        }
    }
}

/// Fixed table of return statuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReturnStatus {
    Completed,
    Pending,
    Rejected,
}

impl ReturnStatus {
    /// Human readable name used in message templates.
    pub const fn name(self) -> &'static str {
        match self {
            ReturnStatus::Completed => "Completed",
            ReturnStatus::Pending => "Pending",
            ReturnStatus::Rejected => "Rejected",
        }
    }

    /// Name for a raw status code, or an empty string when the code is unknown.
    pub fn name_for_code(code: i64) -> &'static str {
        ReturnStatus::try_from(code).map_or("", ReturnStatus::name)
    }
}

impl TryFrom<i64> for ReturnStatus {
    type Error = TypeConstraintError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ReturnStatus::Completed),
            1 => Ok(ReturnStatus::Pending),
            2 => Ok(ReturnStatus::Rejected),
            other => Err(TypeConstraintError::UnknownStatus(other)),
        }
    }
}

impl Display for ReturnStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Discriminator stored on contractor records.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(from = "i64", into = "i64")]
pub enum ContractorType {
    #[default]
    Customer,
    Other(i64),
}

impl ContractorType {
    pub const CUSTOMER_CODE: i64 = 0;
}

impl From<i64> for ContractorType {
    fn from(code: i64) -> Self {
        if code == Self::CUSTOMER_CODE {
            ContractorType::Customer
        } else {
            ContractorType::Other(code)
        }
    }
}

impl From<ContractorType> for i64 {
    fn from(value: ContractorType) -> Self {
        match value {
            ContractorType::Customer => ContractorType::CUSTOMER_CODE,
            ContractorType::Other(code) => code,
        }
    }
}
