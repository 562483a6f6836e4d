//! Core types for academic records

mod error;

pub use error::*;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Academic standing of a student
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AcademicStatus {
    #[default]
    Active,
    Probation,
    Suspended,
}

impl AcademicStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AcademicStatus::Active => "ACTIVE",
            AcademicStatus::Probation => "PROBATION",
            AcademicStatus::Suspended => "SUSPENDED",
        }
    }
}

impl std::fmt::Display for AcademicStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AcademicStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ACTIVE" => Ok(AcademicStatus::Active),
            "PROBATION" => Ok(AcademicStatus::Probation),
            "SUSPENDED" => Ok(AcademicStatus::Suspended),
            other => Err(Error::InvalidArgument(format!(
                "Unknown academic status: {}",
                other
            ))),
        }
    }
}
