//! Grading policy loader from TOML configuration
//!
//! ```toml
//! [[status_bands]]
//! first_semester = 1
//! last_semester = 2
//! rules = [
//!     { min_gpa = 2.0, status = "ACTIVE" },
//!     { min_gpa = 0.0, status = "PROBATION" },
//! ]
//!
//! [[credit_limits]]
//! min_gpa = 0.0
//! max_credits = 15
//! ```

use std::fs;
use std::path::Path;

use siakad_domain::service::GradingPolicy;
use siakad_types::{ConfigError, Error, Result};
use tracing::debug;

pub struct PolicyLoader;

impl PolicyLoader {
    /// Load and validate a grading policy from a TOML file
    pub fn load_from_file(path: &Path) -> Result<GradingPolicy> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read grading policy file {}: {}",
                path.display(),
                e
            )))
        })?;

        debug!(path = %path.display(), "loading grading policy");
        Self::load_from_str(&content)
    }

    /// Load and validate a grading policy from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<GradingPolicy> {
        let policy: GradingPolicy = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse grading policy TOML: {}",
                e
            )))
        })?;

        policy.validate()?;
        Ok(policy)
    }

    /// Render a policy as TOML, e.g. to write out the defaults for editing
    pub fn to_toml_string(policy: &GradingPolicy) -> Result<String> {
        toml::to_string_pretty(policy).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to serialize grading policy: {}",
                e
            )))
        })
    }
}
