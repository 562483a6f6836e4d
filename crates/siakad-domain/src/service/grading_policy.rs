//! Threshold tables for academic status and credit limits
//!
//! Both tables are ordered rule lists evaluated highest threshold first:
//! the first rule whose `min_gpa` does not exceed the GPA wins. The lowest
//! rule of every list must start at 0.0 so that each valid GPA matches.

use serde::{Deserialize, Serialize};
use siakad_types::{AcademicStatus, ConfigError};

/// Upper bound of the grade-point scale
pub const MAX_GPA: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusRule {
    pub min_gpa: f64,
    pub status: AcademicStatus,
}

/// Status rules applying to a contiguous range of semesters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusBand {
    pub first_semester: u32,
    /// Inclusive; `None` means every later semester
    #[serde(default)]
    pub last_semester: Option<u32>,
    pub rules: Vec<StatusRule>,
}

impl StatusBand {
    pub fn contains(&self, semester: u32) -> bool {
        semester >= self.first_semester && self.last_semester.map_or(true, |last| semester <= last)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditLimitRule {
    pub min_gpa: f64,
    pub max_credits: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingPolicy {
    pub status_bands: Vec<StatusBand>,
    pub credit_limits: Vec<CreditLimitRule>,
}

fn status_rule(min_gpa: f64, status: AcademicStatus) -> StatusRule {
    StatusRule { min_gpa, status }
}

fn credit_rule(min_gpa: f64, max_credits: u32) -> CreditLimitRule {
    CreditLimitRule { min_gpa, max_credits }
}

impl Default for GradingPolicy {
    fn default() -> Self {
        use siakad_types::AcademicStatus::*;

        Self {
            status_bands: vec![
                // First year: no suspension
                StatusBand {
                    first_semester: 1,
                    last_semester: Some(2),
                    rules: vec![status_rule(2.0, Active), status_rule(0.0, Probation)],
                },
                StatusBand {
                    first_semester: 3,
                    last_semester: Some(4),
                    rules: vec![
                        status_rule(2.25, Active),
                        status_rule(2.0, Probation),
                        status_rule(0.0, Suspended),
                    ],
                },
                StatusBand {
                    first_semester: 5,
                    last_semester: None,
                    rules: vec![
                        status_rule(2.5, Active),
                        status_rule(2.0, Probation),
                        status_rule(0.0, Suspended),
                    ],
                },
            ],
            credit_limits: vec![
                credit_rule(3.0, 24),
                credit_rule(2.5, 21),
                credit_rule(2.0, 18),
                credit_rule(0.0, 15),
            ],
        }
    }
}

impl GradingPolicy {
    /// Check that the bands tile every semester from 1 upward and that each
    /// rule list is strictly descending and bottoms out at 0.0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.status_bands.is_empty() {
            return Err(ConfigError::InvalidPolicy(
                "at least one status band is required".to_string(),
            ));
        }

        let mut next_semester = 1;
        let band_count = self.status_bands.len();
        for (index, band) in self.status_bands.iter().enumerate() {
            if band.first_semester != next_semester {
                return Err(ConfigError::InvalidPolicy(format!(
                    "status band starting at semester {} leaves a gap or overlap (expected {})",
                    band.first_semester, next_semester
                )));
            }
            match band.last_semester {
                Some(last) if last < band.first_semester => {
                    return Err(ConfigError::InvalidPolicy(format!(
                        "status band {}-{} ends before it starts",
                        band.first_semester, last
                    )));
                }
                Some(last) => {
                    next_semester = last.checked_add(1).ok_or_else(|| {
                        ConfigError::InvalidPolicy(format!(
                            "status band ending at semester {} cannot be followed by another band",
                            last
                        ))
                    })?;
                }
                None if index + 1 != band_count => {
                    return Err(ConfigError::InvalidPolicy(format!(
                        "open-ended status band at semester {} must be the last band",
                        band.first_semester
                    )));
                }
                None => {}
            }

            let label = format!("status band starting at semester {}", band.first_semester);
            check_thresholds(band.rules.iter().map(|r| r.min_gpa), &label)?;
        }

        if let Some(last) = self.status_bands.last().and_then(|b| b.last_semester) {
            return Err(ConfigError::InvalidPolicy(format!(
                "semesters after {} are not covered by any status band",
                last
            )));
        }

        check_thresholds(self.credit_limits.iter().map(|r| r.min_gpa), "credit limits")
    }

    pub fn band_for(&self, semester: u32) -> Option<&StatusBand> {
        self.status_bands.iter().find(|band| band.contains(semester))
    }

    pub fn status_for(&self, gpa: f64, semester: u32) -> Option<AcademicStatus> {
        self.band_for(semester)?
            .rules
            .iter()
            .find(|rule| gpa >= rule.min_gpa)
            .map(|rule| rule.status)
    }

    pub fn max_credits_for(&self, gpa: f64) -> Option<u32> {
        self.credit_limits
            .iter()
            .find(|rule| gpa >= rule.min_gpa)
            .map(|rule| rule.max_credits)
    }
}

fn check_thresholds(
    thresholds: impl Iterator<Item = f64>,
    label: &str,
) -> Result<(), ConfigError> {
    let mut previous: Option<f64> = None;
    for min_gpa in thresholds {
        if !(0.0..=MAX_GPA).contains(&min_gpa) {
            return Err(ConfigError::InvalidPolicy(format!(
                "{}: threshold {} is outside 0.0-{}",
                label, min_gpa, MAX_GPA
            )));
        }
        if let Some(prev) = previous {
            if min_gpa >= prev {
                return Err(ConfigError::InvalidPolicy(format!(
                    "{}: thresholds must be strictly descending ({} after {})",
                    label, min_gpa, prev
                )));
            }
        }
        previous = Some(min_gpa);
    }

    match previous {
        None => Err(ConfigError::InvalidPolicy(format!("{}: no rules", label))),
        Some(lowest) if lowest != 0.0 => Err(ConfigError::InvalidPolicy(format!(
            "{}: lowest threshold must be 0.0, found {}",
            label, lowest
        ))),
        Some(_) => Ok(()),
    }
}
