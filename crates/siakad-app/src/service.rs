//! Service assembly

use siakad_domain::repository::{CourseRepository, NotificationService, StudentRepository};
use siakad_domain::service::{EnrollmentService, GradeCalculator};
use siakad_types::Result;
use tracing::debug;

use crate::config::Config;

/// Build an enrollment service using the grading policy from `config`
pub fn open_enrollment_service<S, C, N>(
    config: &Config,
    students: S,
    courses: C,
    notifier: N,
) -> Result<EnrollmentService<S, C, N>>
where
    S: StudentRepository,
    C: CourseRepository,
    N: NotificationService,
{
    let calculator = GradeCalculator::with_policy(config.grading_policy()?)?;
    debug!(
        custom_policy = config.policy_path.is_some(),
        "enrollment service ready"
    );
    Ok(EnrollmentService::new(students, courses, notifier, calculator))
}
