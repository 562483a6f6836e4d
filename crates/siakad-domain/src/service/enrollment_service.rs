//! Enrollment Service - course enrollment and drop workflow
//!
//! Each operation loads the student and course from the repositories,
//! applies the admission rules in order, and only then mutates the course
//! count and notifies the student:
//! 1. Student exists and is not suspended
//! 2. Course exists and has a free seat
//! 3. Prerequisites are met
//! 4. Persist the course and send the confirmation email

use siakad_types::{Error, Result};
use tracing::{debug, info, warn};

use super::grade_calculator::GradeCalculator;
use crate::model::{Course, Enrollment, Student};
use crate::repository::{CourseRepository, NotificationService, StudentRepository};

pub const ENROLLMENT_CONFIRMATION_SUBJECT: &str = "Enrollment Confirmation";
pub const DROP_CONFIRMATION_SUBJECT: &str = "Course Drop Confirmation";

pub struct EnrollmentService<S, C, N> {
    students: S,
    courses: C,
    notifier: N,
    calculator: GradeCalculator,
}

impl<S, C, N> EnrollmentService<S, C, N>
where
    S: StudentRepository,
    C: CourseRepository,
    N: NotificationService,
{
    pub fn new(students: S, courses: C, notifier: N, calculator: GradeCalculator) -> Self {
        Self {
            students,
            courses,
            notifier,
            calculator,
        }
    }

    pub fn students(&self) -> &S {
        &self.students
    }

    pub fn courses(&self) -> &C {
        &self.courses
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn calculator(&self) -> &GradeCalculator {
        &self.calculator
    }

    pub fn enroll_course(&self, student_id: &str, course_code: &str) -> Result<Enrollment> {
        let student = self.find_student(student_id)?;
        if student.is_suspended() {
            warn!(student_id, course_code, "enrollment rejected: student suspended");
            return Err(Error::Enrollment(format!(
                "Student {} is suspended and cannot enroll",
                student_id
            )));
        }

        let mut course = self.find_course(course_code)?;
        if course.is_full() {
            warn!(
                student_id,
                course_code,
                capacity = course.capacity,
                "enrollment rejected: course full"
            );
            return Err(Error::CourseFull(course_code.to_string()));
        }

        if !self.courses.is_prerequisite_met(student_id, course_code)? {
            warn!(student_id, course_code, "enrollment rejected: prerequisites not met");
            return Err(Error::PrerequisiteNotMet {
                student_id: student_id.to_string(),
                course_code: course_code.to_string(),
            });
        }

        let enrollment = Enrollment::new(student_id, course_code);
        course.enrolled_count += 1;
        self.courses.update(&course)?;

        self.notifier.send_email(
            &student.email,
            ENROLLMENT_CONFIRMATION_SUBJECT,
            &format!(
                "You have been enrolled in {} ({}).",
                course.name, course.course_code
            ),
        )?;

        info!(
            student_id,
            course_code,
            enrollment_id = %enrollment.enrollment_id,
            enrolled = course.enrolled_count,
            capacity = course.capacity,
            "student enrolled"
        );
        Ok(enrollment)
    }

    /// Whether `requested_credits` fits under the cap derived from the student's GPA
    pub fn validate_credit_limit(&self, student_id: &str, requested_credits: u32) -> Result<bool> {
        let student = self.find_student(student_id)?;
        let max_credits = self.calculator.calculate_max_credits(student.gpa)?;
        let within_limit = requested_credits <= max_credits;

        debug!(
            student_id,
            gpa = student.gpa,
            requested_credits,
            max_credits,
            within_limit,
            "credit limit checked"
        );
        Ok(within_limit)
    }

    pub fn drop_course(&self, student_id: &str, course_code: &str) -> Result<()> {
        let student = self.find_student(student_id)?;
        let mut course = self.find_course(course_code)?;

        course.enrolled_count = course.enrolled_count.saturating_sub(1);
        self.courses.update(&course)?;

        self.notifier.send_email(
            &student.email,
            DROP_CONFIRMATION_SUBJECT,
            &format!("You have dropped {} ({}).", course.name, course.course_code),
        )?;

        info!(student_id, course_code, enrolled = course.enrolled_count, "course dropped");
        Ok(())
    }

    fn find_student(&self, student_id: &str) -> Result<Student> {
        debug!(student_id, "looking up student");
        self.students.find_by_id(student_id)?.ok_or_else(|| {
            warn!(student_id, "student not found");
            Error::StudentNotFound(student_id.to_string())
        })
    }

    fn find_course(&self, course_code: &str) -> Result<Course> {
        debug!(course_code, "looking up course");
        self.courses.find_by_course_code(course_code)?.ok_or_else(|| {
            warn!(course_code, "course not found");
            Error::CourseNotFound(course_code.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use siakad_types::AcademicStatus;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    // ==========================================
    // Recording fakes
    // ==========================================

    #[derive(Default)]
    struct FakeStudents {
        students: HashMap<String, Student>,
    }

    impl StudentRepository for FakeStudents {
        fn find_by_id(&self, id: &str) -> Result<Option<Student>> {
            Ok(self.students.get(id).cloned())
        }

        fn update(&self, _student: &Student) -> Result<()> {
            Ok(())
        }
    }

    struct FakeCourses {
        courses: HashMap<String, Course>,
        prerequisite_met: bool,
        prerequisite_checks: Cell<usize>,
        updates: RefCell<Vec<Course>>,
    }

    impl CourseRepository for FakeCourses {
        fn find_by_course_code(&self, course_code: &str) -> Result<Option<Course>> {
            Ok(self.courses.get(course_code).cloned())
        }

        fn is_prerequisite_met(&self, _student_id: &str, _course_code: &str) -> Result<bool> {
            self.prerequisite_checks.set(self.prerequisite_checks.get() + 1);
            Ok(self.prerequisite_met)
        }

        fn update(&self, course: &Course) -> Result<()> {
            self.updates.borrow_mut().push(course.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeNotifier {
        sent: RefCell<Vec<(String, String, String)>>,
    }

    impl NotificationService for FakeNotifier {
        fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<()> {
            self.sent
                .borrow_mut()
                .push((to.to_string(), subject.to_string(), body.to_string()));
            Ok(())
        }
    }

    struct FailingNotifier;

    impl NotificationService for FailingNotifier {
        fn send_email(&self, _to: &str, _subject: &str, _body: &str) -> Result<()> {
            Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "mail relay unavailable",
            )))
        }
    }

    fn student(status: AcademicStatus) -> Student {
        Student {
            id: "S1".to_string(),
            name: "Belva".to_string(),
            email: "belva@mail.com".to_string(),
            program: "Informatika".to_string(),
            semester: 3,
            gpa: 3.2,
            academic_status: status,
        }
    }

    fn course(enrolled_count: u32) -> Course {
        Course {
            course_code: "CS101".to_string(),
            name: "Algoritma".to_string(),
            credit_hours: 3,
            capacity: 30,
            enrolled_count,
            instructor: "Dosen A".to_string(),
        }
    }

    fn courses_with(course: Course, prerequisite_met: bool) -> FakeCourses {
        FakeCourses {
            courses: HashMap::from([(course.course_code.clone(), course)]),
            prerequisite_met,
            prerequisite_checks: Cell::new(0),
            updates: RefCell::new(Vec::new()),
        }
    }

    fn service_with(
        student: Student,
        courses: FakeCourses,
    ) -> EnrollmentService<FakeStudents, FakeCourses, FakeNotifier> {
        let students = FakeStudents {
            students: HashMap::from([(student.id.clone(), student)]),
        };
        EnrollmentService::new(
            students,
            courses,
            FakeNotifier::default(),
            GradeCalculator::new(),
        )
    }

    fn default_service() -> EnrollmentService<FakeStudents, FakeCourses, FakeNotifier> {
        service_with(student(AcademicStatus::Active), courses_with(course(10), true))
    }

    // ==========================================
    // enroll_course
    // ==========================================

    #[test]
    fn test_enroll_success() {
        let service = default_service();

        let enrollment = service.enroll_course("S1", "CS101").unwrap();

        assert_eq!(enrollment.student_id, "S1");
        assert_eq!(enrollment.course_code, "CS101");
        assert!(!enrollment.enrollment_id.is_empty());

        let updates = service.courses().updates.borrow();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].enrolled_count, 11);

        let sent = service.notifier().sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "belva@mail.com");
        assert_eq!(sent[0].1, ENROLLMENT_CONFIRMATION_SUBJECT);
        assert!(sent[0].2.contains("Algoritma"));
    }

    #[test]
    fn test_enroll_student_not_found() {
        let service = default_service();
        assert!(matches!(
            service.enroll_course("S2", "CS101"),
            Err(Error::StudentNotFound(id)) if id == "S2"
        ));
        assert!(service.notifier().sent.borrow().is_empty());
    }

    #[test]
    fn test_enroll_suspended_student() {
        let service = service_with(
            student(AcademicStatus::Suspended),
            courses_with(course(10), true),
        );
        assert!(matches!(
            service.enroll_course("S1", "CS101"),
            Err(Error::Enrollment(_))
        ));
        assert!(service.courses().updates.borrow().is_empty());
    }

    #[test]
    fn test_enroll_probation_student_allowed() {
        let service = service_with(
            student(AcademicStatus::Probation),
            courses_with(course(10), true),
        );
        assert!(service.enroll_course("S1", "CS101").is_ok());
    }

    #[test]
    fn test_enroll_course_not_found() {
        let service = default_service();
        assert!(matches!(
            service.enroll_course("S1", "CS999"),
            Err(Error::CourseNotFound(code)) if code == "CS999"
        ));
    }

    #[test]
    fn test_enroll_course_full() {
        let service = service_with(student(AcademicStatus::Active), courses_with(course(30), true));
        assert!(matches!(
            service.enroll_course("S1", "CS101"),
            Err(Error::CourseFull(_))
        ));
        // capacity is checked before prerequisites
        assert_eq!(service.courses().prerequisite_checks.get(), 0);
        assert!(service.courses().updates.borrow().is_empty());
    }

    #[test]
    fn test_enroll_prerequisite_not_met() {
        let service = service_with(student(AcademicStatus::Active), courses_with(course(10), false));
        assert!(matches!(
            service.enroll_course("S1", "CS101"),
            Err(Error::PrerequisiteNotMet { .. })
        ));
        assert!(service.courses().updates.borrow().is_empty());
        assert!(service.notifier().sent.borrow().is_empty());
    }

    #[test]
    fn test_enroll_notifier_failure_propagates() {
        let students = FakeStudents {
            students: HashMap::from([("S1".to_string(), student(AcademicStatus::Active))]),
        };
        let service = EnrollmentService::new(
            students,
            courses_with(course(10), true),
            FailingNotifier,
            GradeCalculator::new(),
        );
        assert!(matches!(service.enroll_course("S1", "CS101"), Err(Error::Io(_))));
    }

    // ==========================================
    // validate_credit_limit
    // ==========================================

    #[test]
    fn test_credit_limit_within() {
        assert!(default_service().validate_credit_limit("S1", 20).unwrap());
    }

    #[test]
    fn test_credit_limit_exactly_at_cap() {
        // GPA 3.2 allows 24 credits
        assert!(default_service().validate_credit_limit("S1", 24).unwrap());
    }

    #[test]
    fn test_credit_limit_exceeded() {
        assert!(!default_service().validate_credit_limit("S1", 30).unwrap());
    }

    #[test]
    fn test_credit_limit_student_not_found() {
        assert!(matches!(
            default_service().validate_credit_limit("X", 10),
            Err(Error::StudentNotFound(_))
        ));
    }

    // ==========================================
    // drop_course
    // ==========================================

    #[test]
    fn test_drop_success() {
        let service = default_service();

        service.drop_course("S1", "CS101").unwrap();

        let updates = service.courses().updates.borrow();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].enrolled_count, 9);

        let sent = service.notifier().sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "belva@mail.com");
        assert_eq!(sent[0].1, DROP_CONFIRMATION_SUBJECT);
        assert!(sent[0].2.contains("Algoritma"));
    }

    #[test]
    fn test_drop_empty_course_stays_at_zero() {
        let service = service_with(student(AcademicStatus::Active), courses_with(course(0), true));
        service.drop_course("S1", "CS101").unwrap();
        assert_eq!(service.courses().updates.borrow()[0].enrolled_count, 0);
    }

    #[test]
    fn test_drop_student_not_found() {
        assert!(matches!(
            default_service().drop_course("X", "CS101"),
            Err(Error::StudentNotFound(_))
        ));
    }

    #[test]
    fn test_drop_course_not_found() {
        let service = default_service();
        assert!(matches!(
            service.drop_course("S1", "CS404"),
            Err(Error::CourseNotFound(_))
        ));
        assert!(service.notifier().sent.borrow().is_empty());
    }
}
