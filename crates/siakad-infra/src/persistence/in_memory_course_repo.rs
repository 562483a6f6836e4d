//! In-memory implementation of CourseRepository
//!
//! Prerequisites are a table of course code to required course codes,
//! checked against the set of courses each student has completed.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use siakad_domain::model::Course;
use siakad_domain::repository::CourseRepository;
use siakad_types::{Error, Result};

/// Fixture format for seeding the repository from JSON
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CourseCatalog {
    pub courses: Vec<Course>,
    /// course code -> course codes that must be completed first
    #[serde(default)]
    pub prerequisites: HashMap<String, Vec<String>>,
    /// student id -> completed course codes
    #[serde(default)]
    pub completed: HashMap<String, Vec<String>>,
}

#[derive(Debug, Default)]
pub struct InMemoryCourseRepository {
    courses: RefCell<HashMap<String, Course>>,
    prerequisites: HashMap<String, Vec<String>>,
    completed: RefCell<HashMap<String, HashSet<String>>>,
}

impl InMemoryCourseRepository {
    pub fn new(courses: Vec<Course>) -> Self {
        Self::from_catalog(CourseCatalog {
            courses,
            ..CourseCatalog::default()
        })
    }

    pub fn from_catalog(catalog: CourseCatalog) -> Self {
        let courses = catalog
            .courses
            .into_iter()
            .map(|c| (c.course_code.clone(), c))
            .collect();
        let completed = catalog
            .completed
            .into_iter()
            .map(|(student, codes)| (student, codes.into_iter().collect()))
            .collect();

        Self {
            courses: RefCell::new(courses),
            prerequisites: catalog.prerequisites,
            completed: RefCell::new(completed),
        }
    }

    /// Load a catalog from JSON
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let catalog: CourseCatalog = serde_json::from_reader(BufReader::new(file))?;
        Ok(Self::from_catalog(catalog))
    }

    /// Require `required` to be completed before enrolling in `course_code`
    pub fn with_prerequisite(mut self, course_code: &str, required: &str) -> Self {
        self.prerequisites
            .entry(course_code.to_string())
            .or_default()
            .push(required.to_string());
        self
    }

    /// Record that a student has completed a course
    pub fn record_completion(&self, student_id: &str, course_code: &str) {
        self.completed
            .borrow_mut()
            .entry(student_id.to_string())
            .or_default()
            .insert(course_code.to_string());
    }

    /// Current state of a course, without going through the trait
    pub fn get(&self, course_code: &str) -> Option<Course> {
        self.courses.borrow().get(course_code).cloned()
    }
}

impl CourseRepository for InMemoryCourseRepository {
    fn find_by_course_code(&self, course_code: &str) -> std::result::Result<Option<Course>, Error> {
        Ok(self.get(course_code))
    }

    fn is_prerequisite_met(
        &self,
        student_id: &str,
        course_code: &str,
    ) -> std::result::Result<bool, Error> {
        let Some(required) = self.prerequisites.get(course_code) else {
            return Ok(true);
        };
        let completed = self.completed.borrow();
        let done = completed.get(student_id);
        Ok(required
            .iter()
            .all(|code| done.is_some_and(|set| set.contains(code))))
    }

    fn update(&self, course: &Course) -> std::result::Result<(), Error> {
        let mut courses = self.courses.borrow_mut();
        match courses.get_mut(&course.course_code) {
            Some(existing) => {
                *existing = course.clone();
                Ok(())
            }
            None => Err(Error::CourseNotFound(course.course_code.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn course(code: &str, name: &str) -> Course {
        Course {
            course_code: code.to_string(),
            name: name.to_string(),
            credit_hours: 3,
            capacity: 30,
            enrolled_count: 0,
            instructor: "Dosen A".to_string(),
        }
    }

    #[test]
    fn test_no_prerequisites_is_met() {
        let repo = InMemoryCourseRepository::new(vec![course("CS101", "Algoritma")]);
        assert!(repo.is_prerequisite_met("S1", "CS101").unwrap());
    }

    #[test]
    fn test_prerequisite_requires_completion() {
        let repo = InMemoryCourseRepository::new(vec![
            course("CS101", "Algoritma"),
            course("CS201", "Struktur Data"),
        ])
        .with_prerequisite("CS201", "CS101");

        assert!(!repo.is_prerequisite_met("S1", "CS201").unwrap());
        repo.record_completion("S1", "CS101");
        assert!(repo.is_prerequisite_met("S1", "CS201").unwrap());
        assert!(!repo.is_prerequisite_met("S2", "CS201").unwrap());
    }

    #[test]
    fn test_all_prerequisites_required() {
        let repo = InMemoryCourseRepository::new(vec![course("CS301", "Basis Data")])
            .with_prerequisite("CS301", "CS101")
            .with_prerequisite("CS301", "CS201");
        repo.record_completion("S1", "CS101");
        assert!(!repo.is_prerequisite_met("S1", "CS301").unwrap());
        repo.record_completion("S1", "CS201");
        assert!(repo.is_prerequisite_met("S1", "CS301").unwrap());
    }

    #[test]
    fn test_update_persists_count() {
        let repo = InMemoryCourseRepository::new(vec![course("CS101", "Algoritma")]);
        let mut c = repo.find_by_course_code("CS101").unwrap().unwrap();
        c.enrolled_count = 5;
        repo.update(&c).unwrap();
        assert_eq!(repo.get("CS101").unwrap().enrolled_count, 5);
    }

    #[test]
    fn test_update_unknown_fails() {
        let repo = InMemoryCourseRepository::default();
        assert!(matches!(
            repo.update(&course("CS999", "Unknown")),
            Err(Error::CourseNotFound(_))
        ));
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "courses": [
                    {{"course_code":"CS101","name":"Algoritma","credit_hours":3,"capacity":30,"instructor":"Dosen A"}},
                    {{"course_code":"CS201","name":"Struktur Data","credit_hours":3,"capacity":25,"enrolled_count":4,"instructor":"Dosen B"}}
                ],
                "prerequisites": {{"CS201": ["CS101"]}},
                "completed": {{"S1": ["CS101"]}}
            }}"#
        )
        .unwrap();

        let repo = InMemoryCourseRepository::load_from_file(file.path()).unwrap();
        assert_eq!(repo.get("CS101").unwrap().enrolled_count, 0);
        assert_eq!(repo.get("CS201").unwrap().enrolled_count, 4);
        assert!(repo.is_prerequisite_met("S1", "CS201").unwrap());
        assert!(!repo.is_prerequisite_met("S2", "CS201").unwrap());
    }
}
