//! In-memory implementation of StudentRepository

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use siakad_domain::model::Student;
use siakad_domain::repository::StudentRepository;
use siakad_types::{Error, Result};

/// Student records held in a map keyed by student id
#[derive(Debug, Default)]
pub struct InMemoryStudentRepository {
    students: RefCell<HashMap<String, Student>>,
}

impl InMemoryStudentRepository {
    pub fn new(students: Vec<Student>) -> Self {
        let students = students.into_iter().map(|s| (s.id.clone(), s)).collect();
        Self {
            students: RefCell::new(students),
        }
    }

    /// Load students from a JSON array
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let students: Vec<Student> = serde_json::from_reader(BufReader::new(file))?;
        Ok(Self::new(students))
    }

    /// Add or replace a student
    pub fn insert(&self, student: Student) {
        self.students.borrow_mut().insert(student.id.clone(), student);
    }

    pub fn len(&self) -> usize {
        self.students.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.borrow().is_empty()
    }
}

impl StudentRepository for InMemoryStudentRepository {
    fn find_by_id(&self, id: &str) -> std::result::Result<Option<Student>, Error> {
        Ok(self.students.borrow().get(id).cloned())
    }

    fn update(&self, student: &Student) -> std::result::Result<(), Error> {
        let mut students = self.students.borrow_mut();
        match students.get_mut(&student.id) {
            Some(existing) => {
                *existing = student.clone();
                Ok(())
            }
            None => Err(Error::StudentNotFound(student.id.clone())),
        }
    }
}
