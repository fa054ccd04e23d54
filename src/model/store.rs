
use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use super::student::{Student, StudentForCreate, StudentId};
use super::{Error, Result};

pub type Db = Arc<Mutex<Students>>;

pub fn new_db() -> Db {
    Arc::new(Mutex::new(Students::seeded()))
}

/// (name, age, score) for ids 1..=10, in id order.
const SEED: [(&str, i64, i64); 10] = [
    ("aaa", 16, 87),
    ("bbb", 18, 98),
    ("ccc", 20, 85),
    ("ccc", 11, 70),
    ("ddd", 22, 76),
    ("eee", 33, 82),
    ("fff", 44, 83),
    ("ggg", 55, 96),
    ("hhh", 66, 62),
    ("iii", 77, 34),
];

/// Every student record plus the id bookkeeping.
///
/// `last_id` only grows, so ids are never handed out twice even after a
/// delete. `last_queried_id` is the cursor for [`Students::advance`]; `0`
/// means nothing has been fetched yet.
#[derive(Debug, Default)]
pub struct Students {
    records: HashMap<StudentId, Student>,
    last_id: StudentId,
    last_queried_id: StudentId,
}

impl Students {
    pub fn seeded() -> Self {
        let mut students = Self::default();
        for (name, age, score) in SEED {
            students.insert(StudentForCreate {
                name: name.to_string(),
                age,
                score,
            });
        }
        students
    }

    pub fn sorted(&self) -> Vec<Student> {
        let mut list: Vec<Student> = self.records.values().cloned().collect();
        list.sort_by_key(|s| s.id);
        list
    }

    pub fn fetch(&mut self, id: StudentId) -> Result<Student> {
        let student = self
            .records
            .get(&id)
            .cloned()
            .ok_or(Error::EntityNotFound { entity: "student", id })?;

        self.last_queried_id = id;
        Ok(student)
    }

    pub fn insert(&mut self, student_c: StudentForCreate) -> Student {
        self.last_id += 1;
        let student = Student {
            id: self.last_id,
            name: student_c.name,
            age: student_c.age,
            score: student_c.score,
        };
        self.records.insert(student.id, student.clone());
        student
    }

    pub fn remove(&mut self, id: StudentId) -> Result<Student> {
        self.records
            .remove(&id)
            .ok_or(Error::EntityNotFound { entity: "student", id })
    }

    pub fn advance(&mut self) -> Result<Student> {
        if self.last_queried_id == 0 {
            return Err(Error::NoStudentQueried);
        }
        self.fetch(self.last_queried_id + 1)
    }

    pub fn last_id(&self) -> StudentId {
        self.last_id
    }

    pub fn last_queried_id(&self) -> StudentId {
        self.last_queried_id
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}
