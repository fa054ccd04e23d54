
use std::fmt;

use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{ModelManager, Result};

pub type StudentId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub age: i64,
    pub score: i64,
}

/// Keys match case-insensitively and a repeated key overwrites the earlier
/// one. Missing or `null` fields keep their zero value; unknown keys and any
/// `Id` sent by the client are dropped.
#[derive(Debug, Default)]
pub struct StudentForCreate {
    pub name: String,
    pub age: i64,
    pub score: i64,
}

impl<'de> Deserialize<'de> for StudentForCreate {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(StudentForCreateVisitor)
    }
}

struct StudentForCreateVisitor;

impl<'de> Visitor<'de> for StudentForCreateVisitor {
    type Value = StudentForCreate;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a student object")
    }

    fn visit_map<A>(self, mut map: A) -> core::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut student_c = StudentForCreate::default();

        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("name") {
                if let Some(name) = map.next_value::<Option<String>>()? {
                    student_c.name = name;
                }
            } else if key.eq_ignore_ascii_case("age") {
                if let Some(age) = map.next_value::<Option<i64>>()? {
                    student_c.age = age;
                }
            } else if key.eq_ignore_ascii_case("score") {
                if let Some(score) = map.next_value::<Option<i64>>()? {
                    student_c.score = score;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }

        Ok(student_c)
    }
}

pub struct StudentBmc;

impl StudentBmc {
    pub async fn list(mm: &ModelManager) -> Result<Vec<Student>> {
        let db = mm.db().lock().await;
        Ok(db.sorted())
    }

    pub async fn get(mm: &ModelManager, id: StudentId) -> Result<Student> {
        let mut db = mm.db().lock().await;
        db.fetch(id)
    }

    pub async fn create(mm: &ModelManager, student_c: StudentForCreate) -> Result<Student> {
        let mut db = mm.db().lock().await;
        let student = db.insert(student_c);
        debug!("{:<12} - student created, last_id={}", "MODEL", db.last_id());

        Ok(student)
    }

    pub async fn delete(mm: &ModelManager, id: StudentId) -> Result<()> {
        let mut db = mm.db().lock().await;
        db.remove(id)?;

        Ok(())
    }

    pub async fn next(mm: &ModelManager) -> Result<Student> {
        let mut db = mm.db().lock().await;
        debug!("{:<12} - next after {}", "MODEL", db.last_queried_id());
        db.advance()
    }
}
