
mod error;
mod store;
pub mod student;

use store::{new_db, Db};

pub use self::error::{Error, Result};

/// Cloneable handle to the student store, shared by every request.
#[derive(Clone)]
pub struct ModelManager {
    db: Db,
}

impl ModelManager {
    /// Creates a store holding the ten seed students.
    pub fn new() -> Self {
        ModelManager {
            db: new_db(),
        }
    }

    pub(in crate::model) fn db(&self) -> &Db {
        &self.db
    }

    pub async fn student_count(&self) -> usize {
        self.db.lock().await.len()
    }
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new()
    }
}
