
use crate::model::student::{StudentBmc, StudentForCreate};
use crate::model::ModelManager;

/// Every test gets its own freshly seeded store so cursor and id state never
/// leak between tests.
pub fn init_test() -> ModelManager {
    ModelManager::new()
}

pub fn fx_student_c(name: &str, age: i64, score: i64) -> StudentForCreate {
    StudentForCreate {
        name: name.to_string(),
        age,
        score,
    }
}

pub async fn print_students(mm: &ModelManager) {
    println!("Current students in store:");
    if let Ok(students) = StudentBmc::list(mm).await {
        for s in students {
            println!("ID: {}, Name: {}, Age: {}, Score: {}", s.id, s.name, s.age, s.score);
        }
    }
    println!();
}
