
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tracing::debug;

use crate::model::student::{Student, StudentBmc, StudentForCreate, StudentId};
use crate::model::ModelManager;
use crate::web::{Error, Result};

pub fn routes(mm: ModelManager) -> Router {
    Router::new()
        .route("/students", get(list_students).post(create_student))
        .route("/students/next", get(next_student))
        .route("/students/{id}", get(get_student).delete(delete_student))
        .with_state(mm)
}

async fn list_students(State(mm): State<ModelManager>) -> Result<Json<Vec<Student>>> {
    debug!("{:<12} - list_students", "HANDLER");

    let students = StudentBmc::list(&mm).await?;
    Ok(Json(students))
}

async fn get_student(
    State(mm): State<ModelManager>,
    Path(id): Path<String>,
) -> Result<Json<Student>> {
    debug!("{:<12} - get_student - {id}", "HANDLER");

    let id: StudentId = id
        .parse()
        .map_err(|_| Error::InvalidStudentId(id.clone()))?;
    let student = StudentBmc::get(&mm, id).await?;
    Ok(Json(student))
}

#[axum::debug_handler]
async fn create_student(
    State(mm): State<ModelManager>,
    body: Bytes,
) -> Result<(StatusCode, Json<Student>)> {
    debug!("{:<12} - create_student", "HANDLER");

    let student_c: StudentForCreate = serde_json::from_slice(&body)
        .map_err(|e| Error::InvalidPayload(e.to_string()))?;
    let student = StudentBmc::create(&mm, student_c).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

// A malformed id falls through as 0, which is never assigned, so the
// client sees 404 rather than 400.
async fn delete_student(
    State(mm): State<ModelManager>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    debug!("{:<12} - delete_student - {id}", "HANDLER");

    let id: StudentId = id.parse().unwrap_or(0);
    StudentBmc::delete(&mm, id).await?;
    Ok(StatusCode::OK)
}

async fn next_student(State(mm): State<ModelManager>) -> Result<Json<Student>> {
    debug!("{:<12} - next_student", "HANDLER");

    let student = StudentBmc::next(&mm).await?;
    Ok(Json(student))
}
