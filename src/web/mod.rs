
mod error;
pub mod mw_res_map;
pub mod routes_students;

pub use self::error::{Error, Result};

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

use crate::model::ModelManager;
use mw_res_map::mw_response_map;

pub fn routes(mm: ModelManager) -> Router {
    Router::new()
        .merge(routes_students::routes(mm))
        .layer(middleware::map_response(mw_response_map))
        .layer(TraceLayer::new_for_http())
}
