
use std::sync::Arc;

use crate::web;
use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::{debug, info};
use uuid::Uuid;

/// Replaces any response carrying a `web::Error` with the matching client
/// status and plain-text message, then logs one line for the request.
pub async fn mw_response_map(
    uri: Uri,
    req_method: Method,
    res: Response,
) -> Response {
    debug!("{:<12} - mw_response_map", "RES_MAPPER");

    let uuid = Uuid::new_v4();
    let web_error = res.extensions().get::<Arc<web::Error>>().cloned();
    let client_status_error = web_error
        .as_deref()
        .map(|we| we.client_status_and_error());

    let error_response =
        client_status_error
        .as_ref()
        .map(|(status_code, client_error)| {
            (*status_code, client_error.message()).into_response()
        });

    let res = error_response.unwrap_or(res);

    let client_error = client_status_error.unzip().1;
    let error_data = web_error
        .as_deref()
        .and_then(|we| serde_json::to_value(we).ok())
        .unwrap_or(json!(null));

    info!(
        req_uuid = %uuid,
        method = %req_method,
        uri = %uri,
        status = res.status().as_u16(),
        client_error = client_error.as_ref().map(AsRef::<str>::as_ref),
        error = %error_data,
        "{:<12} - request", "REQ_LOG"
    );

    res
}
