use rocket::http::Status;
use rocket::request::Request;
use rocket::serde::json::Json;
use crate::api::models::ErrorBody;

/// Keeps framework-level failures (unknown route, unreadable body) in the
/// same `{"error": ...}` shape as handler errors.
#[catch(default)]
pub fn json_catcher(status: Status, request: &Request<'_>) -> (Status, Json<ErrorBody>) {
    log::debug!("{} {}: {}", request.method(), request.uri(), status);
    let error = status.reason().unwrap_or("Unknown error").to_string();
    (status, Json(ErrorBody { error }))
}
