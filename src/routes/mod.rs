mod beers;
mod catchers;
mod favorites;
mod preflight;
mod users;

use rocket::serde::json::{ self, Json };
use crate::api::ApiError;

pub use beers::*;
pub use catchers::*;
pub use favorites::*;
pub use preflight::*;
pub use users::*;

/// Unwraps a decoded JSON body, turning any decode failure into
/// `InvalidPayload` instead of Rocket's default catcher.
fn payload<T>(body: Result<Json<T>, json::Error<'_>>) -> Result<T, ApiError> {
    body.map(Json::into_inner).map_err(|error| {
        log::debug!("Rejected payload: {:?}", error);
        ApiError::InvalidPayload
    })
}
