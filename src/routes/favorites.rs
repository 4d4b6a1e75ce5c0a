use rocket::{ Responder, State };
use rocket::http::CookieJar;
use rocket::serde::json::{ self, Json };
use crate::api::models::{ Favorite, OperationResult };
use crate::api::{ ApiError, AuthService, DataAccessService };
use super::payload;

/// Without a matching `logged_in` cookie the request is skipped: 200, no body.
#[derive(Responder)]
pub enum FavoriteAdded {
    Added(Json<OperationResult>),
    Skipped(())
}

#[derive(Responder)]
pub enum FavoritesListed {
    Listed(Json<Vec<Favorite>>),
    Skipped(())
}

#[post("/addFavorite", data = "<favorite>")]
pub async fn add_favorite_post(data_access_service: &State<DataAccessService>, cookies: &CookieJar<'_>, favorite: Result<Json<Favorite>, json::Error<'_>>) -> Result<FavoriteAdded, ApiError> {
    let favorite = payload(favorite)?;
    if !AuthService::is_logged_in_as(&favorite.user_id, cookies) {
        log::info!("Skipping favorite for user {}: not logged in as that user", favorite.user_id);
        return Ok(FavoriteAdded::Skipped(()));
    }
    data_access_service.add_favorite(&favorite).await
        .map_err(|error| ApiError::from_data(error, "user"))?;
    log::info!("User {} favorited beer {}", favorite.user_id, favorite.beer_id);
    Ok(FavoriteAdded::Added(Json(OperationResult::success())))
}

#[get("/favorites/<id>")]
pub async fn favorites_get(data_access_service: &State<DataAccessService>, cookies: &CookieJar<'_>, id: &str) -> Result<FavoritesListed, ApiError> {
    if !AuthService::is_logged_in_as(id, cookies) {
        log::info!("Skipping favorites listing for user {}: not logged in as that user", id);
        return Ok(FavoritesListed::Skipped(()));
    }
    let favorites = data_access_service.get_favorites(id).await
        .map_err(|error| ApiError::from_data(error, "user"))?;
    Ok(FavoritesListed::Listed(Json(favorites)))
}
