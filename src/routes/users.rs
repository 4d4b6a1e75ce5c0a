use rocket::State;
use rocket::http::{ CookieJar, Status };
use rocket::serde::json::{ self, Json };
use crate::api::models::{ Credentials, User };
use crate::api::{ AccountService, ApiError, AuthService };
use super::payload;

#[post("/users", data = "<user>")]
pub async fn users_post(account_service: &State<AccountService>, user: Result<Json<User>, json::Error<'_>>) -> Result<(Status, Json<String>), ApiError> {
    register(account_service, user).await
}

#[post("/register", data = "<user>")]
pub async fn register_post(account_service: &State<AccountService>, user: Result<Json<User>, json::Error<'_>>) -> Result<(Status, Json<String>), ApiError> {
    register(account_service, user).await
}

/// Sets the `logged_in` cookie and answers with the user's id.
#[post("/login", data = "<credentials>")]
pub async fn login_post(account_service: &State<AccountService>, cookies: &CookieJar<'_>, credentials: Result<Json<Credentials>, json::Error<'_>>) -> Result<Json<String>, ApiError> {
    let user_id = account_service.authenticate(payload(credentials)?).await?;
    AuthService::log_in(&user_id, cookies);
    Ok(Json(user_id))
}

async fn register(account_service: &AccountService, user: Result<Json<User>, json::Error<'_>>) -> Result<(Status, Json<String>), ApiError> {
    let user = account_service.register(payload(user)?).await?;
    Ok((Status::Created, Json(user.name)))
}
