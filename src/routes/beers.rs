use rocket::State;
use rocket::http::Status;
use rocket::serde::json::{ self, Json };
use uuid::Uuid;
use crate::api::models::{ Beer, OperationResult };
use crate::api::{ ApiError, DataAccessService };
use super::payload;

#[get("/beers")]
pub async fn beers_get(data_access_service: &State<DataAccessService>) -> Result<Json<Vec<Beer>>, ApiError> {
    Ok(Json(data_access_service.find_all_beers().await?))
}

#[get("/beers/<id>")]
pub async fn beer_get(data_access_service: &State<DataAccessService>, id: &str) -> Result<Json<Beer>, ApiError> {
    data_access_service.find_beer_by_id(id).await
        .map(Json)
        .map_err(|error| ApiError::from_data(error, "beer"))
}

#[post("/beers", data = "<beer>")]
pub async fn beers_post(data_access_service: &State<DataAccessService>, beer: Result<Json<Beer>, json::Error<'_>>) -> Result<(Status, Json<Beer>), ApiError> {
    let mut beer = payload(beer)?;
    beer.id = Some(Uuid::new_v4());
    data_access_service.insert_beer(&beer).await?;
    log::info!("Created beer {}", beer.id.map(|id| id.to_string()).unwrap_or_default());
    Ok((Status::Created, Json(beer)))
}

#[put("/beers", data = "<beer>")]
pub async fn beers_put(data_access_service: &State<DataAccessService>, beer: Result<Json<Beer>, json::Error<'_>>) -> Result<Json<OperationResult>, ApiError> {
    let beer = payload(beer)?;
    data_access_service.update_beer(&beer).await
        .map_err(|error| ApiError::from_data(error, "beer"))?;
    log::info!("Updated beer {}", beer.id.map(|id| id.to_string()).unwrap_or_default());
    Ok(Json(OperationResult::success()))
}

#[delete("/beers", data = "<beer>")]
pub async fn beers_delete(data_access_service: &State<DataAccessService>, beer: Result<Json<Beer>, json::Error<'_>>) -> Result<Json<OperationResult>, ApiError> {
    let beer = payload(beer)?;
    data_access_service.delete_beer(&beer).await
        .map_err(|error| ApiError::from_data(error, "beer"))?;
    log::info!("Deleted beer {}", beer.id.map(|id| id.to_string()).unwrap_or_default());
    Ok(Json(OperationResult::success()))
}
