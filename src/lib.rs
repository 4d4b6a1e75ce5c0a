//! Beer catalog and user directory over a document store.
//!
//! Sessions are an unsigned `logged_in` cookie holding the user id; favorites
//! are appended to the user's document with a non-atomic read-modify-write.

#[macro_use] extern crate rocket;

pub mod api;
mod routes;

use rocket::{ Build, Rocket };
use crate::api::config::Config;
use crate::api::cors::Cors;
use crate::api::{ AccountService, DataAccessService, PasswordService };

pub fn build_rocket(config: Config, data_access_service: DataAccessService) -> Rocket<Build> {
    let password_service = PasswordService::new(config.password_hash_cost);
    let account_service = AccountService::new(data_access_service.clone(), password_service);
    let figment = rocket::Config::figment().merge(("port", config.port));

    let rocket = rocket::custom(figment)
        .mount("/", routes![
            routes::beers_get,
            routes::beer_get,
            routes::beers_post,
            routes::beers_put,
            routes::beers_delete,
            routes::users_post,
            routes::register_post,
            routes::login_post,
            routes::add_favorite_post,
            routes::favorites_get
        ])
        .register("/", catchers![routes::json_catcher])
        .manage(data_access_service)
        .manage(account_service);

    match config.frontend_origin {
        Some(origin) => {
            log::info!("Allowing cross-origin requests from \"{}\"", origin);
            rocket
                .attach(Cors::new(origin))
                .mount("/", routes![
                    routes::beers_options,
                    routes::beer_options,
                    routes::users_options,
                    routes::register_options,
                    routes::login_options,
                    routes::add_favorite_options,
                    routes::favorites_options
                ])
        },
        None => rocket
    }
}
