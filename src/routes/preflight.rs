use crate::api::cors::Preflight;

#[options("/beers")]
pub fn beers_options() -> Preflight {
    Preflight { methods: "GET, POST, PUT, DELETE, OPTIONS" }
}

#[options("/beers/<_>")]
pub fn beer_options() -> Preflight {
    Preflight { methods: "GET, OPTIONS" }
}

#[options("/users")]
pub fn users_options() -> Preflight {
    Preflight { methods: "POST, OPTIONS" }
}

#[options("/register")]
pub fn register_options() -> Preflight {
    Preflight { methods: "POST, OPTIONS" }
}

#[options("/login")]
pub fn login_options() -> Preflight {
    Preflight { methods: "POST, OPTIONS" }
}

#[options("/addFavorite")]
pub fn add_favorite_options() -> Preflight {
    Preflight { methods: "POST, OPTIONS" }
}

#[options("/favorites/<_>")]
pub fn favorites_options() -> Preflight {
    Preflight { methods: "GET, OPTIONS" }
}
