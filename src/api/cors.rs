use rocket::fairing::{ Fairing, Info, Kind };
use rocket::http::Header;
use rocket::request::Request;
use rocket::response::{ self, Responder, Response };

/// Adds the frontend origin to every response.
pub struct Cors {
    origin: String
}

impl Cors {
    pub fn new(origin: String) -> Cors {
        Cors { origin }
    }
}

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info { name: "CORS origin", kind: Kind::Response }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", self.origin.clone()));
        // The session cookie has to travel with cross-origin requests
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

/// Answer to an `OPTIONS` preflight for one route group.
pub struct Preflight {
    pub methods: &'static str
}

impl<'r> Responder<'r, 'static> for Preflight {
    fn respond_to(self, _request: &'r Request<'_>) -> response::Result<'static> {
        Response::build()
            .raw_header("Access-Control-Allow-Methods", self.methods)
            .raw_header("Access-Control-Allow-Headers", "Content-Type")
            .ok()
    }
}
