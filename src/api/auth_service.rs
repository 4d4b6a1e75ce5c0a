use rocket::http::{ Cookie, CookieJar };
use rocket::time::{ Duration, OffsetDateTime };

pub const LOGGED_IN_COOKIE: &str = "logged_in";

const LOGGED_IN_DAYS: i64 = 365;

/// The `logged_in` cookie is the whole session: an unsigned user id chosen by
/// the client. Anyone who sets it to some user's id is treated as that user.
pub struct AuthService {}

impl AuthService {
    /// True only when the cookie is present and equals `claimed_user_id`.
    pub fn is_logged_in_as(claimed_user_id: &str, cookies: &CookieJar<'_>) -> bool {
        let cookie_value = cookies.get(LOGGED_IN_COOKIE).map(|cookie| cookie.value());
        AuthService::cookie_matches(cookie_value, claimed_user_id)
    }

    pub fn cookie_matches(cookie_value: Option<&str>, claimed_user_id: &str) -> bool {
        cookie_value == Some(claimed_user_id)
    }

    pub fn log_in(user_id: &str, cookies: &CookieJar<'_>) {
        let expires = OffsetDateTime::now_utc() + Duration::days(LOGGED_IN_DAYS);
        cookies.add(Cookie::build((LOGGED_IN_COOKIE, user_id.to_string())).expires(expires));
    }
}
