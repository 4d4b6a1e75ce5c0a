use uuid::Uuid;
use rocket::serde::{ Deserialize, Serialize };
use crate::api::models::Favorite;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(crate = "rocket::serde", default)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub email: String,
    /// Plaintext only while decoding a registration payload; a bcrypt hash
    /// everywhere else.
    pub password: String,
    #[serde(rename = "cover_image")]
    pub profile_image: String,
    pub description: String,
    pub favorites: Vec<Favorite>
}
