use uuid::Uuid;
use rocket::serde::{ Deserialize, Serialize };
use crate::api::models::Label;

/// A catalog entry. `id` is assigned by the server on creation and is absent
/// from create payloads.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(crate = "rocket::serde", default)]
pub struct Beer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(rename = "bdb_id")]
    pub brewery_db_id: String,
    pub description: String,
    pub labels: Label,
    // Kept as text, never parsed
    pub abv: String,
    pub status: String,
    pub available: String,
    pub style: String,
    pub rating: f32
}
