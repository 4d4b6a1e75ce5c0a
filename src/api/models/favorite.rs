use rocket::serde::{ Deserialize, Serialize };

/// Relation between a user and a beer, embedded in the user's document.
/// Neither id is checked against existing records.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(crate = "rocket::serde", default)]
pub struct Favorite {
    #[serde(rename = "UserID", alias = "userId", alias = "userID", alias = "user_id")]
    pub user_id: String,
    #[serde(rename = "BeerID", alias = "beerId", alias = "beerID", alias = "beer_id")]
    pub beer_id: String
}
