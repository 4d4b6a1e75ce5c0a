use rocket::serde::{ Deserialize, Serialize };

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(crate = "rocket::serde", default)]
pub struct Label {
    pub icon: String,
    pub medium: String,
    pub large: String
}
