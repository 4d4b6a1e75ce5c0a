use rocket::serde::Serialize;

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct OperationResult {
    pub result: &'static str
}

impl OperationResult {
    pub fn success() -> Self {
        OperationResult { result: "success" }
    }
}
