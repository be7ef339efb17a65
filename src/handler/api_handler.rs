use rocket::serde::{json::Json, Serialize};

static API_VERSION_NUMBER: &str = env!("CARGO_PKG_VERSION");

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ApiVersion {
    version: &'static str,
}

#[get("/version")]
pub fn api_version() -> Json<ApiVersion> {
    Json(ApiVersion {
        version: API_VERSION_NUMBER,
    })
}
