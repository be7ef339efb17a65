use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rocket::async_trait;
use rocket::http::Status;
use rocket::request::{FromRequest, Outcome};
use rocket::Request;
use sha2::{Digest, Sha256};

use crate::handler::spawn_db_task;
use crate::repository::{open_connection, user_repository};

/// the username and password pulled out of a basic auth header
#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// creates a `Credentials` object from the passed header value.
    /// The value of header must be base64-encoded basic auth.
    pub fn from(header: &str) -> Result<Credentials, &'static str> {
        // remove the "Basic " from the header, leaving only the base64 part
        let stripped_header = header.trim_start_matches("Basic ").trim();
        let Ok(value) = STANDARD.decode(stripped_header) else {
            return Err("Invalid basic auth format: not base64");
        };
        let Ok(combined) = String::from_utf8(value) else {
            return Err("Invalid basic auth format: not utf-8");
        };
        // passwords may contain colons, usernames may not
        match combined.split_once(':') {
            Some((username, password)) if !username.trim().is_empty() && !password.trim().is_empty() => {
                Ok(Credentials {
                    username: username.trim().to_string(),
                    password: password.trim().to_string(),
                })
            }
            _ => Err("Invalid basic auth format: missing username or password"),
        }
    }

    pub fn hash(&self) -> String {
        hash_credentials(&self.username, &self.password)
    }
}

/// sha256 of `username:password`, hex encoded. This is what the `Users` table stores
pub fn hash_credentials(username: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{}:{}", username.trim(), password.trim()).as_bytes());
    format!("{:x}", hasher.finalize())
}

/// the authenticated caller. Every tree operation is scoped to `user_id`
#[derive(Debug)]
pub struct UserAuth {
    pub user_id: u32,
}

#[derive(Debug)]
pub enum AuthError {
    Missing,
    Invalid,
    DbError,
}

#[async_trait]
impl<'r> FromRequest<'r> for UserAuth {
    type Error = AuthError;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let Some(value) = request.headers().get_one("Authorization") else {
            return Outcome::Error((Status::Unauthorized, AuthError::Missing));
        };
        if !value.starts_with("Basic ") {
            return Outcome::Error((Status::Unauthorized, AuthError::Invalid));
        }
        let credentials = match Credentials::from(value) {
            Ok(credentials) => credentials,
            Err(_) => return Outcome::Error((Status::Unauthorized, AuthError::Invalid)),
        };
        let lookup = spawn_db_task(move || {
            let con = open_connection()?;
            user_repository::get_user_id(&credentials.username, &credentials.hash(), &con)
        })
        .await;
        match lookup {
            Ok(Ok(user_id)) => Outcome::Success(UserAuth { user_id }),
            Ok(Err(rusqlite::Error::QueryReturnedNoRows)) => {
                Outcome::Error((Status::Unauthorized, AuthError::Invalid))
            }
            Ok(Err(e)) => {
                log::error!("Failed to look up user credentials. Error is {e:?}");
                Outcome::Error((Status::InternalServerError, AuthError::DbError))
            }
            Err(e) => {
                log::error!("Credential lookup task failed. Error is {e:?}");
                Outcome::Error((Status::InternalServerError, AuthError::DbError))
            }
        }
    }
}
