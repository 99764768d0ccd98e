use crate::domain::user::User;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Body of create and update requests. Profile fields that are omitted or
/// `null` become empty strings. Unknown keys, including a caller-supplied
/// `id`, are ignored.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl TryFrom<UserPayload> for User {
    type Error = String;

    fn try_from(payload: UserPayload) -> Result<Self, Self::Error> {
        let full_name = match payload.full_name {
            Some(name) if !name.is_empty() => name,
            _ => return Err("full_name cannot be empty".into()),
        };

        Ok(Self {
            id: String::new(),
            full_name,
            username: payload.username.unwrap_or_default(),
            email: payload.email.unwrap_or_default(),
            password: payload.password.unwrap_or_default(),
            bio: payload.bio.unwrap_or_default(),
            website: payload.website.unwrap_or_default(),
            created_at: None,
            updated_at: None,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub bio: String,
    pub website: String,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            username: user.username,
            email: user.email,
            password: user.password,
            bio: user.bio,
            website: user.website,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
