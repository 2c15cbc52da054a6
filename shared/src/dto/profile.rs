use serde::{Deserialize, Serialize};

use super::{blank_as_none, null_as_empty};

/// `GET /user-info`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub cep: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rua: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub estado: String,
    /// Absolute URL; `None` means the client shows its default avatar
    #[serde(
        rename = "profileImage",
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_image: Option<String>,
}

/// `PUT /update-user` body. A `None` password keeps the current one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub cep: String,
    pub rua: String,
    pub estado: String,
}

/// `POST /update-profile-image` response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileImageResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(
        rename = "profileImage",
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_image: Option<String>,
}
