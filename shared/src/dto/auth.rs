use serde::{Deserialize, Serialize};

/// Login request (`POST /login`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    #[serde(rename = "emailUser")]
    pub email: String,
    #[serde(rename = "senhaUser")]
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Login response. Only `token` is relied upon by the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<LoginUser>,
}

/// User summary embedded in the login response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginUser {
    pub id: i64,
    #[serde(rename = "nome", default)]
    pub name: String,
}

/// Signup request (`POST /cadastro`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupRequest {
    #[serde(rename = "nomeUser")]
    pub name: String,
    #[serde(rename = "emailUser")]
    pub email: String,
    #[serde(rename = "senhaUser")]
    pub password: String,
    #[serde(rename = "cepUser")]
    pub cep: String,
    #[serde(rename = "ruaUser")]
    pub rua: String,
    #[serde(rename = "estadoUser")]
    pub estado: String,
}
