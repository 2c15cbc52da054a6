//! # Authentication Endpoints
//!
//! Handles user authentication (login and signup).

use shared::{LoginRequest, LoginResponse, MessageResponse, SignupRequest};

use super::client::ApiClient;
use crate::core::error::Result;

/// Login with email and password.
#[tracing::instrument(skip(client, password))]
pub async fn login(client: &ApiClient, email: String, password: String) -> Result<LoginResponse> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest { email, password };
    let response = ApiClient::send(client.client.post(client.url("/login")).json(&request)).await?;
    let status = response.status();

    let result = ApiClient::decode::<LoginResponse>(response).await;
    match &result {
        Ok(_) => tracing::info!(duration_ms = start.elapsed().as_millis(), "Login successful"),
        Err(e) => tracing::warn!(
            status = status.as_u16(),
            error = %e,
            duration_ms = start.elapsed().as_millis(),
            "Login failed"
        ),
    }
    result
}

/// Register a new user.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn signup(client: &ApiClient, request: SignupRequest) -> Result<MessageResponse> {
    let response = ApiClient::send(client.client.post(client.url("/cadastro")).json(&request)).await?;
    let result = ApiClient::acknowledge(response).await;
    if result.is_ok() {
        tracing::info!("Signup accepted");
    }
    result
}
