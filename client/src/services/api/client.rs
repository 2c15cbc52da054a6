//! # API Client
//!
//! Main HTTP client for backend API communication.
//!
//! Centralises what every screen used to repeat: the base URL, the bearer
//! header, JSON bodies and turning non-success responses into [`AppError::Api`]
//! with the server's message attached.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::{
    CartItem, Cupcake, ErrorResponse, LoginResponse, MessageResponse, ProfileImageResponse,
    PurchaseGroup, SignupRequest, UserProfile, UserUpdate,
};

use crate::config::ClientConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::{ApiService, ProfileImageUpload};

/// HTTP client for communicating with the backend API server.
///
/// Cheap to share behind an `Arc`; reqwest pools connections internally.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the configured backend.
    ///
    /// No timeout is set unless the configuration asks for one.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!("cupcake-client/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path (`/cart` → `https://host/cart`).
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach `Authorization: Bearer <token>`.
    pub(crate) fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.bearer_auth(token)
    }

    /// Send a request, mapping transport failures to [`AppError::Network`].
    pub(crate) async fn send(builder: RequestBuilder) -> Result<Response> {
        builder.send().await.map_err(|e| {
            tracing::error!(error = %e, "Network error");
            AppError::Network(e.to_string())
        })
    }

    /// Decode a success body into `T`, or turn a failure into [`AppError::Api`].
    pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        let body = response.text().await.map_err(|e| AppError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, "Response parse error");
            AppError::Decode(e.to_string())
        })
    }

    /// Like [`ApiClient::decode`] for acknowledgement bodies; an empty or
    /// non-JSON success body is accepted as an empty acknowledgement.
    pub(crate) async fn acknowledge(response: Response) -> Result<MessageResponse> {
        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        let body = response.text().await.map_err(|e| AppError::Network(e.to_string()))?;
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }

    /// Build [`AppError::Api`] from a non-success response.
    pub(crate) async fn error_from(response: Response) -> AppError {
        let status = response.status().as_u16();
        let message = match response.text().await {
            Ok(body) => serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .and_then(ErrorResponse::into_message),
            Err(_) => None,
        };
        tracing::warn!(status, error = ?message, "Request rejected by backend");
        AppError::Api { status, message }
    }
}

#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn login(&self, email: String, password: String) -> Result<LoginResponse> {
        super::auth::login(self, email, password).await
    }

    async fn signup(&self, request: SignupRequest) -> Result<MessageResponse> {
        super::auth::signup(self, request).await
    }

    async fn get_cupcakes(&self) -> Result<Vec<Cupcake>> {
        super::catalog::get_cupcakes(self).await
    }

    async fn add_to_cart(&self, cupcake_id: i64, quantity: u32) -> Result<MessageResponse> {
        super::cart::add_to_cart(self, cupcake_id, quantity).await
    }

    async fn get_cart(&self) -> Result<Vec<CartItem>> {
        super::cart::get_cart(self).await
    }

    async fn remove_from_cart(&self, cupcake_id: i64) -> Result<MessageResponse> {
        super::cart::remove_from_cart(self, cupcake_id).await
    }

    async fn clear_cart(&self, token: Option<&str>) -> Result<MessageResponse> {
        super::cart::clear_cart(self, token).await
    }

    async fn submit_order(&self, token: &str, items: &[CartItem]) -> Result<MessageResponse> {
        super::orders::submit_order(self, token, items).await
    }

    async fn get_order_history(&self, token: &str) -> Result<Vec<PurchaseGroup>> {
        super::orders::get_order_history(self, token).await
    }

    async fn get_user_info(&self, token: &str) -> Result<UserProfile> {
        super::profile::get_user_info(self, token).await
    }

    async fn update_user(&self, token: &str, update: &UserUpdate) -> Result<MessageResponse> {
        super::profile::update_user(self, token, update).await
    }

    async fn update_profile_image(
        &self,
        token: &str,
        upload: &ProfileImageUpload,
    ) -> Result<ProfileImageResponse> {
        super::profile::update_profile_image(self, token, upload).await
    }

    async fn remove_profile_image(&self, token: &str) -> Result<MessageResponse> {
        super::profile::remove_profile_image(self, token).await
    }

    fn image_url(&self, file: &str) -> String {
        self.url(&format!("/uploads/{file}"))
    }
}
