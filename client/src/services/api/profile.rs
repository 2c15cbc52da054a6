//! # Profile Endpoints
//!
//! User info, partial updates and the profile picture. All bearer-authenticated.

use reqwest::multipart::{Form, Part};
use shared::{MessageResponse, ProfileImageResponse, UserProfile, UserUpdate};

use super::client::ApiClient;
use crate::core::error::{AppError, Result};
use crate::core::service::ProfileImageUpload;

/// Fetch the logged-in user's profile.
#[tracing::instrument(skip(client, token))]
pub async fn get_user_info(client: &ApiClient, token: &str) -> Result<UserProfile> {
    let builder = ApiClient::authorized(client.client.get(client.url("/user-info")), token);
    let response = ApiClient::send(builder).await?;
    ApiClient::decode(response).await
}

/// Update profile fields. The password is only sent when present.
#[tracing::instrument(skip(client, token, update), fields(password_change = update.password.is_some()))]
pub async fn update_user(client: &ApiClient, token: &str, update: &UserUpdate) -> Result<MessageResponse> {
    let builder = ApiClient::authorized(client.client.put(client.url("/update-user")), token).json(update);
    let response = ApiClient::send(builder).await?;
    ApiClient::acknowledge(response).await
}

/// Upload a new profile picture as `multipart/form-data` (field `profileImage`).
#[tracing::instrument(skip(client, token), fields(path = %upload.path.display()))]
pub async fn update_profile_image(
    client: &ApiClient,
    token: &str,
    upload: &ProfileImageUpload,
) -> Result<ProfileImageResponse> {
    let bytes = tokio::fs::read(&upload.path).await.map_err(|e| {
        AppError::Validation(format!("Could not read image {}: {e}", upload.path.display()))
    })?;

    let part = Part::bytes(bytes)
        .file_name(upload.file_name())
        .mime_str(&upload.mime_type())
        .map_err(|e| AppError::Validation(format!("Invalid image type: {e}")))?;
    let form = Form::new().part("profileImage", part);

    let builder = ApiClient::authorized(client.client.post(client.url("/update-profile-image")), token)
        .multipart(form);
    let response = ApiClient::send(builder).await?;
    ApiClient::decode(response).await
}

/// Drop the profile picture; the client falls back to its default avatar.
#[tracing::instrument(skip(client, token))]
pub async fn remove_profile_image(client: &ApiClient, token: &str) -> Result<MessageResponse> {
    let builder = ApiClient::authorized(client.client.delete(client.url("/remove-profile-image")), token);
    let response = ApiClient::send(builder).await?;
    ApiClient::acknowledge(response).await
}
