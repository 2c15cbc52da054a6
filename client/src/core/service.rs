//! # Service Traits
//!
//! Traits for dependency injection. Screens talk to the backend only through
//! [`ApiService`], so tests can swap in a recording mock.

use async_trait::async_trait;
use shared::{
    CartItem, Cupcake, LoginResponse, MessageResponse, ProfileImageResponse, PurchaseGroup,
    SignupRequest, UserProfile, UserUpdate,
};
use std::path::PathBuf;

use super::error::Result;

/// Image file to upload as the user's profile picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileImageUpload {
    pub path: PathBuf,
}

impl ProfileImageUpload {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File name sent in the multipart part (`profile.jpg` when the path has none).
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("profile.jpg")
            .to_string()
    }

    /// MIME type derived from the extension, `image/<ext>`.
    pub fn mime_type(&self) -> String {
        let file_name = self.file_name();
        let ext = file_name.rsplit('.').next().unwrap_or("jpg").to_ascii_lowercase();
        format!("image/{ext}")
    }
}

/// Trait for backend API operations.
///
/// One method per REST endpoint the client uses. Authenticated endpoints take
/// the bearer token explicitly; callers obtain it from the session.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// `POST /login`
    async fn login(&self, email: String, password: String) -> Result<LoginResponse>;

    /// `POST /cadastro`
    async fn signup(&self, request: SignupRequest) -> Result<MessageResponse>;

    /// `GET /cupcakes`
    async fn get_cupcakes(&self) -> Result<Vec<Cupcake>>;

    /// `POST /cart`
    async fn add_to_cart(&self, cupcake_id: i64, quantity: u32) -> Result<MessageResponse>;

    /// `GET /cart`
    async fn get_cart(&self) -> Result<Vec<CartItem>>;

    /// `DELETE /cart` (one line)
    async fn remove_from_cart(&self, cupcake_id: i64) -> Result<MessageResponse>;

    /// `DELETE /cart/clear`, with a bearer header when a token is given
    async fn clear_cart(&self, token: Option<&str>) -> Result<MessageResponse>;

    /// `POST /orders`
    async fn submit_order(&self, token: &str, items: &[CartItem]) -> Result<MessageResponse>;

    /// `GET /orders/history`
    async fn get_order_history(&self, token: &str) -> Result<Vec<PurchaseGroup>>;

    /// `GET /user-info`
    async fn get_user_info(&self, token: &str) -> Result<UserProfile>;

    /// `PUT /update-user`
    async fn update_user(&self, token: &str, update: &UserUpdate) -> Result<MessageResponse>;

    /// `POST /update-profile-image` (multipart)
    async fn update_profile_image(
        &self,
        token: &str,
        upload: &ProfileImageUpload,
    ) -> Result<ProfileImageResponse>;

    /// `DELETE /remove-profile-image`
    async fn remove_profile_image(&self, token: &str) -> Result<MessageResponse>;

    /// Absolute URL of a catalog image file.
    fn image_url(&self, file: &str) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_file_name_and_mime() {
        let upload = ProfileImageUpload::new("/tmp/photos/me.PNG");
        assert_eq!(upload.file_name(), "me.PNG");
        assert_eq!(upload.mime_type(), "image/png");
    }

    #[test]
    fn test_upload_defaults_without_file_name() {
        let upload = ProfileImageUpload::new("/");
        assert_eq!(upload.file_name(), "profile.jpg");
        assert_eq!(upload.mime_type(), "image/jpg");
    }
}
