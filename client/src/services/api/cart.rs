//! # Cart Endpoints
//!
//! The cart lives on the server; these calls read and mutate it.

use shared::{AddToCartRequest, CartItem, CartResponse, MessageResponse, RemoveFromCartRequest};

use super::client::ApiClient;
use crate::core::error::Result;

/// Add `quantity` units of a cupcake (the server merges with an existing line).
#[tracing::instrument(skip(client))]
pub async fn add_to_cart(client: &ApiClient, cupcake_id: i64, quantity: u32) -> Result<MessageResponse> {
    let request = AddToCartRequest { cupcake_id, quantity };
    let response = ApiClient::send(client.client.post(client.url("/cart")).json(&request)).await?;
    ApiClient::acknowledge(response).await
}

/// Fetch the current cart lines.
#[tracing::instrument(skip(client))]
pub async fn get_cart(client: &ApiClient) -> Result<Vec<CartItem>> {
    let response = ApiClient::send(client.client.get(client.url("/cart"))).await?;
    let body: CartResponse = ApiClient::decode(response).await?;
    tracing::debug!(count = body.cart_items.len(), "Cart fetched");
    Ok(body.cart_items)
}

/// Remove one cupcake's line from the cart.
#[tracing::instrument(skip(client))]
pub async fn remove_from_cart(client: &ApiClient, cupcake_id: i64) -> Result<MessageResponse> {
    let request = RemoveFromCartRequest { cupcake_id };
    let response = ApiClient::send(client.client.delete(client.url("/cart")).json(&request)).await?;
    ApiClient::acknowledge(response).await
}

/// Empty the cart. Checkout passes the session token; the cart screen does not.
#[tracing::instrument(skip(client, token), fields(authenticated = token.is_some()))]
pub async fn clear_cart(client: &ApiClient, token: Option<&str>) -> Result<MessageResponse> {
    let mut builder = client.client.delete(client.url("/cart/clear"));
    if let Some(token) = token {
        builder = ApiClient::authorized(builder, token);
    }
    let response = ApiClient::send(builder).await?;
    let result = ApiClient::acknowledge(response).await;
    if result.is_ok() {
        tracing::info!("Cart cleared");
    }
    result
}
