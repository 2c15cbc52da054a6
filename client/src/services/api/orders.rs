//! # Order Endpoints
//!
//! Order submission and grouped purchase history. Both require a bearer token.

use shared::{CartItem, MessageResponse, OrderHistoryResponse, OrderRequest, PurchaseGroup};

use super::client::ApiClient;
use crate::core::error::Result;

/// Record the given cart lines as one purchase.
#[tracing::instrument(skip(client, token, items), fields(item_count = items.len()))]
pub async fn submit_order(client: &ApiClient, token: &str, items: &[CartItem]) -> Result<MessageResponse> {
    let start = std::time::Instant::now();
    let request = OrderRequest { items: items.to_vec() };
    let builder = ApiClient::authorized(client.client.post(client.url("/orders")), token).json(&request);

    let response = ApiClient::send(builder).await?;
    let result = ApiClient::acknowledge(response).await;
    if result.is_ok() {
        tracing::info!(duration_ms = start.elapsed().as_millis(), "Order recorded");
    }
    result
}

/// Fetch the user's purchases, newest first.
#[tracing::instrument(skip(client, token))]
pub async fn get_order_history(client: &ApiClient, token: &str) -> Result<Vec<PurchaseGroup>> {
    let builder = ApiClient::authorized(client.client.get(client.url("/orders/history")), token);
    let response = ApiClient::send(builder).await?;
    let body: OrderHistoryResponse = ApiClient::decode(response).await?;
    tracing::debug!(count = body.orders.len(), "Order history fetched");
    Ok(body.orders)
}
