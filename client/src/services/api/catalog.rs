//! # Catalog Endpoints

use shared::{Cupcake, CupcakesResponse};

use super::client::ApiClient;
use crate::core::error::Result;

/// Fetch the full cupcake catalog.
#[tracing::instrument(skip(client))]
pub async fn get_cupcakes(client: &ApiClient) -> Result<Vec<Cupcake>> {
    let start = std::time::Instant::now();
    let response = ApiClient::send(client.client.get(client.url("/cupcakes"))).await?;
    let body: CupcakesResponse = ApiClient::decode(response).await?;

    tracing::debug!(
        duration_ms = start.elapsed().as_millis(),
        count = body.cupcakes.len(),
        "Catalog fetched"
    );
    Ok(body.cupcakes)
}
