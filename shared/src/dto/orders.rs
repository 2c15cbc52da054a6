use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cart::CartItem;

/// `POST /orders` body: the current cart contents
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRequest {
    pub items: Vec<CartItem>,
}

/// One line of a recorded purchase
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    pub cupcake_name: String,
    pub quantity: u32,
    pub total_price: f64,
}

/// Lines of one checkout, grouped by purchase id
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseGroup {
    pub purchase_id: String,
    /// ISO-8601 timestamp as sent by the backend (naive timestamps are UTC)
    pub created_at: String,
    pub items: Vec<OrderLine>,
}

impl PurchaseGroup {
    /// Parse `created_at`, accepting both offset and naive ISO-8601 forms.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.created_at) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&self.created_at, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|line| line.total_price).sum()
    }
}

/// `GET /orders/history`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderHistoryResponse {
    pub orders: Vec<PurchaseGroup>,
}
