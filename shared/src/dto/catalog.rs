use serde::{Deserialize, Serialize};

/// Catalog item, read-only from the client's perspective
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cupcake {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    /// File name under the backend's `/uploads/` path
    #[serde(default)]
    pub image: String,
}

/// `GET /cupcakes`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CupcakesResponse {
    pub cupcakes: Vec<Cupcake>,
}
