use serde::{Deserialize, Serialize};

/// Line in the server-held cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub quantity: u32,
    #[serde(default)]
    pub image: String,
}

impl CartItem {
    /// Unit price times quantity
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Sum of all line subtotals
pub fn cart_total(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::subtotal).sum()
}

/// `GET /cart`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartResponse {
    #[serde(rename = "cartItems")]
    pub cart_items: Vec<CartItem>,
}

/// `POST /cart`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddToCartRequest {
    #[serde(rename = "cupcakeId")]
    pub cupcake_id: i64,
    pub quantity: u32,
}

/// `DELETE /cart`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoveFromCartRequest {
    #[serde(rename = "cupcakeId")]
    pub cupcake_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, price: f64, quantity: u32) -> CartItem {
        CartItem {
            id,
            name: format!("Cupcake {id}"),
            price,
            description: String::new(),
            quantity,
            image: String::new(),
        }
    }

    #[test]
    fn test_cart_total() {
        let items = vec![item(1, 7.5, 2), item(2, 10.0, 1)];
        assert!((cart_total(&items) - 25.0).abs() < f64::EPSILON);
        assert_eq!(cart_total(&[]), 0.0);
    }

    #[test]
    fn test_cart_response_key() {
        let body = r#"{"cartItems":[{"id":1,"name":"Bolo de Cenoura","price":8.0,
            "description":"Com cobertura","quantity":3,"image":"BolodeCenoura.png"}]}"#;
        let response: CartResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.cart_items.len(), 1);
        assert_eq!(response.cart_items[0].quantity, 3);
    }

    #[test]
    fn test_add_to_cart_request_keys() {
        let json = serde_json::to_value(AddToCartRequest { cupcake_id: 4, quantity: 2 }).unwrap();
        assert_eq!(json, serde_json::json!({"cupcakeId": 4, "quantity": 2}));
    }
}
