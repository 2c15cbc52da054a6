//! # Coupons and Payment Methods
//!
//! Neither feature exists on the backend yet; both screens are static.

pub const NO_COUPONS: &str = "No promotional coupons available.";
pub const NO_PAYMENT_METHODS: &str = "No payment methods registered.";

pub fn render_coupons() -> String {
    format!("{NO_COUPONS}\n")
}

pub fn render_payment() -> String {
    format!("{NO_PAYMENT_METHODS}\n")
}
