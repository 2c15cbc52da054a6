//! # Shared Utility Functions
//!
//! Display helpers used by every client of the backend.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_price;
//!
//! assert_eq!(format_price(12.5), "R$ 12.50");
//! ```

/// Format an amount in reais with two decimals, as shown across the app.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_price;
///
/// assert_eq!(format_price(8.0), "R$ 8.00");
/// assert_eq!(format_price(19.899), "R$ 19.90");
/// ```
pub fn format_price(amount: f64) -> String {
    format!("R$ {:.2}", amount)
}
