//! Display formatting for dates.

use chrono::{DateTime, FixedOffset, Utc};
use shared::PurchaseGroup;

/// Order dates are shown at a fixed UTC−3 offset.
const DISPLAY_OFFSET_SECS: i32 = -3 * 3600;

/// `dd/MM/yyyy HH:mm` at UTC−3.
pub fn format_order_date(timestamp: DateTime<Utc>) -> String {
    match FixedOffset::east_opt(DISPLAY_OFFSET_SECS) {
        Some(offset) => timestamp.with_timezone(&offset).format("%d/%m/%Y %H:%M").to_string(),
        None => timestamp.format("%d/%m/%Y %H:%M").to_string(),
    }
}

/// Display date of a purchase; the raw value when it cannot be parsed.
pub fn purchase_date(group: &PurchaseGroup) -> String {
    group
        .created_at_utc()
        .map(format_order_date)
        .unwrap_or_else(|| group.created_at.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_shifts_to_display_offset() {
        let ts = Utc.with_ymd_and_hms(2024, 11, 20, 14, 3, 0).unwrap();
        assert_eq!(format_order_date(ts), "20/11/2024 11:03");
    }

    #[test]
    fn test_format_crosses_midnight() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 1, 1, 30, 0).unwrap();
        assert_eq!(format_order_date(ts), "31/12/2024 22:30");
    }

    #[test]
    fn test_unparseable_date_passes_through() {
        let group = PurchaseGroup {
            purchase_id: "p".into(),
            created_at: "yesterday".into(),
            items: Vec::new(),
        };
        assert_eq!(purchase_date(&group), "yesterday");
    }
}
