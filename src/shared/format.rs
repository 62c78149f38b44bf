//! Text formatting for the storefront UI.

use crate::config::CURRENCY_SYMBOL;

/// Format a minor-unit amount as a display price: `format_price(6500)` is
/// `"$65.00"`. Locale-aware formatting is out of scope for the demo store.
pub fn format_price(amount: u32) -> String {
    format!("{}{}.{:02}", CURRENCY_SYMBOL, amount / 100, amount % 100)
}

/// Count-prefixed noun with a plural suffix when `count` is anything
/// other than one: `pluralize("Color", 3)` is `"3 Colors"`.
pub fn pluralize(noun: &str, count: u32) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(5000), "$50.00");
        assert_eq!(format_price(6525), "$65.25");
        assert_eq!(format_price(99), "$0.99");
        assert_eq!(format_price(0), "$0.00");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("Color", 1), "1 Color");
        assert_eq!(pluralize("Color", 3), "3 Colors");
        assert_eq!(pluralize("Color", 0), "0 Colors");
    }
}
