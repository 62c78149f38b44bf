//! Display variant selection for shoe cards.
//!
//! Every card is rendered in exactly one of three categories. A shoe with a
//! sale price is `on-sale`; otherwise a shoe released within the last month
//! is `new-release`; everything else is `default`. A shoe that is both
//! discounted and recently released shows as `on-sale` - the sale always
//! takes precedence over the release date.

use chrono::{DateTime, Duration, Utc};

use crate::config::NEW_RELEASE_WINDOW_DAYS;

/// Display category assigned to a shoe card for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayVariant {
    Default,
    NewRelease,
    OnSale,
}

impl DisplayVariant {
    /// Flag text shown on the card for non-default variants.
    pub fn label(&self) -> &'static str {
        match self {
            DisplayVariant::Default => "default",
            DisplayVariant::NewRelease => "new-release",
            DisplayVariant::OnSale => "on-sale",
        }
    }

    /// Visual overrides for this variant. `Default` carries none.
    pub fn style(&self) -> VariantStyle {
        match self {
            DisplayVariant::Default => VariantStyle::default(),
            DisplayVariant::NewRelease => VariantStyle {
                flag_background: Some("#6868D9"),
                strike_price: false,
            },
            DisplayVariant::OnSale => VariantStyle {
                flag_background: Some("#C5295D"),
                strike_price: true,
            },
        }
    }
}

impl std::fmt::Display for DisplayVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-variant visual overrides, resolved once per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VariantStyle {
    /// Background color for the promotional flag, when one is shown.
    pub flag_background: Option<&'static str>,
    /// Strike through the base price (the sale price is shown next to it).
    pub strike_price: bool,
}

/// Decide which display category applies.
///
/// Pure and deterministic for a fixed `now`; callers pass the evaluation
/// moment explicitly so the recency window stays testable.
pub fn classify(
    sale_price: Option<u32>,
    release_date: DateTime<Utc>,
    now: DateTime<Utc>,
) -> DisplayVariant {
    if sale_price.is_some() {
        DisplayVariant::OnSale
    } else if is_new_release(release_date, now) {
        DisplayVariant::NewRelease
    } else {
        DisplayVariant::Default
    }
}

/// Whether `release_date` falls inside the recency window ending at `now`.
/// The boundary is inclusive: a shoe released exactly 30 days ago is still
/// new. Release dates in the future also qualify.
pub fn is_new_release(release_date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now - release_date <= Duration::days(NEW_RELEASE_WINDOW_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn frozen_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn days_ago(days: i64) -> DateTime<Utc> {
        frozen_now() - Duration::days(days)
    }

    #[test]
    fn test_sale_price_always_wins() {
        // Recent release AND discounted: the sale takes precedence
        assert_eq!(
            classify(Some(5000), days_ago(3), frozen_now()),
            DisplayVariant::OnSale
        );
        // Old release, discounted
        assert_eq!(
            classify(Some(5000), days_ago(800), frozen_now()),
            DisplayVariant::OnSale
        );
    }

    #[test]
    fn test_recent_release_without_sale_is_new_release() {
        assert_eq!(
            classify(None, days_ago(15), frozen_now()),
            DisplayVariant::NewRelease
        );
    }

    #[test]
    fn test_old_release_without_sale_is_default() {
        assert_eq!(
            classify(None, days_ago(730), frozen_now()),
            DisplayVariant::Default
        );
    }

    #[test]
    fn test_window_boundary_is_inclusive() {
        // Exactly 30 days ago still counts as new
        assert_eq!(
            classify(None, days_ago(30), frozen_now()),
            DisplayVariant::NewRelease
        );
        // One second past the window does not
        let just_outside = days_ago(30) - Duration::seconds(1);
        assert_eq!(
            classify(None, just_outside, frozen_now()),
            DisplayVariant::Default
        );
    }

    #[test]
    fn test_future_release_counts_as_new() {
        assert_eq!(
            classify(None, frozen_now() + Duration::days(5), frozen_now()),
            DisplayVariant::NewRelease
        );
    }

    #[test]
    fn test_variant_labels() {
        assert_eq!(DisplayVariant::Default.label(), "default");
        assert_eq!(DisplayVariant::NewRelease.label(), "new-release");
        assert_eq!(DisplayVariant::OnSale.label(), "on-sale");
    }

    #[test]
    fn test_style_table() {
        let default = DisplayVariant::Default.style();
        assert_eq!(default.flag_background, None);
        assert!(!default.strike_price);

        let new_release = DisplayVariant::NewRelease.style();
        assert_eq!(new_release.flag_background, Some("#6868D9"));
        assert!(!new_release.strike_price);

        let on_sale = DisplayVariant::OnSale.style();
        assert_eq!(on_sale.flag_background, Some("#C5295D"));
        assert!(on_sale.strike_price);
    }
}
