//! Store-wide display constants.

/// Days after release during which a shoe still counts as a new release.
/// The boundary day itself qualifies: a shoe released exactly this many
/// days ago is still "new".
pub const NEW_RELEASE_WINDOW_DAYS: i64 = 30;

/// Currency symbol prepended by the price formatter.
pub const CURRENCY_SYMBOL: &str = "$";

/// Store name shown in the navbar.
pub const STORE_NAME: &str = "Sole Street";
