/// Products created within this many days are badged as new.
pub const NEW_PRODUCT_WINDOW_DAYS: i64 = 7;

/// Showcase rows fall back to this many products when no product carries
/// the corresponding flag.
pub const SHOWCASE_FALLBACK_COUNT: usize = 4;
