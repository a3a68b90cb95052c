//! Application-wide constants.

/// State-store key for the raw vehicle inventory (JSON array of records).
pub const KEY_INVENTORY: &str = "inventory";

/// State-store key for the configured high-season window.
pub const KEY_SEASON_WINDOW: &str = "season-window";

/// State-store key for the quote history (JSON array, insertion order).
pub const KEY_QUOTE_HISTORY: &str = "quote-history";

/// State-store key for the uploaded company logo handle.
pub const KEY_COMPANY_LOGO: &str = "company-logo";

/// State-store key for the most recently used client name.
pub const KEY_LAST_CLIENT_NAME: &str = "last-client";

/// State-store key for the running reservation counter.
pub const KEY_RESERVATION_COUNTER: &str = "reservation-counter";

/// Zero-padding width of reservation tokens ("#0007").
pub const RESERVATION_NUMBER_WIDTH: usize = 4;

/// Counter value a fresh installation starts from.
pub const INITIAL_RESERVATION_COUNTER: u64 = 1;

/// Display name for inventory records that arrive without one.
pub const FALLBACK_VEHICLE_NAME: &str = "Vehicle";
