/// Storage key holding the opaque bearer token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Storage key holding the JSON-serialized session user.
pub const AUTH_USER_KEY: &str = "auth_user";

/// Currency assumed when an account or user carries none.
pub const DEFAULT_CURRENCY: &str = "PEN";

/// Interval between unread-notification polls.
pub const NOTIFICATION_POLL_INTERVAL_SECS: u64 = 30;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Number of categories returned by the spending-leaks aggregation.
pub const DEFAULT_LEAKS_TOP: usize = 5;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
