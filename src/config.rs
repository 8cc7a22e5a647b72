//! Build-time Configuration
//!
//! Constants shared by the API client, the session layer and the views.
//! The API origin can be overridden at compile time with `ESTATE_API_URL`.

/// Base URL of the remote REST API (origin + path prefix, no trailing slash)
pub const API_BASE_URL: &str = match option_env!("ESTATE_API_URL") {
    Some(url) => url,
    None => "https://api.estates.example/api",
};

/// localStorage key holding the bearer token
pub const TOKEN_KEY: &str = "token";

/// localStorage key holding the serialized user profile
pub const USER_KEY: &str = "user";

/// BroadcastChannel name used to tell other tabs about token changes
pub const SESSION_CHANNEL: &str = "auth";

/// Quick search stays silent until the trimmed query has this many chars
pub const MIN_SEARCH_LEN: usize = 2;

/// How long a toast stays on screen
pub const TOAST_TIMEOUT_MS: u32 = 4_000;

/// Delay before re-fetching the profile after sign-in or a 401
pub const PROFILE_REFRESH_DELAY_MS: u32 = 1_500;

/// Units requested per listing page
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Max suggestions shown under the quick search box
pub const QUICK_SEARCH_LIMIT: usize = 6;

/// Fallback brand when settings have not loaded
pub const SITE_NAME: &str = "Estates";
