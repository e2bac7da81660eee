use std::time::Duration;

/// How long a restaurant site gets to answer before its fallback menu is shown.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Blank dishes per day in a fallback menu; roughly a normal day's row count.
pub const PLACEHOLDER_DISHES: usize = 4;

pub const UNREACHABLE_NOTICE: &str = "did not respond in time";
