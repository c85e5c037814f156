/// User agent string for HTTP requests
pub const USER_AGENT: &str = "weather-app/1.0";

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Media type requested from the NWS API
pub const ACCEPT_GEO_JSON: &str = "application/geo+json";

/// Per-request timeout in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 40;

/// Number of forecast periods included in a forecast response
pub const FORECAST_PERIOD_LIMIT: usize = 5;

/// Separator placed between formatted alert or forecast blocks
pub const BLOCK_SEPARATOR: &str = "\n---\n";

pub const ALERTS_UNAVAILABLE: &str = "Unable to fetch alerts or no alerts found.";
pub const NO_ACTIVE_ALERTS: &str = "No active alerts for this state";
pub const POINTS_UNAVAILABLE: &str = "Unable to fetch forecast data for this location";
pub const FORECAST_UNAVAILABLE: &str = "Unable to fetch detailed forecast";
