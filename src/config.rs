//! Configuration constants and utilities for tubestat
//!
//! Everything the program needs at runtime lives here: the TfL status
//! endpoint (overridable through an environment variable, mainly for tests),
//! the request timeout, and the formatting constants.

use std::time::Duration;

/// Default TfL line-status endpoint, with detailed status requested.
pub const DEFAULT_STATUS_URL: &str = "https://api.tfl.gov.uk/line/mode/tube/status?detail=true";

/// Environment variable name for overriding the status endpoint
pub const STATUS_URL_ENV_VAR: &str = "TUBESTAT_STATUS_URL";

/// Client-side deadline for the single status request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Severity code the TfL API uses for nominal service. Every other code is
/// some form of disruption; this is the single decision point for status
/// coloring.
pub const GOOD_SERVICE_SEVERITY: i64 = 10;

/// Extra padding added on each side of the line-name column.
pub const COLUMN_PAD: usize = 2;

/// Get the status URL, checking environment variable first, then falling back to default
pub fn status_url() -> String {
    std::env::var_os(STATUS_URL_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_STATUS_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status_url() {
        assert_eq!(
            DEFAULT_STATUS_URL,
            "https://api.tfl.gov.uk/line/mode/tube/status?detail=true"
        );
    }

    #[test]
    fn test_env_var_name() {
        assert_eq!(STATUS_URL_ENV_VAR, "TUBESTAT_STATUS_URL");
    }

    #[test]
    fn test_status_url_env_override() {
        // Save current env var state
        let original = std::env::var_os(STATUS_URL_ENV_VAR);

        let test_url = "http://127.0.0.1:9999/status";
        std::env::set_var(STATUS_URL_ENV_VAR, test_url);
        assert_eq!(status_url(), test_url);

        // Restore original state
        match original {
            Some(val) => std::env::set_var(STATUS_URL_ENV_VAR, val),
            None => std::env::remove_var(STATUS_URL_ENV_VAR),
        }
    }

    #[test]
    fn test_request_timeout() {
        assert_eq!(REQUEST_TIMEOUT, Duration::from_secs(10));
    }
}
