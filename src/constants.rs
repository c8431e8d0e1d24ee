//! Application constants and configuration

pub const APP_NAME: &str = "Strategic Priorities Generator";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fallback service address when neither the environment variable nor the
/// settings file provides one.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Environment variable that overrides the configured service address.
pub const API_BASE_ENV: &str = "PRIORITIES_API_BASE";
