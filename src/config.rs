//! Service address resolution
//!
//! All three endpoint URLs are formed from one base address. Resolution
//! order: environment variable, then the settings override, then the local
//! loopback default.

use crate::constants::{API_BASE_ENV, DEFAULT_API_BASE};
use crate::settings::Settings;
use tracing::debug;

pub fn api_base(settings: &Settings) -> String {
    let resolved = resolve(
        std::env::var(API_BASE_ENV).ok(),
        settings.api_base.clone(),
    );
    debug!(base = %resolved, "Service address resolved");
    resolved
}

fn resolve(env: Option<String>, saved: Option<String>) -> String {
    env.filter(|v| !v.trim().is_empty())
        .or_else(|| saved.filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_to_loopback() {
        assert_eq!(resolve(None, None), DEFAULT_API_BASE);
    }

    #[test]
    fn environment_wins_over_settings() {
        assert_eq!(
            resolve(
                Some("https://env.example.com".into()),
                Some("https://saved.example.com".into()),
            ),
            "https://env.example.com"
        );
    }

    #[test]
    fn settings_used_when_environment_unset() {
        assert_eq!(
            resolve(None, Some("https://saved.example.com".into())),
            "https://saved.example.com"
        );
    }

    #[test]
    fn blank_values_are_skipped() {
        assert_eq!(resolve(Some("  ".into()), Some(String::new())), DEFAULT_API_BASE);
    }
}
