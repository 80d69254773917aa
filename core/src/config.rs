//! Environment-driven client configuration.

pub const BASE_URL_ENV: &str = "BOOKING_API_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Read `BOOKING_API_URL`, falling back to the local mock server.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(BASE_URL_ENV).map(|v| v.trim().to_string()) {
            Some(base_url) if !base_url.is_empty() => Self { base_url },
            _ => Self::default(),
        }
    }
}
