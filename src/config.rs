//! Runtime configuration for the reporting tool.
//!
//! Configuration is built once at startup (the CLI reads it from flags or
//! environment variables) and passed by reference into the API client
//! constructors. Nothing in the library reads ambient process state.

/// Connection settings for one remote service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// Base URL of the service, without a trailing slash.
    pub base_url: String,

    /// Static API key for the service.
    pub api_key: String,
}

impl ServiceConfig {
    /// Create a new service configuration.
    ///
    /// A trailing slash on the base URL is stripped so that path
    /// concatenation in the clients stays predictable.
    pub fn new<S1: Into<String>, S2: Into<String>>(base_url: S1, api_key: S2) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }
}

/// Full configuration for one report run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// ActiveCampaign connection settings.
    pub active_campaign: ServiceConfig,

    /// Beehiiv connection settings.
    pub beehiiv: ServiceConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_stripped() {
        let cfg = ServiceConfig::new("https://acme.api-us1.com/", "key");
        assert_eq!(cfg.base_url, "https://acme.api-us1.com");
    }

    #[test]
    fn test_base_url_kept_verbatim_otherwise() {
        let cfg = ServiceConfig::new("https://api.beehiiv.com/v2", "key");
        assert_eq!(cfg.base_url, "https://api.beehiiv.com/v2");
        assert_eq!(cfg.api_key, "key");
    }
}
