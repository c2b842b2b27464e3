//! Environment configuration for the search server.

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://localhost:3000"];

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
        }
    }
}

impl ServerConfig {
    /// Reads `SEARCH_SERVER_ADDR` and `SEARCH_CORS_ORIGINS` (comma separated).
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind_addr: std::env::var("SEARCH_SERVER_ADDR").unwrap_or(defaults.bind_addr),
            cors_origins: std::env::var("SEARCH_CORS_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or(defaults.cors_origins),
        }
    }
}

/// Splits a comma separated origin list. `*` is dropped: credentialed CORS
/// needs explicit origins.
pub fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .filter(|o| {
            if *o == "*" {
                tracing::warn!("Ignoring wildcard CORS origin in SEARCH_CORS_ORIGINS; list origins explicitly");
                return false;
            }
            true
        })
        .map(|o| o.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_allows_dev_origins() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr, "0.0.0.0:8000");
        assert_eq!(config.cors_origins, vec!["http://localhost:5173", "http://localhost:3000"]);
    }

    #[test]
    fn origins_are_trimmed_and_empty_entries_dropped() {
        assert_eq!(
            parse_origins(" http://a.test/ , ,http://b.test"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn wildcard_origin_is_dropped() {
        assert!(parse_origins("*").is_empty());
        assert_eq!(parse_origins("*, http://a.test"), vec!["http://a.test".to_string()]);
    }
}
