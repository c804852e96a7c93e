//! Client configuration

/// Default timeout in milliseconds for both connect and receive
///
/// The two settings share this default but can be tuned independently.
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;

/// Configuration for connecting to the backend API
///
/// Held for the lifetime of a client instance and constant thereafter.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "https://api.tavola.app"), no trailing slash
    pub base_url: String,

    /// Extra default headers, merged over the built-in set at client
    /// construction (content type, accept, tunnel skip-warning)
    pub extra_headers: Vec<(String, String)>,

    /// Connection establishment timeout in milliseconds
    pub connect_timeout_ms: u64,

    /// Response wait timeout in milliseconds
    pub receive_timeout_ms: u64,
}

impl ClientConfig {
    /// Create a configuration for the given base URL with default timeouts
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            extra_headers: Vec::new(),
            connect_timeout_ms: DEFAULT_TIMEOUT_MS,
            receive_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Add a default header sent with every request
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.push((name.into(), value.into()));
        self
    }

    /// Set the connection establishment timeout
    pub fn with_connect_timeout_ms(mut self, ms: u64) -> Self {
        self.connect_timeout_ms = ms;
        self
    }

    /// Set the response wait timeout
    pub fn with_receive_timeout_ms(mut self, ms: u64) -> Self {
        self.receive_timeout_ms = ms;
        self
    }

    /// Set both timeouts at once
    pub fn with_timeout_ms(mut self, ms: u64) -> Self {
        self.connect_timeout_ms = ms;
        self.receive_timeout_ms = ms;
        self
    }

    /// Create an API client from this configuration
    pub fn build_client(&self) -> super::ApiClient {
        super::ApiClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("https://api.tavola.app");
        assert_eq!(config.base_url, "https://api.tavola.app");
        assert!(config.extra_headers.is_empty());
        assert_eq!(config.connect_timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(config.receive_timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_builder_methods() {
        let config = ClientConfig::new("http://localhost:8080")
            .with_header("X-Store-Id", "42")
            .with_connect_timeout_ms(5_000)
            .with_receive_timeout_ms(30_000);

        assert_eq!(
            config.extra_headers,
            vec![("X-Store-Id".to_string(), "42".to_string())]
        );
        assert_eq!(config.connect_timeout_ms, 5_000);
        assert_eq!(config.receive_timeout_ms, 30_000);
    }

    #[test]
    fn test_with_timeout_ms_sets_both() {
        let config = ClientConfig::default().with_timeout_ms(1_000);
        assert_eq!(config.connect_timeout_ms, 1_000);
        assert_eq!(config.receive_timeout_ms, 1_000);
    }
}
