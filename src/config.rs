//! Resolver configuration and builder

use crate::{auth::VaultToken, errors::Result, Error};
use std::time::Duration;

/// Resolver configuration
///
/// The store endpoint (address plus token) is supplied once when the
/// resolver is built and is immutable for its lifetime; coordinates and
/// generation policy travel with each call instead.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Base URL of the secret store
    pub base_url: String,
    /// Access token sent with every request
    pub token: VaultToken,
    /// Request timeout
    pub timeout: Duration,
}

/// Builder for creating a configured [`crate::Resolver`]
#[derive(Debug)]
pub struct ResolverBuilder {
    base_url: String,
    token: Option<VaultToken>,
    timeout_ms: u64,
}

impl ResolverBuilder {
    /// Create a new builder with the given base URL
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the store (e.g., `"https://vault.example.com:8200"`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout_ms: crate::DEFAULT_TIMEOUT_MS,
        }
    }

    /// Set the access token
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(VaultToken::new(token));
        self
    }

    /// Set the request timeout in milliseconds
    ///
    /// The timeout covers the whole exchange; exceeding it surfaces as
    /// [`Error::Timeout`], a fatal condition, not a fallback trigger.
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Build the resolver with the configured options
    pub fn build(self) -> Result<crate::Resolver> {
        let url = self.base_url.trim_end_matches('/');

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(Error::Config(
                "base URL must start with http:// or https://".to_string(),
            ));
        }

        let token = self.token.ok_or_else(|| {
            Error::Config("access token is required, use .token() to set it".to_string())
        })?;

        let config = ResolverConfig {
            base_url: url.to_string(),
            token,
            timeout: Duration::from_millis(self.timeout_ms),
        };

        crate::client::Resolver::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_token() {
        let result = ResolverBuilder::new("https://vault.example.com").build();
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::Config(_)));
    }

    #[test]
    fn test_builder_validates_url() {
        let result = ResolverBuilder::new("not-a-url").token("t").build();
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::Config(_)));
    }

    #[test]
    fn test_builder_accepts_http_and_https() {
        assert!(ResolverBuilder::new("http://127.0.0.1:8200")
            .token("t")
            .build()
            .is_ok());
        assert!(ResolverBuilder::new("https://vault.example.com")
            .token("t")
            .build()
            .is_ok());
    }
}
