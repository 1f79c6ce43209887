//! Error types for the resolver
//!
//! The error surface mirrors the resolution model: only conditions that
//! abort a resolution become errors. A store that answers "no" (404, 403,
//! any non-success status) is not an error, it is absorbed into the
//! fallback result by the resolver.
//!
//! # Error Categories
//!
//! - **Network**: the HTTP exchange could not be completed (DNS, connection
//!   refused)
//! - **Timeout**: the request deadline was exceeded
//! - **MalformedResponse**: success status but the body does not match the
//!   KV v2 envelope contract
//! - **Config**: invalid builder configuration
//!
//! # Example
//!
//! ```no_run
//! # use vault_kv_resolver::{Resolver, SecretCoordinates, GenerationPolicy, Error};
//! # async fn example(resolver: &Resolver) -> Result<(), Box<dyn std::error::Error>> {
//! let coords = SecretCoordinates::new("secret", "app/db");
//! match resolver.resolve_secret(&coords, &GenerationPolicy::default()).await {
//!     Ok(resolved) => println!("got version {}", resolved.version),
//!     Err(Error::Network(e)) => println!("store unreachable: {}", e),
//!     Err(Error::Timeout) => println!("store timed out"),
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// Result type alias for the resolver
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the resolver
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure: the HTTP exchange could not be completed
    #[error("network: {0}")]
    Network(String),

    /// Request deadline exceeded or cancelled
    #[error("timeout")]
    Timeout,

    /// Success status but the body violated the store's response contract
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Configuration error
    #[error("config: {0}")]
    Config(String),

    /// Other errors
    #[error("other: {0}")]
    Other(String),
}

/// Coarse error categories for callers that branch on failure class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport-level failure (connection, DNS)
    Transport,
    /// Deadline exceeded
    Timeout,
    /// Store-contract violation in a success body
    Malformed,
    /// Invalid configuration
    Config,
    /// Other/unknown error
    Other,
}

impl Error {
    /// Get the error kind for categorization
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Network(_) => ErrorKind::Transport,
            Error::Timeout => ErrorKind::Timeout,
            Error::MalformedResponse(_) => ErrorKind::Malformed,
            Error::Config(_) => ErrorKind::Config,
            Error::Other(_) => ErrorKind::Other,
        }
    }

    /// Check whether this error means the store could not be reached at all
    ///
    /// Transport failures are fatal for both resolvers and never trigger
    /// fallback generation.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Network(_) | Error::Timeout)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else if err.is_connect() || err.is_request() {
            Error::Network(err.to_string())
        } else if err.is_decode() {
            Error::MalformedResponse(err.to_string())
        } else {
            Error::Other(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind() {
        assert_eq!(
            Error::Network("refused".to_string()).kind(),
            ErrorKind::Transport
        );
        assert_eq!(Error::Timeout.kind(), ErrorKind::Timeout);
        assert_eq!(
            Error::MalformedResponse("missing field".to_string()).kind(),
            ErrorKind::Malformed
        );
        assert_eq!(Error::Config("bad url".to_string()).kind(), ErrorKind::Config);
    }

    #[test]
    fn test_is_transport() {
        assert!(Error::Network("refused".to_string()).is_transport());
        assert!(Error::Timeout.is_transport());
        assert!(!Error::MalformedResponse("bad".to_string()).is_transport());
        assert!(!Error::Config("bad".to_string()).is_transport());
    }

    #[test]
    fn test_from_serde_json() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert!(matches!(Error::from(err), Error::MalformedResponse(_)));
    }

    #[test]
    fn test_display() {
        let err = Error::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "network: connection refused");
        assert_eq!(Error::Timeout.to_string(), "timeout");
    }
}
