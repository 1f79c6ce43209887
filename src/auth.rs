//! Access-token handling
//!
//! The store authenticates requests with a single token carried in the
//! `X-Vault-Token` header. The token is wrapped in [`SecretString`] so it
//! never appears in logs or debug output.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// Header carrying the access token on every request
pub(crate) const TOKEN_HEADER: &str = "X-Vault-Token";

/// Store access token
///
/// Supplied once when building the [`crate::Resolver`] and sent verbatim in
/// the credential header of each request. Transport security is the
/// network's responsibility; the token itself is plaintext on the wire.
#[derive(Clone)]
pub struct VaultToken(SecretString);

impl VaultToken {
    /// Wrap a raw token string
    pub fn new(token: impl Into<String>) -> Self {
        VaultToken(SecretString::new(token.into()))
    }

    /// Header value for the credential header
    pub(crate) fn header_value(&self) -> &str {
        self.0.expose_secret()
    }
}

impl fmt::Debug for VaultToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VaultToken(****)")
    }
}
