//! Vault KV v2 secret resolver
//!
//! A small async client for resolving a named secret value (and its version)
//! from a Vault-style KV v2 store over HTTP, with a deterministic fallback
//! that synthesizes a random secret when the store does not return one.
//!
//! Built for infrastructure-as-code tooling that needs a secret at
//! plan/apply time without persisting it to durable state. Each call is a
//! single, independent resolution: no caching, no retries, no writes.
//!
//! # Resolution model
//!
//! - A reachable store that answers with a success status yields the stored
//!   value and its real version.
//! - A reachable store that answers with any other status yields a locally
//!   generated random secret and the fallback version `1`.
//! - An unreachable store (DNS, connection refused, timeout) is an error,
//!   never a fallback: "store says no secret" and "store unreachable" are
//!   deliberately distinct outcomes.
//!
//! # Example
//!
//! ```no_run
//! use vault_kv_resolver::{GenerationPolicy, ResolverBuilder, SecretCoordinates};
//! use secrecy::ExposeSecret;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let resolver = ResolverBuilder::new("https://vault.example.com:8200")
//!         .token("hvs.your-token")
//!         .build()?;
//!
//!     let coords = SecretCoordinates::new("secret", "app/db");
//!     let policy = GenerationPolicy { length: 24, ..Default::default() };
//!
//!     let resolved = resolver.resolve_secret(&coords, &policy).await?;
//!     println!("secret version: {}", resolved.version);
//!     let _value = resolved.value.expose_secret();
//!
//!     Ok(())
//! }
//! ```

#![deny(
    missing_docs,
    missing_debug_implementations,
    unsafe_code,
    unused_results,
    warnings
)]

mod auth;
mod client;
mod config;
mod endpoints;
mod errors;
mod generate;
mod models;
mod util;

pub use auth::VaultToken;
pub use client::Resolver;
pub use config::{ResolverBuilder, ResolverConfig};
pub use errors::{Error, ErrorKind, Result};
pub use generate::{generate_secret, generate_secret_with};
pub use models::{
    GenerationPolicy, SecretCoordinates, SecretResolutionResult, VersionResolutionResult,
};

// Re-export commonly used types
pub use secrecy::SecretString;

/// Crate version, matches Cargo.toml version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Key used for value extraction when the caller supplies an empty key
pub const DEFAULT_KEY: &str = "password";

/// Special characters appended to the base charset when no override is given
pub const DEFAULT_SPECIAL_CHARS: &str = "!@#$%^&*()";

/// Version reported alongside a locally generated fallback secret
pub const FALLBACK_SECRET_VERSION: i64 = 1;

/// Sentinel version meaning "could not determine the current version"
pub const UNKNOWN_VERSION: i64 = 0;
