//! Secret resolver implementation
//!
//! The [`Resolver`] issues one authenticated GET per resolution and
//! classifies the outcome into exactly two buckets:
//!
//! - **Found**: success status. The body is decoded against the strict
//!   KV v2 envelope; any structural deviation is
//!   [`Error::MalformedResponse`], never a silent fallback.
//! - **NotFound-or-Error**: any other status. The value resolver
//!   synthesizes a random secret instead; the version resolver reports the
//!   unknown sentinel. Neither is an error.
//!
//! Transport failures (DNS, connection refused, timeout, cancellation) sit
//! outside both buckets and abort the resolution.
//!
//! # Example
//!
//! ```no_run
//! use vault_kv_resolver::{GenerationPolicy, ResolverBuilder, SecretCoordinates};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = ResolverBuilder::new("https://vault.example.com:8200")
//!     .token("hvs.your-token")
//!     .timeout_ms(10_000)
//!     .build()?;
//!
//! let coords = SecretCoordinates::new("secret", "app/db").with_key("password");
//! let policy = GenerationPolicy { length: 16, ..Default::default() };
//!
//! let resolved = resolver.resolve_secret(&coords, &policy).await?;
//! println!("version: {}", resolved.version);
//! # Ok(())
//! # }
//! ```

use crate::{
    auth::TOKEN_HEADER,
    config::ResolverConfig,
    endpoints::Endpoints,
    errors::{Error, Result},
    generate::generate_secret,
    models::{
        GenerationPolicy, MetadataReadResponse, SecretCoordinates, SecretReadResponse,
        SecretResolutionResult, VersionResolutionResult,
    },
};

use reqwest::{Client as HttpClient, Response};
use secrecy::SecretString;
use std::time::Duration;
use tracing::{debug, trace};

const USER_AGENT_PREFIX: &str = "vault-kv-resolver";

/// Secret store resolver
///
/// Holds the immutable store endpoint (address plus token) and an HTTP
/// client. Calls are independent and hold no cross-call state, so a single
/// resolver may be shared and invoked concurrently. Cancellation is the
/// caller's: dropping a resolution future cancels its request.
#[derive(Clone)]
pub struct Resolver {
    config: ResolverConfig,
    http: HttpClient,
    endpoints: Endpoints,
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.config.timeout)
            .finish()
    }
}

impl Resolver {
    /// Create a new resolver with the given configuration
    pub(crate) fn new(config: ResolverConfig) -> Result<Self> {
        let user_agent = format!("{}/{}", USER_AGENT_PREFIX, crate::VERSION);

        let http = HttpClient::builder()
            .user_agent(user_agent)
            .timeout(config.timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoints: Endpoints::new(&config.base_url),
            http,
            config,
        })
    }

    /// Resolve a secret value and its version
    ///
    /// Reads `{base}/v1/{mount}/data/{name}` and extracts the value under
    /// the effective key (empty key means `"password"`). When the store
    /// answers with a non-success status, a random secret is generated per
    /// `policy` and the version is reported as
    /// [`crate::FALLBACK_SECRET_VERSION`] instead.
    ///
    /// # Errors
    ///
    /// * [`Error::Network`] / [`Error::Timeout`] if the store is unreachable
    /// * [`Error::MalformedResponse`] if a success body violates the
    ///   envelope contract (wrong nesting, missing key, non-string value)
    ///
    /// A non-success HTTP status is **not** an error; it selects the
    /// fallback path.
    pub async fn resolve_secret(
        &self,
        coords: &SecretCoordinates,
        policy: &GenerationPolicy,
    ) -> Result<SecretResolutionResult> {
        let url = self.endpoints.data_read(&coords.mount, &coords.name);
        let response = self.get(&url).await?;
        let status = response.status();

        if status.is_success() {
            let body: SecretReadResponse = response.json().await.map_err(Error::from)?;
            let value = body.data.value_for(coords.effective_key())?.to_string();
            let version = body.data.version();
            trace!("resolved {}/{} at version {}", coords.mount, coords.name, version);
            Ok(SecretResolutionResult {
                value: SecretString::new(value),
                version,
            })
        } else {
            debug!(
                "store returned {} for {}/{}, synthesizing fallback secret",
                status, coords.mount, coords.name
            );
            let value = generate_secret(policy.length, policy.override_special.as_deref());
            Ok(SecretResolutionResult {
                value: SecretString::new(value),
                version: crate::FALLBACK_SECRET_VERSION,
            })
        }
    }

    /// Resolve only the current version of a secret
    ///
    /// Reads `{base}/v1/{mount}/metadata/{name}`; no secret value is
    /// transferred. A non-success status yields
    /// [`crate::UNKNOWN_VERSION`]. The coordinates' `key` is accepted for
    /// API symmetry but unused here.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Resolver::resolve_secret`]: transport failures
    /// and malformed success bodies are fatal, store rejection is not.
    pub async fn resolve_version(
        &self,
        coords: &SecretCoordinates,
    ) -> Result<VersionResolutionResult> {
        let url = self.endpoints.metadata_read(&coords.mount, &coords.name);
        let response = self.get(&url).await?;
        let status = response.status();

        if status.is_success() {
            let body: MetadataReadResponse = response.json().await.map_err(Error::from)?;
            Ok(VersionResolutionResult {
                version: body.current_version(),
            })
        } else {
            debug!(
                "store returned {} for {}/{} metadata, reporting unknown version",
                status, coords.mount, coords.name
            );
            Ok(VersionResolutionResult {
                version: crate::UNKNOWN_VERSION,
            })
        }
    }

    /// Issue an authenticated GET
    ///
    /// Transport failures map through `From<reqwest::Error>`: timeouts to
    /// [`Error::Timeout`], connection problems to [`Error::Network`]. No
    /// retries; a transient failure surfaces once, immediately.
    async fn get(&self, url: &str) -> Result<Response> {
        self.http
            .get(url)
            .header(TOKEN_HEADER, self.config.token.header_value())
            .send()
            .await
            .map_err(Error::from)
    }
}
