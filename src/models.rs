//! Data models for secret resolution
//!
//! Domain types exchanged with callers, plus the pub(crate) wire envelopes
//! the store returns on the two read paths. Secret values are wrapped in
//! [`SecretString`] to keep them out of logs and debug output.

use secrecy::SecretString;
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::errors::{Error, Result};

/// Identifies a single secret entry and the sub-field to extract
///
/// A secret entry in the store is a map of keys to string values;
/// `key` names the one to extract. An empty key falls back to
/// [`crate::DEFAULT_KEY`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretCoordinates {
    /// Mount (namespace/path prefix) of the secret engine
    pub mount: String,
    /// Name (path) of the secret entry under the mount
    pub name: String,
    /// Key of the value to extract; empty means [`crate::DEFAULT_KEY`]
    ///
    /// Unused by the version resolver, which reads metadata only.
    pub key: String,
}

impl SecretCoordinates {
    /// Coordinates with the default extraction key
    pub fn new(mount: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            mount: mount.into(),
            name: name.into(),
            key: String::new(),
        }
    }

    /// Set an explicit extraction key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// The key actually used for extraction: never empty
    pub fn effective_key(&self) -> &str {
        if self.key.is_empty() {
            crate::DEFAULT_KEY
        } else {
            &self.key
        }
    }
}

/// Governs fallback secret synthesis
///
/// # Example
///
/// ```
/// use vault_kv_resolver::GenerationPolicy;
///
/// // 32 characters, default special set
/// let policy = GenerationPolicy { length: 32, ..Default::default() };
///
/// // Custom specials appended to the base charset
/// let policy = GenerationPolicy {
///     length: 16,
///     override_special: Some("-_".to_string()),
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationPolicy {
    /// Length of the generated secret; zero or negative yields an empty
    /// string (edge case, not an error)
    pub length: i64,
    /// Extra symbols appended to the base charset instead of
    /// [`crate::DEFAULT_SPECIAL_CHARS`]; `None` or empty uses the default
    pub override_special: Option<String>,
}

/// Result of a value resolution
///
/// Either the store's value with its real version, or a generated fallback
/// with version [`crate::FALLBACK_SECRET_VERSION`] — never a mix.
#[derive(Debug, Clone)]
pub struct SecretResolutionResult {
    /// The secret value (protected)
    pub value: SecretString,
    /// Store-assigned version, or the fallback constant
    pub version: i64,
}

/// Result of a version-only resolution
///
/// [`crate::UNKNOWN_VERSION`] means the store did not report one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionResolutionResult {
    /// Current version of the secret, or the unknown sentinel
    pub version: i64,
}

// Wire envelopes. The KV v2 read contract is exact on field names and
// nesting depth; every deviation becomes Error::MalformedResponse.

/// Value read response: `{"data": {"data": {...}, "metadata": {...}}}`
#[derive(Debug, Deserialize)]
pub(crate) struct SecretReadResponse {
    pub data: SecretReadEnvelope,
}

/// Inner envelope of a value read
#[derive(Debug, Deserialize)]
pub(crate) struct SecretReadEnvelope {
    pub data: BTreeMap<String, serde_json::Value>,
    pub metadata: SecretReadMetadata,
}

/// Metadata block of a value read
#[derive(Debug, Deserialize)]
pub(crate) struct SecretReadMetadata {
    pub version: f64,
}

impl SecretReadEnvelope {
    /// Extract the value under `key`, requiring a JSON string
    pub fn value_for(&self, key: &str) -> Result<&str> {
        let value = self.data.get(key).ok_or_else(|| {
            Error::MalformedResponse(format!("secret entry has no key '{}'", key))
        })?;
        value.as_str().ok_or_else(|| {
            Error::MalformedResponse(format!("value for key '{}' is not a string", key))
        })
    }

    /// Store version, truncated to an integer
    pub fn version(&self) -> i64 {
        self.metadata.version as i64
    }
}

/// Version read response: `{"data": {"current_version": <number>}}`
#[derive(Debug, Deserialize)]
pub(crate) struct MetadataReadResponse {
    pub data: MetadataReadEnvelope,
}

/// Inner envelope of a version read
#[derive(Debug, Deserialize)]
pub(crate) struct MetadataReadEnvelope {
    pub current_version: f64,
}

impl MetadataReadResponse {
    /// Current version, truncated to an integer
    pub fn current_version(&self) -> i64 {
        self.data.current_version as i64
    }
}
