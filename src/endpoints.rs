//! Read-endpoint URL construction

use crate::util::encode_path;

/// KV API base path
pub const API_V1_BASE: &str = "/v1";

/// Endpoint builder
#[derive(Debug, Clone)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    /// Create a new endpoints builder
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the full URL for a path
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Value read: the current secret entry under a mount
    pub fn data_read(&self, mount: &str, name: &str) -> String {
        self.url(&format!(
            "{}/{}/data/{}",
            API_V1_BASE,
            encode_path(mount),
            encode_path(name)
        ))
    }

    /// Version read: metadata only, no secret value transferred
    pub fn metadata_read(&self, mount: &str, name: &str) -> String {
        self.url(&format!(
            "{}/{}/metadata/{}",
            API_V1_BASE,
            encode_path(mount),
            encode_path(name)
        ))
    }
}
