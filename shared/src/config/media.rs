//! Media upload configuration

use serde::{Deserialize, Serialize};

use super::require_env;

/// Configuration for the binary-object upload service that stores profile
/// pictures and hotel photos, returning a public URL for each upload.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaConfig {
    /// Upload endpoint of the media service
    pub upload_url: String,

    /// API key for the media service
    pub api_key: String,
}

impl MediaConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            upload_url: require_env("MEDIA_UPLOAD_URL")?,
            api_key: require_env("MEDIA_API_KEY")?,
        })
    }
}
