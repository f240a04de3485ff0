//! Upload validation configuration.

use serde::{Deserialize, Serialize};

/// Settings applied to upload batches before any network call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Maximum accepted file size in bytes (default 50 MB).
    #[serde(default = "default_max_size")]
    pub max_size_bytes: u64,
    /// MIME types accepted for upload. An empty list accepts every
    /// type.
    #[serde(default)]
    pub allowed_mime_types: Vec<String>,
}

impl UploadConfig {
    /// Maximum accepted file size in whole megabytes, for user-facing
    /// messages.
    pub fn max_size_mb(&self) -> u64 {
        self.max_size_bytes / (1024 * 1024)
    }

    /// Whether a file of the given MIME type may be uploaded.
    ///
    /// With a non-empty allow-list, a file whose type is unknown is
    /// not accepted.
    pub fn accepts_mime_type(&self, mime_type: Option<&str>) -> bool {
        if self.allowed_mime_types.is_empty() {
            return true;
        }
        mime_type.is_some_and(|mime| {
            self.allowed_mime_types
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(mime))
        })
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_size_bytes: default_max_size(),
            allowed_mime_types: Vec::new(),
        }
    }
}

fn default_max_size() -> u64 {
    50 * 1024 * 1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit_is_50_mb() {
        let config = UploadConfig::default();
        assert_eq!(config.max_size_mb(), 50);
    }

    #[test]
    fn test_empty_allow_list_accepts_everything() {
        let config = UploadConfig::default();
        assert!(config.accepts_mime_type(Some("application/pdf")));
        assert!(config.accepts_mime_type(None));
    }

    #[test]
    fn test_allow_list_filters_by_type() {
        let config = UploadConfig {
            allowed_mime_types: vec!["application/pdf".to_string(), "image/png".to_string()],
            ..UploadConfig::default()
        };
        assert!(config.accepts_mime_type(Some("application/pdf")));
        assert!(config.accepts_mime_type(Some("Image/PNG")));
        assert!(!config.accepts_mime_type(Some("video/mp4")));
        assert!(!config.accepts_mime_type(None));
    }
}
