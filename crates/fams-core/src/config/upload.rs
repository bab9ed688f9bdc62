//! Upload storage configuration.

use serde::{Deserialize, Serialize};

/// Where uploaded asset images/documents go and what is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Directory uploaded files are written to.
    #[serde(default = "default_directory")]
    pub directory: String,
    /// URL prefix the upload directory is served under.
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,
    /// Maximum accepted file size in bytes (default 5 MB).
    #[serde(default = "default_max_size")]
    pub max_file_size_bytes: u64,
    /// Accepted MIME types.
    #[serde(default = "default_allowed_mime_types")]
    pub allowed_mime_types: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            public_prefix: default_public_prefix(),
            max_file_size_bytes: default_max_size(),
            allowed_mime_types: default_allowed_mime_types(),
        }
    }
}

impl UploadConfig {
    /// Whether the given MIME type is on the allow-list (case-insensitive).
    pub fn is_allowed_mime_type(&self, mime_type: &str) -> bool {
        self.allowed_mime_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(mime_type))
    }
}

fn default_directory() -> String {
    "./data/uploads".to_string()
}

fn default_public_prefix() -> String {
    "/uploads".to_string()
}

fn default_max_size() -> u64 {
    5_242_880 // 5 MB
}

fn default_allowed_mime_types() -> Vec<String> {
    vec![
        "image/jpeg".to_string(),
        "image/png".to_string(),
        "image/webp".to_string(),
        "image/gif".to_string(),
        "application/pdf".to_string(),
    ]
}
