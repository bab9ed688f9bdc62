//! Asset image/document upload.
//!
//! The file is validated (size, then MIME type) before the caller's
//! permission is checked, so an oversize file is a validation error for
//! every role.

use std::path::PathBuf;

use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use fams_auth::rbac::Permission;
use fams_core::config::UploadConfig;
use fams_core::error::{AppError, ErrorKind};

use crate::context::RequestContext;

/// A single uploaded file as received by the HTTP layer.
#[derive(Debug, Clone)]
pub struct UploadParams {
    /// Client-supplied file name.
    pub file_name: Option<String>,
    /// Declared content type.
    pub content_type: Option<String>,
    /// File content bytes.
    pub data: Bytes,
}

/// Where an accepted upload was stored.
#[derive(Debug, Clone, Serialize)]
pub struct StoredUpload {
    /// Public URL of the file.
    pub url: String,
    /// Stored file name.
    pub file_name: String,
    /// Normalized content type.
    pub content_type: String,
    /// Size in bytes.
    pub size: u64,
}

/// Validates and stores asset uploads on local disk.
#[derive(Debug, Clone)]
pub struct UploadService {
    config: UploadConfig,
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(config: UploadConfig) -> Self {
        Self { config }
    }

    /// Upload settings in effect.
    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    /// Checks size and type. Returns the normalized MIME type.
    pub fn validate(&self, params: &UploadParams) -> Result<String, AppError> {
        let size = params.data.len() as u64;
        if size == 0 {
            return Err(AppError::validation("Uploaded file is empty"));
        }
        if size > self.config.max_file_size_bytes {
            return Err(AppError::validation(format!(
                "File exceeds maximum upload size of {} bytes",
                self.config.max_file_size_bytes
            )));
        }

        let mime = params
            .content_type
            .as_deref()
            .map(normalize_mime)
            .unwrap_or_default();
        if mime.is_empty() || !self.config.is_allowed_mime_type(&mime) {
            return Err(AppError::validation(format!(
                "File type '{}' is not allowed",
                if mime.is_empty() { "unknown" } else { mime.as_str() }
            )));
        }

        Ok(mime)
    }

    /// Validates, authorizes, and writes an upload.
    pub async fn store(
        &self,
        ctx: &RequestContext,
        params: UploadParams,
    ) -> Result<StoredUpload, AppError> {
        let mime = self.validate(&params)?;
        ctx.require(Permission::RegisterAssets)?;

        let file_name = format!("{}.{}", Uuid::new_v4(), extension_for(&mime));
        let dir = PathBuf::from(&self.config.directory);
        tokio::fs::create_dir_all(&dir).await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Failed to create upload directory", e)
        })?;
        tokio::fs::write(dir.join(&file_name), &params.data)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Storage, "Failed to write upload", e))?;

        let url = format!(
            "{}/{}",
            self.config.public_prefix.trim_end_matches('/'),
            file_name
        );

        info!(
            user_id = %ctx.user_id,
            original = params.file_name.as_deref().unwrap_or(""),
            stored = %file_name,
            size = params.data.len(),
            "Upload stored"
        );

        Ok(StoredUpload {
            url,
            file_name,
            content_type: mime,
            size: params.data.len() as u64,
        })
    }
}

/// Drops parameters (`; charset=...`) and lowercases.
fn normalize_mime(raw: &str) -> String {
    raw.split(';').next().unwrap_or("").trim().to_ascii_lowercase()
}

fn extension_for(mime: &str) -> &'static str {
    match mime {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/webp" => "webp",
        "image/gif" => "gif",
        "application/pdf" => "pdf",
        _ => "bin",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fams_entity::user::UserRole;

    fn service(dir: &std::path::Path) -> UploadService {
        UploadService::new(UploadConfig {
            directory: dir.to_string_lossy().into_owned(),
            max_file_size_bytes: 16,
            ..UploadConfig::default()
        })
    }

    fn ctx(role: UserRole) -> RequestContext {
        RequestContext::new(Uuid::new_v4(), role, "Tester".into(), "t@faculty.example".into())
    }

    fn params(size: usize, mime: &str) -> UploadParams {
        UploadParams {
            file_name: Some("photo.png".to_string()),
            content_type: Some(mime.to_string()),
            data: Bytes::from(vec![7u8; size]),
        }
    }

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("fams-upload-{}", Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_oversize_rejected_for_every_role() {
        let dir = temp_dir();
        let svc = service(&dir);
        for role in UserRole::ALL {
            let err = svc.store(&ctx(role), params(17, "image/png")).await.unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation, "{role}");
        }
        assert!(!dir.exists());
    }

    #[tokio::test]
    async fn test_disallowed_type_rejected() {
        let svc = service(&temp_dir());
        let err = svc
            .store(&ctx(UserRole::FacultyAdmin), params(4, "application/x-msdownload"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_permitted_upload_requires_register_permission() {
        let dir = temp_dir();
        let svc = service(&dir);

        let err = svc
            .store(&ctx(UserRole::Lecturer), params(4, "image/png"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);

        let stored = svc
            .store(&ctx(UserRole::DepartmentalOfficer), params(4, "image/PNG; q=1"))
            .await
            .unwrap();
        assert!(stored.url.starts_with("/uploads/"));
        assert!(stored.file_name.ends_with(".png"));
        assert_eq!(stored.content_type, "image/png");
        assert!(dir.join(&stored.file_name).exists());

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_empty_file_rejected() {
        let svc = service(&temp_dir());
        assert!(svc.validate(&params(0, "image/png")).is_err());
    }
}
