//! Upload service
//!
//! Stores uploaded files under the public static root so that the returned
//! path can be fetched directly. Files are renamed to
//! `<unix millis>_<11 base36 chars><original extension>`.

use std::path::Path;

use chrono::Utc;
use cms_core::DomainError;
use rand::Rng;
use tracing::{info, instrument};

use crate::dto::UploadResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RANDOM_LEN: usize = 11;

/// Validate a destination directory relative to the public root
///
/// Accepts `/`-separated segments of ASCII letters, digits, `_` and `-`.
/// Absolute paths, `..`, backslashes and empty segments are refused.
pub fn sanitize_destination(raw: &str) -> Result<String, DomainError> {
    let destination = raw.trim();
    let invalid = || DomainError::InvalidDestination(raw.to_string());

    if destination.is_empty() || destination.starts_with('/') {
        return Err(invalid());
    }

    let valid_segment = |segment: &str| {
        !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    };
    if !destination.split('/').all(valid_segment) {
        return Err(invalid());
    }

    Ok(destination.to_string())
}

/// Extension of the uploaded name with its dot, or empty
fn extension_of(original_name: &str) -> String {
    Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}

/// Stored file name for an upload
pub fn generate_file_name(original_name: &str) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..RANDOM_LEN)
        .map(|_| char::from(BASE36[rng.gen_range(0..BASE36.len())]))
        .collect();

    format!(
        "{}_{}{}",
        Utc::now().timestamp_millis(),
        suffix,
        extension_of(original_name)
    )
}

/// Upload service
pub struct UploadService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UploadService<'a> {
    /// Create a new UploadService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Write `bytes` under `<public>/<destination>/`
    ///
    /// Without a destination the configured default is used.
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn save(
        &self,
        destination: Option<&str>,
        original_name: &str,
        bytes: &[u8],
    ) -> ServiceResult<UploadResponse> {
        let storage = self.ctx.storage();
        let destination = match destination.map(str::trim).filter(|d| !d.is_empty()) {
            Some(d) => sanitize_destination(d)?,
            None => sanitize_destination(&storage.default_destination)?,
        };

        let directory = storage.public_dir.join(&destination);
        tokio::fs::create_dir_all(&directory)
            .await
            .map_err(|e| DomainError::StorageError(format!("{}: {e}", directory.display())))?;

        let file_name = generate_file_name(original_name);
        let target = directory.join(&file_name);
        tokio::fs::write(&target, bytes)
            .await
            .map_err(|e| DomainError::StorageError(format!("{}: {e}", target.display())))?;

        let file_path = format!("/{destination}/{file_name}");
        info!(file_path = %file_path, "File uploaded");

        Ok(UploadResponse {
            success: true,
            file_path,
            original_name: original_name.to_string(),
        })
    }
}
