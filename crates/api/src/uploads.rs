//! Uploaded image storage.
//!
//! Images arrive as multipart parts, get a collision-free name, and are
//! written under the public uploads directory. Records then reference them
//! by an absolute URL composed from the configured public base URL.

use std::path::Path;

use thiserror::Error;
use url::Url;

/// Errors that can occur while persisting an upload.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("failed to store upload: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to build upload URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Persist an uploaded image and return its absolute public URL.
///
/// The stored name is `<field>-<uuid>.<ext>` where the extension comes from
/// the client-supplied filename (sanitized; `bin` when absent), so uploads
/// never overwrite each other.
///
/// # Errors
///
/// Returns `UploadError` if the uploads directory cannot be created, the
/// file cannot be written, or the public URL cannot be composed.
pub async fn store_image(
    upload_dir: &Path,
    public_url: &Url,
    field: &str,
    original_name: Option<&str>,
    bytes: &[u8],
) -> Result<String, UploadError> {
    let extension = original_name
        .and_then(|name| name.rsplit('.').next())
        .filter(|ext| !ext.is_empty() && ext.chars().all(char::is_alphanumeric))
        .map_or_else(|| "bin".to_string(), str::to_lowercase);

    let filename = format!("{field}-{}.{extension}", uuid::Uuid::new_v4().simple());

    tokio::fs::create_dir_all(upload_dir).await?;
    tokio::fs::write(upload_dir.join(&filename), bytes).await?;

    let url = public_url.join(&format!("uploads/{filename}"))?;
    tracing::debug!(file = %filename, "Stored uploaded image");
    Ok(url.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_image_writes_file_and_builds_url() {
        let dir = std::env::temp_dir().join(format!("backline-uploads-{}", uuid::Uuid::new_v4()));
        let base = Url::parse("http://localhost:3000/").unwrap();

        let url = store_image(&dir, &base, "image_file", Some("cover.PNG"), b"fake-png")
            .await
            .unwrap();

        assert!(url.starts_with("http://localhost:3000/uploads/image_file-"));
        assert!(url.ends_with(".png"));

        let filename = url.rsplit('/').next().unwrap();
        let stored = tokio::fs::read(dir.join(filename)).await.unwrap();
        assert_eq!(stored, b"fake-png");

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_extension_falls_back_to_bin() {
        let dir = std::env::temp_dir().join(format!("backline-uploads-{}", uuid::Uuid::new_v4()));
        let base = Url::parse("http://localhost:3000/").unwrap();

        let url = store_image(&dir, &base, "banner_image_file", None, b"data")
            .await
            .unwrap();
        assert!(url.ends_with(".bin"));

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
