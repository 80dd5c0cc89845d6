/// Background decoding of a picked photo
///
/// Reads the file, checks that it really decodes as an image and
/// produces the `data:` URL stored in the session slot on submit.
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use super::data_url;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("failed to read {}: {reason}", path.display())]
    Read { path: PathBuf, reason: String },
    #[error("{} is not a readable image: {reason}", path.display())]
    Image { path: PathBuf, reason: String },
    #[error("decode task failed: {0}")]
    Join(String),
}

/// A photo ready to be previewed and submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// Selection this preview belongs to
    pub generation: u64,
    /// Raw file contents, shared with the image widget
    pub bytes: Arc<Vec<u8>>,
    /// Encoded form written to the session slot on submit
    pub data_url: String,
    pub width: u32,
    pub height: u32,
}

/// Decode a photo without blocking the UI thread
pub async fn load_preview(
    path: PathBuf,
    mime: String,
    generation: u64,
) -> Result<Preview, DecodeError> {
    // Spawn blocking because image decoding is CPU-intensive
    tokio::task::spawn_blocking(move || load_preview_blocking(&path, &mime, generation))
        .await
        .map_err(|e| DecodeError::Join(e.to_string()))?
}

fn load_preview_blocking(path: &Path, mime: &str, generation: u64) -> Result<Preview, DecodeError> {
    let bytes = std::fs::read(path).map_err(|e| DecodeError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let img = image::load_from_memory(&bytes).map_err(|e| DecodeError::Image {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "decoded photo"
    );

    Ok(Preview {
        generation,
        data_url: data_url::encode(mime, &bytes),
        width: img.width(),
        height: img.height(),
        bytes: Arc::new(bytes),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("bridal-style-decode-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[tokio::test]
    async fn test_decodes_png() {
        let path = fixture("portrait.png");
        image::RgbImage::from_pixel(6, 4, image::Rgb([200, 120, 140]))
            .save(&path)
            .unwrap();

        let preview = load_preview(path, "image/png".to_string(), 7).await.unwrap();

        assert_eq!(preview.generation, 7);
        assert_eq!((preview.width, preview.height), (6, 4));
        assert!(preview.data_url.starts_with("data:image/png;base64,"));
        let parsed = data_url::parse(&preview.data_url).unwrap();
        assert_eq!(parsed.bytes, *preview.bytes);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let result = load_preview(
            PathBuf::from("/nonexistent/portrait.jpg"),
            "image/jpeg".to_string(),
            1,
        )
        .await;
        assert!(matches!(result, Err(DecodeError::Read { .. })));
    }

    #[tokio::test]
    async fn test_corrupt_image() {
        let path = fixture("corrupt.jpg");
        std::fs::write(&path, b"definitely not a jpeg").unwrap();

        let result = load_preview(path, "image/jpeg".to_string(), 1).await;
        assert!(matches!(result, Err(DecodeError::Image { .. })));
    }
}
