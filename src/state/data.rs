/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the state layer and the screens.
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Advisory upload limit shown to the user (not enforced)
pub const ADVISORY_UPLOAD_LIMIT_MB: u64 = 10;

/// A file the user picked or dropped on the upload screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    /// Location of the file on disk
    pub path: PathBuf,
    /// MIME type guessed from the file name (e.g. "image/jpeg")
    pub mime: String,
    /// File size in bytes (0 if the metadata could not be read)
    pub size_bytes: u64,
}

impl UploadedImage {
    /// Build an upload from a path, guessing its MIME type the way a
    /// browser fills in `File.type` (by extension).
    pub fn from_path(path: PathBuf) -> Self {
        let mime = mime_guess::from_path(&path)
            .first_raw()
            .unwrap_or("application/octet-stream")
            .to_string();
        let size_bytes = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

        Self {
            path,
            mime,
            size_bytes,
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }

    /// True when the file is larger than the advertised upload limit.
    /// Only used for a hint in the UI.
    pub fn exceeds_advisory_limit(&self, limit_mb: u64) -> bool {
        self.size_bytes > limit_mb.saturating_mul(1024 * 1024)
    }

    /// Filename only (e.g., "portrait.jpg")
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }
}

/// One label of the processing animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStep {
    pub label: &'static str,
    pub complete: bool,
}

/// A hairstyle suggestion shown on the results screen
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HairstyleRecommendation {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    /// Match score in percent (0..=100), display only
    pub match_score: u8,
    pub tags: &'static [&'static str],
    pub image_url: &'static str,
}

/// A slide of the landing page carousel
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct TrendingStyle {
    pub id: u32,
    pub name: &'static str,
    pub category: &'static str,
    pub image_url: &'static str,
    pub rating: f32,
}

/// Face shape reported by the analysis
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceShape {
    Oval,
}

impl FaceShape {
    pub fn label(&self) -> &'static str {
        match self {
            FaceShape::Oval => "Oval",
        }
    }

    /// Styling note shown under the analysis summary
    pub fn advice(&self) -> &'static str {
        match self {
            FaceShape::Oval => "Oval faces are versatile and suit most hairstyle options!",
        }
    }
}

impl fmt::Display for FaceShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(name: &str, size_bytes: u64) -> UploadedImage {
        let mut image = UploadedImage::from_path(PathBuf::from(name));
        image.size_bytes = size_bytes;
        image
    }

    #[test]
    fn test_mime_is_guessed_from_extension() {
        assert_eq!(upload("bride.jpg", 0).mime, "image/jpeg");
        assert_eq!(upload("bride.PNG", 0).mime, "image/png");
        assert!(upload("bride.webp", 0).is_image());
        assert!(!upload("notes.txt", 0).is_image());
        assert_eq!(upload("no_extension", 0).mime, "application/octet-stream");
    }

    #[test]
    fn test_advisory_limit() {
        let limit = ADVISORY_UPLOAD_LIMIT_MB;
        assert!(!upload("a.jpg", 10 * 1024 * 1024).exceeds_advisory_limit(limit));
        assert!(upload("a.jpg", 10 * 1024 * 1024 + 1).exceeds_advisory_limit(limit));
    }

    #[test]
    fn test_huge_limit_does_not_overflow() {
        assert!(!upload("a.jpg", 1).exceeds_advisory_limit(u64::MAX));
        assert!(!upload("a.jpg", u64::MAX).exceeds_advisory_limit(u64::MAX));
        assert!(upload("a.jpg", 1).exceeds_advisory_limit(0));
    }

    #[test]
    fn test_file_name() {
        assert_eq!(upload("/tmp/photos/bride.jpg", 0).file_name(), "bride.jpg");
    }
}
