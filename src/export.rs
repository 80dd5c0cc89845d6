/// Sharing and saving analysis results
///
/// Share copies `summary()` to the clipboard; Save writes the report as
/// pretty-printed JSON to a file the user picked.
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

use crate::state::catalog::Analysis;
use crate::state::data::{FaceShape, HairstyleRecommendation};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("failed to serialize report: {0}")]
    Serialize(String),
    #[error("failed to write {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },
}

/// What gets exported
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    /// RFC 3339 timestamp of when the report was created
    pub generated_at: String,
    pub face_shape: FaceShape,
    pub styles_found: usize,
    pub best_match: u8,
    /// Whether the analysis had a photo to look at
    pub photo_uploaded: bool,
    pub recommendations: Vec<HairstyleRecommendation>,
}

impl AnalysisReport {
    pub fn new(analysis: &Analysis, photo_uploaded: bool) -> Self {
        Self {
            generated_at: chrono::Local::now().to_rfc3339(),
            face_shape: analysis.face_shape,
            styles_found: analysis.styles_found(),
            best_match: analysis.best_match(),
            photo_uploaded,
            recommendations: analysis.recommendations.clone(),
        }
    }

    /// Plain-text version for the clipboard
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "My bridal hairstyle matches from BridalAI".to_string(),
            format!("Face shape: {}", self.face_shape),
            String::new(),
        ];
        lines.extend(self.recommendations.iter().enumerate().map(|(rank, style)| {
            format!("{}. {} ({}% match)", rank + 1, style.name, style.match_score)
        }));
        lines.join("\n")
    }

    /// Suggested file name for the save dialog
    pub fn file_name(&self) -> String {
        format!("bridal-style-{}.json", chrono::Local::now().format("%Y%m%d-%H%M%S"))
    }
}

/// Write the report as JSON, returning the path on success
pub async fn save_report(path: PathBuf, report: AnalysisReport) -> Result<PathBuf, ExportError> {
    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| ExportError::Serialize(e.to_string()))?;

    tokio::fs::write(&path, json)
        .await
        .map_err(|e| ExportError::Write {
            path: path.clone(),
            reason: e.to_string(),
        })?;

    info!(path = %path.display(), "💾 Results saved");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::{MockAnalyzer, StyleAnalyzer};

    fn report() -> AnalysisReport {
        AnalysisReport::new(&MockAnalyzer.analyze(None), false)
    }

    #[test]
    fn test_summary_lists_every_style() {
        let summary = report().summary();

        assert!(summary.contains("Face shape: Oval"));
        assert!(summary.contains("1. Elegant Low Bun (98% match)"));
        assert!(summary.contains("6. Vintage Hollywood Waves (85% match)"));
    }

    #[test]
    fn test_report_header_fields() {
        let report = report();
        assert_eq!(report.styles_found, 6);
        assert_eq!(report.best_match, 98);
        assert!(chrono::DateTime::parse_from_rfc3339(&report.generated_at).is_ok());
        assert!(report.file_name().starts_with("bridal-style-"));
    }

    #[tokio::test]
    async fn test_save_writes_json() {
        let dir = std::env::temp_dir().join(format!("bridal-style-export-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("results.json");

        let saved = save_report(path.clone(), report()).await.unwrap();
        assert_eq!(saved, path);

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["face_shape"], "Oval");
        assert_eq!(json["recommendations"].as_array().map(Vec::len), Some(6));
        assert_eq!(json["recommendations"][0]["match_score"], 98);
    }

    #[tokio::test]
    async fn test_save_into_missing_directory_fails() {
        let path = PathBuf::from("/nonexistent/dir/results.json");
        let result = save_report(path, report()).await;
        assert!(matches!(result, Err(ExportError::Write { .. })));
    }
}
