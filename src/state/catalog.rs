/// Hairstyle catalog and the analysis seam
///
/// The catalog is static: six recommendations for the results screen and
/// five trending styles for the landing carousel. `StyleAnalyzer` is the
/// boundary a real face-analysis service would sit behind; today only the
/// mock implementation exists and it ignores the photo entirely.
use serde::Serialize;
use std::sync::Arc;

use super::data::{FaceShape, HairstyleRecommendation, TrendingStyle};

static RECOMMENDATIONS: [HairstyleRecommendation; 6] = [
    HairstyleRecommendation {
        id: 1,
        name: "Elegant Low Bun",
        description: "A classic and sophisticated low bun that complements oval and heart-shaped faces beautifully. Perfect for formal ceremonies.",
        match_score: 98,
        tags: &["Classic", "Elegant", "Formal"],
        image_url: "https://images.unsplash.com/photo-1595476108010-b4d1f102b1b1?w=400&h=500&fit=crop",
    },
    HairstyleRecommendation {
        id: 2,
        name: "Romantic Side Swept",
        description: "Soft, flowing waves swept to one side create a romantic and glamorous look. Ideal for beach and garden weddings.",
        match_score: 95,
        tags: &["Romantic", "Flowing", "Beach"],
        image_url: "https://images.unsplash.com/photo-1522337360788-8b13dee7a37e?w=400&h=500&fit=crop",
    },
    HairstyleRecommendation {
        id: 3,
        name: "Braided Crown Updo",
        description: "An intricate braided crown that adds a whimsical, fairy-tale touch. Perfect for bohemian-style weddings.",
        match_score: 92,
        tags: &["Bohemian", "Braided", "Whimsical"],
        image_url: "https://images.unsplash.com/photo-1519699047748-de8e457a634e?w=400&h=500&fit=crop",
    },
    HairstyleRecommendation {
        id: 4,
        name: "Classic Chignon",
        description: "A timeless French chignon that exudes sophistication and grace. Works beautifully with veils and tiaras.",
        match_score: 89,
        tags: &["Timeless", "French", "Sophisticated"],
        image_url: "https://images.unsplash.com/photo-1492106087820-71f1a00d2b11?w=400&h=500&fit=crop",
    },
    HairstyleRecommendation {
        id: 5,
        name: "Loose Romantic Waves",
        description: "Effortlessly beautiful loose waves that frame the face perfectly. Great for a natural, relaxed bridal look.",
        match_score: 87,
        tags: &["Natural", "Relaxed", "Modern"],
        image_url: "https://images.unsplash.com/photo-1531746020798-e6953c6e8e04?w=400&h=500&fit=crop",
    },
    HairstyleRecommendation {
        id: 6,
        name: "Vintage Hollywood Waves",
        description: "Glamorous Old Hollywood waves that bring vintage elegance to your wedding day. Perfect for evening ceremonies.",
        match_score: 85,
        tags: &["Vintage", "Glamorous", "Hollywood"],
        image_url: "https://images.unsplash.com/photo-1502823403499-6ccfcf4fb453?w=400&h=500&fit=crop",
    },
];

static TRENDING: [TrendingStyle; 5] = [
    TrendingStyle {
        id: 1,
        name: "Elegant Low Bun",
        category: "Classic",
        image_url: "https://images.unsplash.com/photo-1595476108010-b4d1f102b1b1?w=800&h=600&fit=crop",
        rating: 4.9,
    },
    TrendingStyle {
        id: 2,
        name: "Romantic Side Swept",
        category: "Romantic",
        image_url: "https://images.unsplash.com/photo-1522337360788-8b13dee7a37e?w=800&h=600&fit=crop",
        rating: 4.9,
    },
    TrendingStyle {
        id: 3,
        name: "Braided Crown",
        category: "Bohemian",
        image_url: "https://images.unsplash.com/photo-1519699047748-de8e457a634e?w=800&h=600&fit=crop",
        rating: 4.9,
    },
    TrendingStyle {
        id: 4,
        name: "Classic Chignon",
        category: "Timeless",
        image_url: "https://images.unsplash.com/photo-1492106087820-71f1a00d2b11?w=800&h=600&fit=crop",
        rating: 4.9,
    },
    TrendingStyle {
        id: 5,
        name: "Loose Waves",
        category: "Natural",
        image_url: "https://images.unsplash.com/photo-1531746020798-e6953c6e8e04?w=800&h=600&fit=crop",
        rating: 4.9,
    },
];

/// The fixed list of recommendations
pub struct RecommendationCatalog;

impl RecommendationCatalog {
    /// Always the same six entries, in the same order
    pub fn list() -> &'static [HairstyleRecommendation] {
        &RECOMMENDATIONS
    }

    /// Slides for the landing page carousel
    pub fn trending() -> &'static [TrendingStyle] {
        &TRENDING
    }
}

/// Outcome of analyzing a photo
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Analysis {
    pub face_shape: FaceShape,
    pub recommendations: Vec<HairstyleRecommendation>,
}

impl Analysis {
    pub fn styles_found(&self) -> usize {
        self.recommendations.len()
    }

    pub fn best_match(&self) -> u8 {
        self.recommendations
            .iter()
            .map(|style| style.match_score)
            .max()
            .unwrap_or(0)
    }
}

/// Turns an uploaded photo into a face shape and ranked recommendations
pub trait StyleAnalyzer {
    /// `encoded_image` is the `data:` URL from the session slot, if any
    fn analyze(&self, encoded_image: Option<&str>) -> Analysis;
}

/// How screens hold the analyzer
pub type SharedAnalyzer = Arc<dyn StyleAnalyzer + Send + Sync>;

/// Reports an oval face and the static catalog, whatever the input
#[derive(Debug, Clone, Copy, Default)]
pub struct MockAnalyzer;

impl StyleAnalyzer for MockAnalyzer {
    fn analyze(&self, _encoded_image: Option<&str>) -> Analysis {
        Analysis {
            face_shape: FaceShape::Oval,
            recommendations: RecommendationCatalog::list().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_fixed() {
        let first = RecommendationCatalog::list();
        let second = RecommendationCatalog::list();

        assert_eq!(first, second);
        assert_eq!(first.len(), 6);
        assert_eq!(
            first.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6]
        );
        assert_eq!(first[0].name, "Elegant Low Bun");
        assert_eq!(first[5].name, "Vintage Hollywood Waves");
    }

    #[test]
    fn test_scores_in_range_and_descending() {
        let scores: Vec<u8> = RecommendationCatalog::list()
            .iter()
            .map(|s| s.match_score)
            .collect();

        assert!(scores.iter().all(|&score| score <= 100));
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(scores[0], 98);
    }

    #[test]
    fn test_every_style_has_tags() {
        for style in RecommendationCatalog::list() {
            assert_eq!(style.tags.len(), 3, "{} should carry three tags", style.name);
            assert!(style.image_url.starts_with("https://"));
        }
    }

    #[test]
    fn test_mock_analyzer_ignores_input() {
        let analyzer = MockAnalyzer;
        let without_photo = analyzer.analyze(None);
        let with_photo = analyzer.analyze(Some("data:image/jpeg;base64,/9j/4AAQ"));

        assert_eq!(without_photo, with_photo);
        assert_eq!(with_photo.face_shape, FaceShape::Oval);
        assert_eq!(with_photo.recommendations, RecommendationCatalog::list());
        assert_eq!(with_photo.styles_found(), 6);
        assert_eq!(with_photo.best_match(), 98);
    }

    #[test]
    fn test_trending_slides() {
        let slides = RecommendationCatalog::trending();
        assert_eq!(slides.len(), 5);
        assert_eq!(slides[2].name, "Braided Crown");
        assert_eq!(slides[2].category, "Bohemian");
    }
}
