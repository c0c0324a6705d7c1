//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Highest popularity observed in the reference movie dataset
pub const DEFAULT_POPULARITY_MAX: f64 = 875.5;

/// Upper bound of the vote average scale
pub const DEFAULT_QUALITY_MAX: f64 = 10.0;

/// Number of recommendations returned when no limit is given
pub const DEFAULT_LIMIT: usize = 5;

/// Engine configuration, as read from `casebase.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Per-attribute weights for the global score
    pub weights: WeightConfig,

    /// Normalization constants for numeric attributes
    pub normalization: NormalizationConfig,

    /// Ranking defaults
    pub recommend: RecommendConfig,

    /// Corpus location
    pub corpus: CorpusConfig,
}

/// Weights applied to each attribute similarity.
///
/// The weights are not required to sum to 1. The global score is a plain
/// weighted sum, so with a total weight above 1 scores can exceed 1.0 and
/// must not be read as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightConfig {
    pub genres: f64,
    pub popularity: f64,
    pub quality: f64,
    pub name: f64,
    pub keywords: f64,
}

/// Scale constants used to turn absolute differences into similarities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationConfig {
    /// Largest popularity value expected in the corpus
    pub popularity_max: f64,

    /// Upper bound of the quality scale
    pub quality_max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    /// Results returned when the caller gives no limit
    pub default_limit: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Corpus CSV path, relative to the working directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl WeightConfig {
    pub fn new(genres: f64, popularity: f64, quality: f64, name: f64, keywords: f64) -> Self {
        WeightConfig {
            genres,
            popularity,
            quality,
            name,
            keywords,
        }
    }

    /// Sum of all five weights; the score of an item against itself when
    /// both of its tag sets are non-empty
    pub fn total(&self) -> f64 {
        self.genres + self.popularity + self.quality + self.name + self.keywords
    }

    /// Weights paired with their attribute names, in scoring order
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("genres", self.genres),
            ("popularity", self.popularity),
            ("quality", self.quality),
            ("name", self.name),
            ("keywords", self.keywords),
        ]
    }
}

impl Default for WeightConfig {
    fn default() -> Self {
        WeightConfig {
            genres: 0.35,
            popularity: 0.10,
            quality: 0.15,
            name: 0.10,
            keywords: 0.30,
        }
    }
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        NormalizationConfig {
            popularity_max: DEFAULT_POPULARITY_MAX,
            quality_max: DEFAULT_QUALITY_MAX,
        }
    }
}

impl Default for RecommendConfig {
    fn default() -> Self {
        RecommendConfig {
            default_limit: DEFAULT_LIMIT,
        }
    }
}
