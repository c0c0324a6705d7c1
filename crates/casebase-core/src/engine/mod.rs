//! Recommendation engine
//!
//! Combines the per-attribute metrics into one global score and ranks a
//! corpus against a query item. The engine only holds its configuration,
//! so one instance can be shared across threads and calls.

use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::config::{EngineConfig, NormalizationConfig, WeightConfig};
use crate::error::Result;
use crate::item::Item;
use crate::similarity;
use crate::trace_time;
use crate::view::ScoredItem;

/// Per-attribute similarities between two items and their weighted total
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityBreakdown {
    pub genres: f64,
    pub popularity: f64,
    pub quality: f64,
    pub name: f64,
    pub keywords: f64,
    /// Weighted sum of the five similarities
    pub total: f64,
}

/// Weighted multi-attribute similarity ranking
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    weights: WeightConfig,
    normalization: NormalizationConfig,
}

impl RecommendationEngine {
    /// Build an engine, rejecting negative or non-finite weights and
    /// unusable normalization constants.
    pub fn new(weights: WeightConfig, normalization: NormalizationConfig) -> Result<Self> {
        weights.validate()?;
        normalization.validate()?;
        Ok(RecommendationEngine {
            weights,
            normalization,
        })
    }

    /// Build an engine with default normalization constants
    pub fn with_weights(weights: WeightConfig) -> Result<Self> {
        Self::new(weights, NormalizationConfig::default())
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        Self::new(config.weights, config.normalization)
    }

    pub fn weights(&self) -> &WeightConfig {
        &self.weights
    }

    pub fn normalization(&self) -> &NormalizationConfig {
        &self.normalization
    }

    /// Compute every attribute similarity and the weighted total
    pub fn score_breakdown(&self, query: &Item, candidate: &Item) -> SimilarityBreakdown {
        let genres = similarity::set_similarity(&query.genres, &candidate.genres);
        let popularity = similarity::popularity_similarity(
            query.popularity,
            candidate.popularity,
            self.normalization.popularity_max,
        );
        let quality = similarity::quality_similarity(
            query.quality,
            candidate.quality,
            self.normalization.quality_max,
        );
        let name = similarity::name_similarity(&query.name, &candidate.name);
        let keywords = similarity::set_similarity(&query.keywords, &candidate.keywords);

        let w = &self.weights;
        let total = w.genres * genres
            + w.popularity * popularity
            + w.quality * quality
            + w.name * name
            + w.keywords * keywords;

        SimilarityBreakdown {
            genres,
            popularity,
            quality,
            name,
            keywords,
            total,
        }
    }

    /// Global similarity between two items
    pub fn score(&self, query: &Item, candidate: &Item) -> f64 {
        self.score_breakdown(query, candidate).total
    }

    /// Rank `corpus` against `query` and return the `limit` best matches.
    ///
    /// Every item sharing the query's id is skipped, including duplicates
    /// of the query itself. Ties keep their corpus order. If fewer than
    /// `limit` candidates remain they are all returned.
    pub fn recommend(&self, query: &Item, corpus: &[Item], limit: usize) -> Vec<ScoredItem> {
        let start = Instant::now();

        let mut scored: Vec<ScoredItem> = corpus
            .iter()
            .filter(|candidate| candidate.id != query.id)
            .map(|candidate| ScoredItem::from_item(candidate, self.score(query, candidate)))
            .collect();

        trace_time!(start, "score_corpus", candidates = scored.len());

        // sort_by is stable, which keeps corpus order among equal scores
        scored.sort_by(|a, b| b.global_similarity.total_cmp(&a.global_similarity));
        scored.truncate(limit);

        debug!(
            query_id = query.id,
            corpus_size = corpus.len(),
            returned = scored.len(),
            elapsed = ?start.elapsed(),
            "recommend"
        );

        scored
    }
}
