//! Casebase Core Library
//!
//! Case-based recommendation: per-attribute similarity metrics, a weighted
//! ranking engine, and the corpus loading and projection around them.

pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod format;
pub mod item;
pub mod logging;
pub mod similarity;
pub mod view;

pub use config::{EngineConfig, NormalizationConfig, WeightConfig};
pub use corpus::Corpus;
pub use engine::{RecommendationEngine, SimilarityBreakdown};
pub use error::{CasebaseError, Result};
pub use item::{Item, Tag, TagSet};
pub use view::{ItemView, ScoredItem};
