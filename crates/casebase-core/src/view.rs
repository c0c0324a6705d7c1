//! Serialisable projections of items
//!
//! These are built fresh for every response and never written back to the
//! corpus. Field names are the wire names consumers see in JSON output.

use serde::{Deserialize, Serialize};

use crate::item::{Item, TagSet};

/// A recommended item with its global similarity to the query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem {
    pub id: u64,
    pub original_title: String,
    pub overview: String,
    pub release_date: String,
    pub popularity: f64,
    pub vote_average: f64,
    pub global_similarity: f64,
    pub genres: TagSet,
    pub keywords: TagSet,
}

impl ScoredItem {
    pub fn from_item(item: &Item, global_similarity: f64) -> Self {
        ScoredItem {
            id: item.id,
            original_title: item.name.clone(),
            overview: item.overview.clone(),
            release_date: item.release_date.clone(),
            popularity: item.popularity,
            vote_average: item.quality,
            global_similarity,
            genres: item.genres.clone(),
            keywords: item.keywords.clone(),
        }
    }
}

/// Listing view of a corpus item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemView {
    pub id: u64,
    pub title: String,
    pub original_title: String,
    pub overview: String,
    pub release_date: String,
    pub popularity: f64,
    pub vote_average: f64,
    pub genres: TagSet,
    pub keywords: TagSet,
}

impl From<&Item> for ItemView {
    fn from(item: &Item) -> Self {
        ItemView {
            id: item.id,
            title: item.title.clone(),
            original_title: item.name.clone(),
            overview: item.overview.clone(),
            release_date: item.release_date.clone(),
            popularity: item.popularity,
            vote_average: item.quality,
            genres: item.genres.clone(),
            keywords: item.keywords.clone(),
        }
    }
}
