//! Item records that make up a corpus

use serde::{Deserialize, Serialize};

/// Categorical label attached to an item (a genre or a keyword)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub id: u32,
    pub name: String,
}

impl Tag {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Tag {
            id,
            name: name.into(),
        }
    }
}

/// Unordered collection of tags.
///
/// Duplicates are dropped on construction; insertion order is kept so the
/// set renders the same way it was read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Tag>", into = "Vec<Tag>")]
pub struct TagSet {
    tags: Vec<Tag>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.tags.iter()
    }

    /// Number of tags present in both sets
    pub fn intersection_count(&self, other: &TagSet) -> usize {
        self.tags.iter().filter(|t| other.contains(t)).count()
    }

    /// Tag names joined by `sep`, for display
    pub fn names(&self, sep: &str) -> String {
        self.tags
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(sep)
    }
}

impl From<Vec<Tag>> for TagSet {
    fn from(tags: Vec<Tag>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<TagSet> for Vec<Tag> {
    fn from(set: TagSet) -> Self {
        set.tags
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        let mut tags: Vec<Tag> = Vec::new();
        for tag in iter {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        TagSet { tags }
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

/// A single case in the corpus
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Item {
    /// Identifier, assumed unique within a corpus
    pub id: u64,
    /// Primary name (original title); scored and used for lookups
    pub name: String,
    /// Display title
    pub title: String,
    pub overview: String,
    /// Opaque display string, never parsed
    pub release_date: String,
    pub popularity: f64,
    /// Vote average on a 0-10 scale
    pub quality: f64,
    pub genres: TagSet,
    pub keywords: TagSet,
}

impl Item {
    /// Create an item with only an id and primary name set
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        let name = name.into();
        Item {
            id,
            title: name.clone(),
            name,
            ..Default::default()
        }
    }

    pub fn with_popularity(mut self, popularity: f64) -> Self {
        self.popularity = popularity;
        self
    }

    pub fn with_quality(mut self, quality: f64) -> Self {
        self.quality = quality;
        self
    }

    pub fn with_genres(mut self, genres: impl Into<TagSet>) -> Self {
        self.genres = genres.into();
        self
    }

    pub fn with_keywords(mut self, keywords: impl Into<TagSet>) -> Self {
        self.keywords = keywords.into();
        self
    }

    pub fn with_release_date(mut self, release_date: impl Into<String>) -> Self {
        self.release_date = release_date.into();
        self
    }

    /// Case-insensitive comparison against the primary name
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
