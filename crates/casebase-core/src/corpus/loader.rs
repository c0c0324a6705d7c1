//! CSV ingestion with per-field recovery
//!
//! Columns are matched by header name. A field that fails to parse is
//! replaced by its default and logged; invalid UTF-8 inside a field is
//! decoded lossily; a row the CSV reader cannot decode is skipped. Only a
//! missing required header stops the load.

use std::borrow::Cow;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use crate::error::{CasebaseError, Result};
use crate::item::{Item, Tag, TagSet};

const REQUIRED_COLUMNS: [&str; 2] = ["id", "original_title"];

/// Header positions for the columns the loader understands
#[derive(Debug)]
struct ColumnMap {
    id: usize,
    original_title: usize,
    title: Option<usize>,
    overview: Option<usize>,
    release_date: Option<usize>,
    popularity: Option<usize>,
    vote_average: Option<usize>,
    genres: Option<usize>,
    keywords: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord, source: &Path) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);

        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|c| find(c).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(CasebaseError::InvalidCorpus {
                path: source.to_path_buf(),
                reason: format!("missing required column(s): {}", missing.join(", ")),
            });
        }

        Ok(ColumnMap {
            id: find("id").unwrap_or_default(),
            original_title: find("original_title").unwrap_or_default(),
            title: find("title"),
            overview: find("overview"),
            release_date: find("release_date"),
            popularity: find("popularity"),
            vote_average: find("vote_average"),
            genres: find("genres"),
            keywords: find("keywords"),
        })
    }
}

/// One CSV row being turned into an item
struct Row<'a> {
    record: &'a ByteRecord,
    line: u64,
}

impl Row<'_> {
    fn field(&self, column: Option<usize>) -> Cow<'_, str> {
        match column.and_then(|idx| self.record.get(idx)) {
            Some(bytes) => String::from_utf8_lossy(bytes),
            None => Cow::Borrowed(""),
        }
    }

    fn id(&self, column: usize) -> u64 {
        let field = self.field(Some(column));
        let raw = field.trim();
        if raw.is_empty() {
            return 0;
        }
        if let Ok(id) = raw.parse::<u64>() {
            return id;
        }
        // Some exports write integral ids as floats ("19995.0")
        match raw.parse::<f64>() {
            Ok(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => {
                f as u64
            }
            _ => {
                warn!(line = self.line, value = raw, "invalid id, using 0");
                0
            }
        }
    }

    fn number(&self, column: Option<usize>, name: &str) -> f64 {
        let field = self.field(column);
        let raw = field.trim();
        if raw.is_empty() {
            return 0.0;
        }
        // "NaN" and "inf" parse as floats but are no more usable than text
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => {
                warn!(line = self.line, column = name, value = raw, "invalid number, using 0.0");
                0.0
            }
        }
    }

    fn tags(&self, column: Option<usize>, name: &str) -> TagSet {
        let field = self.field(column);
        let raw = field.trim();
        if raw.is_empty() {
            return TagSet::new();
        }
        match serde_json::from_str::<Vec<Tag>>(raw) {
            Ok(tags) => tags.into(),
            Err(e) => {
                warn!(line = self.line, column = name, error = %e, "invalid tag list, using empty set");
                TagSet::new()
            }
        }
    }

    fn text(&self, column: Option<usize>) -> String {
        self.field(column).into_owned()
    }

    fn into_item(self, columns: &ColumnMap) -> Item {
        let name = self.text(Some(columns.original_title));
        let title = match self.text(columns.title) {
            t if t.is_empty() => name.clone(),
            t => t,
        };

        Item {
            id: self.id(columns.id),
            title,
            overview: self.text(columns.overview),
            release_date: self.text(columns.release_date),
            popularity: self.number(columns.popularity, "popularity"),
            quality: self.number(columns.vote_average, "vote_average"),
            genres: self.tags(columns.genres, "genres"),
            keywords: self.tags(columns.keywords, "keywords"),
            name,
        }
    }
}

/// Read every recoverable row from a CSV source
pub(super) fn read_items<R: Read>(reader: R, source: &Path) -> Result<Vec<Item>> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| CasebaseError::InvalidCorpus {
            path: source.to_path_buf(),
            reason: format!("failed to read header row: {}", e),
        })?
        .clone();
    let columns = ColumnMap::from_headers(&headers, source)?;

    let mut items = Vec::new();
    let mut skipped = 0usize;

    for (index, result) in csv_reader.byte_records().enumerate() {
        match result {
            Ok(record) => {
                let line = record
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(index as u64 + 2);
                items.push(
                    Row {
                        record: &record,
                        line,
                    }
                    .into_item(&columns),
                );
            }
            Err(e) => {
                skipped += 1;
                warn!(row = index + 1, error = %e, "skipping unreadable row");
            }
        }
    }

    debug!(
        source = %source.display(),
        items = items.len(),
        skipped,
        "read_corpus"
    );

    Ok(items)
}
