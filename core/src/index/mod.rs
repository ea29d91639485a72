//! The in-memory search index.
//!
//! An [`Index`] is built once from serialized records and is immutable for
//! the rest of its life: queries only ever traverse it. Insertion order is
//! preserved because it controls display order for colliding keys.

use crate::error::MalformedIndexError;
use crate::types::{DocTarget, Entry, SearchKey};

/// Pre-validation record shape: `(key, [(label, target), ...])`.
///
/// This is also the JSON interchange form; tuples serialize as arrays, so a
/// whole index is `[["call", [["Call", "classCall.html"]]], ...]`.
pub type RawRecord = (String, Vec<(String, String)>);

/// Ordered, immutable collection of entries.
#[derive(Debug, Clone, Default)]
pub struct Index {
    entries: Vec<Entry>,
}

impl Index {
    /// Validates raw records into an index.
    ///
    /// Fails atomically: the first malformed record aborts the whole load.
    /// Records that share a key are all retained, never merged. A record
    /// with no targets at all is treated as missing its target page.
    pub fn load(records: Vec<RawRecord>) -> Result<Self, MalformedIndexError> {
        let mut entries = Vec::new();

        for (record, (raw_key, targets)) in records.into_iter().enumerate() {
            let key = SearchKey::try_new(raw_key)
                .map_err(|_| MalformedIndexError::MissingKey { record })?;

            if targets.is_empty() {
                return Err(MalformedIndexError::MissingPage {
                    record,
                    key: key.to_string(),
                });
            }

            for (label, raw_target) in targets {
                let target = DocTarget::parse(&raw_target);
                if target.page.is_empty() {
                    return Err(MalformedIndexError::MissingPage {
                        record,
                        key: key.to_string(),
                    });
                }
                entries.push(Entry {
                    key: key.clone(),
                    label,
                    target,
                });
            }
        }

        tracing::debug!(entries = entries.len(), "index loaded");
        Ok(Self { entries })
    }

    /// Parses the JSON interchange form and loads it.
    pub fn from_json(src: &str) -> crate::Result<Self> {
        let records: Vec<RawRecord> =
            serde_json::from_str(src).map_err(crate::ParseError::Json)?;
        Ok(Self::load(records)?)
    }

    /// Parses a documentation-generator search shard and loads it.
    pub fn from_searchdata(src: &str) -> crate::Result<Self> {
        let records = crate::searchdata::parse(src)?;
        Ok(Self::load(records)?)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }
}
