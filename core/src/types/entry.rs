//! Index entry types.

use crate::types::SearchKey;
use serde::{Deserialize, Serialize};

/// Documentation anchor: a page plus an optional in-page fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocTarget {
    pub page: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<String>,
}

impl DocTarget {
    /// Splits a `page[#fragment]` reference.
    ///
    /// The documentation generator emits pages relative to its `search/`
    /// directory; a leading `../` is stripped. An empty fragment counts as no
    /// fragment. Emptiness of `page` is the caller's problem (checked during
    /// index load).
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix("../").unwrap_or(raw);
        match raw.split_once('#') {
            Some((page, anchor)) if !anchor.is_empty() => Self {
                page: page.to_string(),
                anchor: Some(anchor.to_string()),
            },
            Some((page, _)) => Self {
                page: page.to_string(),
                anchor: None,
            },
            None => Self {
                page: raw.to_string(),
                anchor: None,
            },
        }
    }

    /// Renders the clickable reference: `page` or `page#anchor`.
    pub fn href(&self) -> String {
        match &self.anchor {
            Some(anchor) => format!("{}#{}", self.page, anchor),
            None => self.page.clone(),
        }
    }
}

/// One indexed symbol or file record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub key: SearchKey,
    pub label: String,
    pub target: DocTarget,
}

#[cfg(test)]
mod tests;
