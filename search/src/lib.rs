//! Documentation symbol search.
//!
//! Answers substring queries against an immutable [`symdex_core::Index`].
//!
//! # Design
//!
//! - The engine owns the index; results borrow from the engine.
//! - Matching is case-insensitive substring over lowercase-normalized keys,
//!   so the query text is lowercased once per query.
//! - Prefix matches rank ahead of substring-only matches; ties keep the
//!   index's insertion order.
//! - Results are lazy and restartable: [`SearchEngine::query`] hands out a
//!   fresh iterator every time, and queries never mutate the index, so
//!   repeated queries are deterministic.

mod config;
mod engine;
mod query;
mod results;

pub use config::SearchConfig;
pub use engine::SearchEngine;
pub use query::SearchQuery;
pub use results::Hits;
