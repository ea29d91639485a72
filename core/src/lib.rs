pub mod error;
pub mod index;
pub mod searchdata;
pub mod types;

pub use error::{Error, MalformedIndexError, ParseError, Result};
pub use index::{Index, RawRecord};
pub use types::{DocTarget, Entry, SearchKey, SearchKeyError};
