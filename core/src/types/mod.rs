pub(crate) mod key;
pub use key::{SearchKey, SearchKeyError};

pub(crate) mod entry;
pub use entry::{DocTarget, Entry};
