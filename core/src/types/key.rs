use nutype::nutype;

/// Normalized search token.
///
/// Keys are lowercased and trimmed on construction, so matching never has to
/// normalize per comparison. Construction fails on empty input.
#[nutype(
    sanitize(trim, lowercase),
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Borrow,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct SearchKey(String);

#[cfg(test)]
mod tests;
