use super::*;

#[test]
fn key_normal_usage() {
    let key = SearchKey::try_from("controller").unwrap();
    assert_eq!(key.as_str(), "controller");
}

#[test]
fn key_lowercases_on_construction() {
    let key = SearchKey::try_from("controlCall").unwrap();
    assert_eq!(key.as_str(), "controlcall");
}

#[test]
fn key_trims_on_construction() {
    let key = SearchKey::try_from("  call ").unwrap();
    assert_eq!(key.as_str(), "call");
}

#[test]
fn key_rejects_empty_string() {
    let result = SearchKey::try_from("");
    result.unwrap_err();
}

#[test]
fn key_rejects_whitespace_string() {
    let result = SearchKey::try_from("   ");
    result.unwrap_err();
}
