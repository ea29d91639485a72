use super::*;

#[test]
fn parse_page_only() {
    let target = DocTarget::parse("classCall.html");
    assert_eq!(target.page, "classCall.html");
    assert_eq!(target.anchor, None);
}

#[test]
fn parse_page_with_anchor() {
    let target = DocTarget::parse("classController.html#a6c4384");
    assert_eq!(target.page, "classController.html");
    assert_eq!(target.anchor.as_deref(), Some("a6c4384"));
}

#[test]
fn parse_strips_relative_prefix() {
    let target = DocTarget::parse("../classCall.html#a7fdd");
    assert_eq!(target.page, "classCall.html");
    assert_eq!(target.anchor.as_deref(), Some("a7fdd"));
}

#[test]
fn parse_empty_fragment_is_no_anchor() {
    let target = DocTarget::parse("classCall.html#");
    assert_eq!(target.page, "classCall.html");
    assert_eq!(target.anchor, None);
}

#[test]
fn href_round_trips() {
    assert_eq!(DocTarget::parse("p.html").href(), "p.html");
    assert_eq!(DocTarget::parse("p.html#frag").href(), "p.html#frag");
}

#[test]
fn entry_serializes_without_empty_anchor() {
    let entry = Entry {
        key: SearchKey::try_from("call").unwrap(),
        label: "Call".to_string(),
        target: DocTarget::parse("classCall.html"),
    };
    let json = serde_json::to_string(&entry).unwrap();
    assert!(!json.contains("anchor"));

    let back: Entry = serde_json::from_str(&json).unwrap();
    assert_eq!(back, entry);
}
