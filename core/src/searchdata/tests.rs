use super::*;

const SHARD: &str = r"var searchData=
[
  ['call',['Call',['../classCall.html',1,'Call'],['../classCall.html#a7fdd4c',1,'Call::Call()']]],
  ['call_2ecpp',['Call.cpp',['../Call_8cpp.html',1,'']]],
  ['controlcall',['controlCall',['../classController.html#a6c4384',1,'Controller']]]
];
";

#[test]
fn parse_flattens_children() {
    let records = parse(SHARD).unwrap();
    assert_eq!(records.len(), 3);

    let (key, targets) = &records[0];
    assert_eq!(key, "call");
    assert_eq!(
        targets,
        &vec![
            ("Call".to_string(), "../classCall.html".to_string()),
            (
                "Call::Call()".to_string(),
                "../classCall.html#a7fdd4c".to_string()
            ),
        ]
    );
}

#[test]
fn parse_empty_detail_falls_back_to_display_name() {
    let records = parse(SHARD).unwrap();
    let (key, targets) = &records[1];
    assert_eq!(key, "call_2ecpp");
    assert_eq!(targets[0].0, "Call.cpp");
}

#[test]
fn parse_preserves_shard_order() {
    let records = parse(SHARD).unwrap();
    let keys: Vec<&str> = records.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["call", "call_2ecpp", "controlcall"]);
}

#[test]
fn parse_empty_array() {
    let records = parse("var searchData=[];").unwrap();
    assert!(records.is_empty());
}

#[test]
fn parse_escaped_quote_in_string() {
    let records = parse(r"var searchData=[['op',['operator\'\'',['../p.html',1,'']]]];").unwrap();
    let (_, targets) = &records[0];
    assert_eq!(targets[0].0, "operator''");
}

#[test]
fn parse_rejects_missing_prefix() {
    let err = parse("[['call',['Call']]];").unwrap_err();
    assert!(matches!(err, ParseError::MissingPrefix));
}

#[test]
fn parse_rejects_unterminated_string() {
    let err = parse("var searchData=[['call").unwrap_err();
    assert!(matches!(err, ParseError::UnterminatedString { .. }));
}

#[test]
fn parse_rejects_truncated_record() {
    let err = parse("var searchData=[['call',['Call',['../p.html',1,'x']]").unwrap_err();
    assert!(matches!(err, ParseError::Unexpected { .. }));
}
