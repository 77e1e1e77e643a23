use geoff::{parse, RuleSet, Token, TokenKind};

#[test]
fn node_rule() {
    let rules = parse(r#"(A) {"name": "Alice"}"#).unwrap();
    assert_eq!(rules.len(), 1);

    let rule = &rules[0];
    assert_eq!(rule.descriptor().pattern(), "N");

    let node = rule.descriptor().token(0).unwrap().as_node().unwrap();
    assert_eq!(node.name(), Some("A"));

    let data = rule.data().unwrap();
    assert_eq!(data["name"], "Alice");
}

#[test]
fn relationship_rule() {
    let rules = parse(r#"[:KNOWS] {"since": 1977}"#).unwrap();
    let rule = &rules[0];
    assert_eq!(rule.descriptor().pattern(), "R");

    let rel = rule.descriptor().token(0).unwrap().as_relationship().unwrap();
    assert_eq!(rel.name(), None);
    assert_eq!(rel.ty(), Some("KNOWS"));
    assert_eq!(rule.data().unwrap()["since"], 1977);
}

#[test]
fn path_rule() {
    let rules = parse(r#"(A)-[:KNOWS]->(B) {"since": 1977}"#).unwrap();
    let rule = &rules[0];
    assert_eq!(rule.descriptor().pattern(), "N-R->N");

    // entities sit at positions 0, 2 and 5, with connectors between them
    let start = rule.descriptor().token(0).unwrap().as_node().unwrap();
    assert_eq!(start.name(), Some("A"));

    let rel = rule.descriptor().token(2).unwrap().as_relationship().unwrap();
    assert_eq!(rel.name(), None);
    assert_eq!(rel.ty(), Some("KNOWS"));

    let end = rule.descriptor().token(5).unwrap().as_node().unwrap();
    assert_eq!(end.name(), Some("B"));

    assert_eq!(rule.data().unwrap()["since"], 1977);
}

#[test]
fn node_index_entry_rule() {
    let rules = parse(r#"(A)<=|People| {"name": "Alice"}"#).unwrap();
    let rule = &rules[0];
    assert_eq!(rule.descriptor().pattern(), "N^I");

    let node = rule.descriptor().token(0).unwrap().as_node().unwrap();
    assert_eq!(node.name(), Some("A"));

    let index = rule.descriptor().token(2).unwrap().as_index().unwrap();
    assert_eq!(index.name(), "People");
}

#[test]
fn relationship_index_entry_rule() {
    let rules = parse(r#"[R]<=|People| {"name": "Alice"}"#).unwrap();
    let rule = &rules[0];
    assert_eq!(rule.descriptor().pattern(), "R^I");

    let rel = rule.descriptor().token(0).unwrap().as_relationship().unwrap();
    assert_eq!(rel.name(), Some("R"));
    assert_eq!(rel.ty(), None);

    let index = rule.descriptor().token(2).unwrap().as_index().unwrap();
    assert_eq!(index.name(), "People");
}

#[test]
fn multiple_rules_with_and_without_payloads() {
    let source = concat!(
        r#"(A) {"name": "Alice"} (B) {"name": "Bob"} "#,
        r#"(A)-[:KNOWS]->(B) {"odd_value": "{#!:\"}"} "#,
        "(C) (D) (C)-[:LIKES]->(D)",
    );
    let rules = parse(source).unwrap();
    assert_eq!(rules.len(), 6);

    assert_eq!(rules[0].descriptor().to_string(), "(A)");
    assert_eq!(rules[0].data().unwrap()["name"], "Alice");
    assert_eq!(rules[1].descriptor().to_string(), "(B)");
    assert_eq!(rules[1].data().unwrap()["name"], "Bob");

    // braces and colons inside a quoted value round-trip exactly
    assert_eq!(rules[2].descriptor().to_string(), "(A)-[:KNOWS]->(B)");
    assert_eq!(rules[2].data().unwrap()["odd_value"], "{#!:\"}");

    assert_eq!(rules[3].descriptor().to_string(), "(C)");
    assert!(rules[3].data().is_none());
    assert_eq!(rules[4].descriptor().to_string(), "(D)");
    assert!(rules[4].data().is_none());
    assert_eq!(rules[5].descriptor().to_string(), "(C)-[:LIKES]->(D)");
    assert!(rules[5].data().is_none());
}

#[test]
fn absent_data_is_not_an_empty_map() {
    let rules = parse("(A) (B) {}").unwrap();
    assert!(rules[0].data().is_none());

    let empty = rules[1].data().unwrap();
    assert!(empty.is_empty());
}

#[test]
fn unnamed_and_bare_entities() {
    let rules = parse("() []").unwrap();
    assert_eq!(rules.len(), 2);

    assert_eq!(rules[0].descriptor().pattern(), "N");
    assert_eq!(rules[0].descriptor().token(0).unwrap().as_node().unwrap().name(), None);

    assert_eq!(rules[1].descriptor().pattern(), "R");
    let rel = rules[1].descriptor().token(0).unwrap().as_relationship().unwrap();
    assert_eq!(rel.name(), None);
    assert_eq!(rel.ty(), None);
}

#[test]
fn named_and_typed_relationship() {
    let rules = parse("[R:KNOWS]").unwrap();
    let rel = rules[0].descriptor().token(0).unwrap().as_relationship().unwrap();
    assert_eq!(rel.name(), Some("R"));
    assert_eq!(rel.ty(), Some("KNOWS"));
}

#[test]
fn canonical_rendering_normalizes_whitespace() {
    let rules = parse("( A ) - [ :KNOWS ] -> ( B )").unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].descriptor().to_string(), "(A)-[:KNOWS]->(B)");
}

#[test]
fn token_kinds_are_exposed() {
    let rules = parse("(A)<=|People|").unwrap();
    let kinds: Vec<TokenKind> = rules[0]
        .descriptor()
        .tokens()
        .iter()
        .map(Token::kind)
        .collect();
    assert_eq!(kinds, [TokenKind::Node, TokenKind::Connector, TokenKind::Index]);
}

#[test]
fn empty_input_is_an_empty_rule_set() {
    let rules = parse("").unwrap();
    assert!(rules.is_empty());

    let rules = parse("  \n\t ").unwrap();
    assert!(rules.is_empty());
}

#[test]
fn from_file_reads_statement_text() {
    let rules = RuleSet::from_file("tests/data/doctor_who.geoff").unwrap();
    assert_eq!(rules.len(), 4);
    assert_eq!(rules[2].descriptor().pattern(), "N-R->N");
    assert_eq!(rules[3].descriptor().pattern(), "N^I");
    assert_eq!(rules[0].data().unwrap()["name"], "The Doctor");
}
