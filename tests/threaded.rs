use std::thread;

use geoff::parse;

#[test]
fn parses_are_independent_across_threads() {
    let mut handles = vec![];

    // Each thread parses its own input; no state is shared between parses.
    handles.push(thread::spawn(|| {
        parse(r#"(A) {"name": "Alice"} (B) {"name": "Bob"}"#).map(|rules| rules.len())
    }));

    handles.push(thread::spawn(|| {
        parse("(C) (D) (C)-[:LIKES]->(D)").map(|rules| rules.len())
    }));

    handles.push(thread::spawn(|| {
        parse(r#"(doc)<=|People| {"name": "The Doctor"}"#).map(|rules| rules.len())
    }));

    handles.push(thread::spawn(|| {
        // a failing parse on one thread must not disturb the others
        parse("(A)->(B)").map(|rules| rules.len())
    }));

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[0].as_ref().unwrap(), &2);
    assert_eq!(results[1].as_ref().unwrap(), &3);
    assert_eq!(results[2].as_ref().unwrap(), &1);
    assert!(results[3].is_err());
}

#[test]
fn one_input_parsed_concurrently_yields_identical_rule_sets() {
    static SOURCE: &str = r#"
        (A) {"name": "Alice"}
        (B) {"name": "Bob"}
        (A)-[:KNOWS]->(B) {"since": 1977}
        (A)<=|People|
    "#;

    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| parse(SOURCE).unwrap()))
        .collect();

    let mut rule_sets = handles.into_iter().map(|h| h.join().unwrap());
    let first = rule_sets.next().unwrap();
    for other in rule_sets {
        assert_eq!(first, other);
    }
}
