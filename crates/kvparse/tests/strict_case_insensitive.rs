use kvparse::{CaseSensitivity, ErrorKind, Parser};

fn accepts(allowed: &[&str], input: &str, key: &str, value: &str) {
    let parser = Parser::strict(allowed.iter().copied(), false);
    let parsed = parser.parse(input).unwrap_or_else(|e| panic!("{input:?}: {e}"));
    assert_eq!(parsed.get(key), Some(value), "input {input:?}");
    assert_eq!(parsed.len(), 1);
}

#[test]
fn input_casing_is_preserved() {
    accepts(&["name"], "NAME=jayanth", "NAME", "jayanth");
    accepts(&["NAME"], "name=jayanth", "name", "jayanth");
    accepts(&["NAME", "name"], "nAmE=jayanth", "nAmE", "jayanth");

    let parsed = Parser::strict(["name"], false).parse("NAME=x").unwrap();
    assert_eq!(parsed.get("name"), None);
}

#[test]
fn underscores_and_digits() {
    accepts(&["_NAME"], "_nAmE=jayanth", "_nAmE", "jayanth");
    accepts(&["_name"], "_NaMe=jayanth", "_NaMe", "jayanth");
    accepts(&["_nAmE"], "_nAmE=jayanth", "_nAmE", "jayanth");
    accepts(&["name123"], "nAmE123=jayanth", "nAmE123", "jayanth");
    accepts(&["NAME123"], "NaMe123=jayanth", "NaMe123", "jayanth");
    accepts(&["NaMe123"], "name123=jayanth", "name123", "jayanth");
    accepts(&["NAME_123"], "naMe_123=jayanth", "naMe_123", "jayanth");
}

#[test]
fn multiple_keys() {
    for allowed in [["name_123", "age_123"], ["NaMe_123", "age_123"]] {
        let parser = Parser::strict(allowed, false);
        let parsed = parser.parse("naMe_123=jayanth AGe_123=31").unwrap();
        assert_eq!(parsed.iter().collect::<Vec<_>>(), [("naMe_123", "jayanth"), ("AGe_123", "31")]);
    }
}

#[test]
fn still_rejects_unlisted_keys() {
    let parser = Parser::strict(["name"], false);
    let err = parser.parse("NAME=x Age=3").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidKey);
    assert_eq!(err.key(), Some("Age"));
    assert_eq!(err.offset(), 11);
    assert_eq!(parser.policy().case_sensitivity(), CaseSensitivity::Insensitive);
}

#[test]
fn case_sensitive_parser_rejects_the_same_input() {
    let parser = Parser::strict(["name"], true);
    let err = parser.parse("NAME=jayanth").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidKey);
    assert_eq!(err.key(), Some("NAME"));
}
