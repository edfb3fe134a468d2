//! Lexer tests over realistic console input.

use rstest::rstest;
use shellhint::TextSize;
use shellhint::parser::{SyntaxKind, tokenize};

#[rstest]
#[case("db.getCollection('users').find({age: {$gt: 21}})")]
#[case("var x = db.stats(); // trailing comment")]
#[case("/* unfinished")]
#[case("print(\"unfinished")]
#[case("db.x\\y")]
#[case("a[0] >= 1.5e3 && !b")]
fn test_tokens_cover_input(#[case] input: &str) {
    let tokens = tokenize(input);
    let rebuilt: String = tokens.iter().map(|t| t.text).collect();
    assert_eq!(rebuilt, input);

    let mut expected = TextSize::new(0);
    for token in &tokens {
        assert_eq!(token.offset, expected, "Gap before {:?}", token);
        expected += TextSize::of(token.text);
    }
}

#[test]
fn test_unknown_characters_are_errors() {
    let tokens = tokenize(r"db\x");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![SyntaxKind::IDENT, SyntaxKind::ERROR, SyntaxKind::IDENT]
    );
}

#[test]
fn test_escaped_quote_does_not_terminate() {
    let tokens = tokenize(r"'it\'s");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, SyntaxKind::UNTERMINATED_STRING);
}

#[test]
fn test_template_literal_spans_lines() {
    let tokens = tokenize("`line one\nline two`.length");
    assert_eq!(tokens[0].kind, SyntaxKind::STRING);
    assert_eq!(tokens[1].kind, SyntaxKind::DOT);
    assert_eq!(tokens[2].text, "length");
}
