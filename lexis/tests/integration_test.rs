//! End-to-end scans with realistic grammars.

use lexis::{Grammar, Lexer, LexerOptions, Pattern, Position, Token};
use std::thread;

fn json_lexer() -> Lexer {
    Lexer::new(
        Grammar::new()
            .literal("LBRACE", "{")
            .literal("RBRACE", "}")
            .literal("LBRACKET", "[")
            .literal("RBRACKET", "]")
            .literal("COLON", ":")
            .literal("COMMA", ",")
            .literal("TRUE", "true")
            .literal("FALSE", "false")
            .literal("NULL", "null")
            .pattern("STRING", r#""(?:[^"\\]|\\.)*""#)
            .pattern("NUMBER", r"-?(?:0|[1-9][0-9]*)(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?")
            .ignore("WS", Pattern::regex(r"\s+")),
    )
    .unwrap()
}

#[test]
fn test_json_document() {
    let lexer = json_lexer();
    let input = "{\n  \"name\": \"Alice\",\n  \"tags\": [1, -2.5e3, null]\n}";

    assert_eq!(
        lexer.analyze(input).values,
        vec![
            Token::new("LBRACE", "{", Position::at(1, 0, 0)),
            Token::new("STRING", "\"name\"", Position::at(2, 2, 4)),
            Token::new("COLON", ":", Position::at(2, 8, 10)),
            Token::new("STRING", "\"Alice\"", Position::at(2, 10, 12)),
            Token::new("COMMA", ",", Position::at(2, 17, 19)),
            Token::new("STRING", "\"tags\"", Position::at(3, 2, 23)),
            Token::new("COLON", ":", Position::at(3, 8, 29)),
            Token::new("LBRACKET", "[", Position::at(3, 10, 31)),
            Token::new("NUMBER", "1", Position::at(3, 11, 32)),
            Token::new("COMMA", ",", Position::at(3, 12, 33)),
            Token::new("NUMBER", "-2.5e3", Position::at(3, 14, 35)),
            Token::new("COMMA", ",", Position::at(3, 20, 41)),
            Token::new("NULL", "null", Position::at(3, 22, 43)),
            Token::new("RBRACKET", "]", Position::at(3, 26, 47)),
            Token::new("RBRACE", "}", Position::at(4, 0, 49)),
            Token::new("EOF", "", Position::at(4, 1, 50)),
        ]
    );
}

#[test]
fn test_json_escaped_string() {
    let lexer = json_lexer();
    let values = lexer.analyze(r#"["a\"b"]"#).values;
    assert_eq!(values[1].kind(), "STRING");
    assert_eq!(values[1].value(), r#""a\"b""#);
}

#[test]
fn test_complex_grammar_without_ignore() {
    let lexer = Lexer::new(
        Grammar::new()
            .pattern("IDENT", "[a-z]+")
            .pattern("NUMBER", "[0-9]+")
            .literal("ASSIGN", "=")
            .literal("PLUS", "+")
            .pattern("WS", r"[\s\t]+")
            .literal("CONST", "const")
            .literal("SEMICOLON", ";"),
    )
    .unwrap();

    let kinds: Vec<_> = lexer
        .analyze(" const sum = 10 + 20 ; ")
        .values
        .iter()
        .map(|token| token.kind().to_string())
        .collect();

    assert_eq!(
        kinds,
        vec![
            "WS", "CONST", "WS", "IDENT", "WS", "ASSIGN", "WS", "NUMBER", "WS", "PLUS", "WS",
            "NUMBER", "WS", "SEMICOLON", "WS", "EOF",
        ]
    );
}

#[test]
fn test_keyword_literal_shadows_identifier_prefix() {
    // Literals win even when a pattern would match more text.
    let lexer = Lexer::new(
        Grammar::new()
            .literal("CONST", "const")
            .pattern("IDENT", "[a-z]+"),
    )
    .unwrap();

    let values = lexer.analyze("constant").values;
    assert_eq!(values[0].kind(), "CONST");
    assert_eq!(values[1].kind(), "IDENT");
    assert_eq!(values[1].value(), "ant");
}

#[test]
fn test_comments_and_strings() {
    let lexer = Lexer::with_options(
        Grammar::new()
            .pattern("COMMENT", r"//[^\n]*")
            .pattern_with_flags("BLOCK_COMMENT", r"/\*.*?\*/", "s")
            .pattern("STRING", r#""[^"]*""#)
            .literal("SLASH", "/")
            .pattern("IDENT", "[A-Za-z_][A-Za-z0-9_]*")
            .ignore("WS", Pattern::regex(r"\s+")),
        LexerOptions::new().eof(false),
    )
    .unwrap();

    let values = lexer.analyze("a / b // tail\n/* multi\nline */ \"s\"").values;
    let kinds: Vec<_> = values.iter().map(Token::kind).collect();

    // The SLASH literal beats both comment patterns.
    assert_eq!(
        kinds,
        vec![
            "IDENT", "SLASH", "IDENT", "SLASH", "SLASH", "IDENT", "SLASH", "UNKNOWN", "IDENT",
            "IDENT", "UNKNOWN", "SLASH", "STRING"
        ]
    );
    assert_eq!(values.last().map(Token::line), Some(3));
}

#[test]
fn test_shared_lexer_across_threads() {
    let lexer = json_lexer();
    let inputs = ["[1, 2, 3]", "{\"a\": true}", "null", "[\"x\", false]"];

    let counts: Vec<usize> = thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| {
                let lexer = &lexer;
                scope.spawn(move || lexer.analyze(input).values.len())
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(counts, vec![8, 6, 2, 6]);
}

#[test]
fn test_lazy_tokens_can_stop_early() {
    let lexer = json_lexer();
    let first_two: Vec<_> = lexer.tokens("[1, 2, 3]").take(2).collect();

    assert_eq!(
        first_two,
        vec![
            Token::new("LBRACKET", "[", Position::at(1, 0, 0)),
            Token::new("NUMBER", "1", Position::at(1, 1, 1)),
        ]
    );
}

#[test]
fn test_fragments_include_ignored_text() {
    let lexer = json_lexer();
    let values: Vec<_> = lexer.fragments("[ 1 ]").map(|fragment| fragment.value).collect();
    assert_eq!(values, vec!["[", " ", "1", " ", "]", ""]);
}
