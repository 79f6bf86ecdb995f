use lexis::{Grammar, Lexer, Pattern, Position, Token};

fn positions(lexer: &Lexer, input: &str) -> Vec<(String, Position)> {
    lexer
        .analyze(input)
        .values
        .into_iter()
        .map(|token| (token.kind().to_string(), token.position()))
        .collect()
}

#[test]
fn test_first_token_at_line_one_column_zero() {
    let lexer = Lexer::new(Grammar::new().pattern("WORD", "[a-z]+")).unwrap();
    let tokens = lexer.analyze("abc").values;
    assert_eq!(tokens[0].line(), 1);
    assert_eq!(tokens[0].column(), 0);
    assert_eq!(tokens[0].offset(), 0);
}

#[test]
fn test_line_break_inside_token_moves_next_token() {
    let lexer = Lexer::new(
        Grammar::new()
            .pattern("WORD", "[a-z]+")
            .pattern("WS", r"\s+"),
    )
    .unwrap();

    assert_eq!(
        positions(&lexer, "ab  \n  cd"),
        vec![
            ("WORD".to_string(), Position::at(1, 0, 0)),
            ("WS".to_string(), Position::at(1, 2, 2)),
            ("WORD".to_string(), Position::at(2, 2, 7)),
            ("EOF".to_string(), Position::at(2, 4, 9)),
        ]
    );
}

#[test]
fn test_line_break_position_within_token_does_not_matter() {
    let lexer = Lexer::new(
        Grammar::new()
            .pattern("WORD", "[a-z]+")
            .pattern("WS", r"\s+"),
    )
    .unwrap();

    for input in ["a\n   b", "a   \nb", "a \n  b"] {
        let tokens = lexer.analyze(input).values;
        let word = &tokens[2];
        assert_eq!(word.value(), "b");
        assert_eq!(word.line(), 2, "input {:?}", input);
    }

    assert_eq!(lexer.analyze("a   \nb").values[2].column(), 0);
}

#[test]
fn test_ignored_newlines_still_counted() {
    let lexer = Lexer::new(
        Grammar::new()
            .pattern("WORD", "[a-z]+")
            .ignore("WS", Pattern::regex(r"\s+")),
    )
    .unwrap();

    assert_eq!(
        lexer.analyze("one\ntwo\n\n  three").values,
        vec![
            Token::new("WORD", "one", Position::at(1, 0, 0)),
            Token::new("WORD", "two", Position::at(2, 0, 4)),
            Token::new("WORD", "three", Position::at(4, 2, 11)),
            Token::new("EOF", "", Position::at(4, 7, 16)),
        ]
    );
}

#[test]
fn test_unknown_newlines_counted() {
    let lexer = Lexer::new(Grammar::new().literal("X", "x")).unwrap();

    assert_eq!(
        positions(&lexer, "\n\nx"),
        vec![
            ("UNKNOWN".to_string(), Position::at(1, 0, 0)),
            ("X".to_string(), Position::at(3, 0, 2)),
            ("EOF".to_string(), Position::at(3, 1, 3)),
        ]
    );
}

#[test]
fn test_columns_count_characters() {
    let lexer = Lexer::new(
        Grammar::new()
            .pattern("WORD", r"\w+")
            .literal("SPACE", " "),
    )
    .unwrap();

    assert_eq!(
        positions(&lexer, "日本語 ok"),
        vec![
            ("WORD".to_string(), Position::at(1, 0, 0)),
            ("SPACE".to_string(), Position::at(1, 3, 9)),
            ("WORD".to_string(), Position::at(1, 4, 10)),
            ("EOF".to_string(), Position::at(1, 6, 12)),
        ]
    );
}

#[test]
fn test_carriage_return_is_a_column() {
    let lexer = Lexer::new(
        Grammar::new()
            .pattern("WORD", "[a-z]+")
            .ignore("NL", Pattern::regex(r"\r?\n")),
    )
    .unwrap();

    let tokens = lexer.analyze("a\r\nb").values;
    assert_eq!(tokens[1].position(), Position::at(2, 0, 3));
}

#[test]
fn test_eof_after_trailing_newline() {
    let lexer = Lexer::new(Grammar::new().pattern("LINE", "[^\n]*\n")).unwrap();

    assert_eq!(
        positions(&lexer, "a\nb\n"),
        vec![
            ("LINE".to_string(), Position::at(1, 0, 0)),
            ("LINE".to_string(), Position::at(2, 0, 2)),
            ("EOF".to_string(), Position::at(3, 0, 4)),
        ]
    );
}
