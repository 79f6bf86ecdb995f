//! Calculator lexer example.
//! Turns the generic tokens of a calculator grammar into a typed token enum.

use lexis::{Grammar, Lexer, Pattern, Position, Token};

/// Calculator tokens, converted from the lexer's string-typed tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcToken {
    Number { value: f64, position: Position },
    Plus { position: Position },
    Minus { position: Position },
    Multiply { position: Position },
    Divide { position: Position },
    Power { position: Position },
    LeftParen { position: Position },
    RightParen { position: Position },
    Unknown { text: String, position: Position },
    Eof { position: Position },
}

impl CalcToken {
    fn from_token(token: &Token) -> Self {
        let position = token.position();

        match token.kind() {
            "NUMBER" => match token.value().parse() {
                Ok(value) => CalcToken::Number { value, position },
                Err(_) => CalcToken::Unknown {
                    text: token.value().to_string(),
                    position,
                },
            },
            "PLUS" => CalcToken::Plus { position },
            "MINUS" => CalcToken::Minus { position },
            "STAR" => CalcToken::Multiply { position },
            "SLASH" => CalcToken::Divide { position },
            "CARET" => CalcToken::Power { position },
            "LPAREN" => CalcToken::LeftParen { position },
            "RPAREN" => CalcToken::RightParen { position },
            "EOF" => CalcToken::Eof { position },
            _ => CalcToken::Unknown {
                text: token.value().to_string(),
                position,
            },
        }
    }
}

fn calc_grammar() -> Grammar {
    Grammar::new()
        // 1., .5 and 1.5 are all numbers
        .pattern("NUMBER", r"[0-9]+(?:\.[0-9]*)?|\.[0-9]+")
        .literal("PLUS", "+")
        .literal("MINUS", "-")
        .literal("STAR", "*")
        .literal("SLASH", "/")
        .literal("CARET", "^")
        .literal("LPAREN", "(")
        .literal("RPAREN", ")")
        .ignore("WS", Pattern::regex(r"\s+"))
}

fn main() {
    env_logger::init();

    let lexer = match Lexer::new(calc_grammar()) {
        Ok(lexer) => lexer,
        Err(err) => {
            eprintln!("invalid grammar: {}", err);
            std::process::exit(1);
        }
    };

    let expressions = vec!["3 + 4", "2 * 3.14", "(1 + 2) * 3", "2 ^ 8", "10 / 2.5", "1 $ 2"];

    for expr in expressions {
        println!("Expression: {}", expr);

        println!("Tokens:");
        for token in lexer.tokens(expr) {
            println!("  {:?}", CalcToken::from_token(&token));
        }
        println!();
    }
}
