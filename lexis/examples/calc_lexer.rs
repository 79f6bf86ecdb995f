//! Calculator lexer example.
//! Declares a calculator grammar and shows both scanning modes.

use lexis::{Grammar, Lexer, Pattern};

fn calc_grammar() -> Grammar {
    Grammar::new()
        .pattern("NUMBER", r"[0-9]+(?:\.[0-9]+)?|\.[0-9]+")
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
    let lexer = match Lexer::new(calc_grammar()) {
        Ok(lexer) => lexer,
        Err(err) => {
            eprintln!("invalid grammar: {}", err);
            return;
        }
    };

    let expressions = ["3 + 4", "2 * 3.14", "(1 + 2) * 3", "2 ^ 8", "10 / 2.5 % 3"];

    for expr in expressions {
        println!("Expression: {}", expr);

        println!("Tokens:");
        for token in lexer.tokens(expr) {
            println!("  {}", token);
        }

        let strict = lexer.lex(expr);
        if !strict.done {
            println!("Stopped at offset {}", strict.offset);
        }
        println!();
    }
}
