//! JSON lexer example.
//! Tokenizes a JSON document and prints the tokens, either as text or as
//! JSON (`--json`).

use lexis::{Grammar, Lexer, Pattern};

fn json_grammar() -> Grammar {
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
        .ignore("WS", Pattern::regex(r"\s+"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let as_json = std::env::args().any(|arg| arg == "--json");

    let json = r#"{
        "name": "Alice",
        "age": 30,
        "active": true,
        "tags": ["developer", "rust"],
        "address": null
    }"#;

    let lexer = Lexer::new(json_grammar())?;
    let result = lexer.analyze(json);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Tokenizing JSON:");
    println!("{}\n", json);

    println!("Tokens:");
    for (i, token) in result.values.iter().enumerate() {
        println!("  {}: {}", i, token);
    }

    Ok(())
}
