//! TypeScript-flavoured lexer.
//! Tokenizes a source file (or a built-in snippet) with a small
//! TypeScript grammar.

use clap::Parser;
use lexis::{Grammar, Lexer, LexerOptions, Pattern, TieBreak};
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

const SAMPLE: &str = r#"import { Lexer } from "./mod.ts";

/** Entry point */
export interface Options {
  readonly unknownType?: string;
}

const lexer = new Lexer({ LET: "let" });
const total = 100 + 200 - 3;
"#;

/// Command-line arguments.
#[derive(Debug, Clone, clap::Parser)]
#[clap(name = "ts-lexer", about = "Tokenizes TypeScript-like source code")]
struct Arguments {
    /// The file to tokenize. A built-in snippet is used when omitted.
    file: Option<PathBuf>,

    /// Prints the result as JSON.
    #[clap(long)]
    json: bool,

    /// Stops at the first character no rule matches.
    #[clap(long)]
    strict: bool,

    /// Lets the first declared pattern win equally long matches.
    #[clap(long)]
    first_match: bool,

    /// Omits the end-of-input token.
    #[clap(long)]
    no_eof: bool,
}

fn ts_grammar() -> Grammar {
    Grammar::new()
        // keywords
        .literal("Const", "const")
        .literal("Break", "break")
        .literal("Class", "class")
        .literal("Import", "import")
        .literal("Export", "export")
        .literal("From", "from")
        .literal("Interface", "interface")
        .literal("Readonly", "readonly")
        .literal("New", "new")
        // separators
        .literal(":", ":")
        .literal(";", ";")
        .literal(",", ",")
        .literal("(", "(")
        .literal(")", ")")
        .literal("{", "{")
        .literal("}", "}")
        .literal("<", "<")
        .literal(">", ">")
        .literal("[", "[")
        .literal("]", "]")
        .literal("#", "#")
        .literal("|", "|")
        .literal("?", "?")
        .literal("!", "!")
        .literal(".", ".")
        .literal("&", "&")
        .literal("`", "`")
        .literal("$", "$")
        .ignore("WhiteSpace", Pattern::regex(r"[ \t]+"))
        .pattern("LineBreak", r"\n")
        // identifiers
        .pattern("Ident", "[a-zA-Z0-9]+")
        .pattern("String", r#""(.+?)""#)
        .pattern("Number", "[0-9]*")
        // operators
        .literal("=", "=")
        .literal("+", "+")
        .literal("-", "-")
        .pattern_with_flags("Comment", r"/\*\*(.+?)\*/", "s")
}

fn run(arguments: Arguments) -> Result<(), Box<dyn std::error::Error>> {
    let source = match &arguments.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE.to_string(),
    };

    let tie_break = if arguments.first_match {
        TieBreak::FirstDeclared
    } else {
        TieBreak::LastDeclared
    };
    let options = LexerOptions::new()
        .eof(!arguments.no_eof)
        .tie_break(tie_break);

    let lexer = Lexer::with_options(ts_grammar(), options)?;
    info!("tokenizing {} bytes", source.len());

    if arguments.strict {
        let result = lexer.lex(&source);
        if arguments.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            for token in &result.tokens {
                println!("{}", token);
            }
            println!("done: {}, offset: {}", result.done, result.offset);
        }
        return Ok(());
    }

    let result = lexer.analyze(&source);
    if arguments.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for token in &result.values {
            println!("{}", token);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Arguments::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
