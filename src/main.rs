use std::process::ExitCode;

use clap::Parser;
use dynamo_expr::{
    config::ParserConfig,
    errors::errors::{Error, ErrorTip},
    get_line_at_position, parse_str,
};

/// Parse a DynamoDB condition expression and print its syntax tree.
#[derive(Parser, Debug)]
#[command(author, long_about = None)]
struct Args {
    /// The expression to parse, e.g. `size(tags) > 3 AND NOT deleted`
    expression: String,

    /// Accept several statements and keep the last one
    #[arg(long)]
    allow_trailing: bool,

    /// Log parser activity to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::TRACE
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut config = ParserConfig::from_env();
    if args.allow_trailing {
        config.allow_trailing_statements = true;
    }

    let (program, diagnostics) = match parse_str(&args.expression, &config) {
        Ok(parsed) => parsed,
        Err(error) => {
            display_error(&error, &args.expression);
            return ExitCode::FAILURE;
        }
    };

    if !diagnostics.is_empty() {
        for error in diagnostics.errors() {
            display_error(error, &args.expression);
        }
        return ExitCode::FAILURE;
    }

    println!("{}", program);
    ExitCode::SUCCESS
}

fn display_error(error: &Error, source: &str) {
    /*
        Error: UnexpectedToken (Insert `)` here)
        -> expected next token to be ), got EOF instead
          |
        1 | (a = 1
          | ------^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", error);
    eprintln!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    eprintln!("{} | {}", line_str, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.len() - string.trim_start_matches(' ').len();

    (String::from(&string[start..]), start)
}
