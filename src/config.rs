//! Parser configuration.

use std::env;

/// Controls how the parser treats input past the first expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserConfig {
    /// Keep parsing statements until EOF, keeping only the last one, instead
    /// of rejecting tokens left over after the first expression.
    pub allow_trailing_statements: bool,
}

impl ParserConfig {
    /// Create configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            allow_trailing_statements: env_bool("DYNAMO_EXPR_ALLOW_TRAILING", false),
        }
    }
}

fn env_bool(key: &str, default: bool) -> bool {
    env::var(key).map_or(default, |v| parse_bool(&v))
}

fn parse_bool(value: &str) -> bool {
    matches!(value, "1" | "true" | "yes" | "TRUE" | "YES")
}
