//! Parser state and the top-level parse entry point.
//!
//! The parser pulls tokens from a [`TokenSource`] and keeps exactly one
//! token of lookahead. Diagnostics live in a separate [`Diagnostics`]
//! value that every handler receives by `&mut`, so the cursor and the
//! error list can be inspected independently.

use tracing::debug;

use crate::{
    ast::statements::DynamoExpression,
    config::ParserConfig,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind, TokenSource},
};

use super::{
    lookups::{binding_power, BindingPower},
    stmt::parse_dynamo_expression,
};

/// Ordered, append-only list of errors recorded during one parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    errors: Vec<Error>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics { errors: vec![] }
    }

    pub fn push(&mut self, error: Error) {
        debug!(position = error.get_position().0, %error, "recorded parse error");
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// The rendered error messages, in the order they were recorded.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn no_prefix_parse_fn(&mut self, token: &Token) {
        self.push(Error::new(
            ErrorImpl::NoPrefixParseFn { kind: token.kind },
            token.span.start,
        ));
    }

    pub fn peek_error(&mut self, expected: TokenKind, got: &Token) {
        self.push(Error::new(
            ErrorImpl::UnexpectedToken {
                expected,
                got: got.kind,
            },
            got.span.start,
        ));
    }
}

/// Token cursor over a single input.
///
/// A parser is bound to one token source; build a new one per input.
pub struct Parser<S: TokenSource> {
    /// Where tokens come from
    source: S,
    /// The token being parsed
    current: Token,
    /// One token of lookahead
    peek: Token,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a parser and primes the current and lookahead tokens.
    ///
    /// # Arguments
    ///
    /// * `source` - Token source for a single input; it must keep yielding
    ///   `EOF` once exhausted
    ///
    /// # Returns
    ///
    /// A parser positioned on the first token, with the second as lookahead.
    pub fn new(mut source: S) -> Self {
        let current = source.next_token();
        let peek = source.next_token();

        Parser {
            source,
            current,
            peek,
        }
    }

    pub fn current_token(&self) -> &Token {
        &self.current
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Shifts the lookahead into the current slot and pulls a new lookahead.
    ///
    /// Past the end of input both slots hold `EOF`, so advancing there is a
    /// no-op.
    pub fn advance(&mut self) {
        let next = self.source.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    pub fn peek_binding_power(&self) -> BindingPower {
        binding_power(self.peek.kind)
    }

    /// Advances onto the lookahead if it has the expected kind.
    ///
    /// # Arguments
    ///
    /// * `expected` - The TokenKind the lookahead must have
    /// * `diagnostics` - Receives an unexpected-token error on mismatch
    ///
    /// # Returns
    ///
    /// The token now current, or `None` after recording the error; the
    /// cursor does not move in that case.
    pub fn expect_peek(&mut self, expected: TokenKind, diagnostics: &mut Diagnostics) -> Option<Token> {
        if !self.peek_is(expected) {
            diagnostics.peek_error(expected, &self.peek);
            return None;
        }

        self.advance();
        Some(self.current.clone())
    }
}

/// Parses one condition expression from `source`.
///
/// The returned tree may contain failed branches whenever the diagnostics
/// are non-empty, and must not be evaluated in that case.
pub fn parse<S: TokenSource>(source: S, config: &ParserConfig) -> (DynamoExpression, Diagnostics) {
    let mut parser = Parser::new(source);
    let mut diagnostics = Diagnostics::new();

    let program = parse_dynamo_expression(&mut parser, &mut diagnostics, config);

    (program, diagnostics)
}
