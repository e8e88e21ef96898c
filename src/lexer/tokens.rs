use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{Position, Span};

lazy_static! {
    /// Keywords, keyed by their upper-case spelling.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("AND", TokenKind::And);
        map.insert("OR", TokenKind::Or);
        map.insert("NOT", TokenKind::Not);
        map.insert("BETWEEN", TokenKind::Between);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,

    Eq,    // =
    NotEq, // <>
    Lt,
    Gt,
    Lte,
    Gte,

    And,
    Or,
    Not,
    Between,

    LParen,
    RParen,
    Comma,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::EOF => "EOF",
            TokenKind::Identifier => "IDENT",
            TokenKind::Eq => "=",
            TokenKind::NotEq => "<>",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Lte => "<=",
            TokenKind::Gte => ">=",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::Between => "BETWEEN",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Comma => ",",
        };

        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    pub fn eof(at: Position) -> Self {
        Token {
            kind: TokenKind::EOF,
            value: String::from("EOF"),
            span: Span { start: at, end: at },
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

/// Supplies tokens to the parser one at a time.
///
/// Once the input is exhausted an implementation must keep returning an
/// `EOF` token on every call.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// Adapts an already tokenized input to [`TokenSource`].
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: std::vec::IntoIter<Token>,
    eof: Token,
    exhausted: bool,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        let end = tokens.last().map(|t| t.span.end).unwrap_or_default();

        TokenStream {
            tokens: tokens.into_iter(),
            eof: Token::eof(end),
            exhausted: false,
        }
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        if self.exhausted {
            return self.eof.clone();
        }

        match self.tokens.next() {
            Some(token) if token.is(TokenKind::EOF) => {
                self.exhausted = true;
                self.eof = token.clone();
                token
            }
            Some(token) => token,
            None => {
                self.exhausted = true;
                self.eof.clone()
            }
        }
    }
}
