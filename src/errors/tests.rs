//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 10);
}

#[test]
fn test_no_prefix_message() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: TokenKind::Comma,
        },
        Position(0),
    );

    assert_eq!(error.get_error_name(), "NoPrefixParseFn");
    assert_eq!(error.to_string(), "no prefix parse function for , found");
}

#[test]
fn test_unexpected_token_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::RParen,
            got: TokenKind::EOF,
        },
        Position(6),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.to_string(),
        "expected next token to be ), got EOF instead"
    );
}

#[test]
fn test_trailing_tokens_message() {
    let error = Error::new(
        ErrorImpl::TrailingTokens {
            got: TokenKind::Identifier,
        },
        Position(6),
    );

    assert_eq!(
        error.to_string(),
        "expected next token to be EOF, got IDENT instead"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::And,
            got: TokenKind::Identifier,
        },
        Position(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Insert `AND` here"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_error_position_past_u32() {
    let offset = u32::MAX as usize + 10;
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::RParen,
            got: TokenKind::EOF,
        },
        Position(offset),
    );

    assert_eq!(error.get_position().0, offset);
}
