use crate::{
    ast::ast::Expression,
    lexer::tokens::{TokenKind, TokenSource},
};

use super::{
    expr::*,
    parser::{Diagnostics, Parser},
};

/// Operator precedence, weakest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Or,
    And,
    Not,
    Equality,
    Between,
    Relational,
    Call,
}

pub type NUDHandler<S> = fn(&mut Parser<S>, &mut Diagnostics) -> Option<Expression>;
/// `None` as the left operand means it already failed; the handler still
/// consumes its own tokens so later errors are reported.
pub type LEDHandler<S> =
    fn(&mut Parser<S>, &mut Diagnostics, Option<Expression>, BindingPower) -> Option<Expression>;

pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Or => BindingPower::Or,
        TokenKind::And => BindingPower::And,
        TokenKind::Eq | TokenKind::NotEq => BindingPower::Equality,
        TokenKind::Between => BindingPower::Between,
        TokenKind::Lt | TokenKind::Lte | TokenKind::Gt | TokenKind::Gte => {
            BindingPower::Relational
        }
        TokenKind::LParen => BindingPower::Call,
        _ => BindingPower::Lowest,
    }
}

/// Handler for a token that starts an expression.
pub fn nud_lookup<S: TokenSource>(kind: TokenKind) -> Option<NUDHandler<S>> {
    let handler: NUDHandler<S> = match kind {
        TokenKind::Identifier => parse_identifier_expr,
        TokenKind::Not => parse_prefix_expr,
        TokenKind::LParen => parse_grouping_expr,
        _ => return None,
    };

    Some(handler)
}

/// Handler for a token that continues an expression after its left operand.
pub fn led_lookup<S: TokenSource>(kind: TokenKind) -> Option<LEDHandler<S>> {
    let handler: LEDHandler<S> = match kind {
        // Equality and relational
        TokenKind::Eq
        | TokenKind::NotEq
        | TokenKind::Lt
        | TokenKind::Lte
        | TokenKind::Gt
        | TokenKind::Gte => parse_infix_expr,

        // Logical
        TokenKind::And | TokenKind::Or => parse_infix_expr,

        TokenKind::Between => parse_between_expr,
        TokenKind::LParen => parse_call_expr,
        _ => return None,
    };

    Some(handler)
}
