use tracing::trace;

use crate::{
    ast::{
        ast::Expression,
        expressions::{BetweenExpr, CallExpr, IdentifierExpr, InfixExpr, PrefixExpr},
    },
    lexer::tokens::{Token, TokenKind, TokenSource},
};

use super::{
    lookups::{binding_power, led_lookup, nud_lookup, BindingPower},
    parser::{Diagnostics, Parser},
};

/// Parses an expression whose operators bind tighter than `bp`.
///
/// A failed operand does not stop the loop: later operators are still
/// consumed so their errors get recorded too. The result is `None` if any
/// part failed; the reasons are in `diagnostics`.
pub fn parse_expr<S: TokenSource>(
    parser: &mut Parser<S>,
    diagnostics: &mut Diagnostics,
    bp: BindingPower,
) -> Option<Expression> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = nud_lookup::<S>(token_kind) else {
        diagnostics.no_prefix_parse_fn(parser.current_token());
        return None;
    };

    trace!(kind = %token_kind, ?bp, "prefix");
    let mut left = nud(parser, diagnostics);

    // While the lookahead binds tighter than the caller allows, keep extending left
    while !parser.peek_is(TokenKind::EOF) && bp < parser.peek_binding_power() {
        let Some(led) = led_lookup::<S>(parser.peek_token_kind()) else {
            return left;
        };

        parser.advance();

        let operator_kind = parser.current_token_kind();
        trace!(kind = %operator_kind, ?bp, "infix");
        left = led(parser, diagnostics, left, binding_power(operator_kind));
    }

    left
}

fn identifier_from(token: &Token) -> IdentifierExpr {
    IdentifierExpr {
        name: token.value.clone(),
        span: token.span,
    }
}

pub fn parse_identifier_expr<S: TokenSource>(
    parser: &mut Parser<S>,
    _diagnostics: &mut Diagnostics,
) -> Option<Expression> {
    Some(Expression::Identifier(identifier_from(parser.current_token())))
}

pub fn parse_prefix_expr<S: TokenSource>(
    parser: &mut Parser<S>,
    diagnostics: &mut Diagnostics,
) -> Option<Expression> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let operand = parse_expr(parser, diagnostics, BindingPower::Not)?;

    Some(Expression::Prefix(PrefixExpr {
        span: operator_token.span.to(operand.get_span()),
        operator: operator_token.value,
        operand: Box::new(operand),
    }))
}

pub fn parse_grouping_expr<S: TokenSource>(
    parser: &mut Parser<S>,
    diagnostics: &mut Diagnostics,
) -> Option<Expression> {
    parser.advance();
    let expr = parse_expr(parser, diagnostics, BindingPower::Lowest);
    parser.expect_peek(TokenKind::RParen, diagnostics)?;

    expr
}

pub fn parse_infix_expr<S: TokenSource>(
    parser: &mut Parser<S>,
    diagnostics: &mut Diagnostics,
    left: Option<Expression>,
    bp: BindingPower,
) -> Option<Expression> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, diagnostics, bp);
    let (left, right) = (left?, right?);

    Some(Expression::Infix(InfixExpr {
        span: left.get_span().to(right.get_span()),
        operator: operator_token.value,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

/// `subject BETWEEN low AND high`, with `BETWEEN` as the current token.
///
/// Both bounds must be plain identifiers.
pub fn parse_between_expr<S: TokenSource>(
    parser: &mut Parser<S>,
    diagnostics: &mut Diagnostics,
    left: Option<Expression>,
    _bp: BindingPower,
) -> Option<Expression> {
    let low = parser.expect_peek(TokenKind::Identifier, diagnostics)?;
    parser.expect_peek(TokenKind::And, diagnostics)?;
    let high = parser.expect_peek(TokenKind::Identifier, diagnostics)?;
    let left = left?;

    Some(Expression::Between(BetweenExpr {
        span: left.get_span().to(&high.span),
        subject: Box::new(left),
        low: identifier_from(&low),
        high: identifier_from(&high),
    }))
}

/// Call with `left` as the callee and `(` as the current token.
pub fn parse_call_expr<S: TokenSource>(
    parser: &mut Parser<S>,
    diagnostics: &mut Diagnostics,
    left: Option<Expression>,
    _bp: BindingPower,
) -> Option<Expression> {
    let arguments = parse_call_arguments(parser, diagnostics)?;
    let left = left?;

    Some(Expression::Call(CallExpr {
        span: left.get_span().to(&parser.current_token().span),
        callee: Box::new(left),
        arguments,
    }))
}

fn parse_call_arguments<S: TokenSource>(
    parser: &mut Parser<S>,
    diagnostics: &mut Diagnostics,
) -> Option<Vec<Expression>> {
    if parser.peek_is(TokenKind::RParen) {
        parser.advance();
        return Some(vec![]);
    }

    let mut args = vec![];

    parser.advance();
    args.push(parse_expr(parser, diagnostics, BindingPower::Lowest));

    while parser.peek_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        args.push(parse_expr(parser, diagnostics, BindingPower::Lowest));
    }

    parser.expect_peek(TokenKind::RParen, diagnostics)?;

    // A failed argument fails the whole call
    args.into_iter().collect()
}
