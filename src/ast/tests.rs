//! Unit tests for AST rendering and accessors.

use super::{
    ast::{ExprType, Expression},
    expressions::{BetweenExpr, CallExpr, IdentifierExpr, InfixExpr, PrefixExpr},
    statements::{DynamoExpression, ExpressionStatement},
};
use crate::{
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

fn ident(name: &str) -> IdentifierExpr {
    IdentifierExpr {
        name: name.to_string(),
        span: Span::default(),
    }
}

fn ident_expr(name: &str) -> Expression {
    Expression::Identifier(ident(name))
}

#[test]
fn test_display_nested_expression() {
    let expr = Expression::Infix(InfixExpr {
        operator: String::from("OR"),
        left: Box::new(Expression::Between(BetweenExpr {
            subject: Box::new(ident_expr("price")),
            low: ident(":lo"),
            high: ident(":hi"),
            span: Span::default(),
        })),
        right: Box::new(Expression::Prefix(PrefixExpr {
            operator: String::from("NOT"),
            operand: Box::new(Expression::Call(CallExpr {
                callee: Box::new(ident_expr("attribute_exists")),
                arguments: vec![ident_expr("a"), ident_expr("b")],
                span: Span::default(),
            })),
            span: Span::default(),
        })),
        span: Span::default(),
    });

    assert_eq!(
        expr.to_string(),
        "((price BETWEEN :lo AND :hi) OR (NOT attribute_exists(a, b)))"
    );
    assert_eq!(expr.get_expr_type(), ExprType::Infix);
    assert!(expr.as_infix().is_some());
    assert!(expr.as_call().is_none());
}

#[test]
fn test_identifier_accessors() {
    let expr = Expression::Identifier(IdentifierExpr {
        name: String::from("a"),
        span: Span { start: Position(3), end: Position(4) },
    });

    assert_eq!(expr.get_expr_type(), ExprType::Identifier);
    assert_eq!(expr.as_identifier().unwrap().name, "a");
    assert_eq!(expr.get_span().start, Position(3));
    assert!(expr.as_prefix().is_none());
    assert!(expr.as_between().is_none());
}

#[test]
fn test_span_to() {
    let left = Span { start: Position(0), end: Position(4) };
    let right = Span { start: Position(8), end: Position(12) };

    assert_eq!(left.to(&right), Span { start: Position(0), end: Position(12) });
    assert_eq!(right.to(&left), Span { start: Position(0), end: Position(12) });
}

#[test]
fn test_dynamo_expression_without_statement() {
    let program = DynamoExpression::default();

    assert!(program.expression().is_none());
    assert_eq!(program.to_string(), "");
}

#[test]
fn test_dynamo_expression_with_failed_statement() {
    let program = DynamoExpression {
        statement: Some(ExpressionStatement {
            token: Token::eof(Position(0)),
            expression: None,
        }),
    };

    assert!(program.expression().is_none());
    assert_eq!(program.to_string(), "<invalid>");
}

#[test]
fn test_dynamo_expression_with_statement() {
    let program = DynamoExpression {
        statement: Some(ExpressionStatement {
            token: Token {
                kind: TokenKind::Identifier,
                value: String::from("a"),
                span: Span::default(),
            },
            expression: Some(ident_expr("a")),
        }),
    };

    assert_eq!(program.expression(), Some(&ident_expr("a")));
    assert_eq!(program.to_string(), "a");
}
