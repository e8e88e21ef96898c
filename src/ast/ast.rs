use std::fmt::{self, Display};

use crate::Span;

use super::expressions::{BetweenExpr, CallExpr, IdentifierExpr, InfixExpr, PrefixExpr};

/// Expression Types
///
/// Discriminant of [`Expression`], handy for assertions and logging.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Identifier,
    Prefix,
    Infix,
    Between,
    Call,
}

/// Any node that can appear inside a condition expression.
///
/// The tree owns its children outright; nothing is shared or points back
/// up the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(IdentifierExpr),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    Between(BetweenExpr),
    Call(CallExpr),
}

impl Expression {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expression::Identifier(_) => ExprType::Identifier,
            Expression::Prefix(_) => ExprType::Prefix,
            Expression::Infix(_) => ExprType::Infix,
            Expression::Between(_) => ExprType::Between,
            Expression::Call(_) => ExprType::Call,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Expression::Identifier(expr) => &expr.span,
            Expression::Prefix(expr) => &expr.span,
            Expression::Infix(expr) => &expr.span,
            Expression::Between(expr) => &expr.span,
            Expression::Call(expr) => &expr.span,
        }
    }

    pub fn as_identifier(&self) -> Option<&IdentifierExpr> {
        match self {
            Expression::Identifier(expr) => Some(expr),
            _ => None,
        }
    }

    pub fn as_prefix(&self) -> Option<&PrefixExpr> {
        match self {
            Expression::Prefix(expr) => Some(expr),
            _ => None,
        }
    }

    pub fn as_infix(&self) -> Option<&InfixExpr> {
        match self {
            Expression::Infix(expr) => Some(expr),
            _ => None,
        }
    }

    pub fn as_between(&self) -> Option<&BetweenExpr> {
        match self {
            Expression::Between(expr) => Some(expr),
            _ => None,
        }
    }

    pub fn as_call(&self) -> Option<&CallExpr> {
        match self {
            Expression::Call(expr) => Some(expr),
            _ => None,
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(expr) => write!(f, "{}", expr),
            Expression::Prefix(expr) => write!(f, "{}", expr),
            Expression::Infix(expr) => write!(f, "{}", expr),
            Expression::Between(expr) => write!(f, "{}", expr),
            Expression::Call(expr) => write!(f, "{}", expr),
        }
    }
}
