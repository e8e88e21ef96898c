use std::fmt::{self, Display};

use crate::Span;

use super::ast::Expression;

/// Identifier Expression
/// An attribute name, path or bound placeholder. Leaf node.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpr {
    pub name: String,
    pub span: Span,
}

impl Display for IdentifierExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Prefix Expression
/// Only `NOT` is a prefix operator.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: String,
    pub operand: Box<Expression>,
    pub span: Span,
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", self.operator, self.operand)
    }
}

/// Infix Expression
/// Comparisons and the AND/OR connectives.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    pub operator: String,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub span: Span,
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

/// Between Expression
/// `subject BETWEEN low AND high`. The bounds are always identifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct BetweenExpr {
    pub subject: Box<Expression>,
    pub low: IdentifierExpr,
    pub high: IdentifierExpr,
    pub span: Span,
}

impl Display for BetweenExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} BETWEEN {} AND {})", self.subject, self.low, self.high)
    }
}

/// Call Expression
/// Function call syntax such as `size(attr)` or `begins_with(a, :p)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Box<Expression>,
    pub arguments: Vec<Expression>,
    pub span: Span,
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arguments = self
            .arguments
            .iter()
            .map(|argument| argument.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        write!(f, "{}({})", self.callee, arguments)
    }
}
