use std::fmt::{self, Display};

use crate::lexer::tokens::Token;

use super::ast::Expression;

/// Expression Statement
/// Wraps the top-level expression. `expression` is `None` when parsing
/// that expression failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub token: Token,
    pub expression: Option<Expression>,
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.expression {
            Some(expression) => write!(f, "{}", expression),
            None => write!(f, "<invalid>"),
        }
    }
}

/// Root of a parsed condition expression.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DynamoExpression {
    pub statement: Option<ExpressionStatement>,
}

impl DynamoExpression {
    /// The top-level expression, if one was parsed successfully.
    pub fn expression(&self) -> Option<&Expression> {
        self.statement.as_ref().and_then(|stmt| stmt.expression.as_ref())
    }
}

impl Display for DynamoExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.statement {
            Some(statement) => write!(f, "{}", statement),
            None => Ok(()),
        }
    }
}
