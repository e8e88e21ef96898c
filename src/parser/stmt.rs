use tracing::debug;

use crate::{
    ast::statements::{DynamoExpression, ExpressionStatement},
    config::ParserConfig,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{TokenKind, TokenSource},
};

use super::{
    expr::parse_expr,
    lookups::BindingPower,
    parser::{Diagnostics, Parser},
};

pub fn parse_expression_stmt<S: TokenSource>(
    parser: &mut Parser<S>,
    diagnostics: &mut Diagnostics,
) -> ExpressionStatement {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, diagnostics, BindingPower::Lowest);

    if parser.peek_is(TokenKind::EOF) {
        parser.advance();
    }

    ExpressionStatement { token, expression }
}

/// Parses statements until EOF.
///
/// In strict mode only the first statement is parsed, and anything left
/// after it is reported unless an earlier error already explains it. With
/// `allow_trailing_statements` every statement is parsed and the last one
/// is kept.
pub fn parse_dynamo_expression<S: TokenSource>(
    parser: &mut Parser<S>,
    diagnostics: &mut Diagnostics,
    config: &ParserConfig,
) -> DynamoExpression {
    let mut program = DynamoExpression::default();

    while !parser.current_token().is(TokenKind::EOF) {
        let stmt = parse_expression_stmt(parser, diagnostics);
        debug!(valid = stmt.expression.is_some(), "parsed expression statement");
        program.statement = Some(stmt);

        parser.advance();

        if !config.allow_trailing_statements {
            let trailing = parser.current_token();
            if !trailing.is(TokenKind::EOF) && diagnostics.is_empty() {
                diagnostics.push(Error::new(
                    ErrorImpl::TrailingTokens { got: trailing.kind },
                    trailing.span.start,
                ));
            }
            break;
        }
    }

    program
}
