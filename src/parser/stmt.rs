use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Option<Statement> {
    if let Some(handler) = parser.get_stmt_handler(parser.current_token_kind()) {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<Statement> {
    // let x = 5;
    let token = parser.current_token().clone();

    let name = Identifier::new(parser.expect_peek(TokenKind::Identifier)?);
    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest);
    skip_semicolons(parser);

    Some(Statement::Let(LetStatement {
        token,
        name,
        value: value.map(Box::new),
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<Statement> {
    // return 5;
    let token = parser.current_token().clone();
    parser.advance();

    let value = parse_expr(parser, BindingPower::Lowest);
    skip_semicolons(parser);

    Some(Statement::Return(ReturnStatement {
        token,
        value: value.map(Box::new),
    }))
}

/// Any expression is also a statement. The `;` after it is optional, which
/// keeps single-line input short. It is consumed even when the expression
/// failed to parse.
pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Statement> {
    let expression = parse_expr(parser, BindingPower::Lowest);

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Some(Statement::Expression(ExpressionStatement {
        expression: Box::new(expression?),
    }))
}

/// Parses the statements of a block whose `{` is the current token, leaving
/// the closing `}` as the current token.
pub fn parse_block_stmt(parser: &mut Parser) -> Option<BlockStatement> {
    let token = parser.current_token().clone();
    parser.advance();

    let mut statements = Vec::new();
    while !parser.current_token_is(TokenKind::CloseCurly) {
        if parser.current_token_is(TokenKind::EOF) {
            let error = Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: TokenKind::CloseCurly,
                    found: TokenKind::EOF,
                    progress: parser.progress(),
                },
                parser.current_token().span.start.clone(),
            );
            parser.push_error(error);
            return None;
        }

        if let Some(stmt) = parse_stmt(parser) {
            statements.push(stmt);
        }
        parser.advance();
    }

    Some(BlockStatement { token, statements })
}

fn skip_semicolons(parser: &mut Parser) {
    while parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }
}
