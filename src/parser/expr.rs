use crate::{
    ast::{
        ast::Expression,
        expressions::{
            BoolLiteral, CallExpression, FunctionLiteral, Identifier, IfExpression,
            InfixExpression, IntegerLiteral, PrefixExpression,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block_stmt};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Option<Expression> {
    if !parser.enter_expression() {
        return None;
    }

    let expr = parse_pratt(parser, bp);
    parser.leave_expression();

    expr
}

fn parse_pratt(parser: &mut Parser, bp: BindingPower) -> Option<Expression> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_handler(token_kind) else {
        let error = Error::new(
            ErrorImpl::NoPrefixParseFn { kind: token_kind },
            parser.current_token().span.start.clone(),
        );
        parser.push_error(error);
        return None;
    };

    let mut left = nud(parser)?;

    // While the lookahead binds tighter than bp, fold it into lhs
    while !parser.peek_token_is(TokenKind::Semicolon) && bp < parser.peek_binding_power() {
        let Some(led) = parser.get_led_handler(parser.peek_token().kind) else {
            return Some(left);
        };

        parser.advance();
        let operator_bp = parser.current_binding_power();
        left = led(parser, left, operator_bp)?;
    }

    Some(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Option<Expression> {
    Some(Expression::Identifier(Identifier::new(
        parser.current_token().clone(),
    )))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();

    match token.value.parse::<i64>() {
        Ok(value) => Some(Expression::Integer(IntegerLiteral { token, value })),
        Err(_) => {
            let error = Error::new(
                ErrorImpl::IntegerParseError {
                    literal: token.value.clone(),
                },
                token.span.start.clone(),
            );
            parser.push_error(error);
            None
        }
    }
}

pub fn parse_bool_expr(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();
    let value = token.is(TokenKind::True);

    Some(Expression::Bool(BoolLiteral { token, value }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expression> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let operand = parse_expr(parser, BindingPower::Prefix);

    Some(Expression::Prefix(PrefixExpression {
        operator: operator_token.value.clone(),
        token: operator_token,
        operand: operand.map(Box::new),
    }))
}

pub fn parse_infix_expr(
    parser: &mut Parser,
    left: Expression,
    bp: BindingPower,
) -> Option<Expression> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    // Same bp on the right keeps equal-precedence operators left-associative
    let right = parse_expr(parser, bp);

    Some(Expression::Infix(InfixExpression {
        operator: operator_token.value.clone(),
        token: operator_token,
        left: Box::new(left),
        right: right.map(Box::new),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expression> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest);
    parser.expect_peek(TokenKind::CloseParen)?;

    expr
}

pub fn parse_if_expr(parser: &mut Parser) -> Option<Expression> {
    // if (<condition>) { ... } else { ... }
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();
    let condition = parse_expr(parser, BindingPower::Lowest);
    parser.expect_peek(TokenKind::CloseParen)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_token_is(TokenKind::Else) {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Some(Expression::If(IfExpression {
        token,
        condition: condition.map(Box::new),
        consequence,
        alternative,
    }))
}

pub fn parse_function_expr(parser: &mut Parser) -> Option<Expression> {
    // fn(x, y) { ... }
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    let parameters = parse_function_params(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser)?;

    Some(Expression::Function(FunctionLiteral {
        token,
        parameters,
        body,
    }))
}

fn parse_function_params(parser: &mut Parser) -> Option<Vec<Identifier>> {
    let mut parameters = vec![];

    if parser.peek_token_is(TokenKind::CloseParen) {
        parser.advance();
        return Some(parameters);
    }

    parameters.push(Identifier::new(parser.expect_peek(TokenKind::Identifier)?));

    while parser.peek_token_is(TokenKind::Comma) {
        parser.advance();
        parameters.push(Identifier::new(parser.expect_peek(TokenKind::Identifier)?));
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Some(parameters)
}

pub fn parse_call_expr(
    parser: &mut Parser,
    left: Expression,
    _bp: BindingPower,
) -> Option<Expression> {
    let token = parser.current_token().clone();
    let arguments = parse_call_args(parser)?;

    Some(Expression::Call(CallExpression {
        token,
        callee: Box::new(left),
        arguments,
    }))
}

fn parse_call_args(parser: &mut Parser) -> Option<Vec<Expression>> {
    let mut args = vec![];

    // ()
    if parser.peek_token_is(TokenKind::CloseParen) {
        parser.advance();
        return Some(args);
    }

    // ( x, ... )
    // A bad argument still consumes the rest of the list up to `)`
    let mut complete = true;
    parser.advance();
    match parse_expr(parser, BindingPower::Lowest) {
        Some(arg) => args.push(arg),
        None => complete = false,
    }

    while parser.peek_token_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        match parse_expr(parser, BindingPower::Lowest) {
            Some(arg) => args.push(arg),
            None => complete = false,
        }
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    if complete {
        Some(args)
    } else {
        None
    }
}
