use std::fmt::{self, Display, Formatter};

use crate::lexer::tokens::Token;

use super::{
    ast::{fmt_maybe, Expression, MaybeExpression, Node, Statement},
    expressions::Identifier,
};

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: MaybeExpression,
}

impl Node for LetStatement {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for LetStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = ", self.token_literal(), self.name)?;
        fmt_maybe(f, &self.value)?;
        write!(f, ";")
    }
}

/// `return <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub token: Token,
    pub value: MaybeExpression,
}

impl Node for ReturnStatement {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.token_literal())?;
        fmt_maybe(f, &self.value)?;
        write!(f, ";")
    }
}

/// A bare expression used as a statement. The trailing `;` is optional in
/// source and never rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Box<Expression>,
}

impl Node for ExpressionStatement {
    fn token_literal(&self) -> &str {
        self.expression.token_literal()
    }
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// Brace-delimited statement list.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// The opening `{`.
    pub token: Token,
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    /// `{ a; let b = c; }`, the form used inside `if` and `fn` renderings.
    pub fn fmt_braced(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for stmt in &self.statements {
            stmt.fmt_terminated(f)?;
            write!(f, " ")?;
        }
        write!(f, "}}")
    }
}

impl Node for BlockStatement {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for BlockStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
