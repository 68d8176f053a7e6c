use std::fmt::{self, Display, Formatter};

use super::{
    expressions::{
        BoolLiteral, CallExpression, FunctionLiteral, Identifier, IfExpression, InfixExpression,
        IntegerLiteral, PrefixExpression,
    },
    statements::{ExpressionStatement, LetStatement, ReturnStatement},
};

/// Node Trait
///
/// Implemented by every AST node. `Display` gives the canonical, fully
/// parenthesized rendering of the subtree.
pub trait Node: Display {
    /// Literal text of the token the node was built from.
    fn token_literal(&self) -> &str;
}

/// A child expression that may be missing because of a recorded parse error.
pub type MaybeExpression = Option<Box<Expression>>;

pub(crate) fn fmt_maybe(f: &mut Formatter<'_>, expression: &MaybeExpression) -> fmt::Result {
    match expression {
        Some(expression) => write!(f, "{}", expression),
        None => Ok(()),
    }
}

/// Statements
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl Statement {
    /// Writes the statement so that it can be followed by another statement
    /// without changing how the source re-parses.
    pub fn fmt_terminated(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Expression(stmt) => write!(f, "{};", stmt.expression),
            _ => write!(f, "{}", self),
        }
    }
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(stmt) => stmt.token_literal(),
            Statement::Return(stmt) => stmt.token_literal(),
            Statement::Expression(stmt) => stmt.token_literal(),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(stmt) => write!(f, "{}", stmt),
            Statement::Return(stmt) => write!(f, "{}", stmt),
            Statement::Expression(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Expressions
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Bool(BoolLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    Function(FunctionLiteral),
    Call(CallExpression),
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(expr) => expr.token_literal(),
            Expression::Integer(expr) => expr.token_literal(),
            Expression::Bool(expr) => expr.token_literal(),
            Expression::Prefix(expr) => expr.token_literal(),
            Expression::Infix(expr) => expr.token_literal(),
            Expression::If(expr) => expr.token_literal(),
            Expression::Function(expr) => expr.token_literal(),
            Expression::Call(expr) => expr.token_literal(),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(expr) => write!(f, "{}", expr),
            Expression::Integer(expr) => write!(f, "{}", expr),
            Expression::Bool(expr) => write!(f, "{}", expr),
            Expression::Prefix(expr) => write!(f, "{}", expr),
            Expression::Infix(expr) => write!(f, "{}", expr),
            Expression::If(expr) => write!(f, "{}", expr),
            Expression::Function(expr) => write!(f, "{}", expr),
            Expression::Call(expr) => write!(f, "{}", expr),
        }
    }
}

/// Program
///
/// Root of every AST. It has no token of its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    /// Renders the program as source text that re-parses to the same tree.
    pub fn to_source(&self) -> String {
        struct Source<'a>(&'a Program);

        impl Display for Source<'_> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                for (i, stmt) in self.0.statements.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    stmt.fmt_terminated(f)?;
                }
                Ok(())
            }
        }

        Source(self).to_string()
    }
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

