use std::fmt::{self, Display, Formatter};

use crate::lexer::tokens::Token;

use super::{
    ast::{fmt_maybe, Expression, MaybeExpression, Node},
    statements::BlockStatement,
};

// LITERALS

/// Identifier
/// A name reference; also the left-hand side of `let` and a function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        Identifier {
            value: token.value.clone(),
            token,
        }
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Integer Literal
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl Node for IntegerLiteral {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token.value)
    }
}

/// Bool Literal
#[derive(Debug, Clone, PartialEq)]
pub struct BoolLiteral {
    pub token: Token,
    pub value: bool,
}

impl Node for BoolLiteral {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for BoolLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token.value)
    }
}

// OPERATORS

/// Prefix Expression
/// `-x` or `!x`, rendered as `(-x)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpression {
    pub token: Token,
    pub operator: String,
    pub operand: MaybeExpression,
}

impl Node for PrefixExpression {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for PrefixExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.operator)?;
        fmt_maybe(f, &self.operand)?;
        write!(f, ")")
    }
}

/// Infix Expression
/// A binary operation, rendered as `(left op right)`.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpression {
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: String,
    pub right: MaybeExpression,
}

impl Node for InfixExpression {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for InfixExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} ", self.left, self.operator)?;
        fmt_maybe(f, &self.right)?;
        write!(f, ")")
    }
}

// COMPOUND

/// If Expression
/// `if (<condition>) { ... } else { ... }`; the alternative is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpression {
    pub token: Token,
    pub condition: MaybeExpression,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

impl Node for IfExpression {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for IfExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.token_literal())?;
        fmt_maybe(f, &self.condition)?;
        write!(f, ") ")?;
        self.consequence.fmt_braced(f)?;

        if let Some(alternative) = &self.alternative {
            write!(f, " else ")?;
            alternative.fmt_braced(f)?;
        }

        Ok(())
    }
}

/// Function Literal
/// `fn(<parameters>) { <body> }`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

impl Node for FunctionLiteral {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let parameters = self
            .parameters
            .iter()
            .map(|param| param.to_string())
            .collect::<Vec<String>>();

        write!(f, "{}({}) ", self.token_literal(), parameters.join(", "))?;
        self.body.fmt_braced(f)
    }
}

/// Call Expression
/// `<callee>(<arguments>)`
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    /// The opening `(`.
    pub token: Token,
    pub callee: Box<Expression>,
    pub arguments: Vec<Expression>,
}

impl Node for CallExpression {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for CallExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let arguments = self
            .arguments
            .iter()
            .map(|arg| arg.to_string())
            .collect::<Vec<String>>();

        write!(f, "{}({})", self.callee, arguments.join(", "))
    }
}
