//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. The parser pulls tokens from
//! a [`Lexer`] with one token of lookahead and uses a Pratt parser with
//! NUD/LED handlers for expressions.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! Errors never stop the parse. They are recorded, the affected subtree is
//! left out, and parsing carries on with the next token.

use std::{collections::HashMap, mem};

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// How deeply expressions may nest before the parser gives up on one.
pub const MAX_EXPRESSION_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Token source
    lexer: Lexer,
    /// The token under examination
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Diagnostics recorded so far, in order
    errors: Vec<Error>,
    /// Literals consumed since the last complete top-level statement
    progress: Vec<String>,
    /// Expressions currently being parsed, innermost included
    depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a parser over `lexer`, with `current` and `peek` already
    /// filled and every lookup table registered.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            peek,
            errors: vec![],
            progress: vec![],
            depth: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        parser.record_progress();
        create_token_lookups(&mut parser);

        parser
    }

    /// Parses every statement up to the end of input.
    ///
    /// Statements that fail to parse are skipped; the loop always moves
    /// forward by at least one token, so it terminates on any input.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_token_is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt(self) {
                debug!(statement = %stmt, "parsed statement");
                self.progress.clear();
                program.statements.push(stmt);
            }
            self.advance();
        }

        debug!(
            statements = program.statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        program
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Moves `peek` into `current` and pulls a fresh lookahead token.
    pub fn advance(&mut self) {
        let next = self.lexer.next_token();
        self.current = mem::replace(&mut self.peek, next);
        self.record_progress();
    }

    /// Advances if the lookahead has the expected kind and returns the new
    /// current token. Otherwise records an error and returns `None`.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Option<Token> {
        if self.peek_token_is(expected_kind) {
            self.advance();
            Some(self.current.clone())
        } else {
            self.peek_error(expected_kind);
            None
        }
    }

    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.peek.kind)
    }

    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power_of(self.current.kind)
    }

    fn binding_power_of(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    /// Returns the statement handler for a token kind, if any.
    pub fn get_stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    /// Returns the NUD (null denotation) handler for a token kind, if any.
    pub fn get_nud_handler(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    /// Returns the LED (left denotation) handler for a token kind, if any.
    pub fn get_led_handler(&self, kind: TokenKind) -> Option<LEDHandler> {
        self.led_lookup.get(&kind).copied()
    }

    /// Registers a left denotation (infix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Literals consumed since the last complete top-level statement.
    pub fn progress(&self) -> String {
        self.progress.join(" ")
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// The diagnostics as plain messages, in the order they were recorded.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    pub fn push_error(&mut self, error: Error) {
        debug!(error = %error, "parse error");
        self.errors.push(error);
    }

    /// Enters one more level of expression nesting. Past
    /// [`MAX_EXPRESSION_DEPTH`] this records an error and returns false, and
    /// the caller must not call [`Parser::leave_expression`].
    pub fn enter_expression(&mut self) -> bool {
        if self.depth >= MAX_EXPRESSION_DEPTH {
            let error = Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_EXPRESSION_DEPTH,
                },
                self.current.span.start.clone(),
            );
            self.push_error(error);
            return false;
        }

        self.depth += 1;
        true
    }

    pub fn leave_expression(&mut self) {
        self.depth -= 1;
    }

    fn peek_error(&mut self, expected: TokenKind) {
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected,
                found: self.peek.kind,
                progress: self.progress(),
            },
            self.peek.span.start.clone(),
        );
        self.push_error(error);
    }

    fn record_progress(&mut self) {
        if !self.current.value.is_empty() {
            self.progress.push(self.current.value.clone());
        }
    }
}

/// Parses `lexer` to the end, returning the program and its diagnostics.
///
/// Both are always returned; callers decide whether any diagnostic makes the
/// tree unusable.
pub fn parse(lexer: Lexer) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    (program, parser.into_errors())
}
