//! The shared recursive-descent engine behind both parenthesized grammars
//!
//! One character-stream state machine serves prefix and postfix notation;
//! the two modes differ only in how an operation's symbol and operand list
//! are gathered between the parentheses. Positions are zero-based character
//! offsets into the input.

use crate::ast::Expr;
use crate::context::Context;
use crate::error::{ParseError, ParseErrorKind};
use crate::operations::registry::{Arity, OpDef, Registry};

/// Which grammar the engine is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Mode {
    /// `(op arg1 ... argN)`
    Prefix,
    /// `(arg1 ... argN op)`
    Postfix,
}

/// One parsed element: a registered operator symbol, or a finished operand
enum Element {
    Op(OpDef),
    Operand(Expr),
}

pub(super) struct Engine<'a> {
    chars: Vec<char>,
    pos: usize,
    ctx: &'a Context,
}

impl<'a> Engine<'a> {
    pub(super) fn new(input: &str, ctx: &'a Context) -> Self {
        Engine {
            chars: input.chars().collect(),
            pos: 0,
            ctx,
        }
    }

    /// Parse exactly one top-level expression and require the stream to be
    /// exhausted afterwards.
    pub(super) fn parse(mut self, mode: Mode) -> Result<Expr, ParseError> {
        let expr = match self.element(mode)? {
            None => return Err(self.error(ParseErrorKind::EmptyExpression)),
            Some(Element::Op(def)) => {
                // a bare operator token is not an expression
                return Err(self.error(ParseErrorKind::InvalidToken {
                    token: def.name().to_string(),
                }));
            }
            Some(Element::Operand(expr)) => expr,
        };
        self.skip_ws();
        self.expect_end()?;
        Ok(expr)
    }

    // ===== character primitives =====

    fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn skip_ws(&mut self) {
        while self.current().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn test(&self, expected: char) -> bool {
        self.current() == Some(expected)
    }

    fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        if !self.test(expected) {
            return Err(self.error(ParseErrorKind::Unexpected {
                expected: format!("\"{}\"", expected),
                actual: self.describe_current(),
            }));
        }
        self.advance();
        Ok(())
    }

    fn expect_end(&mut self) -> Result<(), ParseError> {
        if self.current().is_some() {
            return Err(self.error(ParseErrorKind::Unexpected {
                expected: "end of input".to_string(),
                actual: self.describe_current(),
            }));
        }
        Ok(())
    }

    fn describe_current(&self) -> String {
        match self.current() {
            Some(c) => format!("\"{}\"", c),
            None => "end of input".to_string(),
        }
    }

    /// Maximal run of characters excluding whitespace and parentheses;
    /// trailing whitespace is consumed as well
    fn next_token(&mut self) -> String {
        let mut token = String::new();
        while let Some(c) = self.current() {
            if c.is_whitespace() || c == '(' || c == ')' {
                break;
            }
            token.push(c);
            self.advance();
        }
        self.skip_ws();
        token
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(self.pos, kind)
    }

    // ===== grammar =====

    /// One element: a parenthesized operation, a classified bare token, or
    /// `None` at a position where no token starts (the operand-loop
    /// terminator).
    fn element(&mut self, mode: Mode) -> Result<Option<Element>, ParseError> {
        self.skip_ws();
        if self.test('(') {
            self.advance();
            let (def, args) = self.operands(mode)?;
            if let Arity::Fixed(needed) = def.arity() {
                if needed != args.len() {
                    return Err(self.error(ParseErrorKind::ArityMismatch {
                        op: def.name().to_string(),
                        needed,
                        actual: args.len(),
                    }));
                }
            }
            self.skip_ws();
            self.expect(')')?;
            return Ok(Some(Element::Operand(Expr::operation(def, args))));
        }
        let token = self.next_token();
        self.classify(token)
    }

    /// Gather an operation's symbol and operand list per the grammar mode
    fn operands(&mut self, mode: Mode) -> Result<(OpDef, Vec<Expr>), ParseError> {
        match mode {
            Mode::Prefix => {
                let def = self.operation_symbol()?;
                let mut args = Vec::new();
                loop {
                    match self.element(mode)? {
                        None => break,
                        Some(Element::Op(inner)) => {
                            return Err(self.error(ParseErrorKind::OperationAsOperand {
                                token: inner.name().to_string(),
                            }));
                        }
                        Some(Element::Operand(expr)) => args.push(expr),
                    }
                }
                Ok((def, args))
            }
            Mode::Postfix => {
                let mut args = Vec::new();
                loop {
                    match self.element(mode)? {
                        None => return Err(self.error(ParseErrorKind::MissingOperation)),
                        Some(Element::Op(def)) => return Ok((def, args)),
                        Some(Element::Operand(expr)) => args.push(expr),
                    }
                }
            }
        }
    }

    /// Prefix grammar: the token right after `(` must be a registered
    /// operator
    fn operation_symbol(&mut self) -> Result<OpDef, ParseError> {
        self.skip_ws();
        let token = self.next_token();
        match Registry::resolve(&token) {
            Some(def) => Ok(def),
            None => Err(self.error(ParseErrorKind::ExpectedOperation { found: token })),
        }
    }

    /// Classification order: registered operator, then declared variable,
    /// then number literal
    fn classify(&mut self, token: String) -> Result<Option<Element>, ParseError> {
        if token.is_empty() {
            return Ok(None);
        }
        if let Some(def) = Registry::resolve(&token) {
            return Ok(Some(Element::Op(def)));
        }
        if self.ctx.is_variable(&token) {
            return Ok(Some(Element::Operand(Expr::variable(token))));
        }
        match token.parse::<f64>() {
            Ok(value) => Ok(Some(Element::Operand(Expr::constant(value)))),
            Err(_) => Err(self.error(ParseErrorKind::InvalidToken { token })),
        }
    }
}
