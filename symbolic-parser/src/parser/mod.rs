pub mod error;

use crate::tokenizer::{Scanner, TokenCursor, TokenKind};
use error::{
    InvalidToken,
    MissingExpression,
    TrailingInput,
    UnclosedAbsoluteValue,
    UnclosedParenthesis,
    UnexpectedToken,
};
use symbolic_compute::{
    node::{Node, Product},
    rational::{Rational, DEFAULT_DIGITS},
};
use symbolic_error::Error;
use tracing::warn;

/// The result of parsing some source code.
#[derive(Debug)]
pub struct Parsed {
    /// The parsed expression, or [`None`] if nothing in the source could be parsed.
    pub node: Option<Node>,

    /// Errors that were recovered from. If not empty, `node` is only a best-effort approximation of
    /// the source code.
    pub errors: Vec<Error>,

    /// Problems that did not affect the parsed expression, such as input left over after it.
    pub warnings: Vec<Error>,
}

impl Parsed {
    /// Returns true if an expression was parsed without any errors. Warnings are allowed.
    pub fn is_ok(&self) -> bool {
        self.node.is_some() && self.errors.is_empty()
    }
}

/// A recursive-descent parser for arithmetic expressions:
///
/// ```text
/// Expression   := Term { ('+' | '-') Term }
/// Term         := Factor { ('*' | '/') Factor }
/// Factor       := SimpleFactor [ '^' Factor ]
/// SimpleFactor := '(' Expression ')'
///               | '|' Expression '|'
///               | Number
///               | Identifier
///               | '-' Factor
/// ```
///
/// The parser never gives up on the first error. Errors are collected in a list of recoverable
/// errors, and operands that could not be parsed are left out of the tree.
#[derive(Debug, Clone)]
pub struct Parser<C> {
    /// The tokens that this parser is currently parsing.
    cursor: C,

    /// The number of decimal digits kept when converting number literals to rationals.
    digits: u32,
}

impl<'source> Parser<Scanner<'source>> {
    /// Creates a parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self::with_cursor(Scanner::new(source))
    }
}

impl<C: TokenCursor> Parser<C> {
    /// Creates a parser that reads tokens from the given cursor.
    pub fn with_cursor(cursor: C) -> Self {
        Self { cursor, digits: DEFAULT_DIGITS }
    }

    /// Sets the number of decimal digits kept when converting number literals to rationals.
    pub fn with_digits(mut self, digits: u32) -> Self {
        self.digits = digits;
        self
    }

    /// Parses the whole token stream as a single expression.
    pub fn parse(mut self) -> Parsed {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if self.cursor.kind() == TokenKind::End {
            let err = Error::new(vec![self.cursor.span()], MissingExpression);
            return Parsed { node: None, errors: vec![err], warnings };
        }

        let node = self.expression(&mut errors);

        if self.cursor.kind() != TokenKind::End {
            let start = self.cursor.span().start;
            let mut end = self.cursor.span().end;
            while self.cursor.kind() != TokenKind::End {
                end = self.cursor.span().end;
                self.cursor.advance();
            }

            warn!(target: "parse", span = ?(start..end), "input not completely parsed");
            warnings.push(Error::new(vec![start..end], TrailingInput));
        }

        Parsed { node, errors, warnings }
    }

    /// Records a recoverable error.
    fn record(recoverable_errors: &mut Vec<Error>, err: Error) {
        warn!(target: "parse", spans = ?err.spans, "{}", err);
        recoverable_errors.push(err);
    }

    /// `Expression := Term { ('+' | '-') Term }`
    fn expression(&mut self, recoverable_errors: &mut Vec<Error>) -> Option<Node> {
        let first = self.term(recoverable_errors);
        if !matches!(self.cursor.kind(), TokenKind::Plus | TokenKind::Minus) {
            return first;
        }

        let mut terms = first.into_iter().collect::<Vec<_>>();
        while let kind @ (TokenKind::Plus | TokenKind::Minus) = self.cursor.kind() {
            self.cursor.advance();
            if let Some(term) = self.term(recoverable_errors) {
                if kind == TokenKind::Minus {
                    terms.push(Node::negate(term));
                } else {
                    terms.push(term);
                }
            }
        }

        if terms.is_empty() {
            None
        } else {
            Some(Node::Sum(terms))
        }
    }

    /// `Term := Factor { ('*' | '/') Factor }`
    fn term(&mut self, recoverable_errors: &mut Vec<Error>) -> Option<Node> {
        let first = self.factor(recoverable_errors);
        if !matches!(self.cursor.kind(), TokenKind::Multiply | TokenKind::Divide) {
            return first;
        }

        let mut product = Product::new();
        if let Some(first) = first {
            product.multiply(first);
        }

        while let kind @ (TokenKind::Multiply | TokenKind::Divide) = self.cursor.kind() {
            self.cursor.advance();
            if let Some(factor) = self.factor(recoverable_errors) {
                if kind == TokenKind::Multiply {
                    product.multiply(factor);
                } else {
                    product.divide(factor);
                }
            }
        }

        if product.is_empty() {
            None
        } else {
            Some(product.fold())
        }
    }

    /// `Factor := SimpleFactor [ '^' Factor ]`
    fn factor(&mut self, recoverable_errors: &mut Vec<Error>) -> Option<Node> {
        let base = self.simple_factor(recoverable_errors);
        if self.cursor.kind() != TokenKind::Power {
            return base;
        }

        self.cursor.advance();
        let exponent = self.factor(recoverable_errors);

        // without a base, the exponent is meaningless and dropped as well
        match (base, exponent) {
            (Some(base), Some(exponent)) => Some(Node::power(base, exponent)),
            (base, _) => base,
        }
    }

    /// Parses the contents of a delimited group, such as `( ... )`, then expects the closing
    /// delimiter.
    fn delimited(
        &mut self,
        recoverable_errors: &mut Vec<Error>,
        close: TokenKind,
        unclosed: impl FnOnce(Vec<std::ops::Range<usize>>) -> Error,
    ) -> Option<Node> {
        let open_span = self.cursor.span();
        self.cursor.advance();

        let inner = self.expression(recoverable_errors);
        if self.cursor.kind() == close {
            self.cursor.advance();
        } else {
            Self::record(recoverable_errors, unclosed(vec![open_span, self.cursor.span()]));
        }

        inner
    }

    /// ```text
    /// SimpleFactor := '(' Expression ')'
    ///               | '|' Expression '|'
    ///               | Number
    ///               | Identifier
    ///               | '-' Factor
    /// ```
    fn simple_factor(&mut self, recoverable_errors: &mut Vec<Error>) -> Option<Node> {
        // skip invalid characters
        while self.cursor.kind() == TokenKind::Error {
            Self::record(recoverable_errors, Error::new(vec![self.cursor.span()], InvalidToken));
            self.cursor.advance();
        }

        match self.cursor.kind() {
            TokenKind::LParen => self.delimited(
                recoverable_errors,
                TokenKind::RParen,
                |spans| Error::new(spans, UnclosedParenthesis),
            ),
            TokenKind::Pipe => self.delimited(
                recoverable_errors,
                TokenKind::Pipe,
                |spans| Error::new(spans, UnclosedAbsoluteValue),
            ).map(Node::absolute_value),
            TokenKind::Number => {
                let span = self.cursor.span();
                let value = self.cursor.number().unwrap_or(f64::NAN);
                self.cursor.advance();

                match Rational::from_f64_digits(value, self.digits) {
                    Ok(value) => Some(Node::Number(value)),
                    Err(err) => {
                        Self::record(recoverable_errors, err.with_spans(vec![span]));
                        None
                    },
                }
            },
            TokenKind::Identifier => {
                let name = self.cursor.identifier().unwrap_or_default().to_string();
                self.cursor.advance();
                Some(Node::Unknown(name))
            },
            TokenKind::Minus => {
                self.cursor.advance();
                self.factor(recoverable_errors).map(Node::negate)
            },
            found => {
                let err = Error::new(vec![self.cursor.span()], UnexpectedToken { found });
                Self::record(recoverable_errors, err);
                None
            },
        }
    }
}
