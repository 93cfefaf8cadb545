//! Error kinds produced by the parser.
//!
//! Apart from [`MissingExpression`], every error here is recoverable: the parser records it and
//! keeps going, so the caller still receives a best-effort tree.

use ariadne::Fmt;
use crate::tokenizer::TokenKind;
use symbolic_attrs::ErrorKind;
use symbolic_error::EXPR;

/// A token was found where an expression was expected.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = match self.found {
        TokenKind::End => "unexpected end of input".to_string(),
        found => format!("unexpected {}", found),
    },
    labels = [format!("expected an {} here", "expression".fg(EXPR))],
    help = "expressions start with a number, an unknown, `-`, `(`, or `|`",
)]
pub struct UnexpectedToken {
    /// The token that was found.
    pub found: TokenKind,
}

/// A parenthesis was opened but never closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is never closed", "expected `)` here"],
    help = format!("add a closing {} to finish the group", ")".fg(EXPR)),
)]
pub struct UnclosedParenthesis;

/// An absolute value was opened with `|` but never closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed absolute value",
    labels = ["this absolute value is never closed", "expected `|` here"],
    help = format!("add a closing {} to finish the absolute value", "|".fg(EXPR)),
)]
pub struct UnclosedAbsoluteValue;

/// A character that cannot start any token was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid character",
    labels = ["this character was skipped"],
    help = "only numbers, letters, parentheses, `|`, and the operators `+ - * / ^` are allowed",
)]
pub struct InvalidToken;

/// The source code contains no expression at all.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "there is no expression to simplify",
    labels = [format!("expected an {} here", "expression".fg(EXPR))],
)]
pub struct MissingExpression;

/// Only the start of the source code forms an expression; the rest was ignored.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "the input was not completely parsed",
    labels = ["this part was ignored"],
    note = "an operator might be missing before this input",
)]
pub struct TrailingInput;
