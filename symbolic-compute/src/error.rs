//! Error kinds raised by rational arithmetic, numeric evaluation and the rewrite rules.
//!
//! None of these errors know where in the source code they came from, so they are created with
//! [`Error::spanless`](symbolic_error::Error::spanless). The parser attaches spans where it can.

use ariadne::Fmt;
use symbolic_attrs::ErrorKind;
use symbolic_error::EXPR;

/// An unknown was evaluated numerically. Unknowns have no binding, so this always fails.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot numerically evaluate the unknown `{}`", self.name),
    labels = ["this unknown"],
    help = format!("only expressions without unknowns have a {} value", "numeric".fg(EXPR)),
)]
pub struct Unevaluable {
    /// The name of the unknown.
    pub name: String,
}

/// A rational number was constructed with a zero denominator, or divided by zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this divisor is zero"],
)]
pub struct DivisionByZero;

/// A floating-point value that is `NaN` or infinite cannot be turned into a rational number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a finite number", self.value),
    labels = ["this number"],
    help = "numbers must be finite to be represented exactly",
)]
pub struct NonFiniteNumber {
    /// The value that could not be converted.
    pub value: f64,
}
