//! Parses and simplifies arithmetic expressions with unknowns.
//!
//! This crate ties the [`symbolic_parser`] and [`symbolic_compute`] crates together behind a
//! single entry point, [`simplify_str`]:
//!
//! ```
//! use symbolic_rs::{simplify_str, Options, OptionsBuilder};
//!
//! let result = simplify_str("2 * (x + 3)", &Options::default()).unwrap();
//! assert_eq!(result.output.to_string(), "((2) * (x)) + (6)");
//!
//! let options = OptionsBuilder::new().stepwise(true).build();
//! let result = simplify_str("2^3", &options).unwrap();
//! assert_eq!(result.output.to_string(), "(2) * (2) * (2)\n(8)\n8");
//! ```
//!
//! The `symbolic` binary in this crate is a small command-line interface and REPL built on top of
//! [`simplify_str`].

pub mod error;

pub use error::Error;
pub use symbolic_compute as compute;
pub use symbolic_parser as parser;

use std::fmt;
use symbolic_compute::{
    node::Node,
    rational::DEFAULT_DIGITS,
    tree::{Config, Step, Termination, Tree, DEFAULT_STEP_LIMIT},
};
use symbolic_error::Error as SourceError;
use symbolic_parser::Parser;
use tracing::debug;

/// Options that control how an expression is parsed and simplified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// The maximum number of important steps to take before giving up.
    ///
    /// The default value is [`DEFAULT_STEP_LIMIT`].
    pub step_limit: usize,

    /// Whether to record the intermediate forms of the expression.
    ///
    /// The default value is `false`.
    pub stepwise: bool,

    /// Whether to numerically evaluate the simplified expression, if it has no unknowns.
    ///
    /// The default value is `false`.
    pub evaluate: bool,

    /// The number of decimal digits kept when converting number literals to exact rationals.
    ///
    /// The default value is [`DEFAULT_DIGITS`]. Values above
    /// [`MAX_DIGITS`](symbolic_compute::rational::MAX_DIGITS) behave like it.
    pub digits: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            step_limit: DEFAULT_STEP_LIMIT,
            stepwise: false,
            evaluate: false,
            digits: DEFAULT_DIGITS,
        }
    }
}

impl Options {
    /// Wraps the given [`Options`] into a builder for further customization.
    pub fn into_builder(self) -> OptionsBuilder {
        OptionsBuilder(self)
    }
}

/// Helper struct to build an [`Options`] struct.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OptionsBuilder(Options);

impl OptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of important steps. See [`Options::step_limit`].
    pub fn step_limit(mut self, step_limit: usize) -> Self {
        self.0.step_limit = step_limit;
        self
    }

    /// Sets whether to record intermediate forms. See [`Options::stepwise`].
    pub fn stepwise(mut self, stepwise: bool) -> Self {
        self.0.stepwise = stepwise;
        self
    }

    /// Sets whether to evaluate the result numerically. See [`Options::evaluate`].
    pub fn evaluate(mut self, evaluate: bool) -> Self {
        self.0.evaluate = evaluate;
        self
    }

    /// Sets the digit budget for number literals. See [`Options::digits`].
    pub fn digits(mut self, digits: u32) -> Self {
        self.0.digits = digits;
        self
    }

    /// Builds the [`Options`] struct.
    pub fn build(self) -> Options {
        self.0
    }
}

/// The printed result of a simplification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// The printed form of the simplified expression.
    Simplified(String),

    /// Every important intermediate form, ending with the final form or with
    /// [`Step::StepLimitExceeded`].
    Steps(Vec<Step>),
}

impl fmt::Display for Output {
    /// Formats the result, with one step per line in stepwise mode.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simplified(form) => write!(f, "{}", form),
            Self::Steps(steps) => {
                let mut iter = steps.iter();
                if let Some(step) = iter.next() {
                    write!(f, "{}", step)?;
                    for step in iter {
                        write!(f, "\n{}", step)?;
                    }
                }
                Ok(())
            },
        }
    }
}

/// The result of [`simplify_str`].
#[derive(Debug)]
pub struct Simplification {
    /// The printed result.
    pub output: Output,

    /// The simplified expression tree.
    pub node: Node,

    /// The numeric value of the simplified expression, if evaluation was requested and the
    /// expression has no unknowns.
    pub value: Option<f64>,

    /// Errors and warnings from parsing that did not stop an expression from being built. If
    /// there are errors here, the simplified expression is based on a best-effort reading of the
    /// input.
    pub diagnostics: Vec<SourceError>,

    /// Whether the expression reached a fixed point or ran into the step limit.
    pub termination: Termination,
}

/// Parses and simplifies the given input.
///
/// Fails with [`Error::Parse`] if nothing in the input could be parsed into an expression, or
/// with [`Error::Compute`] if a rewrite rule failed, such as when dividing by zero.
pub fn simplify_str(input: &str, options: &Options) -> Result<Simplification, Error> {
    let parsed = Parser::new(input).with_digits(options.digits).parse();
    let mut diagnostics = parsed.errors;
    diagnostics.extend(parsed.warnings);

    let Some(node) = parsed.node else {
        debug!(target: "parse", errors = diagnostics.len(), "no expression could be parsed");
        return Err(Error::Parse(diagnostics));
    };

    let mut tree = Tree::with_config(node, Config { step_limit: options.step_limit });
    let (output, termination) = if options.stepwise {
        let (termination, steps) = tree.simplify_with_steps()?;
        (Output::Steps(steps), termination)
    } else {
        let termination = tree.simplify()?;
        (Output::Simplified(tree.root().to_string()), termination)
    };

    debug!(target: "simplify", ?termination, diagnostics = diagnostics.len(), "simplified input");

    let node = tree.into_root();
    let value = if options.evaluate {
        // expressions with unknowns simply have no value
        node.numeric_eval().ok()
    } else {
        None
    };

    Ok(Simplification { output, node, value, diagnostics, termination })
}
