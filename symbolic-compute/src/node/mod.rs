//! The expression tree.
//!
//! An expression is a tree of [`Node`]s. Every node owns its children outright; no subtree is
//! ever shared between two parents, so rewriting one part of the tree can never affect another.
//!
//! Sums and products are n-ary: `a + b + c` may be a single [`Node::Sum`] with three children.
//! Subtraction has no node of its own; `a - b` is represented as `a + (-1) * b`. Likewise, the
//! mixed `*` / `/` chains produced by the parser are folded by [`Product`] into nested
//! [`Node::Multi`] and [`Node::Divide`] nodes before they are placed in a tree.
//!
//! # Printing
//!
//! The [`Display`](fmt::Display) implementation parenthesizes every operand of every operator,
//! for example `(a) + ((b) * (c))`. The output is verbose, but it always parses back into a tree
//! with the same numeric value.
//!
//! ```
//! use symbolic_compute::node::Node;
//!
//! let node = Node::Sum(vec![Node::unknown("a"), Node::Multi(vec![Node::unknown("b"), Node::integer(2)])]);
//! assert_eq!(node.to_string(), "(a) + ((b) * (2))");
//! ```

mod iter;
mod product;

use crate::{error::Unevaluable, rational::Rational};
use std::fmt;
use symbolic_error::Error;

pub use iter::LevelOrderIter;
pub use product::Product;

/// A single node of an expression tree.
///
/// The [`PartialEq`] implementation is structural and order-sensitive: `a + b` and `b + a` are
/// not equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An exact numeric literal, such as `3` or `3/4`.
    Number(Rational),

    /// A named unknown, such as `x`. Unknowns have no value.
    Unknown(String),

    /// Terms added together.
    Sum(Vec<Node>),

    /// Factors multiplied together.
    Multi(Vec<Node>),

    /// The left node divided by the right node.
    Divide(Box<Node>, Box<Node>),

    /// The left node (base) raised to the power of the right node (exponent).
    Power(Box<Node>, Box<Node>),

    /// The absolute value of a node.
    AbsoluteValue(Box<Node>),
}

impl Node {
    /// Creates a [`Node::Number`] containing the given integer.
    pub fn integer(value: i64) -> Self {
        Self::Number(Rational::integer(value))
    }

    /// Creates a [`Node::Unknown`] with the given name.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::Unknown(name.into())
    }

    /// Creates a [`Node::Divide`] node.
    pub fn divide(lhs: Node, rhs: Node) -> Self {
        Self::Divide(Box::new(lhs), Box::new(rhs))
    }

    /// Creates a [`Node::Power`] node.
    pub fn power(base: Node, exponent: Node) -> Self {
        Self::Power(Box::new(base), Box::new(exponent))
    }

    /// Creates a [`Node::AbsoluteValue`] node.
    pub fn absolute_value(child: Node) -> Self {
        Self::AbsoluteValue(Box::new(child))
    }

    /// Negates a node by multiplying it by `-1`. No simplification is done.
    pub fn negate(node: Node) -> Self {
        Self::Multi(vec![Self::integer(-1), node])
    }

    /// If the node is a [`Node::Number`], returns a reference to the contained value.
    pub fn as_number(&self) -> Option<&Rational> {
        match self {
            Self::Number(value) => Some(value),
            _ => None,
        }
    }

    /// Returns true if the node is a [`Node::Number`] with the value zero.
    pub fn is_zero(&self) -> bool {
        self.as_number().map_or(false, Rational::is_zero)
    }

    /// Returns the direct children of this node, in traversal order: list order for sums and
    /// products, left then right for binary nodes.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Self::Number(_) | Self::Unknown(_) => Vec::new(),
            Self::Sum(children) | Self::Multi(children) => children.iter().collect(),
            Self::Divide(lhs, rhs) | Self::Power(lhs, rhs) => vec![lhs, rhs],
            Self::AbsoluteValue(child) => vec![child],
        }
    }

    /// Returns mutable references to the direct children of this node, in the same order as
    /// [`Node::children`].
    pub fn children_mut(&mut self) -> Vec<&mut Node> {
        match self {
            Self::Number(_) | Self::Unknown(_) => Vec::new(),
            Self::Sum(children) | Self::Multi(children) => children.iter_mut().collect(),
            Self::Divide(lhs, rhs) | Self::Power(lhs, rhs) => vec![lhs, rhs],
            Self::AbsoluteValue(child) => vec![child],
        }
    }

    /// Returns an iterator that traverses this node and all of its descendants in breadth-first
    /// (level) order, left to right within each level.
    pub fn level_order_iter(&self) -> LevelOrderIter {
        LevelOrderIter::new(self)
    }

    /// The number of nodes in the tree rooted at this node, including itself.
    pub fn node_count(&self) -> usize {
        self.level_order_iter().count()
    }

    /// The number of nodes on the longest path from this node down to a leaf, including both.
    pub fn depth(&self) -> usize {
        1 + self.children().into_iter().map(Node::depth).max().unwrap_or(0)
    }

    /// Evaluates the node with floating-point arithmetic.
    ///
    /// This is independent of the rewrite rules and never changes the tree. Fails with
    /// [`Unevaluable`] if the tree contains a [`Node::Unknown`].
    pub fn numeric_eval(&self) -> Result<f64, Error> {
        Ok(match self {
            Self::Number(value) => value.to_f64(),
            Self::Unknown(name) => return Err(Error::spanless(Unevaluable { name: name.clone() })),
            Self::Sum(terms) => {
                let mut sum = 0.0;
                for term in terms {
                    sum += term.numeric_eval()?;
                }
                sum
            },
            Self::Multi(factors) => {
                let mut product = 1.0;
                for factor in factors {
                    product *= factor.numeric_eval()?;
                }
                product
            },
            Self::Divide(lhs, rhs) => lhs.numeric_eval()? / rhs.numeric_eval()?,
            Self::Power(base, exponent) => base.numeric_eval()?.powf(exponent.numeric_eval()?),
            Self::AbsoluteValue(child) => child.numeric_eval()?.abs(),
        })
    }
}

/// Writes each item wrapped in parentheses, separated by the given operator.
fn write_operands(f: &mut fmt::Formatter<'_>, operands: &[Node], op: &str) -> fmt::Result {
    let mut iter = operands.iter();
    if let Some(operand) = iter.next() {
        write!(f, "({})", operand)?;
        for operand in iter {
            write!(f, " {} ({})", op, operand)?;
        }
    }
    Ok(())
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", value),
            Self::Unknown(name) => write!(f, "{}", name),
            // empty sums and products are printed as their identity so the output stays parsable
            Self::Sum(terms) if terms.is_empty() => write!(f, "0"),
            Self::Multi(factors) if factors.is_empty() => write!(f, "1"),
            Self::Sum(terms) => write_operands(f, terms, "+"),
            Self::Multi(factors) => write_operands(f, factors, "*"),
            Self::Divide(lhs, rhs) => write!(f, "({}) / ({})", lhs, rhs),
            Self::Power(base, exponent) => write!(f, "({}) ^ ({})", base, exponent),
            Self::AbsoluteValue(child) => write!(f, "| {} |", child),
        }
    }
}
