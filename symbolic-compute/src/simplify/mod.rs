//! The two rewrite operations every [`Node`] supports.
//!
//! - [`Node::replace`] asks whether the node as a whole can be substituted by a different, simpler
//!   node. It never changes the node itself; the caller decides what to do with the replacement.
//! - [`Node::simplify`] normalizes the node in place, usually by swapping in the replacements of
//!   its children, or by merging children of the same kind into it.
//!
//! The rules for each kind of node live in the [`rules`] module. The [`Tree`](crate::tree::Tree)
//! driver decides which node to rewrite next.

pub(crate) mod rules;

use crate::node::Node;
use symbolic_error::Error;

/// The result of a successful [`Node::replace`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// The node to substitute in place of the original.
    pub node: Node,

    /// Whether the substitution is worth showing in a trace of the rewrite.
    pub important: bool,
}

impl Replacement {
    /// A substitution that should appear in a trace, such as constant folding.
    pub fn important(node: Node) -> Self {
        Self { node, important: true }
    }

    /// A purely structural substitution, such as unwrapping a sum with a single term.
    pub fn structural(node: Node) -> Self {
        Self { node, important: false }
    }
}

/// The result of a call to [`Node::simplify`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Whether the node was modified.
    pub changed: bool,

    /// Whether the modification is worth showing in a trace of the rewrite. Always false if
    /// `changed` is false.
    pub important: bool,
}

impl Outcome {
    /// The node was left as is.
    pub const UNCHANGED: Self = Self { changed: false, important: false };

    /// The node was modified.
    pub fn changed(important: bool) -> Self {
        Self { changed: true, important }
    }
}

impl Node {
    /// Returns the node that this node can be substituted with, if any.
    ///
    /// Fails if the substitution requires an invalid computation, such as dividing by a zero
    /// literal.
    pub fn replace(&self) -> Result<Option<Replacement>, Error> {
        Ok(match self {
            Self::Number(_) | Self::Unknown(_) => None,
            Self::Sum(terms) => rules::sum::replace(terms),
            Self::Multi(factors) => rules::multi::replace(factors),
            Self::Divide(lhs, rhs) => rules::divide::replace(lhs, rhs)?,
            Self::Power(base, exponent) => rules::power::replace(base, exponent),
            Self::AbsoluteValue(child) => rules::absolute::replace(child),
        })
    }

    /// Normalizes this node in place, returning whether anything changed.
    ///
    /// If the returned [`Outcome`] is unchanged, the node is guaranteed to be untouched.
    pub fn simplify(&mut self) -> Result<Outcome, Error> {
        match self {
            Self::Number(_) | Self::Unknown(_) => Ok(Outcome::UNCHANGED),
            Self::Sum(terms) => rules::sum::simplify(terms),
            Self::Multi(factors) => rules::multi::simplify(factors),
            Self::Divide(lhs, rhs) => rules::divide::simplify(lhs, rhs),
            Self::Power(base, exponent) => rules::power::simplify(base, exponent),
            Self::AbsoluteValue(child) => rules::absolute::simplify(child),
        }
    }
}

/// If the given node can be replaced, swaps in its replacement.
pub(crate) fn forward_replace(node: &mut Node) -> Result<Outcome, Error> {
    match node.replace()? {
        Some(replacement) => {
            *node = replacement.node;
            Ok(Outcome::changed(replacement.important))
        },
        None => Ok(Outcome::UNCHANGED),
    }
}

/// Swaps in the replacement of the first node in the list that can be replaced.
pub(crate) fn forward_first_replace(nodes: [&mut Node; 2]) -> Result<Outcome, Error> {
    for node in nodes {
        let outcome = forward_replace(node)?;
        if outcome.changed {
            return Ok(outcome);
        }
    }
    Ok(Outcome::UNCHANGED)
}
