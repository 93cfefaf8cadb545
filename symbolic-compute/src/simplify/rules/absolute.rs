//! Rewrite rules for absolute values.

use crate::node::Node;
use crate::simplify::{forward_replace, Outcome, Replacement};
use symbolic_error::Error;

/// `|-5| = 5`
pub fn replace(child: &Node) -> Option<Replacement> {
    child.as_number()
        .map(|value| Replacement::important(Node::Number(value.abs())))
}

/// Replaces the child if possible.
pub fn simplify(child: &mut Node) -> Result<Outcome, Error> {
    forward_replace(child)
}
