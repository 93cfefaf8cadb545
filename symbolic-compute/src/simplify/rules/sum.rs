//! Rewrite rules for sums.

use crate::node::Node;
use crate::simplify::{Outcome, Replacement};
use super::{simplify_operands, Operator};
use symbolic_error::Error;

/// `Sum() = 0`
/// `Sum(a) = a`
pub fn replace(terms: &[Node]) -> Option<Replacement> {
    match terms {
        [] => Some(Replacement::structural(Node::integer(0))),
        [term] => Some(Replacement::structural(term.clone())),
        _ => None,
    }
}

/// `Sum(a, Sum(b, c)) = Sum(a, b, c)`
/// `Sum(a, 2, 3) = Sum(a, 5)`
/// `Sum(a, 0) = Sum(a)`
///
/// Terms that can be replaced are replaced.
pub fn simplify(terms: &mut Vec<Node>) -> Result<Outcome, Error> {
    simplify_operands(Operator::Add, terms)
}
