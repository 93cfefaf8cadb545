//! Implementation of the rewrite rules for each kind of node.
//!
//! Each submodule exposes a `replace` function, which returns `Some(replacement)` if the node can
//! be substituted as a whole, and a `simplify` function, which normalizes the node in place.

pub mod absolute;
pub mod divide;
pub mod multi;
pub mod power;
pub mod sum;

use crate::{node::Node, rational::Rational};
use super::{Outcome, Replacement};
use symbolic_error::Error;

/// The operator of an n-ary node, which decides how its numeric operands are folded together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operator {
    Add,
    Multiply,
}

impl Operator {
    /// The value that leaves other values unchanged under this operator.
    fn identity(self) -> Rational {
        match self {
            Self::Add => Rational::zero(),
            Self::Multiply => Rational::one(),
        }
    }

    fn is_identity(self, value: &Rational) -> bool {
        match self {
            Self::Add => value.is_zero(),
            Self::Multiply => value.is_one(),
        }
    }

    fn combine(self, acc: &mut Rational, value: &Rational) {
        match self {
            Self::Add => *acc += value,
            Self::Multiply => *acc *= value,
        }
    }

    /// If the node is an n-ary node with this operator, returns its operands.
    fn operands(self, node: &Node) -> Option<&[Node]> {
        match (self, node) {
            (Self::Add, Node::Sum(terms)) => Some(terms),
            (Self::Multiply, Node::Multi(factors)) => Some(factors),
            _ => None,
        }
    }
}

/// An operand that survives [`simplify_operands`].
enum Kept<'a> {
    /// The operand is kept as is.
    Original(&'a Node),

    /// The operand was replaced.
    Replaced(Node),
}

impl Kept<'_> {
    fn into_owned(self) -> Node {
        match self {
            Self::Original(node) => node.clone(),
            Self::Replaced(node) => node,
        }
    }
}

/// The operands of an n-ary node, sorted out by [`collect`].
#[derive(Default)]
struct Collected<'a> {
    kept: Vec<Kept<'a>>,
    numbers: Vec<&'a Rational>,
    outcome: Outcome,
}

/// Sorts the given operands into the ones to keep and the numbers to fold. Operands of nested
/// nodes with the same operator are sorted out as if they were operands of the outer node.
fn collect<'a>(op: Operator, operands: &'a [Node], out: &mut Collected<'a>) -> Result<(), Error> {
    for operand in operands {
        if let Some(Replacement { node, important }) = operand.replace()? {
            out.outcome.changed = true;
            out.outcome.important |= important;
            out.kept.push(Kept::Replaced(node));
        } else if let Some(inner) = op.operands(operand) {
            out.outcome.changed = true;
            collect(op, inner, out)?;
        } else if let Some(value) = operand.as_number() {
            out.numbers.push(value);
        } else {
            out.kept.push(Kept::Original(operand));
        }
    }

    Ok(())
}

/// Simplifies the operands of a sum or product in place:
///
/// - operands that can be replaced are replaced
/// - nested nodes with the same operator are flattened
/// - numbers are folded into one, which is placed last, or dropped if it is the identity
///
/// The operands are only rebuilt if one of these actually changed something.
pub(crate) fn simplify_operands(op: Operator, operands: &mut Vec<Node>) -> Result<Outcome, Error> {
    let Collected { kept, numbers, mut outcome } = {
        let mut collected = Collected::default();
        collect(op, operands, &mut collected)?;
        collected
    };

    // a lone number that is not the identity is left where it is, unless something else changed
    if numbers.len() >= 2 || numbers.iter().any(|value| op.is_identity(value)) {
        outcome = Outcome::changed(true);
    }

    if !outcome.changed {
        return Ok(Outcome::UNCHANGED);
    }

    let mut total = op.identity();
    for value in numbers {
        op.combine(&mut total, value);
    }

    let mut new_operands = kept.into_iter()
        .map(Kept::into_owned)
        .collect::<Vec<_>>();
    if !op.is_identity(&total) {
        new_operands.push(Node::Number(total));
    }

    *operands = new_operands;
    Ok(outcome)
}
