//! Rewrite rules for powers.

use crate::node::Node;
use crate::rational::Rational;
use crate::simplify::{forward_first_replace, Outcome, Replacement};
use symbolic_error::Error;

/// The largest number of nodes a power may expand into, counting nested powers in its base as
/// expanded too. Powers that would grow larger are left as they are.
pub const MAX_POWER_EXPANSION: u64 = 4096;

/// The number of nodes `node` would have once every power with an integer exponent inside it is
/// expanded.
fn expanded_size(node: &Node) -> u64 {
    if let Node::Power(base, exponent) = node {
        if let Some(exponent) = exponent.as_number().and_then(Rational::to_i64) {
            return match exponent.unsigned_abs() {
                0 => 1,
                count => expanded_size(base).saturating_mul(count).saturating_add(1),
            };
        }
    }

    node.children()
        .into_iter()
        .fold(1, |size, child| size.saturating_add(expanded_size(child)))
}

/// `a^0 = 1`
/// `a^3 = a * a * a`
/// `a^-3 = 1 / (a * a * a)`
///
/// Only applies if the exponent is an integer, and the expansion stays within
/// [`MAX_POWER_EXPANSION`] nodes.
pub fn replace(base: &Node, exponent: &Node) -> Option<Replacement> {
    let exponent = exponent.as_number()?.to_i64()?;
    let count = exponent.unsigned_abs();
    if expanded_size(base).saturating_mul(count) > MAX_POWER_EXPANSION {
        return None;
    }

    if count == 0 {
        return Some(Replacement::important(Node::integer(1)));
    }

    let product = Node::Multi(vec![base.clone(); count as usize]);
    if exponent < 0 {
        Some(Replacement::important(Node::divide(Node::integer(1), product)))
    } else {
        Some(Replacement::important(product))
    }
}

/// Replaces the base if possible, otherwise the exponent.
pub fn simplify(base: &mut Node, exponent: &mut Node) -> Result<Outcome, Error> {
    forward_first_replace([base, exponent])
}
