//! Rewrite rules for division.
//!
//! Only division by a number is rewritten. Cancelling common symbolic factors would require
//! assuming those factors are nonzero, so it is not done.

use crate::node::Node;
use crate::simplify::{forward_first_replace, Outcome, Replacement};
use symbolic_error::Error;

/// `a / 5 = a * (1/5)`
///
/// Fails with [`DivisionByZero`](crate::error::DivisionByZero) if the divisor is the number zero.
pub fn replace(lhs: &Node, rhs: &Node) -> Result<Option<Replacement>, Error> {
    let Some(divisor) = rhs.as_number() else {
        return Ok(None);
    };

    let factor = Node::Number(divisor.recip()?);
    Ok(Some(Replacement::important(Node::Multi(vec![lhs.clone(), factor]))))
}

/// Replaces the dividend if possible, otherwise the divisor.
pub fn simplify(lhs: &mut Node, rhs: &mut Node) -> Result<Outcome, Error> {
    forward_first_replace([lhs, rhs])
}

#[cfg(test)]
mod tests {
    use crate::{error::DivisionByZero, rational::Rational};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn divide_by_number() {
        let replacement = replace(&Node::unknown("x"), &Node::integer(4)).unwrap();
        assert_eq!(replacement, Some(Replacement::important(Node::Multi(vec![
            Node::unknown("x"),
            Node::Number(Rational::new(1, 4).unwrap()),
        ]))));
    }

    #[test]
    fn divide_by_zero_fails() {
        let err = replace(&Node::integer(1), &Node::integer(0)).unwrap_err();
        assert!(err.is::<DivisionByZero>());
    }

    #[test]
    fn symbolic_divisor_is_left_alone() {
        let lhs = Node::Multi(vec![Node::unknown("x"), Node::unknown("y")]);
        assert_eq!(replace(&lhs, &Node::unknown("x")).unwrap(), None);
    }

    #[test]
    fn simplify_prefers_dividend() {
        let mut lhs = Node::Sum(vec![Node::unknown("a")]);
        let mut rhs = Node::Multi(vec![Node::unknown("b")]);
        assert_eq!(simplify(&mut lhs, &mut rhs).unwrap(), Outcome::changed(false));
        assert_eq!(lhs, Node::unknown("a"));
        assert_eq!(rhs, Node::Multi(vec![Node::unknown("b")]));

        assert_eq!(simplify(&mut lhs, &mut rhs).unwrap(), Outcome::changed(false));
        assert_eq!(rhs, Node::unknown("b"));

        assert_eq!(simplify(&mut lhs, &mut rhs).unwrap(), Outcome::UNCHANGED);
    }
}
