//! Rewrite rules for products, including distribution over sums.

use crate::node::Node;
use crate::simplify::{Outcome, Replacement};
use super::{simplify_operands, Operator};
use symbolic_error::Error;

/// `a * b * (c + d) = a * b * c + a * b * d`
///
/// Only the first sum among the factors is distributed over. The remaining factors keep their
/// order, and each term of the sum is appended after them.
fn distribute(factors: &[Node]) -> Option<Node> {
    let (idx, terms) = factors.iter()
        .enumerate()
        .find_map(|(idx, factor)| match factor {
            Node::Sum(terms) => Some((idx, terms)),
            _ => None,
        })?;

    let new_terms = terms.iter()
        .map(|term| {
            let mut new_factors = Vec::with_capacity(factors.len());
            new_factors.extend(factors[..idx].iter().cloned());
            new_factors.extend(factors[idx + 1..].iter().cloned());
            new_factors.push(term.clone());
            Node::Multi(new_factors)
        })
        .collect();
    Some(Node::Sum(new_terms))
}

/// `Multi() = 1`
/// `Multi(a) = a`
/// `Multi(a, 0) = 0`
/// `Multi(a, Sum(b, c)) = Sum(Multi(a, b), Multi(a, c))`
pub fn replace(factors: &[Node]) -> Option<Replacement> {
    match factors {
        [] => return Some(Replacement::structural(Node::integer(1))),
        [factor] => return Some(Replacement::structural(factor.clone())),
        _ => (),
    }

    if let Some(zero) = factors.iter().find(|factor| factor.is_zero()) {
        return Some(Replacement::important(zero.clone()));
    }

    distribute(factors).map(Replacement::important)
}

/// `Multi(a, Multi(b, c)) = Multi(a, b, c)`
/// `Multi(a, 2, 3) = Multi(a, 6)`
/// `Multi(a, 1) = Multi(a)`
///
/// Factors that can be replaced are replaced.
pub fn simplify(factors: &mut Vec<Node>) -> Result<Outcome, Error> {
    simplify_operands(Operator::Multiply, factors)
}

#[cfg(test)]
mod tests {
    use crate::rational::Rational;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn zero_factor() {
        let factors = [Node::unknown("x"), Node::integer(0), Node::Sum(vec![])];
        assert_eq!(replace(&factors), Some(Replacement::important(Node::integer(0))));
    }

    #[test]
    fn unwrap() {
        assert_eq!(replace(&[]), Some(Replacement::structural(Node::integer(1))));
        assert_eq!(replace(&[Node::unknown("x")]), Some(Replacement::structural(Node::unknown("x"))));
        assert_eq!(replace(&[Node::unknown("x"), Node::unknown("y")]), None);
    }

    #[test]
    fn distribute_over_first_sum() {
        // a * (b + c) * (d + e)
        let factors = [
            Node::unknown("a"),
            Node::Sum(vec![Node::unknown("b"), Node::unknown("c")]),
            Node::Sum(vec![Node::unknown("d"), Node::unknown("e")]),
        ];
        let de = Node::Sum(vec![Node::unknown("d"), Node::unknown("e")]);
        assert_eq!(replace(&factors), Some(Replacement::important(Node::Sum(vec![
            Node::Multi(vec![Node::unknown("a"), de.clone(), Node::unknown("b")]),
            Node::Multi(vec![Node::unknown("a"), de, Node::unknown("c")]),
        ]))));
    }

    #[test]
    fn distribution_preserves_value() {
        let factors = [
            Node::integer(3),
            Node::Sum(vec![Node::integer(4), Node::Number(Rational::new(1, 2).unwrap())]),
        ];
        let before = Node::Multi(factors.to_vec()).numeric_eval().unwrap();
        let after = replace(&factors).unwrap().node.numeric_eval().unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn fold_numbers() {
        let mut factors = vec![Node::integer(2), Node::unknown("x"), Node::integer(3)];
        assert_eq!(simplify(&mut factors).unwrap(), Outcome::changed(true));
        assert_eq!(factors, vec![Node::unknown("x"), Node::integer(6)]);
    }

    #[test]
    fn drop_one() {
        let mut factors = vec![Node::integer(1), Node::unknown("x")];
        assert_eq!(simplify(&mut factors).unwrap(), Outcome::changed(true));
        assert_eq!(factors, vec![Node::unknown("x")]);
    }

    #[test]
    fn flatten_is_idempotent() {
        let mut factors = vec![
            Node::Multi(vec![Node::unknown("a"), Node::unknown("b")]),
            Node::unknown("c"),
        ];
        assert_eq!(simplify(&mut factors).unwrap(), Outcome::changed(false));
        let flat = factors.clone();
        assert_eq!(simplify(&mut factors).unwrap(), Outcome::UNCHANGED);
        assert_eq!(factors, flat);
    }
}
