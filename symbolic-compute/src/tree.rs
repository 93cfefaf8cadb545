//! The rewrite engine, which repeatedly applies the rewrite rules to a whole expression tree until
//! none apply.
//!
//! Each iteration of [`Tree::simplify`] makes at most one change:
//!
//! 1. If the root can be replaced, it is replaced.
//! 2. Otherwise, the tree is searched breadth-first, left to right, for the first node that
//!    [`simplifies`](Node::simplify). Only that node is changed.
//! 3. If neither step changed anything, the tree is at a fixed point and the loop stops.
//!
//! Changes marked as important are recorded as [`Step`]s, which hold the printed form of the whole
//! tree right after the change. The loop gives up once the number of recorded steps reaches
//! [`Config::step_limit`].

use crate::{node::Node, simplify::Outcome, step_collector::StepCollector};
use std::{collections::VecDeque, fmt};
use symbolic_error::Error;
use tracing::{debug, trace, warn};

/// The default maximum number of important steps taken before the engine gives up.
pub const DEFAULT_STEP_LIMIT: usize = 1000;

/// Options for the rewrite engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// The maximum number of important steps to take before giving up.
    pub step_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { step_limit: DEFAULT_STEP_LIMIT }
    }
}

/// A single entry in the trace of a rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The printed form of the tree after an important change, or the final form of the tree.
    Form(String),

    /// The step limit was reached. Always the last step of a trace if present.
    StepLimitExceeded,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Form(form) => write!(f, "{}", form),
            Self::StepLimitExceeded => write!(f, "step limit exceeded"),
        }
    }
}

/// How a call to [`Tree::simplify`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// No rewrite rule applies anywhere in the tree.
    FixedPoint,

    /// The step limit was reached before the tree reached a fixed point.
    StepLimitExceeded,
}

/// An expression tree, owned by the rewrite engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    root: Node,
    config: Config,
}

impl Tree {
    /// Creates a tree with the default [`Config`].
    pub fn new(root: Node) -> Self {
        Self::with_config(root, Config::default())
    }

    /// Creates a tree with the given [`Config`].
    pub fn with_config(root: Node, config: Config) -> Self {
        Self { root, config }
    }

    /// Returns the root of the tree.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Consumes the tree and returns its root.
    pub fn into_root(self) -> Node {
        self.root
    }

    /// Returns the configuration of the tree.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Rewrites the tree until it reaches a fixed point or the step limit.
    pub fn simplify(&mut self) -> Result<Termination, Error> {
        self.simplify_with(&mut ())
    }

    /// Rewrites the tree until it reaches a fixed point or the step limit, and returns the steps
    /// taken.
    pub fn simplify_with_steps(&mut self) -> Result<(Termination, Vec<Step>), Error> {
        let mut steps = Vec::new();
        let termination = self.simplify_with(&mut steps)?;
        Ok((termination, steps))
    }

    /// Rewrites the tree until it reaches a fixed point or the step limit, pushing each step taken
    /// to the given collector.
    ///
    /// On a fixed point, the final printed form of the tree is pushed last, unless it is the same
    /// as the last step pushed. If the step limit is reached, [`Step::StepLimitExceeded`] is
    /// pushed last instead.
    ///
    /// If a rewrite rule fails, the error is returned and the tree is left as it was just before
    /// the failing rule.
    pub fn simplify_with(
        &mut self,
        step_collector: &mut dyn StepCollector<Step>,
    ) -> Result<Termination, Error> {
        let wants_steps = step_collector.wants_steps();
        let mut recorded = 0;
        let mut last_form = None;
        let mut iterations = 0usize;

        debug!(target: "simplify", nodes = self.root.node_count(), "starting simplification");

        loop {
            iterations += 1;

            let important = if let Some(replacement) = self.root.replace()? {
                trace!(target: "simplify", from = %self.root, to = %replacement.node, "replaced root");
                self.root = replacement.node;

                // the root becoming a different node is always worth reporting
                true
            } else if let Some(outcome) = simplify_first(&mut self.root)? {
                trace!(target: "simplify", important = outcome.important, tree = %self.root, "simplified node");
                outcome.important
            } else {
                break;
            };

            if !important {
                continue;
            }

            recorded += 1;
            if wants_steps {
                let form = self.root.to_string();
                step_collector.push(Step::Form(form.clone()));
                last_form = Some(form);
            }

            if recorded >= self.config.step_limit {
                warn!(target: "simplify", limit = self.config.step_limit, "step limit exceeded");
                step_collector.push(Step::StepLimitExceeded);
                return Ok(Termination::StepLimitExceeded);
            }
        }

        debug!(target: "simplify", iterations, steps = recorded, "reached fixed point");

        if wants_steps {
            let form = self.root.to_string();
            if last_form.as_ref() != Some(&form) {
                step_collector.push(Step::Form(form));
            }
        }

        Ok(Termination::FixedPoint)
    }
}

/// Searches the tree breadth-first for the first node that simplifies, and simplifies it.
///
/// Returns [`None`] if no node in the tree simplifies.
fn simplify_first(root: &mut Node) -> Result<Option<Outcome>, Error> {
    let mut queue = VecDeque::from([root]);
    while let Some(node) = queue.pop_front() {
        let outcome = node.simplify()?;
        if outcome.changed {
            return Ok(Some(outcome));
        }
        queue.extend(node.children_mut());
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use crate::{error::DivisionByZero, rational::Rational};
    use pretty_assertions::assert_eq;
    use super::*;

    fn forms(steps: &[Step]) -> Vec<String> {
        steps.iter().map(Step::to_string).collect()
    }

    #[test]
    fn power_expansion() {
        let mut tree = Tree::new(Node::power(Node::integer(2), Node::integer(3)));
        let (termination, steps) = tree.simplify_with_steps().unwrap();
        assert_eq!(termination, Termination::FixedPoint);
        assert_eq!(forms(&steps), vec!["(2) * (2) * (2)", "(8)", "8"]);
        assert_eq!(tree.root(), &Node::integer(8));
    }

    #[test]
    fn multiply_by_zero() {
        let mut tree = Tree::new(Node::Multi(vec![Node::unknown("x"), Node::integer(0)]));
        let (_, steps) = tree.simplify_with_steps().unwrap();
        assert_eq!(forms(&steps), vec!["0"]);
        assert_eq!(tree.into_root(), Node::integer(0));
    }

    #[test]
    fn absolute_value_of_negation() {
        // |-5|, as parsed
        let mut tree = Tree::new(Node::absolute_value(Node::negate(Node::integer(5))));
        let (_, steps) = tree.simplify_with_steps().unwrap();
        assert_eq!(forms(&steps), vec!["| (-5) |", "5"]);
        assert_eq!(tree.root(), &Node::integer(5));
    }

    #[test]
    fn fold_mixed_sum() {
        // 1 + 2 + 3 / 4
        let mut tree = Tree::new(Node::Sum(vec![
            Node::integer(1),
            Node::integer(2),
            Node::divide(Node::integer(3), Node::integer(4)),
        ]));
        tree.simplify().unwrap();
        assert_eq!(tree.root(), &Node::Number(Rational::new(15, 4).unwrap()));
        assert_eq!(tree.root().numeric_eval().unwrap(), 3.75);
    }

    #[test]
    fn distribute_then_collect() {
        // 2 * (x + 3)
        let mut tree = Tree::new(Node::Multi(vec![
            Node::integer(2),
            Node::Sum(vec![Node::unknown("x"), Node::integer(3)]),
        ]));
        tree.simplify().unwrap();
        assert_eq!(tree.root(), &Node::Sum(vec![
            Node::Multi(vec![Node::integer(2), Node::unknown("x")]),
            Node::integer(6),
        ]));
    }

    #[test]
    fn step_limit() {
        let config = Config { step_limit: 1 };
        let mut tree = Tree::with_config(Node::power(Node::integer(2), Node::integer(3)), config);
        let (termination, steps) = tree.simplify_with_steps().unwrap();
        assert_eq!(termination, Termination::StepLimitExceeded);
        assert_eq!(steps, vec![
            Step::Form("(2) * (2) * (2)".to_string()),
            Step::StepLimitExceeded,
        ]);
    }

    #[test]
    fn breadth_first_one_node_per_step() {
        // (|x + 1 + 2| / x) + ((y + 3 + 4) / y): the foldable sum on the right is shallower
        let left = |a, b| Node::divide(
            Node::absolute_value(Node::Sum(vec![Node::unknown("x"), Node::integer(a), Node::integer(b)])),
            Node::unknown("x"),
        );
        let right = |terms| Node::divide(Node::Sum(terms), Node::unknown("y"));
        let root = Node::Sum(vec![
            left(1, 2),
            right(vec![Node::unknown("y"), Node::integer(3), Node::integer(4)]),
        ]);

        let mut tree = Tree::with_config(root.clone(), Config { step_limit: 1 });
        let (_, steps) = tree.simplify_with_steps().unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(tree.root(), &Node::Sum(vec![
            left(1, 2),
            right(vec![Node::unknown("y"), Node::integer(7)]),
        ]));

        let mut tree = Tree::new(root);
        tree.simplify().unwrap();
        assert_eq!(tree.root(), &Node::Sum(vec![
            Node::divide(
                Node::absolute_value(Node::Sum(vec![Node::unknown("x"), Node::integer(3)])),
                Node::unknown("x"),
            ),
            right(vec![Node::unknown("y"), Node::integer(7)]),
        ]));
    }

    #[test]
    fn step_limit_counts_without_collector() {
        let config = Config { step_limit: 2 };
        let mut tree = Tree::with_config(Node::power(Node::integer(2), Node::integer(3)), config);
        assert_eq!(tree.simplify().unwrap(), Termination::StepLimitExceeded);
    }

    #[test]
    fn fixed_point_is_stable() {
        let mut tree = Tree::new(Node::Multi(vec![
            Node::Sum(vec![Node::unknown("a"), Node::integer(1)]),
            Node::Sum(vec![Node::unknown("b"), Node::integer(-1)]),
        ]));
        tree.simplify().unwrap();
        let simplified = tree.root().clone();

        let (termination, steps) = tree.simplify_with_steps().unwrap();
        assert_eq!(termination, Termination::FixedPoint);
        assert_eq!(steps, vec![Step::Form(simplified.to_string())]);
        assert_eq!(tree.root(), &simplified);
    }

    #[test]
    fn unknown_is_already_simple() {
        let mut tree = Tree::new(Node::unknown("x"));
        let (_, steps) = tree.simplify_with_steps().unwrap();
        assert_eq!(forms(&steps), vec!["x"]);
    }

    #[test]
    fn division_by_zero_literal() {
        let mut tree = Tree::new(Node::divide(Node::unknown("x"), Node::integer(0)));
        let err = tree.simplify().unwrap_err();
        assert!(err.is::<DivisionByZero>());
    }
}
