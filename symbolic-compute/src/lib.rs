//! Exact rational arithmetic and a small term-rewriting engine for arithmetic expressions.
//!
//! An expression is represented as a tree of [`Node`]s. A [`Tree`] repeatedly applies the rewrite
//! rules in [`simplify`] to its root and descendants until no rule applies, optionally recording
//! the intermediate forms of the tree along the way.
//!
//! ```
//! use symbolic_compute::{node::Node, tree::Tree};
//!
//! // 2 ^ 3
//! let mut tree = Tree::new(Node::power(Node::integer(2), Node::integer(3)));
//! let (_, steps) = tree.simplify_with_steps().unwrap();
//! let steps = steps.iter().map(ToString::to_string).collect::<Vec<_>>();
//! assert_eq!(steps, ["(2) * (2) * (2)", "(8)", "8"]);
//! ```
//!
//! Numbers are [`Rational`]s, so folding constants never loses precision.

pub mod error;
pub mod node;
pub mod rational;
pub mod simplify;
pub mod step_collector;
pub mod tree;

pub use node::Node;
pub use rational::Rational;
pub use tree::Tree;
