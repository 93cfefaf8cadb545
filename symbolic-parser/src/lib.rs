//! Tokenizer and parser for arithmetic expressions.
//!
//! The [`tokenizer`] turns source code into tokens, and the [`Parser`] builds a
//! [`Node`](symbolic_compute::node::Node) tree from them, collecting errors instead of stopping at
//! the first one.
//!
//! ```
//! use symbolic_compute::node::Node;
//! use symbolic_parser::parse;
//!
//! let parsed = parse("2 * x");
//! assert!(parsed.errors.is_empty());
//! assert_eq!(parsed.node, Some(Node::Multi(vec![Node::integer(2), Node::unknown("x")])));
//! ```

pub mod parser;
pub mod tokenizer;

pub use parser::{Parsed, Parser};
pub use tokenizer::{Scanner, TokenCursor, TokenKind};

/// Parses the given source code with the default options.
pub fn parse(source: &str) -> Parsed {
    Parser::new(source).parse()
}
