pub mod token;

use logos::{Lexer, Logos};
use std::ops::Range;
use token::Lexeme;
pub use token::{Token, TokenKind};

/// A cursor over a stream of tokens. The [`Parser`](crate::parser::Parser) reads its input through
/// this trait, one token at a time.
///
/// After the last token, the cursor stays on a token of kind [`TokenKind::End`] forever.
pub trait TokenCursor {
    /// The kind of the current token.
    fn kind(&self) -> TokenKind;

    /// The value of the current token, if it is a [`TokenKind::Number`].
    fn number(&self) -> Option<f64>;

    /// The name of the current token, if it is a [`TokenKind::Identifier`].
    fn identifier(&self) -> Option<&str>;

    /// The region of the source code that the current token originated from.
    fn span(&self) -> Range<usize>;

    /// Moves to the next token.
    fn advance(&mut self);
}

/// A [`TokenCursor`] that tokenizes source code lazily.
pub struct Scanner<'source> {
    lexer: Lexer<'source, Lexeme>,
    current: Token<'source>,
}

impl<'source> Scanner<'source> {
    /// Creates a scanner positioned at the first token of the source.
    pub fn new(source: &'source str) -> Self {
        let lexer = Lexeme::lexer(source);
        let current = Token {
            span: 0..0,
            kind: TokenKind::End,
            lexeme: "",
            number: None,
        };
        let mut scanner = Self { lexer, current };
        scanner.advance();
        scanner
    }

    /// Returns the current token.
    pub fn token(&self) -> &Token<'source> {
        &self.current
    }
}

impl TokenCursor for Scanner<'_> {
    fn kind(&self) -> TokenKind {
        self.current.kind
    }

    fn number(&self) -> Option<f64> {
        self.current.number
    }

    fn identifier(&self) -> Option<&str> {
        match self.current.kind {
            TokenKind::Identifier => Some(self.current.lexeme),
            _ => None,
        }
    }

    fn span(&self) -> Range<usize> {
        self.current.span.clone()
    }

    fn advance(&mut self) {
        self.current = match self.lexer.next() {
            Some(Ok(lexeme)) => Token {
                span: self.lexer.span(),
                kind: lexeme.into(),
                lexeme: self.lexer.slice(),
                number: match lexeme {
                    Lexeme::Number(value) => Some(value),
                    _ => None,
                },
            },
            Some(Err(())) => Token {
                span: self.lexer.span(),
                kind: TokenKind::Error,
                lexeme: self.lexer.slice(),
                number: None,
            },
            None => {
                let end = self.lexer.source().len();
                Token {
                    span: end..end,
                    kind: TokenKind::End,
                    lexeme: "",
                    number: None,
                }
            },
        };
    }
}

/// Returns all of the tokens in the source, not including the final [`TokenKind::End`] token.
pub fn tokenize_complete(source: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();

    while scanner.kind() != TokenKind::End {
        tokens.push(scanner.token().clone());
        scanner.advance();
    }

    tokens
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<const N: usize>(input: &str, expected: [(TokenKind, &str); N]) {
        let tokens = tokenize_complete(input);
        let actual = tokens.iter()
            .map(|token| (token.kind, token.lexeme))
            .collect::<Vec<_>>();
        assert_eq!(actual, expected.to_vec());
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1+2+3/4",
            [
                (TokenKind::Number, "1"),
                (TokenKind::Plus, "+"),
                (TokenKind::Number, "2"),
                (TokenKind::Plus, "+"),
                (TokenKind::Number, "3"),
                (TokenKind::Divide, "/"),
                (TokenKind::Number, "4"),
            ],
        );
    }

    #[test]
    fn complex_expr() {
        compare_tokens(
            " | -x | ^ (2.5 * abc)\t- .5 $",
            [
                (TokenKind::Pipe, "|"),
                (TokenKind::Minus, "-"),
                (TokenKind::Identifier, "x"),
                (TokenKind::Pipe, "|"),
                (TokenKind::Power, "^"),
                (TokenKind::LParen, "("),
                (TokenKind::Number, "2.5"),
                (TokenKind::Multiply, "*"),
                (TokenKind::Identifier, "abc"),
                (TokenKind::RParen, ")"),
                (TokenKind::Minus, "-"),
                (TokenKind::Number, ".5"),
                (TokenKind::Error, "$"),
            ],
        );
    }

    #[test]
    fn unicode_identifiers() {
        compare_tokens(
            "2πr + é",
            [
                (TokenKind::Number, "2"),
                (TokenKind::Identifier, "πr"),
                (TokenKind::Plus, "+"),
                (TokenKind::Identifier, "é"),
            ],
        );
    }

    #[test]
    fn number_values() {
        let tokens = tokenize_complete("12 0.25 7.");
        let values = tokens.iter().map(|token| token.number).collect::<Vec<_>>();
        assert_eq!(values, vec![Some(12.0), Some(0.25), Some(7.0)]);
    }

    #[test]
    fn cursor_stays_at_end() {
        let mut scanner = Scanner::new("x ");
        assert_eq!(scanner.kind(), TokenKind::Identifier);
        assert_eq!(scanner.identifier(), Some("x"));
        assert_eq!(scanner.span(), 0..1);

        scanner.advance();
        assert_eq!(scanner.kind(), TokenKind::End);
        assert_eq!(scanner.span(), 2..2);

        scanner.advance();
        assert_eq!(scanner.kind(), TokenKind::End);
        assert_eq!(scanner.number(), None);
    }
}
