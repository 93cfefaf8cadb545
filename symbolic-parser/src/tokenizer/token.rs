use logos::Logos;
use std::{fmt, ops::Range};

/// The raw lexemes recognized by the lexer. Whitespace is skipped, and any character not matched
/// here is reported by the lexer as an error.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum Lexeme {
    #[regex(r"[0-9]+(\.[0-9]*)?|\.[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Multiply,

    #[token("/")]
    Divide,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("^")]
    Power,

    #[token("|")]
    Pipe,

    #[regex(r"\p{L}+")]
    Identifier,
}

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A decimal number, such as `3` or `0.25`.
    Number,

    Plus,
    Minus,
    Multiply,
    Divide,
    LParen,
    RParen,
    Power,
    Pipe,

    /// A run of ASCII letters, naming an unknown.
    Identifier,

    /// The end of the source code.
    End,

    /// A character that cannot start any token.
    Error,
}

impl From<Lexeme> for TokenKind {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Number(_) => Self::Number,
            Lexeme::Plus => Self::Plus,
            Lexeme::Minus => Self::Minus,
            Lexeme::Multiply => Self::Multiply,
            Lexeme::Divide => Self::Divide,
            Lexeme::LParen => Self::LParen,
            Lexeme::RParen => Self::RParen,
            Lexeme::Power => Self::Power,
            Lexeme::Pipe => Self::Pipe,
            Lexeme::Identifier => Self::Identifier,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => write!(f, "a number"),
            Self::Plus => write!(f, "`+`"),
            Self::Minus => write!(f, "`-`"),
            Self::Multiply => write!(f, "`*`"),
            Self::Divide => write!(f, "`/`"),
            Self::LParen => write!(f, "`(`"),
            Self::RParen => write!(f, "`)`"),
            Self::Power => write!(f, "`^`"),
            Self::Pipe => write!(f, "`|`"),
            Self::Identifier => write!(f, "an unknown"),
            Self::End => write!(f, "the end of the input"),
            Self::Error => write!(f, "an invalid character"),
        }
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token. Empty for [`TokenKind::End`].
    pub lexeme: &'source str,

    /// The value of the token, if it is a [`TokenKind::Number`].
    pub number: Option<f64>,
}
