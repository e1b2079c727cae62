//! Token definitions for the bril text format
//!
//! Tokens are produced by the logos derive. Whitespace (newlines included) and
//! `#` comments are skipped here, so the parser never sees them.
//!
//! There is no reserved-word list. `const`, `true`, `false` and `ptr` lex as
//! plain identifiers and only get their meaning from where they appear.
use logos::Logos;
use std::fmt;

#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(skip r"[ \t\r\n\f]+|#[^\n]*")]
pub enum Token {
    #[token("{")]
    OpenBrace,
    #[token("}")]
    CloseBrace,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token("<")]
    OpenAngle,
    #[token(">")]
    CloseAngle,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("=")]
    Equals,

    #[regex(r"[A-Za-z_%][A-Za-z0-9_%.]*", |lex| lex.slice().to_owned())]
    Ident(String),

    /// Kept as text; conversion to a number happens when building the model
    #[regex(r"[+-]?[0-9]+", |lex| lex.slice().to_owned())]
    Int(String),

    #[regex(r"[+-]?([0-9]+\.[0-9]*|\.[0-9]+)", |lex| lex.slice().to_owned())]
    Decimal(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::OpenBrace => write!(f, "`{{`"),
            Token::CloseBrace => write!(f, "`}}`"),
            Token::OpenParen => write!(f, "`(`"),
            Token::CloseParen => write!(f, "`)`"),
            Token::OpenAngle => write!(f, "`<`"),
            Token::CloseAngle => write!(f, "`>`"),
            Token::Colon => write!(f, "`:`"),
            Token::Comma => write!(f, "`,`"),
            Token::Semicolon => write!(f, "`;`"),
            Token::Equals => write!(f, "`=`"),
            Token::Ident(name) => write!(f, "identifier `{name}`"),
            Token::Int(text) => write!(f, "integer `{text}`"),
            Token::Decimal(text) => write!(f, "decimal `{text}`"),
        }
    }
}
