//! Lexer for the bril text format
//!
//! Tokenization is handled entirely by logos (see [tokens]). This module
//! collects the tokens with their byte spans and turns the first unrecognised
//! character into a [`SyntaxError`].

pub mod tokens;

pub use tokens::Token;

use crate::bril::error::SyntaxError;
use crate::bril::location::SourceLocation;
use logos::Logos;
use std::ops::Range;

/// Type alias for token with its byte range in the source
pub type TokenLocation = (Token, Range<usize>);

/// Tokenize a whole source string
pub fn tokenize(source: &str) -> Result<Vec<TokenLocation>, SyntaxError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                let location = SourceLocation::new(source);
                return Err(SyntaxError::at(
                    &location,
                    lexer.span().start,
                    format!("unexpected character `{}`", lexer.slice()),
                ));
            }
        }
    }

    Ok(tokens)
}
