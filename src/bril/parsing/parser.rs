//! Parser implementation for the bril text format using chumsky
//!
//! One combinator per production:
//!
//! ```text
//! program      := function*
//! function     := IDENT ("(" arg-list? ")")? (":" type)? "{" stmt* "}"
//! arg-list     := arg ("," arg)*
//! arg          := IDENT ":" type
//! stmt         := const-def | value-op | effect-op | label
//! const-def    := IDENT (":" type)? "=" "const" literal ";"
//! value-op     := IDENT (":" type)? "=" IDENT IDENT* ";"
//! effect-op    := IDENT IDENT* ";"
//! label        := IDENT ":"
//! type         := "ptr" "<" type ">" | IDENT
//! literal      := INT | "true" | "false" | DECIMAL
//! ```
//!
//! The four statement forms share an identifier-led prefix. They are tried in
//! the order above and chumsky backtracks between alternatives, so the most
//! specific form that matches wins. Opcodes are never compared against a
//! keyword list; `const` is only special right after `=`.

use chumsky::error::{Error as _, SimpleReason};
use chumsky::prelude::*;
use chumsky::stream::Stream;
use std::ops::Range;

use super::ir::{ArgNode, FunctionNode, LiteralKind, LiteralNode, ProgramNode, StatementNode};
use crate::bril::ast::Type;
use crate::bril::error::SyntaxError;
use crate::bril::lexing::{Token, TokenLocation};
use crate::bril::location::SourceLocation;

/// Type alias for parser error
pub(crate) type ParserError = Simple<Token>;

/// Parse a token stream into a parse tree
///
/// `source` is only used to turn the error offset into a line and column.
pub fn parse_tokens(
    tokens: Vec<TokenLocation>,
    source: &str,
) -> Result<ProgramNode, SyntaxError> {
    let eoi = source.len()..source.len() + 1;
    program()
        .parse(Stream::from_iter(eoi, tokens.into_iter()))
        .map_err(|errors| to_syntax_error(source, errors))
}

/// program := function*
pub(crate) fn program() -> impl Parser<Token, ProgramNode, Error = ParserError> + Clone {
    function()
        .repeated()
        .then_ignore(end())
        .map(|functions| ProgramNode { functions })
}

/// function := IDENT ("(" arg-list? ")")? (":" type)? "{" stmt* "}"
///
/// `f() {` and `f {` both give an empty argument list.
pub(crate) fn function() -> impl Parser<Token, FunctionNode, Error = ParserError> + Clone {
    let arg = ident()
        .then_ignore(just(Token::Colon))
        .then(type_parser())
        .map(|(name, ty)| ArgNode { name, ty });

    let args = arg
        .separated_by(just(Token::Comma))
        .delimited_by(just(Token::OpenParen), just(Token::CloseParen))
        .or_not()
        .map(Option::unwrap_or_default);

    let body = statement()
        .repeated()
        .delimited_by(just(Token::OpenBrace), just(Token::CloseBrace));

    ident()
        .then(args)
        .then(annotation())
        .then(body)
        .map(|(((name, args), return_type), body)| FunctionNode {
            name,
            args,
            return_type,
            body,
        })
}

/// stmt := const-def | value-op | effect-op | label
pub(crate) fn statement() -> impl Parser<Token, StatementNode, Error = ParserError> + Clone {
    let semicolon = just(Token::Semicolon);

    let const_def = ident()
        .then(annotation())
        .then_ignore(just(Token::Equals))
        .then_ignore(keyword("const"))
        .then(literal())
        .then_ignore(semicolon.clone())
        .map(|((dest, ty), value)| StatementNode::ConstDef { dest, ty, value });

    let value_op = ident()
        .then(annotation())
        .then_ignore(just(Token::Equals))
        .then(ident())
        .then(ident().repeated())
        .then_ignore(semicolon.clone())
        .map(|(((dest, ty), opcode), args)| StatementNode::ValueOp {
            dest,
            ty,
            opcode,
            args,
        });

    let effect_op = ident()
        .then(ident().repeated())
        .then_ignore(semicolon)
        .map(|(opcode, args)| StatementNode::EffectOp { opcode, args });

    let label = ident()
        .then_ignore(just(Token::Colon))
        .map(|name| StatementNode::Label { name });

    choice((const_def, value_op, effect_op, label))
}

/// type := "ptr" "<" type ">" | IDENT
pub(crate) fn type_parser() -> impl Parser<Token, Type, Error = ParserError> + Clone {
    recursive(|ty| {
        keyword("ptr")
            .ignore_then(ty.delimited_by(just(Token::OpenAngle), just(Token::CloseAngle)))
            .map(Type::pointer)
            .or(ident().map(Type::Base))
    })
    .labelled("type")
}

/// literal := INT | "true" | "false" | DECIMAL
pub(crate) fn literal() -> impl Parser<Token, LiteralNode, Error = ParserError> + Clone {
    filter_map(|span: Range<usize>, token: Token| match token {
        Token::Int(text) => Ok(LiteralNode::new(LiteralKind::Int, text, span)),
        Token::Decimal(text) => Ok(LiteralNode::new(LiteralKind::Decimal, text, span)),
        Token::Ident(text) if text == "true" || text == "false" => {
            Ok(LiteralNode::new(LiteralKind::Bool, text, span))
        }
        other => Err(Simple::expected_input_found(span, Vec::new(), Some(other))),
    })
    .labelled("literal")
}

/// Optional `: type` suffix
fn annotation() -> impl Parser<Token, Option<Type>, Error = ParserError> + Clone {
    just(Token::Colon).ignore_then(type_parser()).or_not()
}

fn ident() -> impl Parser<Token, String, Error = ParserError> + Clone {
    select! { Token::Ident(name) => name }.labelled("identifier")
}

/// Match an identifier with exactly this spelling
fn keyword(word: &'static str) -> impl Parser<Token, (), Error = ParserError> + Clone {
    just(Token::Ident(word.to_string())).ignored()
}

fn to_syntax_error(source: &str, errors: Vec<ParserError>) -> SyntaxError {
    let location = SourceLocation::new(source);
    match errors.into_iter().next() {
        Some(error) => SyntaxError::at(&location, error.span().start, describe(&error)),
        None => SyntaxError::at(&location, source.len(), "invalid program"),
    }
}

/// Render a chumsky error as a one-line message
fn describe(error: &ParserError) -> String {
    let found = error
        .found()
        .map(ToString::to_string)
        .unwrap_or_else(|| "end of input".to_string());

    match error.reason() {
        SimpleReason::Custom(message) => message.clone(),
        SimpleReason::Unclosed { delimiter, .. } => format!("unclosed delimiter {delimiter}"),
        SimpleReason::Unexpected => {
            if let Some(label) = error.label() {
                return format!("expected {label}, found {found}");
            }
            let mut expected: Vec<String> = error
                .expected()
                .map(|token| match token {
                    Some(token) => token.to_string(),
                    None => "end of input".to_string(),
                })
                .collect();
            expected.sort();
            expected.dedup();

            if expected.is_empty() {
                format!("unexpected {found}")
            } else {
                format!("expected {}, found {found}", expected.join(" or "))
            }
        }
    }
}
