use winnow::combinator::{alt, cut_err, opt, terminated};
use winnow::error::{ContextError, ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::take_while;

use crate::types::{Connector, IndexToken, NodeToken, RelationshipToken, Token};

use super::error::ParseError;

// -- Whitespace -------------------------------------------------------------

fn ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_ascii_whitespace())
        .void()
        .parse_next(input)
}

// -- Identifiers ------------------------------------------------------------

fn ident<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        take_while(1.., |c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_'),
    )
        .take()
        .parse_next(input)
}

// -- Entity tokens ----------------------------------------------------------

fn node(input: &mut &str) -> ModalResult<Token> {
    '('.parse_next(input)?;
    ws.parse_next(input)?;
    let name = opt(ident).parse_next(input)?;
    ws.parse_next(input)?;
    cut_err(')')
        .context(StrContext::Expected(StrContextValue::CharLiteral(')')))
        .parse_next(input)?;
    Ok(Token::Node(NodeToken::new(name.map(str::to_owned))))
}

fn relationship(input: &mut &str) -> ModalResult<Token> {
    '['.parse_next(input)?;
    ws.parse_next(input)?;
    let name = opt(ident).parse_next(input)?;
    ws.parse_next(input)?;
    let ty = if opt(':').parse_next(input)?.is_some() {
        ws.parse_next(input)?;
        let ty = cut_err(ident)
            .context(StrContext::Expected(StrContextValue::Description(
                "relationship type",
            )))
            .parse_next(input)?;
        ws.parse_next(input)?;
        Some(ty.to_owned())
    } else {
        None
    };
    cut_err(']')
        .context(StrContext::Expected(StrContextValue::CharLiteral(']')))
        .parse_next(input)?;
    Ok(Token::Relationship(RelationshipToken::new(
        name.map(str::to_owned),
        ty,
    )))
}

/// The `|name|` part of an index entry. The caller has already consumed the
/// `<=` marker, so everything here is committed.
fn index(input: &mut &str) -> ModalResult<Token> {
    cut_err('|')
        .context(StrContext::Expected(StrContextValue::CharLiteral('|')))
        .parse_next(input)?;
    ws.parse_next(input)?;
    let name = cut_err(ident)
        .context(StrContext::Expected(StrContextValue::Description(
            "index name",
        )))
        .parse_next(input)?;
    ws.parse_next(input)?;
    cut_err('|')
        .context(StrContext::Expected(StrContextValue::CharLiteral('|')))
        .parse_next(input)?;
    Ok(Token::Index(IndexToken::new(name.to_owned())))
}

fn entity(input: &mut &str) -> ModalResult<Token> {
    alt((node, relationship))
        .context(StrContext::Expected(StrContextValue::CharLiteral('(')))
        .context(StrContext::Expected(StrContextValue::CharLiteral('[')))
        .parse_next(input)
}

// -- Statements -------------------------------------------------------------

/// Lex the token stream of exactly one statement, leaving the input cursor
/// immediately after the statement's syntax (before any trailing payload).
///
/// The lexer is greedy: it keeps consuming connector/entity pairs as long as
/// a connector follows, and leaves shape validation to
/// [`Descriptor::from_tokens`](crate::Descriptor). Whitespace between tokens
/// is insignificant.
pub(crate) fn statement(input: &mut &str) -> ModalResult<Vec<Token>> {
    ws.parse_next(input)?;
    let mut tokens = vec![entity.parse_next(input)?];
    loop {
        let checkpoint = input.checkpoint();
        ws.parse_next(input)?;
        if opt("<=").parse_next(input)?.is_some() {
            tokens.push(Token::Connector(Connector::Entry));
            ws.parse_next(input)?;
            tokens.push(index.parse_next(input)?);
        } else if opt('-').parse_next(input)?.is_some() {
            tokens.push(Token::Connector(Connector::Dash));
            ws.parse_next(input)?;
            if opt('>').parse_next(input)?.is_some() {
                tokens.push(Token::Connector(Connector::Head));
                ws.parse_next(input)?;
                tokens.push(
                    cut_err(node)
                        .context(StrContext::Expected(StrContextValue::CharLiteral('(')))
                        .parse_next(input)?,
                );
            } else {
                tokens.push(
                    cut_err(relationship)
                        .context(StrContext::Expected(StrContextValue::CharLiteral('[')))
                        .parse_next(input)?,
                );
            }
        } else {
            input.reset(&checkpoint);
            break;
        }
    }
    Ok(tokens)
}

/// Lex a standalone descriptor string, requiring full consumption. Used for
/// rule-set keys, where trailing text is an error rather than a next
/// statement.
pub(crate) fn statement_exact(source: &str) -> Result<Vec<Token>, ParseError> {
    terminated(statement, ws)
        .parse(source)
        .map_err(|err| ParseError::Lex {
            offset: err.offset(),
            message: context_message(err.inner()),
        })
}

/// Renders a lexer error's context list, with a fallback for positions where
/// no context was attached.
pub(crate) fn context_message(err: &ContextError) -> String {
    let rendered = err.to_string();
    if rendered.is_empty() {
        "unexpected character".to_owned()
    } else {
        rendered
    }
}
