use serde_json::{Map, Value};
use winnow::error::{ContextError, ErrMode};

use crate::types::{Descriptor, Rule};

use super::error::ParseError;
use super::{grammar, payload};

/// Splitter state: either at a statement boundary, or holding a descriptor
/// that may still receive a trailing payload.
#[derive(Debug)]
enum State {
    ExpectDescriptor,
    ExpectDataOrNext(Descriptor),
}

/// Parse a blob of whitespace-separated statements into an ordered rule list.
///
/// Rules are concatenated with no terminator: the boundary between a
/// completed JSON literal (or a descriptor with no payload) and the next
/// descriptor is found by peeking past insignificant whitespace for `{`.
pub(crate) fn rules_from_text(input: &str) -> Result<Vec<Rule>, ParseError> {
    let mut rest = input;
    let mut rules = Vec::new();
    let mut state = State::ExpectDescriptor;

    loop {
        state = match state {
            State::ExpectDescriptor => {
                skip_ws(&mut rest);
                if rest.is_empty() {
                    break;
                }
                let tokens =
                    grammar::statement(&mut rest).map_err(|err| lex_error(input, rest, &err))?;
                State::ExpectDataOrNext(Descriptor::from_tokens(tokens)?)
            }
            State::ExpectDataOrNext(descriptor) => {
                skip_ws(&mut rest);
                let data = if rest.starts_with('{') {
                    let offset = input.len() - rest.len();
                    let (data, consumed) = payload::consume_object(rest, offset)?;
                    rest = &rest[consumed..];
                    Some(data)
                } else {
                    None
                };
                rules.push(Rule::new(descriptor, data));
                State::ExpectDescriptor
            }
        };
    }

    Ok(rules)
}

/// Parse a serialized rule set: one JSON object whose keys are descriptor
/// strings and whose values are data payloads or `null`.
///
/// Key iteration follows source declaration order, so the resulting rule list
/// keeps the order the rules were written in.
pub(crate) fn rules_from_json(input: &str) -> Result<Vec<Rule>, ParseError> {
    let object: Map<String, Value> = serde_json::from_str(input).map_err(|err| ParseError::Json {
        offset: 0,
        message: err.to_string(),
    })?;

    let mut rules = Vec::with_capacity(object.len());
    for (key, value) in object {
        let tokens = grammar::statement_exact(&key)?;
        let descriptor = Descriptor::from_tokens(tokens)?;
        let data = match value {
            Value::Null => None,
            Value::Object(map) => Some(map),
            other => {
                return Err(ParseError::Json {
                    offset: 0,
                    message: format!("rule `{key}` has a non-object data payload: {other}"),
                })
            }
        };
        rules.push(Rule::new(descriptor, data));
    }
    Ok(rules)
}

fn skip_ws(rest: &mut &str) {
    *rest = rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
}

/// Convert a winnow error into a [`ParseError::Lex`] with the byte offset of
/// the failure position. On backtrack failures the cursor has been restored
/// to the statement start; on committed (cut) failures it points at the
/// offending character.
fn lex_error(input: &str, rest: &str, err: &ErrMode<ContextError>) -> ParseError {
    let offset = input.len() - rest.len();
    let message = match err {
        ErrMode::Backtrack(inner) | ErrMode::Cut(inner) => grammar::context_message(inner),
        ErrMode::Incomplete(_) => "incomplete input".to_owned(),
    };
    ParseError::Lex { offset, message }
}
