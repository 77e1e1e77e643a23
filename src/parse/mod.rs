mod error;
mod grammar;
mod parser;
mod payload;

pub use error::ParseError;

use crate::types::RuleSet;

/// Parse plain statement text into an ordered [`RuleSet`].
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not valid statement syntax or an
/// embedded payload is not well-formed JSON. Failures abort the whole parse;
/// no partial rule list is returned.
pub fn parse(input: &str) -> Result<RuleSet, ParseError> {
    parser::rules_from_text(input).map(RuleSet::new)
}

/// Parse a serialized rule set into an ordered [`RuleSet`]: one JSON object
/// whose keys are descriptor strings and whose values are data payloads or
/// `null`. Key declaration order is preserved.
///
/// # Errors
///
/// Returns [`ParseError`] if the outer literal is not well-formed JSON, a
/// value is neither an object nor `null`, or a key fails descriptor
/// validation.
pub fn parse_json(input: &str) -> Result<RuleSet, ParseError> {
    parser::rules_from_json(input).map(RuleSet::new)
}
