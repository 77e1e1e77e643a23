use std::fmt;

use crate::parse::ParseError;

use super::token::{Connector, Token};

/// The parsed, typed shape of one statement: its ordered entity and connector
/// tokens plus the derived pattern signature.
///
/// The token sequence reflects the exact syntax consumed, connectors
/// included, so the path `(A)-[:KNOWS]->(B)` holds six tokens with its
/// entities at positions 0, 2 and 5, and the index entry `(A)<=|People|`
/// holds three with the index at position 2.
///
/// The signature is a pure function of the token kinds and connectors:
/// identical shapes always yield identical signatures, regardless of names or
/// incidental whitespace in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    tokens: Vec<Token>,
    pattern: &'static str,
}

impl Descriptor {
    /// Validate a token sequence against the recognized statement shapes.
    pub(crate) fn from_tokens(tokens: Vec<Token>) -> Result<Self, ParseError> {
        match classify(&tokens) {
            Some(pattern) => Ok(Self { tokens, pattern }),
            None => Err(ParseError::Grammar {
                pattern: signature_of(&tokens),
            }),
        }
    }

    /// The token at the given sequence position.
    #[must_use]
    pub fn token(&self, position: usize) -> Option<&Token> {
        self.tokens.get(position)
    }

    /// The full ordered token sequence, connectors included.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The pattern signature classifying this statement's shape: one of
    /// `"N"`, `"R"`, `"N-R->N"`, `"N^I"` or `"R^I"`.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern
    }
}

impl fmt::Display for Descriptor {
    /// Renders the canonical statement text, independent of the whitespace
    /// present in the source.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// The closed shape table. Classification is an exhaustive match over the
/// ordered kind sequence, not a re-scan of source characters.
fn classify(tokens: &[Token]) -> Option<&'static str> {
    use Connector::{Dash, Entry, Head};

    match tokens {
        [Token::Node(_)] => Some("N"),
        [Token::Relationship(_)] => Some("R"),
        [Token::Node(_), Token::Connector(Dash), Token::Relationship(_), Token::Connector(Dash), Token::Connector(Head), Token::Node(_)] => {
            Some("N-R->N")
        }
        [Token::Node(_), Token::Connector(Entry), Token::Index(_)] => Some("N^I"),
        [Token::Relationship(_), Token::Connector(Entry), Token::Index(_)] => Some("R^I"),
        _ => None,
    }
}

/// Signature string for an arbitrary token sequence, used to name the shape
/// in grammar errors.
fn signature_of(tokens: &[Token]) -> String {
    tokens.iter().map(Token::code).collect()
}
