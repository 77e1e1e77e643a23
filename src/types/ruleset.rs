use std::fmt;
use std::ops::Index;
use std::slice;

use serde_json::Value;

use crate::parse::ParseError;

use super::rule::Rule;

/// An ordered, immutable sequence of rules.
///
/// Ordering reflects source declaration order on both input surfaces, and a
/// downstream graph builder is expected to execute the rules in that order.
///
/// # Example
///
/// ```
/// use geoff::RuleSet;
///
/// let rules = RuleSet::from_text(r#"
///     (doc) {"name": "The Doctor"}
///     (dal) {"name": "Dalek"}
///     (doc)-[:ENEMY_OF]->(dal)
/// "#).unwrap();
///
/// assert_eq!(rules.len(), 3);
/// assert_eq!(rules[2].descriptor().pattern(), "N-R->N");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub(crate) fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Parse plain statement text.
    ///
    /// Equivalent to [`parse()`](crate::parse()).
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the input is not valid statement syntax or
    /// an embedded payload is not well-formed JSON.
    pub fn from_text(input: &str) -> Result<Self, ParseError> {
        crate::parse(input)
    }

    /// Parse a serialized rule set: one JSON object whose keys are descriptor
    /// strings and whose values are data payloads or `null`.
    ///
    /// Equivalent to [`parse_json()`](crate::parse_json()).
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the outer literal is not well-formed JSON or
    /// any key fails descriptor validation.
    pub fn from_json(input: &str) -> Result<Self, ParseError> {
        crate::parse_json(input)
    }

    /// Read a statement-text file and parse it.
    ///
    /// # Errors
    ///
    /// Returns [`GeoffError`](crate::GeoffError) on I/O or parse failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::GeoffError> {
        let input = std::fs::read_to_string(path)?;
        Ok(Self::from_text(&input)?)
    }

    /// The number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The rule at the given position, in declaration order.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Rule> {
        self.rules.get(position)
    }

    /// All rules, in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Render the serialized JSON-object form: canonical descriptor strings
    /// as keys, data payloads or `null` as values, declaration order kept.
    ///
    /// The output round-trips through [`from_json()`](Self::from_json). Rules
    /// whose canonical descriptors collide keep only the last payload, since
    /// JSON object keys are unique.
    #[must_use]
    pub fn to_json(&self) -> String {
        let mut object = serde_json::Map::with_capacity(self.rules.len());
        for rule in &self.rules {
            let value = match rule.data() {
                Some(data) => Value::Object(data.clone()),
                None => Value::Null,
            };
            object.insert(rule.descriptor().to_string(), value);
        }
        Value::Object(object).to_string()
    }
}

impl Index<usize> for RuleSet {
    type Output = Rule;

    fn index(&self, position: usize) -> &Rule {
        &self.rules[position]
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleSet({} rules)", self.rules.len())
    }
}
