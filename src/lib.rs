//! A parser for the Geoff graph data notation.
//!
//! Geoff describes a graph-loading plan as a sequence of statements, each
//! declaring a node `(A)`, a relationship `[:KNOWS]`, a directed path
//! `(A)-[:KNOWS]->(B)`, or an index entry `(A)<=|People|`, optionally
//! followed by a JSON data payload. Parsing yields an ordered [`RuleSet`]
//! a downstream graph builder executes in declaration order.
//!
//! ```
//! let rules = geoff::parse(r#"
//!     (A) {"name": "Alice"}
//!     (B) {"name": "Bob"}
//!     (A)-[:KNOWS]->(B) {"since": 1977}
//! "#).unwrap();
//!
//! assert_eq!(rules.len(), 3);
//! assert_eq!(rules[2].descriptor().pattern(), "N-R->N");
//! assert_eq!(rules[2].data().unwrap()["since"], 1977);
//! ```
//!
//! A rule set can also be ingested pre-encoded as a single JSON object whose
//! keys are descriptor strings, via [`parse_json()`]; declaration order is
//! preserved on both surfaces.

mod error;
mod parse;
mod types;

pub use error::GeoffError;
pub use parse::{parse, parse_json, ParseError};
pub use types::{
    Connector, Data, Descriptor, IndexToken, NodeToken, RelationshipToken, Rule, RuleSet, Token,
    TokenKind,
};
