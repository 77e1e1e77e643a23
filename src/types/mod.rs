mod descriptor;
mod rule;
mod ruleset;
mod token;

pub use descriptor::Descriptor;
pub use rule::{Data, Rule};
pub use ruleset::RuleSet;
pub use token::{Connector, IndexToken, NodeToken, RelationshipToken, Token, TokenKind};
