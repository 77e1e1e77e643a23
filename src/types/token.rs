use std::fmt;

/// Discriminates the closed set of token kinds a statement can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Node,
    Rel,
    Index,
    Connector,
}

/// Structural syntax linking entity tokens within one statement.
///
/// Connectors occupy their own positions in a descriptor's token sequence, so
/// the directed path `(A)-[:KNOWS]->(B)` carries three of them: `Dash`, then
/// `Dash` and `Head` forming the arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    /// `-` leaving the start node of a path.
    Dash,
    /// `>` closing the arrow into the end node of a path.
    Head,
    /// `<=` attaching the preceding entity to an index entry.
    Entry,
}

impl Connector {
    /// Single-character code used in pattern signatures.
    #[must_use]
    pub fn code(self) -> char {
        match self {
            Connector::Dash => '-',
            Connector::Head => '>',
            Connector::Entry => '^',
        }
    }

    /// The literal source syntax this connector was lexed from.
    #[must_use]
    pub fn literal(self) -> &'static str {
        match self {
            Connector::Dash => "-",
            Connector::Head => ">",
            Connector::Entry => "<=",
        }
    }
}

/// A node reference, written `(name)` or `()` for an unnamed node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeToken {
    name: Option<String>,
}

impl NodeToken {
    pub(crate) fn new(name: Option<String>) -> Self {
        Self { name }
    }

    /// The node's name, if one was written between the parentheses.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// A relationship reference, written `[name:TYPE]` with both parts
/// independently optional: `[R]`, `[:KNOWS]`, `[R:KNOWS]` and `[]` are all
/// valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipToken {
    name: Option<String>,
    ty: Option<String>,
}

impl RelationshipToken {
    pub(crate) fn new(name: Option<String>, ty: Option<String>) -> Self {
        Self { name, ty }
    }

    /// The relationship's name, if one was written before the colon.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The relationship's type label, if one was written after the colon.
    #[must_use]
    pub fn ty(&self) -> Option<&str> {
        self.ty.as_deref()
    }
}

/// An index reference, written `|name|` after the `<=` entry marker.
/// The name is mandatory and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexToken {
    name: String,
}

impl IndexToken {
    pub(crate) fn new(name: String) -> Self {
        Self { name }
    }

    /// The index's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One token of a statement's syntax.
///
/// Tokens are immutable and owned exclusively by the [`Descriptor`] produced
/// from their statement. The variant accessors return `None` rather than
/// panicking when asked for a different kind's fields.
///
/// [`Descriptor`]: crate::Descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Node(NodeToken),
    Relationship(RelationshipToken),
    Index(IndexToken),
    Connector(Connector),
}

impl Token {
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Node(_) => TokenKind::Node,
            Token::Relationship(_) => TokenKind::Rel,
            Token::Index(_) => TokenKind::Index,
            Token::Connector(_) => TokenKind::Connector,
        }
    }

    /// Single-character code this token contributes to a pattern signature.
    #[must_use]
    pub fn code(&self) -> char {
        match self {
            Token::Node(_) => 'N',
            Token::Relationship(_) => 'R',
            Token::Index(_) => 'I',
            Token::Connector(c) => c.code(),
        }
    }

    #[must_use]
    pub fn as_node(&self) -> Option<&NodeToken> {
        match self {
            Token::Node(t) => Some(t),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_relationship(&self) -> Option<&RelationshipToken> {
        match self {
            Token::Relationship(t) => Some(t),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_index(&self) -> Option<&IndexToken> {
        match self {
            Token::Index(t) => Some(t),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_connector(&self) -> Option<Connector> {
        match self {
            Token::Connector(c) => Some(*c),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    /// Renders the token's canonical source syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Node(t) => match t.name() {
                Some(name) => write!(f, "({name})"),
                None => write!(f, "()"),
            },
            Token::Relationship(t) => {
                write!(f, "[")?;
                if let Some(name) = t.name() {
                    write!(f, "{name}")?;
                }
                if let Some(ty) = t.ty() {
                    write!(f, ":{ty}")?;
                }
                write!(f, "]")
            }
            Token::Index(t) => write!(f, "|{}|", t.name()),
            Token::Connector(c) => write!(f, "{}", c.literal()),
        }
    }
}
