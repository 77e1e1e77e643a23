use super::descriptor::Descriptor;

/// A rule's data payload: string keys mapped to JSON values, in declaration
/// order.
pub type Data = serde_json::Map<String, serde_json::Value>;

/// One descriptor paired with an optional data payload.
///
/// Absent data is distinct from an empty payload: `(A)` parses with
/// `data() == None`, while `(A) {}` parses with an empty map.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    descriptor: Descriptor,
    data: Option<Data>,
}

impl Rule {
    pub(crate) fn new(descriptor: Descriptor, data: Option<Data>) -> Self {
        Self { descriptor, data }
    }

    #[must_use]
    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    #[must_use]
    pub fn data(&self) -> Option<&Data> {
        self.data.as_ref()
    }
}
