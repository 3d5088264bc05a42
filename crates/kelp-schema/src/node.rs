use indexmap::IndexMap;
use serde::Deserialize;

/// Discriminates the shapes a schema record can take.
///
/// Absent on plain property records; see [`TypeNode::kind`].
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Class,
    Field,
    Function,
    Define,
}

/// One record of the API schema: a class, field, function, or define group.
///
/// The source documents are duck-shaped; here every record is one closed
/// struct with optional fields, discriminated by [`NodeKind`] and checked by
/// presence. Mappings keep the document's insertion order, which is also the
/// order completion suggestions are emitted in.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeNode {
    pub kind: Option<NodeKind>,
    /// Declared display name; may differ from the key a node is looked up by.
    pub name: Option<String>,
    /// Names another class (plain name) or a define group
    /// (`defines.<GroupName>`).
    pub type_ref: Option<String>,
    pub properties: IndexMap<String, TypeNode>,
    /// Parameters, when `kind` is [`NodeKind::Function`].
    pub args: IndexMap<String, TypeNode>,
    pub returns: Option<String>,
    pub doc: Option<String>,
    /// Free-text annotation appended to documentation.
    pub mode: Option<String>,
}

impl TypeNode {
    /// Whether this is the "not found" sentinel: no kind and no properties.
    ///
    /// Resolution misses are modeled as this sentinel, never as an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.properties.is_empty()
    }

    /// Structural child under `key`.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&TypeNode> {
        self.properties.get(key)
    }

    /// Parameter named `key`.
    #[must_use]
    pub fn arg(&self, key: &str) -> Option<&TypeNode> {
        self.args.get(key)
    }

    /// Display name for a node looked up under `key`.
    #[must_use]
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(key)
    }
}
