use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::Path;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use thiserror::Error;

use crate::node::{NodeKind, TypeNode};

/// File name of the classes document inside a schema data directory.
pub const CLASSES_DOC: &str = "classes.json";
/// File name of the defines document inside a schema data directory.
pub const DEFINES_DOC: &str = "defines.json";

static EMPTY: Lazy<TypeNode> = Lazy::new(TypeNode::default);

/// Failure to produce a usable schema from the input documents.
///
/// Always fatal at startup: tooling must abort rather than run against a
/// partial schema.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("cannot read schema document `{doc}`")]
    Unreadable {
        doc: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("schema document `{doc}` is malformed")]
    Malformed {
        doc: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Extra completion triggers applied at load time.
///
/// Each entry copies an existing class under an additional key, so the alias
/// shows up at global scope (when typing on a blank line or requesting
/// completion explicitly). Entries whose target class does not exist are
/// skipped.
#[derive(Clone, Debug, Default)]
pub struct AliasConfig {
    entries: Vec<(String, String)>,
}

impl AliasConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `trigger` as an alias for the class named `class`.
    #[must_use]
    pub fn alias(mut self, trigger: impl Into<String>, class: impl Into<String>) -> Self {
        self.entries.push((trigger.into(), class.into()));
        self
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, c)| (t.as_str(), c.as_str()))
    }
}

/// The immutable, loaded class/define schema plus chain resolution.
///
/// Built once from the two schema documents; never mutated afterwards, so one
/// instance can serve concurrent completion/hover requests without locking.
#[derive(Debug)]
pub struct SchemaStore {
    /// Synthetic global-scope node; its properties are the classes mapping.
    root: TypeNode,
    defines: IndexMap<String, TypeNode>,
}

impl SchemaStore {
    /// Build a store from the two raw JSON documents.
    pub fn from_documents(
        classes_json: &str,
        defines_json: &str,
        aliases: &AliasConfig,
    ) -> Result<Self, DataLoadError> {
        let classes = parse_doc(CLASSES_DOC, classes_json)?;
        let defines = parse_doc(DEFINES_DOC, defines_json)?;
        Ok(Self::assemble(classes, defines, aliases))
    }

    /// Read `classes.json` and `defines.json` from a schema data directory.
    pub fn load(dir: &Path, aliases: &AliasConfig) -> Result<Self, DataLoadError> {
        let classes = read_doc(dir, CLASSES_DOC)?;
        let defines = read_doc(dir, DEFINES_DOC)?;
        Self::from_documents(&classes, &defines, aliases)
    }

    fn assemble(
        mut classes: IndexMap<String, TypeNode>,
        defines: IndexMap<String, TypeNode>,
        aliases: &AliasConfig,
    ) -> Self {
        for (trigger, class) in aliases.iter() {
            match classes.get(class).cloned() {
                Some(node) => {
                    classes.insert(trigger.to_string(), node);
                }
                None => {
                    tracing::debug!(
                        target: "kelp.schema",
                        trigger,
                        class,
                        "alias target is not a known class; skipped"
                    );
                }
            }
        }

        // Make every define group reachable through ordinary traversal as
        // `defines.<GroupName>`.
        classes.insert(
            "defines".to_string(),
            TypeNode {
                kind: Some(NodeKind::Define),
                properties: defines.clone(),
                ..TypeNode::default()
            },
        );

        tracing::info!(
            target: "kelp.schema",
            classes = classes.len(),
            defines = defines.len(),
            "schema loaded"
        );

        Self {
            root: TypeNode {
                properties: classes,
                ..TypeNode::default()
            },
            defines,
        }
    }

    /// The classes mapping, including the synthesized `defines` pseudo-class.
    #[must_use]
    pub fn classes(&self) -> &IndexMap<String, TypeNode> {
        &self.root.properties
    }

    /// The define groups.
    #[must_use]
    pub fn defines(&self) -> &IndexMap<String, TypeNode> {
        &self.defines
    }

    /// Resolve a dotted/bracketed identifier chain to a schema node.
    ///
    /// Misses of every flavor (unknown root class, unknown property, dangling
    /// type reference, unresolved define group) resolve to the empty sentinel
    /// ([`TypeNode::is_empty`]); resolution never fails.
    ///
    /// An empty path resolves to the global scope: a synthetic node whose
    /// properties are the full classes mapping.
    #[must_use]
    pub fn resolve<S: AsRef<str>>(&self, path: &[S]) -> &TypeNode {
        // Index decorations are stripped before any lookup
        // (`players[0].inventory` resolves like `players.inventory`).
        let segments: Vec<Cow<'_, str>> =
            path.iter().map(|s| strip_index(s.as_ref())).collect();
        let Some((root_name, rest)) = segments.split_first() else {
            // Empty path: global scope.
            return &self.root;
        };

        let Some(root) = self.root.properties.get(root_name.as_ref()) else {
            return &EMPTY;
        };
        if root.properties.is_empty() {
            return root;
        }

        let mut node = root;
        let mut props = &node.properties;

        for (i, segment) in rest.iter().enumerate() {
            let Some(next) = props.get(segment.as_ref()) else {
                return &EMPTY;
            };
            node = next;

            // Direct structural nesting wins over type-name indirection.
            if !next.properties.is_empty() {
                props = &next.properties;
                continue;
            }

            let Some(type_ref) = next.type_ref.as_deref() else {
                if i + 1 == rest.len() {
                    // A plain leaf is a valid terminal.
                    break;
                }
                return &EMPTY;
            };

            if let Some(group) = define_group(type_ref) {
                // Define groups terminalize the chain no matter how many
                // segments are left unconsumed.
                return self.defines.get(group).unwrap_or(&EMPTY);
            }

            let Some(class) = self.root.properties.get(type_ref) else {
                return &EMPTY;
            };
            node = class;
            if !class.properties.is_empty() {
                props = &class.properties;
            }
            // A reference to a properties-less class leaves the cursor where
            // it was; later segments are looked up in the unchanged map.
        }

        node
    }
}

fn parse_doc(doc: &'static str, json: &str) -> Result<IndexMap<String, TypeNode>, DataLoadError> {
    serde_json::from_str(json).map_err(|source| DataLoadError::Malformed { doc, source })
}

fn read_doc(dir: &Path, doc: &'static str) -> Result<String, DataLoadError> {
    fs::read_to_string(dir.join(doc)).map_err(|source| DataLoadError::Unreadable { doc, source })
}

/// Remove array/dict access decoration: `players[0]` becomes `players`.
///
/// The decoration spans the first `[` through the last `]`; a segment with an
/// unmatched bracket is left untouched (and will simply miss on lookup).
fn strip_index(segment: &str) -> Cow<'_, str> {
    let (Some(open), Some(close)) = (segment.find('['), segment.rfind(']')) else {
        return Cow::Borrowed(segment);
    };
    if close < open {
        return Cow::Borrowed(segment);
    }
    let mut stripped = String::with_capacity(segment.len());
    stripped.push_str(&segment[..open]);
    stripped.push_str(&segment[close + 1..]);
    Cow::Owned(stripped)
}

/// Group name of a `defines.<GroupName>` type reference.
fn define_group(type_ref: &str) -> Option<&str> {
    let rest = type_ref.strip_prefix("defines.")?;
    let group = rest.split('.').next().unwrap_or(rest);
    (!group.is_empty()).then_some(group)
}
