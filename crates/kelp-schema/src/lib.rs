//! The loaded API schema and its chain-resolution engine.
//!
//! The schema describes the scripting API exposed to editor users: a mapping
//! of classes plus a mapping of define groups (enumerated constants), loaded
//! once from two JSON documents and immutable afterwards. [`SchemaStore`]
//! resolves dotted/bracketed identifier chains against it; the completion and
//! hover providers in `kelp-ide` format the resolved nodes.

mod node;
mod store;

pub use node::{NodeKind, TypeNode};
pub use store::{AliasConfig, DataLoadError, SchemaStore, CLASSES_DOC, DEFINES_DOC};
