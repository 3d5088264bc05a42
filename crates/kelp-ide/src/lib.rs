//! Editor-facing completion and hover over a loaded [`SchemaStore`].
//!
//! The editor integration supplies a line of text and a cursor column; this
//! crate extracts the identifier chain ending there, resolves it against the
//! schema, and formats the result as `lsp_types` payloads. Columns are UTF-16
//! code units, the LSP convention.

pub mod chain;
mod completion;
mod hover;
mod text;

pub use chain::Chain;

use kelp_schema::SchemaStore;
use lsp_types::{CompletionItem, Hover};

/// Completion suggestions for the chain ending at `column`.
///
/// A context that resolves to a node without properties yields no
/// suggestions; that is a normal outcome, not an error.
#[must_use]
pub fn completions(store: &SchemaStore, line: &str, column: u32) -> Vec<CompletionItem> {
    let chain = chain::at(line, text::column_to_offset(line, column));
    let node = store.resolve(&chain.context);
    let items = completion::items(node);
    tracing::debug!(
        target: "kelp.ide",
        context = ?chain.context,
        count = items.len(),
        "completion"
    );
    items
}

/// Hover documentation for the word under `column`, if any.
///
/// The cursor is first extended to the end of the word it sits in, so
/// hovering anywhere inside an identifier sees the whole identifier.
#[must_use]
pub fn hover(store: &SchemaStore, line: &str, column: u32) -> Option<Hover> {
    let offset = text::extend_to_word_end(line, text::column_to_offset(line, column));
    let chain = chain::at(line, offset);
    let node = store.resolve(&chain.context);
    hover::content(node, &chain.word)
}
