//! Formatting hover documentation for a resolved word.

use kelp_schema::{NodeKind, TypeNode};
use lsp_types::{Hover, HoverContents, MarkupContent, MarkupKind};

/// Hover text for `word` inside the resolved context node.
///
/// The word is looked up among the context's properties first, then among its
/// parameters; anything else is no result, a normal outcome.
pub(crate) fn content(ctx: &TypeNode, word: &str) -> Option<Hover> {
    let node = ctx.property(word).or_else(|| ctx.arg(word))?;
    let name = node.display_name(word);

    let header = match node.kind {
        Some(NodeKind::Function) => {
            let args = node.args.keys().map(String::as_str).collect::<Vec<_>>();
            let args = args.join(", ");
            match node.returns.as_deref() {
                Some(returns) => format!("(function) {name}({args}): {returns}"),
                None => format!("(function) {name}({args})"),
            }
        }
        Some(NodeKind::Field) => format!("(field) {name}"),
        Some(NodeKind::Class) => format!("(class) {name}"),
        Some(NodeKind::Define) => format!("(constant) {name}"),
        None => match node.type_ref.as_deref() {
            Some(type_ref) => format!("(property) {word}: {type_ref}"),
            None => format!("(property) {word}"),
        },
    };

    let mut value = format!("```lua\n{header}\n```");
    if let Some(name) = node.name.as_deref() {
        // Never restate a display name identical to the hovered word.
        if name != word {
            value.push_str("\n\n**");
            value.push_str(name);
            value.push_str("**");
        }
    }
    if let Some(doc) = node.doc.as_deref() {
        value.push_str("\n\n");
        value.push_str(doc);
    }

    Some(Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value,
        }),
        range: None,
    })
}
