//! Turning a resolved schema node's properties into completion items.

use kelp_schema::{NodeKind, TypeNode};
use lsp_types::{
    CompletionItem, CompletionItemKind, Documentation, MarkupContent, MarkupKind,
};

/// One item per property of the resolved context node, in the schema
/// document's insertion order.
pub(crate) fn items(node: &TypeNode) -> Vec<CompletionItem> {
    node.properties
        .iter()
        .map(|(key, child)| item(key, child))
        .collect()
}

fn item(key: &str, node: &TypeNode) -> CompletionItem {
    CompletionItem {
        label: key.to_string(),
        detail: Some(detail(key, node)),
        documentation: documentation(node),
        filter_text: Some(filter_text(key, node)),
        kind: Some(item_kind(node.kind)),
        ..CompletionItem::default()
    }
}

fn detail(key: &str, node: &TypeNode) -> String {
    let name = node.display_name(key);
    match node.kind {
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
            Some(type_ref) => format!("(property) {key}: {type_ref}"),
            None => format!("(property) {key}"),
        },
    }
}

fn documentation(node: &TypeNode) -> Option<Documentation> {
    let mut sections: Vec<String> = Vec::new();

    // The display name heads the documentation, except for functions, where
    // it is already part of the detail line.
    if node.kind != Some(NodeKind::Function) {
        if let Some(name) = node.name.as_deref() {
            sections.push(format!("**{name}**"));
        }
    }
    sections.extend(node.doc.clone());
    sections.extend(node.mode.clone());

    if sections.is_empty() {
        return None;
    }
    Some(Documentation::MarkupContent(MarkupContent {
        kind: MarkupKind::Markdown,
        value: sections.join("\n\n"),
    }))
}

/// Matches against either the lookup key or the declared display name.
fn filter_text(key: &str, node: &TypeNode) -> String {
    match node.name.as_deref() {
        Some(name) => format!("{key} {name}"),
        None => key.to_string(),
    }
}

fn item_kind(kind: Option<NodeKind>) -> CompletionItemKind {
    match kind {
        Some(NodeKind::Function) => CompletionItemKind::FUNCTION,
        Some(NodeKind::Field) => CompletionItemKind::FIELD,
        Some(NodeKind::Class) => CompletionItemKind::CLASS,
        Some(NodeKind::Define) => CompletionItemKind::CONSTANT,
        None => CompletionItemKind::PROPERTY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn node(json: &str) -> TypeNode {
        serde_json::from_str(json).expect("fixture node parses")
    }

    #[test]
    fn property_detail_includes_the_type_reference() {
        let ctx = node(r#"{ "properties": {
            "inventory": { "typeRef": "Inventory" },
            "bare": {}
        } }"#);
        let items = items(&ctx);

        assert_eq!(items[0].detail.as_deref(), Some("(property) inventory: Inventory"));
        assert_eq!(items[0].kind, Some(CompletionItemKind::PROPERTY));
        assert_eq!(items[0].filter_text.as_deref(), Some("inventory"));
        assert_eq!(items[1].detail.as_deref(), Some("(property) bare"));
    }

    #[test]
    fn function_detail_lists_parameters_and_return_type() {
        let dig = node(r#"{
            "kind": "function",
            "name": "dig",
            "doc": "Digs the block in front.",
            "args": { "side": {}, "count": {} },
            "returns": "boolean"
        }"#);

        let item = item("dig", &dig);
        assert_eq!(item.detail.as_deref(), Some("(function) dig(side, count): boolean"));
        assert_eq!(item.kind, Some(CompletionItemKind::FUNCTION));
        assert_eq!(item.filter_text.as_deref(), Some("dig dig"));

        // Functions keep the name out of the documentation body.
        let Some(Documentation::MarkupContent(markup)) = item.documentation else {
            panic!("expected markdown documentation");
        };
        assert_eq!(markup.value, "Digs the block in front.");
    }

    #[test]
    fn documentation_joins_name_doc_and_mode_with_blank_lines() {
        let field = node(r#"{
            "kind": "field",
            "name": "size",
            "doc": "Slot count.",
            "mode": "read-only"
        }"#);

        let item = item("size", &field);
        assert_eq!(item.detail.as_deref(), Some("(field) size"));
        let Some(Documentation::MarkupContent(markup)) = item.documentation else {
            panic!("expected markdown documentation");
        };
        assert_eq!(markup.value, "**size**\n\nSlot count.\n\nread-only");
    }

    #[test]
    fn nodes_without_documentation_emit_none() {
        let item = item("bare", &node("{}"));
        assert!(item.documentation.is_none());
    }

    #[test]
    fn define_entries_complete_as_constants() {
        let group = node(r#"{ "kind": "define", "properties": {
            "north": { "kind": "define", "name": "north" }
        } }"#);
        let items = items(&group);
        assert_eq!(items[0].detail.as_deref(), Some("(constant) north"));
        assert_eq!(items[0].kind, Some(CompletionItemKind::CONSTANT));
    }

    #[test]
    fn suggestions_keep_document_order() {
        let ctx = node(r#"{ "properties": {
            "zulu": {}, "alpha": {}, "mike": {}
        } }"#);
        let labels: Vec<_> = items(&ctx).into_iter().map(|i| i.label).collect();
        assert_eq!(labels, ["zulu", "alpha", "mike"]);
    }
}
