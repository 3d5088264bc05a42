//! End-to-end provider behavior over a realistic schema: raw line text plus a
//! cursor column in, completion items or hover markdown out.

use kelp_ide::{completions, hover};
use kelp_schema::{AliasConfig, SchemaStore};
use lsp_types::{CompletionItemKind, HoverContents};

const CLASSES: &str = r#"{
    "game": {
        "kind": "class",
        "name": "LuaGame",
        "properties": {
            "players": { "typeRef": "Player" },
            "tick": { "kind": "field", "name": "tick", "doc": "Elapsed ticks." }
        }
    },
    "Player": {
        "kind": "class",
        "name": "Player",
        "properties": {
            "walk": {
                "kind": "function",
                "name": "walk",
                "args": { "direction": {} },
                "returns": "boolean"
            },
            "direction": { "typeRef": "defines.direction" }
        }
    }
}"#;

const DEFINES: &str = r#"{
    "direction": {
        "kind": "define",
        "properties": {
            "north": { "kind": "define", "name": "north" },
            "east": { "kind": "define", "name": "east" }
        }
    }
}"#;

fn store() -> SchemaStore {
    SchemaStore::from_documents(CLASSES, DEFINES, &AliasConfig::new()).expect("fixture loads")
}

#[test]
fn typing_a_chain_offers_the_member_properties() {
    let store = store();

    let line = "if game.players[1].";
    let items = completions(&store, line, line.len() as u32);
    let labels: Vec<_> = items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, ["walk", "direction"]);
    assert_eq!(items[0].kind, Some(CompletionItemKind::FUNCTION));
    assert_eq!(
        items[0].detail.as_deref(),
        Some("(function) walk(direction): boolean")
    );
}

#[test]
fn define_group_members_complete_as_constants() {
    let store = store();

    let line = "local d = game.players[1].direction.";
    let items = completions(&store, line, line.len() as u32);
    let labels: Vec<_> = items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, ["north", "east"]);
    assert!(items
        .iter()
        .all(|i| i.kind == Some(CompletionItemKind::CONSTANT)));
}

#[test]
fn the_defines_pseudo_class_completes_like_any_other_chain() {
    let store = store();

    let line = "defines.direction.";
    let items = completions(&store, line, line.len() as u32);
    let labels: Vec<_> = items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, ["north", "east"]);
}

#[test]
fn unknown_chains_offer_nothing() {
    let store = store();
    assert!(completions(&store, "game.bogus.", 11).is_empty());
    assert!(completions(&store, "spaceship.", 10).is_empty());
}

#[test]
fn hovering_a_field_shows_its_documentation() {
    let store = store();

    // Cursor on the `t` of `tick`.
    let hover = hover(&store, "game.tick", 5).expect("hover result");
    let HoverContents::Markup(markup) = hover.contents else {
        panic!("expected markup hover contents");
    };
    assert!(markup.value.contains("(field) tick"));
    assert!(markup.value.contains("Elapsed ticks."));
}

#[test]
fn hovering_blank_space_yields_nothing() {
    let store = store();
    assert!(hover(&store, "   ", 1).is_none());
}
