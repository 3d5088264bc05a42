//! Extraction of the identifier chain preceding the cursor.
//!
//! A line may contain several unrelated chains; only the rightmost one in the
//! text up to the cursor matters. The chain grammar is word/bracket runs
//! joined by dots, e.g. `game.players[0].inventory.`.

use once_cell::sync::Lazy;
use regex::Regex;

static CHAIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w\[\]]+(?:\.[\w\[\]]*)*").expect("chain pattern compiles"));

/// The chain immediately preceding the cursor, split into the context path
/// and the word being typed or hovered.
///
/// After a trailing dot the word is empty; with no chain at all both parts
/// are empty, which resolves to global scope.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Chain {
    pub context: Vec<String>,
    pub word: String,
}

/// Extract the chain ending at or before the byte offset `offset`.
#[must_use]
pub fn at(line: &str, offset: usize) -> Chain {
    let prefix = &line[..offset.min(line.len())];
    let Some(found) = CHAIN.find_iter(prefix).last() else {
        return Chain::default();
    };

    let mut parts: Vec<&str> = found.as_str().split('.').collect();
    let word = parts.pop().unwrap_or_default().to_string();
    Chain {
        context: parts.into_iter().map(str::to_string).collect(),
        word,
    }
}
