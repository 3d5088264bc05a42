//! Cursor handling: LSP columns are UTF-16 code units, the schema engine
//! works on byte offsets.

/// Convert a UTF-16 column to a byte offset into `line`.
///
/// Columns past the end of the line clamp to its length; a column landing
/// inside a surrogate pair stays on the left side of the character.
pub(crate) fn column_to_offset(line: &str, column: u32) -> usize {
    let mut remaining = column;
    for (offset, ch) in line.char_indices() {
        let units = ch.len_utf16() as u32;
        if units > remaining {
            return offset;
        }
        remaining -= units;
    }
    line.len()
}

/// Extend a byte offset to the end of the identifier run it sits in, so a
/// cursor in the middle of a word still refers to the whole word.
pub(crate) fn extend_to_word_end(line: &str, offset: usize) -> usize {
    let mut end = offset.min(line.len());
    for ch in line[end..].chars() {
        if !is_word_char(ch) {
            break;
        }
        end += ch.len_utf8();
    }
    end
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
