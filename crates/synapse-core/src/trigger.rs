//! Trigger-span extraction.
//!
//! Upstream of the collectors: given one line of text and a cursor,
//! decide whether the user is typing inside a trigger and what the
//! query text is so far. Offsets are character offsets, not bytes.

/// Where the trigger sits in the line. `start` points at the trigger
/// symbol itself; `end` is the cursor. Replacing `[start, end)` with a
/// suggestion's link markup commits it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerSpan {
    pub start: usize,
    pub end: usize,
    /// Text between the symbol and the cursor.
    pub query: String,
}

/// Find the active trigger on a line, looking left from the cursor.
///
/// The symbol occurrence closest to the cursor wins. An occurrence
/// sitting inside unfinished wiki-link syntax (an unclosed `[[` to its
/// left) is not a trigger. A cursor past the end of the line counts as
/// being at the end.
pub fn find_trigger_span(line: &str, cursor: usize, symbol: &str) -> Option<TriggerSpan> {
    if symbol.is_empty() {
        return None;
    }
    let chars: Vec<char> = line.chars().collect();
    let symbol_chars: Vec<char> = symbol.chars().collect();
    let cursor = cursor.min(chars.len());

    // windows() only yields complete windows, so a hit here always
    // ends at or before the cursor.
    let start = rfind_seq(&chars[..cursor], &symbol_chars)?;

    if let Some(open) = rfind_seq(&chars[..start], &['[', '[']) {
        let closed = find_seq(&chars[open..start], &[']', ']']).is_some();
        if !closed {
            return None;
        }
    }

    let query = chars[start + symbol_chars.len()..cursor].iter().collect();
    Some(TriggerSpan {
        start,
        end: cursor,
        query,
    })
}

fn find_seq(haystack: &[char], needle: &[char]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn rfind_seq(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .rposition(|window| window == needle)
}
