//! Shrinking of over-long text fields while keeping head and tail context.

use std::borrow::Cow;

/// Default number of bytes kept at each end of a shrunk text.
pub const SHRINK_THRESHOLD: usize = 50;

/// Marker substituted for the elided middle span.
const ELISION_MARKER: &str = "[...]";

/// Shrink `text` with the default threshold.
pub fn shrink_text(text: &str) -> Cow<'_, str> {
    shrink_text_to(text, SHRINK_THRESHOLD)
}

/// Shrink `text` so that it fits on one diagnostic line.
///
/// The kept prefix ends at the first newline (inclusive) or at `threshold`,
/// whichever comes first; the kept suffix starts just past the last newline
/// or `threshold` bytes before the end, whichever comes later. The elided
/// span in between is replaced with `[...]`. Text that is already compact,
/// or whose elidable span is shorter than the marker, is returned unchanged,
/// so the result is never longer than the input.
pub fn shrink_text_to(text: &str, threshold: usize) -> Cow<'_, str> {
    let length = text.len();

    let (from, to) = match (text.find('\n'), text.rfind('\n')) {
        (Some(first), Some(last)) => (first + 1, last + 1),
        _ => (length, 0),
    };

    let from = boundary_before(text, from.min(threshold));
    let to = boundary_after(text, to.max(length.saturating_sub(threshold)));

    if from + ELISION_MARKER.len() <= to {
        Cow::Owned(format!("{}{}{}", &text[..from], ELISION_MARKER, &text[to..]))
    } else {
        Cow::Borrowed(text)
    }
}

// Cut indices come from byte arithmetic and may land inside a multi-byte
// code point; snap them outward so slicing stays valid.
fn boundary_before(text: &str, mut index: usize) -> usize {
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn boundary_after(text: &str, mut index: usize) -> usize {
    while !text.is_char_boundary(index) {
        index += 1;
    }
    index
}
