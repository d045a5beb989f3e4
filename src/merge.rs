//! Merge two overlapping fragments into one.
//!
//! The overlapping region appears exactly once in the result; no
//! non-overlapping character is dropped or duplicated.

use crate::models::{Direction, Overlap};

/// Merge two fragments given their overlap.
///
/// `AThenB` yields `a` followed by `b` without its first `overlap.length`
/// characters; `BThenA` yields `b` followed by `a` without its first
/// `overlap.length` characters. A zero-length overlap is plain concatenation
/// in the same order.
pub fn merge_fragments(a: &str, b: &str, overlap: Overlap) -> String {
    let (left, right) = match overlap.direction {
        Direction::AThenB => (a, b),
        Direction::BThenA => (b, a),
    };

    let tail = skip_chars(right, overlap.length);

    let mut merged = String::with_capacity(left.len() + tail.len());
    merged.push_str(left);
    merged.push_str(tail);
    merged
}

/// Concatenate two fragments that share no boundary.
pub fn concat_fragments(a: &str, b: &str) -> String {
    merge_fragments(a, b, Overlap::none())
}

/// Drop the first `count` characters of `s`.
///
/// Dropping more characters than `s` holds yields the empty string.
#[inline]
fn skip_chars(s: &str, count: usize) -> &str {
    if count == 0 {
        return s;
    }

    let byte_offset = s
        .char_indices()
        .nth(count)
        .map_or(s.len(), |(idx, _)| idx);

    &s[byte_offset..]
}
