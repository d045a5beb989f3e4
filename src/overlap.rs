//! Exact suffix/prefix overlap scoring between two fragments.
//!
//! This is the HOT PATH of reassembly: every round scores every pair of
//! remaining fragments. Lengths are measured in characters so that merges
//! never split a multi-byte code point.

use crate::models::{Direction, Overlap};

/// Score the overlap between two fragments in both directions.
///
/// Returns the largest `k` such that the last `k` characters of one fragment
/// equal the first `k` characters of the other, together with the direction
/// that achieved it.
///
/// Ties go to `a` then `b`: the `b`-first direction only wins when its overlap
/// is strictly longer. Two fragments with no shared boundary score 0 in the
/// `AThenB` direction.
pub fn score_overlap(a: &str, b: &str) -> Overlap {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    score_overlap_chars(&a_chars, &b_chars)
}

/// Same as [`score_overlap`] for fragments already split into characters.
#[inline]
pub fn score_overlap_chars(a: &[char], b: &[char]) -> Overlap {
    let a_then_b = suffix_prefix_overlap(a, b);
    let b_then_a = suffix_prefix_overlap(b, a);

    if b_then_a > a_then_b {
        Overlap::new(b_then_a, Direction::BThenA)
    } else {
        Overlap::new(a_then_b, Direction::AThenB)
    }
}

/// Length of the longest suffix of `left` that is also a prefix of `right`.
///
/// Candidates run from the shorter fragment's full length down to 1, so the
/// first hit is the maximum. Worst case O(m²) character comparisons.
#[inline]
pub fn suffix_prefix_overlap(left: &[char], right: &[char]) -> usize {
    let max_len = left.len().min(right.len());

    (1..=max_len)
        .rev()
        .find(|&k| left[left.len() - k..] == right[..k])
        .unwrap_or(0)
}
