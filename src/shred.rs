//! Synthetic shredding.
//!
//! Produces overlapping fragments from a known document, for benchmarks,
//! tests and the `shred` subcommand.

/// Cut `text` into fragments of `fragment_len` characters starting every
/// `stride` characters, in document order.
///
/// Consecutive fragments overlap by `fragment_len - stride` characters when
/// `stride < fragment_len`. The final fragment always reaches the end of the
/// text, so it may be shorter. A zero `stride` or `fragment_len` is treated
/// as 1, and `stride` is clamped to `fragment_len` so no text falls between
/// fragments.
pub fn shred_text(text: &str, fragment_len: usize, stride: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let fragment_len = fragment_len.max(1);
    let stride = stride.clamp(1, fragment_len);

    let mut fragments = Vec::new();
    let mut start = 0usize;

    while start < chars.len() {
        let end = (start + fragment_len).min(chars.len());
        fragments.push(chars[start..end].iter().collect());

        if end == chars.len() {
            break;
        }
        start += stride;
    }

    fragments
}

/// Deterministically reorder fragments: odd positions in reverse, then even
/// positions in order.
pub fn scramble(fragments: Vec<String>) -> Vec<String> {
    let mut odd = Vec::with_capacity(fragments.len() / 2);
    let mut even = Vec::with_capacity(fragments.len() / 2 + 1);

    for (idx, fragment) in fragments.into_iter().enumerate() {
        if idx % 2 == 1 {
            odd.push(fragment);
        } else {
            even.push(fragment);
        }
    }

    odd.reverse();
    odd.extend(even);
    odd
}

/// Generate a non-repeating sample document of `words` numbered words.
pub fn sample_text(words: usize) -> String {
    (0..words)
        .map(|i| format!("w{}", i))
        .collect::<Vec<_>>()
        .join(" ")
}
