//! Containment elimination.
//!
//! Fragments that appear verbatim inside another fragment are dropped before
//! each merge round so they are never glued onto a boundary.

/// Remove every fragment contained in another fragment of the collection.
///
/// For each pair `(i, j)` with `i < j`, if one fragment is a substring of the
/// other the shorter one is marked; identical fragments mark the higher index.
/// Marked fragments are removed in descending index order so the survivors
/// keep their relative order.
///
/// Runs a single pass over all pairs. Chains of containment that only appear
/// after a merge are picked up on the next call.
///
/// Returns the removed indices in ascending order, relative to the collection
/// as it was before the call.
pub fn remove_contained(fragments: &mut Vec<String>) -> Vec<usize> {
    let contained = find_contained(fragments);

    // Remove from the back so earlier indices stay valid
    for &index in contained.iter().rev() {
        let removed = fragments.remove(index);
        log::trace!("Removed contained fragment {} ({} bytes)", index, removed.len());
    }

    contained
}

/// Find the indices of contained fragments without modifying the collection.
///
/// The result is sorted ascending and free of duplicates.
pub fn find_contained(fragments: &[String]) -> Vec<usize> {
    let mut contained = Vec::new();

    for i in 0..fragments.len() {
        for j in (i + 1)..fragments.len() {
            let (a, b) = (&fragments[i], &fragments[j]);

            if a.contains(b.as_str()) || b.contains(a.as_str()) {
                // Containment implies the container is at least as long, and
                // equal length means identical content: keep the lower index.
                let index = if a.len() >= b.len() { j } else { i };
                contained.push(index);
            }
        }
    }

    contained.sort_unstable();
    contained.dedup();
    contained
}
