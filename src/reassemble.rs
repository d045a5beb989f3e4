//! Greedy reassembly driver.
//!
//! This module runs the full reconstruction loop: containment removal,
//! pairwise overlap scoring, and merging of the best pair, one round at a
//! time until a single fragment remains.

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use thiserror::Error;

use crate::contain::remove_contained;
use crate::merge::{concat_fragments, merge_fragments};
use crate::models::*;
use crate::overlap::score_overlap_chars;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReassembleError {
    #[error("No fragments to reassemble")]
    EmptyInput,
}

/// Driver state between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DriverState {
    MultipleFragments,
    SingleFragment,
}

impl DriverState {
    fn for_count(count: usize) -> Self {
        if count > 1 {
            DriverState::MultipleFragments
        } else {
            DriverState::SingleFragment
        }
    }
}

/// A scored candidate pair, `left < right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredPair {
    pub left: usize,
    pub right: usize,
    pub overlap: Overlap,
}

/// Reconstruct the original text from a set of fragments with default parameters.
pub fn reconstruct(fragments: Vec<String>) -> Result<String, ReassembleError> {
    let params = ReassemblyParams {
        record_steps: false,
        ..Default::default()
    };
    reassemble(fragments, &params, false).map(|result| result.text)
}

/// Reassemble fragments into a single document.
///
/// Each round removes contained fragments, then merges the pair with the
/// strictly largest overlap (first pair in scan order on ties). When no pair
/// overlaps at all, the remaining fragments are concatenated in order.
///
/// Every merge and every containment removal shrinks the collection by one,
/// so `summary.merges + summary.contained_removed == fragments.len() - 1`.
pub fn reassemble(
    mut fragments: Vec<String>,
    params: &ReassemblyParams,
    show_progress: bool,
) -> Result<Reassembly, ReassembleError> {
    if fragments.is_empty() {
        return Err(ReassembleError::EmptyInput);
    }

    let mut summary = ReassemblySummary {
        input_fragments: fragments.len(),
        input_chars: total_chars(&fragments),
        ..Default::default()
    };
    let mut steps = Vec::new();

    log::info!("Reassembling {} fragments", fragments.len());

    let progress = if show_progress {
        let pb = ProgressBar::new(fragments.len().saturating_sub(1) as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} fragments")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        Some(pb)
    } else {
        None
    };

    let mut state = DriverState::for_count(fragments.len());

    while state == DriverState::MultipleFragments {
        summary.rounds += 1;
        let round = summary.rounds;
        let before = fragments.len();

        // Containment removal
        let chars_before = total_chars(&fragments);
        let removed = remove_contained(&mut fragments);
        if !removed.is_empty() {
            summary.contained_removed += removed.len();
            summary.contained_chars += chars_before - total_chars(&fragments);
            log::debug!(
                "Round {}: removed {} contained fragments",
                round,
                removed.len()
            );
        }

        if fragments.len() > 1 {
            let use_parallel = params.use_parallel(fragments.len());
            match find_best_pair(&fragments, use_parallel) {
                Some(best) => {
                    log::debug!(
                        "Round {}: merging {} and {} (overlap {}, {:?})",
                        round,
                        best.left,
                        best.right,
                        best.overlap.length,
                        best.overlap.direction
                    );
                    let step = merge_pair(&mut fragments, best, round, false);
                    record_step(&mut summary, &mut steps, step, params);
                }
                None => {
                    log::debug!(
                        "Round {}: no overlapping pair, concatenating {} fragments",
                        round,
                        fragments.len()
                    );
                    while fragments.len() > 1 {
                        let pair = ScoredPair {
                            left: 0,
                            right: 1,
                            overlap: Overlap::none(),
                        };
                        let step = merge_pair(&mut fragments, pair, round, true);
                        record_step(&mut summary, &mut steps, step, params);
                    }
                }
            }
        }

        if let Some(ref pb) = progress {
            pb.inc((before - fragments.len()) as u64);
        }

        state = DriverState::for_count(fragments.len());
    }

    if let Some(pb) = progress {
        pb.finish_with_message("Done");
    }

    // The loop above only exits with exactly one fragment left.
    let text = fragments.pop().unwrap_or_default();
    summary.output_chars = text.chars().count();

    log::info!(
        "Reassembled {} fragments in {} rounds ({} merges, {} contained, {} chars)",
        summary.input_fragments,
        summary.rounds,
        summary.merges,
        summary.contained_removed,
        summary.output_chars
    );

    Ok(Reassembly {
        version: env!("CARGO_PKG_VERSION").to_string(),
        parameters: params.clone(),
        summary,
        steps,
        text,
    })
}

/// Score every pair of fragments in row-major order `(0,1), (0,2), …, (1,2), …`.
///
/// The parallel scan produces the same ordering as the sequential one.
pub fn score_all_pairs(fragments: &[String], parallel: bool) -> Vec<ScoredPair> {
    let chars: Vec<Vec<char>> = fragments.iter().map(|f| f.chars().collect()).collect();
    let pairs = generate_all_pairs(fragments.len());

    let score = |&(left, right): &(usize, usize)| ScoredPair {
        left,
        right,
        overlap: score_overlap_chars(&chars[left], &chars[right]),
    };

    if parallel {
        pairs.par_iter().map(score).collect()
    } else {
        pairs.iter().map(score).collect()
    }
}

/// Find the pair with the strictly largest positive overlap.
///
/// Ties keep the first pair in scan order. Returns `None` when no pair
/// overlaps at all.
pub fn find_best_pair(fragments: &[String], parallel: bool) -> Option<ScoredPair> {
    select_best_pair(&score_all_pairs(fragments, parallel))
}

/// Pick the winner from an already scored list.
pub fn select_best_pair(scored: &[ScoredPair]) -> Option<ScoredPair> {
    let mut best: Option<ScoredPair> = None;

    for pair in scored.iter().filter(|p| p.overlap.is_positive()) {
        match best {
            Some(current) if pair.overlap.length <= current.overlap.length => {}
            _ => best = Some(*pair),
        }
    }

    best
}

/// Generate all unordered index pairs `(i, j)` with `i < j`.
fn generate_all_pairs(len: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(len * len.saturating_sub(1) / 2);
    for i in 0..len {
        for j in (i + 1)..len {
            pairs.push((i, j));
        }
    }
    pairs
}

/// Merge `pair` in place: the result replaces the left slot, the right slot is removed.
fn merge_pair(
    fragments: &mut Vec<String>,
    pair: ScoredPair,
    round: usize,
    fallback: bool,
) -> MergeStep {
    let right = fragments.remove(pair.right);
    let left = &mut fragments[pair.left];

    let merged = if fallback {
        concat_fragments(left, &right)
    } else {
        merge_fragments(left, &right, pair.overlap)
    };
    let merged_len = merged.chars().count();
    *left = merged;

    MergeStep {
        round,
        left_index: pair.left,
        right_index: pair.right,
        overlap: pair.overlap,
        merged_len,
        fallback,
    }
}

fn record_step(
    summary: &mut ReassemblySummary,
    steps: &mut Vec<MergeStep>,
    step: MergeStep,
    params: &ReassemblyParams,
) {
    summary.merges += 1;
    summary.total_overlap += step.overlap.length;
    if step.fallback {
        summary.fallback_merges += 1;
    }
    if params.record_steps {
        steps.push(step);
    }
}

fn total_chars(fragments: &[String]) -> usize {
    fragments.iter().map(|f| f.chars().count()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sequential() -> ReassemblyParams {
        ReassemblyParams {
            parallel: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_simple_overlap() {
        let text = reconstruct(fragments(&["The quick ", "quick brown fox"])).unwrap();
        assert_eq!(text, "The quick brown fox");
    }

    #[test]
    fn test_disjoint_fragments_concatenate_in_order() {
        let text = reconstruct(fragments(&["hello", "world"])).unwrap();
        assert_eq!(text, "helloworld");
    }

    #[test]
    fn test_contained_fragment_removed() {
        let result = reassemble(fragments(&["abcabc", "abc"]), &sequential(), false).unwrap();
        assert_eq!(result.text, "abcabc");
        assert_eq!(result.summary.contained_removed, 1);
        assert_eq!(result.summary.merges, 0);
    }

    #[test]
    fn test_cyclic_chain() {
        let result = reassemble(fragments(&["xy", "yz", "zx"]), &sequential(), false).unwrap();
        assert_eq!(result.text, "xyzx");
        assert_eq!(result.summary.total_overlap, 2);
        assert_eq!(result.text.chars().count(), 2 + 2 + 2 - 2);
    }

    #[test]
    fn test_empty_input() {
        let err = reassemble(Vec::new(), &sequential(), false).unwrap_err();
        assert_eq!(err, ReassembleError::EmptyInput);
        assert_eq!(reconstruct(Vec::new()), Err(ReassembleError::EmptyInput));
    }

    #[test]
    fn test_single_fragment_unchanged() {
        let result = reassemble(fragments(&["only one"]), &sequential(), false).unwrap();
        assert_eq!(result.text, "only one");
        assert_eq!(result.summary.rounds, 0);
        assert!(result.steps.is_empty());
    }

    #[test]
    fn test_single_empty_fragment() {
        assert_eq!(reconstruct(fragments(&[""])).unwrap(), "");
    }

    #[test]
    fn test_best_pair_wins_over_first_pair() {
        // (0,1) overlaps by 1, (1,2) by 3: the second pair is merged first.
        let frags = fragments(&["ab", "bcde", "cdef"]);
        let best = find_best_pair(&frags, false).unwrap();
        assert_eq!((best.left, best.right), (1, 2));
        assert_eq!(best.overlap, Overlap::new(3, Direction::AThenB));
    }

    #[test]
    fn test_ties_keep_first_pair_in_scan_order() {
        // (0,1) and (0,2) and (1,2) all overlap by 1
        let frags = fragments(&["xy", "yz", "zx"]);
        let best = find_best_pair(&frags, false).unwrap();
        assert_eq!((best.left, best.right), (0, 1));
    }

    #[test]
    fn test_no_positive_pair() {
        let frags = fragments(&["ab", "cd", "ef"]);
        assert!(find_best_pair(&frags, false).is_none());
    }

    #[test]
    fn test_b_then_a_merge_goes_into_left_slot() {
        let result =
            reassemble(fragments(&["brown fox", "the quick brown"]), &sequential(), false).unwrap();
        assert_eq!(result.text, "the quick brown fox");
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.steps[0].overlap.direction, Direction::BThenA);
        assert_eq!(result.steps[0].left_index, 0);
        assert_eq!(result.steps[0].right_index, 1);
    }

    #[test]
    fn test_fallback_steps_recorded() {
        let result = reassemble(fragments(&["ab", "cd", "ef"]), &sequential(), false).unwrap();
        assert_eq!(result.text, "abcdef");
        assert_eq!(result.summary.fallback_merges, 2);
        assert_eq!(result.summary.rounds, 1);
        assert!(result.steps.iter().all(|s| s.fallback && s.overlap.length == 0));
    }

    #[test]
    fn test_record_steps_disabled() {
        let params = ReassemblyParams {
            parallel: false,
            record_steps: false,
            ..Default::default()
        };
        let result = reassemble(fragments(&["abc", "cde", "efg"]), &params, false).unwrap();
        assert_eq!(result.text, "abcdefg");
        assert!(result.steps.is_empty());
        assert_eq!(result.summary.merges, 2);
    }

    #[test]
    fn test_character_accounting() {
        let frags = fragments(&["to be or", "or not to", "not to be", "be"]);
        let result = reassemble(frags, &sequential(), false).unwrap();
        let s = &result.summary;
        assert_eq!(
            s.output_chars,
            s.input_chars - s.contained_chars - s.total_overlap
        );
        assert_eq!(s.merges + s.contained_removed, s.input_fragments - 1);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let frags = fragments(&[
            "It was the best",
            "best of times, it was",
            "it was the worst",
            "the worst of times",
            "was the best of",
        ]);
        let parallel = ReassemblyParams {
            parallel: true,
            parallel_threshold: 0,
            ..Default::default()
        };
        let a = reassemble(frags.clone(), &sequential(), false).unwrap();
        let b = reassemble(frags, &parallel, false).unwrap();
        assert_eq!(a.text, b.text);
        assert_eq!(a.steps, b.steps);
    }

    #[test]
    fn test_generate_all_pairs() {
        assert!(generate_all_pairs(0).is_empty());
        assert!(generate_all_pairs(1).is_empty());
        assert_eq!(generate_all_pairs(3), vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_select_best_pair_ignores_zero() {
        let scored = vec![
            ScoredPair {
                left: 0,
                right: 1,
                overlap: Overlap::none(),
            },
            ScoredPair {
                left: 0,
                right: 2,
                overlap: Overlap::new(2, Direction::BThenA),
            },
            ScoredPair {
                left: 1,
                right: 2,
                overlap: Overlap::new(2, Direction::AThenB),
            },
        ];
        let best = select_best_pair(&scored).unwrap();
        assert_eq!((best.left, best.right), (0, 2));
    }

    #[test]
    fn test_select_best_pair_all_zero() {
        let scored = vec![ScoredPair {
            left: 0,
            right: 1,
            overlap: Overlap::none(),
        }];
        assert!(select_best_pair(&scored).is_none());
    }

    #[test]
    fn test_select_best_pair_longer_later_pair_wins() {
        let scored = vec![
            ScoredPair {
                left: 0,
                right: 1,
                overlap: Overlap::new(1, Direction::AThenB),
            },
            ScoredPair {
                left: 1,
                right: 2,
                overlap: Overlap::new(3, Direction::AThenB),
            },
        ];
        let best = select_best_pair(&scored).unwrap();
        assert_eq!((best.left, best.right), (1, 2));
    }
}
