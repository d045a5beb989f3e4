//! Data structures for the fragment reassembly pipeline.

use serde::{Deserialize, Serialize};

/// Which fragment holds the overlapping prefix side of a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    /// The suffix of `a` matches the prefix of `b`; `a` goes first.
    #[default]
    AThenB,
    /// The suffix of `b` matches the prefix of `a`; `b` goes first.
    BThenA,
}

/// Overlap between two fragments.
///
/// `length` is counted in characters. A length of 0 means the fragments
/// share no boundary and merge by plain concatenation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Overlap {
    pub length: usize,
    pub direction: Direction,
}

impl Overlap {
    pub fn new(length: usize, direction: Direction) -> Self {
        Self { length, direction }
    }

    /// Zero-length overlap in the `a`-first order.
    pub fn none() -> Self {
        Self::default()
    }

    /// True when the fragments share a boundary worth merging on.
    pub fn is_positive(&self) -> bool {
        self.length > 0
    }
}

/// One merge performed by the driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeStep {
    pub round: usize,
    pub left_index: usize,  // Slot that receives the merged fragment
    pub right_index: usize, // Slot removed from the collection
    pub overlap: Overlap,
    pub merged_len: usize,  // Characters in the merged fragment
    pub fallback: bool,     // True for zero-overlap concatenation of disjoint fragments
}

/// Reassembly parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReassemblyParams {
    pub parallel: bool,            // Score fragment pairs with rayon
    pub parallel_threshold: usize, // Minimum fragment count before the parallel scan kicks in
    pub record_steps: bool,        // Keep a MergeStep for every merge
}

impl Default for ReassemblyParams {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 64,
            record_steps: true,
        }
    }
}

impl ReassemblyParams {
    /// Whether a round over `fragment_count` fragments should use the parallel scan.
    pub fn use_parallel(&self, fragment_count: usize) -> bool {
        self.parallel && fragment_count >= self.parallel_threshold
    }
}

/// Counters describing one reconstruction.
///
/// Character accounting always balances:
/// `output_chars == input_chars - contained_chars - total_overlap`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReassemblySummary {
    pub input_fragments: usize,
    pub contained_removed: usize,
    pub merges: usize,
    pub fallback_merges: usize,
    pub rounds: usize,
    pub total_overlap: usize,
    pub input_chars: usize,
    pub contained_chars: usize,
    pub output_chars: usize,
}

/// Full reassembly result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reassembly {
    pub version: String,
    pub parameters: ReassemblyParams,
    pub summary: ReassemblySummary,
    pub steps: Vec<MergeStep>,
    pub text: String,
}
