//! Shred Reassemble Library
//!
//! Greedy reconstruction of a document from shredded, overlapping text
//! fragments. Each round drops fragments contained in others, then merges the
//! pair with the longest exact suffix/prefix overlap, until one fragment is
//! left.
//!
//! # Example
//!
//! ```
//! use shred_reassemble::prelude::*;
//!
//! let fragments = vec![
//!     "The quick ".to_string(),
//!     "quick brown fox".to_string(),
//! ];
//!
//! let text = reconstruct(fragments).unwrap();
//! assert_eq!(text, "The quick brown fox");
//! ```
//!
//! # Reading a Fragment File
//!
//! ```no_run
//! use shred_reassemble::prelude::*;
//! use std::path::Path;
//!
//! let fragments = load_fragments_file(Path::new("hamlet.txt")).unwrap();
//! let params = ReassemblyParams::default();
//!
//! let result = reassemble(fragments, &params, false).unwrap();
//!
//! println!("{}", result.text);
//! println!("{} merges", result.summary.merges);
//! ```

pub mod config;
pub mod contain;
pub mod extract;
pub mod merge;
pub mod models;
pub mod output;
pub mod overlap;
pub mod reassemble;
pub mod shred;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{load_params, parse_params, resolve_base_params, ConfigError};
    pub use crate::contain::{find_contained, remove_contained};
    pub use crate::extract::{load_fragments_file, parse_fragments, ParseError};
    pub use crate::merge::{concat_fragments, merge_fragments};
    pub use crate::models::{
        Direction, MergeStep, Overlap, Reassembly, ReassemblyParams, ReassemblySummary,
    };
    pub use crate::output::{
        format_step, print_summary, write_fragments, write_fragments_file, write_json,
        write_json_file, write_steps, write_text, write_text_file, OutputError,
    };
    pub use crate::overlap::{score_overlap, score_overlap_chars, suffix_prefix_overlap};
    pub use crate::reassemble::{
        find_best_pair, reassemble, reconstruct, score_all_pairs, select_best_pair,
        ReassembleError, ScoredPair,
    };
    pub use crate::shred::{sample_text, scramble, shred_text};
}

// Re-export commonly used types at the crate root
pub use models::{Direction, Overlap, Reassembly, ReassemblyParams};
pub use reassemble::{reassemble, reconstruct, ReassembleError};
