//! Integration tests for shred-reassemble.
//!
//! These tests verify the end-to-end functionality of the reassembly pipeline.

use shred_reassemble::contain::remove_contained;
use shred_reassemble::extract::{load_fragments_file, parse_fragments};
use shred_reassemble::models::{Direction, ReassemblyParams};
use shred_reassemble::output::write_fragments;
use shred_reassemble::overlap::score_overlap;
use shred_reassemble::reassemble::{reassemble, reconstruct, ReassembleError};
use shred_reassemble::shred::{sample_text, scramble, shred_text};
use std::path::Path;

/// Helper to build an owned fragment collection.
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
fn test_scenario_simple_overlap() {
    let overlap = score_overlap("The quick ", "quick brown fox");
    assert_eq!(overlap.length, 6);
    assert_eq!(overlap.direction, Direction::AThenB);

    let text = reconstruct(fragments(&["The quick ", "quick brown fox"])).unwrap();
    assert_eq!(text, "The quick brown fox");
}

#[test]
fn test_scenario_no_overlap() {
    let text = reconstruct(fragments(&["hello", "world"])).unwrap();
    assert_eq!(text, "helloworld");
}

#[test]
fn test_scenario_containment() {
    let mut frags = fragments(&["abcabc", "abc"]);
    remove_contained(&mut frags);
    assert_eq!(frags, fragments(&["abcabc"]));

    let text = reconstruct(fragments(&["abcabc", "abc"])).unwrap();
    assert_eq!(text, "abcabc");
}

#[test]
fn test_scenario_cyclic_chain() {
    let result = reassemble(fragments(&["xy", "yz", "zx"]), &sequential(), false).unwrap();

    assert_eq!(result.text, "xyzx");
    assert_eq!(
        result.text.chars().count(),
        2 + 2 + 2 - result.summary.total_overlap
    );
    assert!(result.summary.merges <= 2);
}

#[test]
fn test_scenario_empty_input() {
    let result = reassemble(Vec::new(), &sequential(), false);
    assert!(matches!(result, Err(ReassembleError::EmptyInput)));
}

#[test]
fn test_round_trip_shredded_document() {
    let text = sample_text(200);
    let shredded = scramble(shred_text(&text, 30, 12));
    assert!(shredded.len() > 50);

    let result = reassemble(shredded.clone(), &sequential(), false).unwrap();
    assert_eq!(result.text, text);
    assert_eq!(
        result.summary.merges + result.summary.contained_removed,
        shredded.len() - 1
    );
}

#[test]
fn test_round_trip_parallel_scan() {
    let text = sample_text(150);
    let shredded = scramble(shred_text(&text, 36, 20));

    let params = ReassemblyParams {
        parallel: true,
        parallel_threshold: 0,
        ..Default::default()
    };

    let parallel = reassemble(shredded.clone(), &params, false).unwrap();
    let sequential = reassemble(shredded, &sequential(), false).unwrap();

    assert_eq!(parallel.text, text);
    assert_eq!(parallel.text, sequential.text);
    assert_eq!(parallel.steps, sequential.steps);
}

#[test]
fn test_duplicates_and_contained_fragments() {
    let frags = fragments(&[
        "brown fox jumps",
        "quick brown",
        "fox",
        "The quick",
        "quick brown",
        "jumps over the lazy dog",
    ]);

    let result = reassemble(frags, &sequential(), false).unwrap();
    assert_eq!(result.text, "The quick brown fox jumps over the lazy dog");
    assert_eq!(result.summary.contained_removed, 2);
}

#[test]
fn test_multiline_fragments_from_file_format() {
    let content = "{To be, or not to be,\nthat is}\n{that is the question:}\n{not to be,\nthat}\n";
    let frags = parse_fragments(content).unwrap();
    assert_eq!(frags.len(), 3);

    let text = reconstruct(frags).unwrap();
    assert_eq!(text, "To be, or not to be,\nthat is the question:");
}

#[test]
fn test_fragment_file_round_trip() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("fragments.txt");

    let text = sample_text(80);
    let shredded = scramble(shred_text(&text, 24, 14));

    let mut file = std::fs::File::create(&path).unwrap();
    write_fragments(&shredded, &mut file).unwrap();
    drop(file);

    let loaded = load_fragments_file(&path).unwrap();
    assert_eq!(loaded, shredded);
    assert_eq!(reconstruct(loaded).unwrap(), text);
}

#[test]
fn test_fixture_file() {
    let frags = load_fragments_file(Path::new("tests/fixtures/quick-fox.txt")).unwrap();
    let text = reconstruct(frags).unwrap();
    assert_eq!(text, "The quick brown fox jumps over the lazy dog.");
}

#[test]
fn test_unicode_fragments() {
    let frags = fragments(&["\u{3053}\u{3093}\u{306b}\u{3061}", "\u{306b}\u{3061}\u{306f}"]);
    let text = reconstruct(frags).unwrap();
    assert_eq!(text, "\u{3053}\u{3093}\u{306b}\u{3061}\u{306f}");
}
