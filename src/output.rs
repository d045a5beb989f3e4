//! Output formatting for reassembly results (plain text, JSON, console summary).

use crate::models::{Direction, MergeStep, Reassembly};
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Fragment {index} contains a brace and cannot be written as a fragment file")]
    UnrepresentableFragment { index: usize },
}

/// Write the reconstructed text followed by a newline.
pub fn write_text<W: Write>(result: &Reassembly, writer: &mut W) -> Result<(), OutputError> {
    writeln!(writer, "{}", result.text)?;
    Ok(())
}

/// Write the reconstructed text to a file.
pub fn write_text_file(result: &Reassembly, path: &Path) -> Result<(), OutputError> {
    let mut file = std::fs::File::create(path)?;
    write_text(result, &mut file)
}

/// Write the full reassembly result as JSON.
pub fn write_json<W: Write>(result: &Reassembly, writer: &mut W) -> Result<(), OutputError> {
    let json = serde_json::to_string_pretty(result)?;
    writer.write_all(json.as_bytes())?;
    writeln!(writer)?;
    Ok(())
}

/// Write the full reassembly result as JSON to a file.
pub fn write_json_file(result: &Reassembly, path: &Path) -> Result<(), OutputError> {
    let mut file = std::fs::File::create(path)?;
    write_json(result, &mut file)
}

/// Write fragments in the brace-delimited fragment file format, one per line.
///
/// The format has no escapes, so a fragment containing `{` or `}` is rejected
/// before anything is written.
pub fn write_fragments<W: Write>(fragments: &[String], writer: &mut W) -> Result<(), OutputError> {
    check_representable(fragments)?;
    for fragment in fragments {
        writeln!(writer, "{{{}}}", fragment)?;
    }
    Ok(())
}

/// Write fragments to a fragment file. The file is not created when a
/// fragment cannot be represented.
pub fn write_fragments_file(fragments: &[String], path: &Path) -> Result<(), OutputError> {
    check_representable(fragments)?;
    let mut file = std::fs::File::create(path)?;
    write_fragments(fragments, &mut file)
}

fn check_representable(fragments: &[String]) -> Result<(), OutputError> {
    match fragments.iter().position(|f| f.contains(['{', '}'])) {
        Some(index) => Err(OutputError::UnrepresentableFragment { index }),
        None => Ok(()),
    }
}

/// Write a summary report to stderr.
pub fn print_summary(result: &Reassembly) {
    let summary = &result.summary;

    eprintln!("\n=== Reassembly Summary ===");
    eprintln!("Version: {}", result.version);
    eprintln!();
    eprintln!("Parameters:");
    eprintln!("  Parallel scan: {}", result.parameters.parallel);
    eprintln!("  Parallel threshold: {}", result.parameters.parallel_threshold);
    eprintln!();
    eprintln!("Results:");
    eprintln!("  Input fragments: {}", summary.input_fragments);
    eprintln!("  Contained fragments removed: {}", summary.contained_removed);
    eprintln!("  Merges: {} ({} without overlap)", summary.merges, summary.fallback_merges);
    eprintln!("  Rounds: {}", summary.rounds);
    eprintln!("  Characters consumed by overlap: {}", summary.total_overlap);
    eprintln!(
        "  Characters: {} in, {} out",
        summary.input_chars, summary.output_chars
    );
}

/// Format a merge step as a human-readable string.
pub fn format_step(step: &MergeStep) -> String {
    let order = match step.overlap.direction {
        Direction::AThenB => format!("{} + {}", step.left_index, step.right_index),
        Direction::BThenA => format!("{} + {}", step.right_index, step.left_index),
    };

    if step.fallback {
        format!(
            "Round {}: concat [{}] -> {} chars",
            step.round, order, step.merged_len
        )
    } else {
        format!(
            "Round {}: merge [{}] overlap={} -> {} chars",
            step.round, order, step.overlap.length, step.merged_len
        )
    }
}

/// Write up to `limit` merge steps, one per line.
pub fn write_steps<W: Write>(
    steps: &[MergeStep],
    limit: Option<usize>,
    writer: &mut W,
) -> Result<(), OutputError> {
    let limit = limit.unwrap_or(steps.len());

    for step in steps.iter().take(limit) {
        writeln!(writer, "{}", format_step(step))?;
    }

    if steps.len() > limit {
        writeln!(writer, "... and {} more steps", steps.len() - limit)?;
    }
    Ok(())
}
