//! Shred Reassemble command-line interface
//!
//! Reconstructs a document from a file of brace-delimited, overlapping
//! text fragments.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use shred_reassemble::config::resolve_base_params;
use shred_reassemble::extract::load_fragments_file;
use shred_reassemble::merge::merge_fragments;
use shred_reassemble::models::ReassemblyParams;
use shred_reassemble::output::{
    print_summary, write_fragments_file, write_json, write_json_file, write_steps, write_text,
    write_text_file,
};
use shred_reassemble::overlap::score_overlap;
use shred_reassemble::reassemble::reassemble;
use shred_reassemble::shred::{sample_text, scramble, shred_text};

#[derive(Parser)]
#[command(name = "shred-reassemble")]
#[command(about = "Reassemble a document from shredded, overlapping text fragments")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for the reconstruction
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// The reconstructed text only
    Text,
    /// JSON report with parameters, summary, merge steps and text
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Reassemble a fragment file into a single document
    ///
    /// Parameters default to ReassemblyParams::default(), then the config
    /// file (if any), then explicit flags.
    Reassemble {
        /// Fragment file ({...} delimited fragments)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// TOML configuration file with a [reassembly] table
        #[arg(long)]
        config: Option<PathBuf>,

        /// Score fragment pairs in parallel [default: true]
        #[arg(long, action = clap::ArgAction::Set)]
        parallel: Option<bool>,

        /// Minimum fragment count for the parallel scan [default: 64]
        #[arg(long)]
        parallel_threshold: Option<usize>,

        /// Suppress progress and summary output
        #[arg(short, long)]
        quiet: bool,

        /// Print the first N merge steps (stdout after the text, stderr with JSON)
        #[arg(long)]
        show_steps: Option<usize>,
    },

    /// Show the overlap between two fragments and their merge
    Overlap {
        /// First fragment
        a: String,

        /// Second fragment
        b: String,
    },

    /// Shred a text file into a scrambled fragment file
    Shred {
        /// Text file to shred
        #[arg(short, long)]
        input: PathBuf,

        /// Fragment file to write
        #[arg(short, long)]
        output: PathBuf,

        /// Characters per fragment
        #[arg(long, default_value = "40")]
        fragment_len: usize,

        /// Characters between fragment starts
        #[arg(long, default_value = "25")]
        stride: usize,
    },

    /// Benchmark reassembly performance on synthetic fragments
    Benchmark {
        /// Number of words in the synthetic document
        #[arg(long, default_value = "2000")]
        words: usize,

        /// Characters per fragment
        #[arg(long, default_value = "60")]
        fragment_len: usize,

        /// Characters between fragment starts
        #[arg(long, default_value = "30")]
        stride: usize,

        /// Number of reassembly runs
        #[arg(long, default_value = "5")]
        iterations: usize,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli.command) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Reassemble {
            input,
            output,
            format,
            config,
            parallel,
            parallel_threshold,
            quiet,
            show_steps,
        } => {
            let base = resolve_base_params(config.as_deref())?;

            // Overlay user-specified values onto the base parameters
            let params = ReassemblyParams {
                parallel: parallel.unwrap_or(base.parallel),
                parallel_threshold: parallel_threshold.unwrap_or(base.parallel_threshold),
                record_steps: base.record_steps || show_steps.is_some(),
            };

            let fragments = load_fragments_file(&input)?;
            if !quiet {
                eprintln!("Loaded {} fragments from {}", fragments.len(), input.display());
            }

            let result = reassemble(fragments, &params, !quiet)?;

            match (&output, format) {
                (Some(path), OutputFormat::Text) => write_text_file(&result, path)?,
                (Some(path), OutputFormat::Json) => write_json_file(&result, path)?,
                (None, OutputFormat::Text) => write_text(&result, &mut std::io::stdout().lock())?,
                (None, OutputFormat::Json) => write_json(&result, &mut std::io::stdout().lock())?,
            }

            if !quiet {
                print_summary(&result);
                if let Some(path) = &output {
                    eprintln!("\nOutput: {}", path.display());
                }
            }

            // Stdout carries only the report in JSON mode
            if let Some(limit) = show_steps {
                match format {
                    OutputFormat::Text => {
                        println!("\n=== Merge Steps ===");
                        write_steps(&result.steps, Some(limit), &mut std::io::stdout().lock())?;
                    }
                    OutputFormat::Json => {
                        eprintln!("\n=== Merge Steps ===");
                        write_steps(&result.steps, Some(limit), &mut std::io::stderr().lock())?;
                    }
                }
            }
        }

        Commands::Overlap { a, b } => {
            let overlap = score_overlap(&a, &b);
            println!("Overlap: {}", overlap.length);
            println!("Direction: {:?}", overlap.direction);
            println!("Merged: {}", merge_fragments(&a, &b, overlap));
        }

        Commands::Shred {
            input,
            output,
            fragment_len,
            stride,
        } => {
            let text = std::fs::read_to_string(&input)?;
            let fragments = scramble(shred_text(&text, fragment_len, stride));
            write_fragments_file(&fragments, &output)?;
            eprintln!("Wrote {} fragments to {}", fragments.len(), output.display());
        }

        Commands::Benchmark {
            words,
            fragment_len,
            stride,
            iterations,
        } => {
            run_benchmark(words, fragment_len, stride, iterations)?;
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity level. `RUST_LOG` takes precedence.
fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();
}

/// Run reassembly benchmark to measure performance.
fn run_benchmark(
    words: usize,
    fragment_len: usize,
    stride: usize,
    iterations: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    use std::time::Instant;

    let text = sample_text(words);
    let fragments = scramble(shred_text(&text, fragment_len, stride));

    println!("=== Reassembly Benchmark ===");
    println!("Document: {} chars", text.chars().count());
    println!("Fragments: {}", fragments.len());
    println!("Iterations: {}", iterations);

    for (label, parallel) in [("Sequential scan", false), ("Parallel scan", true)] {
        let params = ReassemblyParams {
            parallel,
            parallel_threshold: 0,
            record_steps: false,
        };

        println!("\n{}:", label);
        let start = Instant::now();
        let mut matched = true;
        for _ in 0..iterations {
            let result = reassemble(fragments.clone(), &params, false)?;
            matched &= result.text == text;
        }
        let elapsed = start.elapsed();
        let per_run = elapsed.as_secs_f64() / iterations.max(1) as f64;
        println!("  Total time: {:.3}s", elapsed.as_secs_f64());
        println!("  Per reassembly: {:.3}ms", per_run * 1000.0);
        println!("  Round-trip exact: {}", matched);
    }

    Ok(())
}
