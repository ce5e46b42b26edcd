//! Quakeload CLI - Convert GeoJSON earthquake feeds to bulk payloads
//!
//! # Main Commands
//!
//! ```bash
//! quakeload convert events.json -o events.bulk   # Convert to a bulk payload file
//! quakeload convert events.json -i seismic       # Pick the destination index
//! ```
//!
//! # Debug Commands (for development)
//!
//! ```bash
//! quakeload parse events.json      # Just parse the JSON lines
//! quakeload check events.json      # Per-line diagnostic, keeps going past errors
//! ```

use clap::{Parser, Subcommand};
use quakeload::{
    bulk_to_string, check_str, convert_file, parse_file, transform_records, ConvertOptions,
    DEFAULT_INDEX,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "quakeload")]
#[command(about = "Convert GeoJSON earthquake feeds to Elasticsearch bulk payloads", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert GeoJSON lines to a bulk payload
    Convert {
        /// Input GeoJSON lines file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Index name stamped on every action line
        #[arg(short, long, default_value = DEFAULT_INDEX)]
        index: String,
    },

    /// Parse a GeoJSON lines file and output the features as JSON
    Parse {
        /// Input GeoJSON lines file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check every line independently and report all problems
    Check {
        /// Input GeoJSON lines file
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            input,
            output,
            index,
        } => cmd_convert(&input, output.as_deref(), index),

        Commands::Parse { input, output } => cmd_parse(&input, output.as_deref()),

        Commands::Check { input } => cmd_check(&input),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    index: String,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Converting: {}", input.display());
    eprintln!("   Index: {}", index);

    let options = ConvertOptions { index };

    match output {
        Some(path) => {
            let report = convert_file(input, path, &options)?;
            eprintln!("✅ Converted {} events ({} lines)", report.features, report.lines);
            eprintln!("💾 Output written to: {}", path.display());
        }
        None => {
            let features = parse_file(input)?;
            let pairs = transform_records(&features, &options)?;
            eprintln!("✅ Converted {} events ({} lines)", pairs.len(), pairs.len() * 2);
            // The payload carries its own trailing newline.
            print!("{}", bulk_to_string(&pairs)?);
        }
    }

    Ok(())
}

fn cmd_parse(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Parsing: {}", input.display());

    let features = parse_file(input)?;
    eprintln!("✅ Parsed {} features", features.len());

    let json = serde_json::to_string_pretty(&features)?;
    write_output(&json, output)?;

    Ok(())
}

fn cmd_check(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("✔️  Checking: {}", input.display());

    let content = fs::read_to_string(input)?;
    let report = check_str(&content, &ConvertOptions::default());

    for (line, problem) in report.problems.iter().take(5) {
        eprintln!("❌ Line {}: {}", line, problem);
    }
    if report.invalid > 5 {
        eprintln!("   ... and {} more", report.invalid - 5);
    }

    eprintln!("\n📊 Results: {} valid, {} invalid", report.valid, report.invalid);

    if report.invalid > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
