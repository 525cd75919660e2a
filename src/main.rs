use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use polyquery::commands::QueryEngine;
use polyquery::config::{FileConfig, Settings};
use polyquery::parser::load_polygons;

/// Exit status for bad command-line arguments
const EXIT_USAGE: u8 = 1;
/// Exit status when the polygon file cannot be opened
const EXIT_NO_INPUT: u8 = 2;

/// Answer aggregate geometry queries over a file of polygons
///
/// Each line of FILE is a polygon record: a vertex count N (at least 3)
/// followed by N points written as (x;y). Malformed lines are skipped.
///
/// Commands are read from standard input, one per line, and each prints a
/// single result line:
///   AREA EVEN|ODD|MEAN|<N>     sum (or mean) of polygon areas
///   MAX|MIN AREA|VERTEXES      extremum over all polygons
///   COUNT EVEN|ODD|<N>         number of matching polygons
///   RMECHO <polygon>           count duplicates and append that many copies
///   INTERSECTIONS <polygon>    polygons whose bounding boxes overlap it
///   RIGHTSHAPES                polygons with at least one right angle
///
/// Examples:
///   echo "AREA ODD" | polyquery shapes.txt
///   polyquery --precision 3 shapes.txt < queries.txt
#[derive(Parser, Debug)]
#[command(name = "polyquery")]
#[command(version, about, long_about = None)]
struct Args {
    /// Polygon record file
    file: PathBuf,

    /// Path to config file (optional, auto-searches polyquery.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print diagnostics (rejected records, command errors) to stderr
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Fractional digits for area results
    #[arg(short = 'p', long, value_parser = clap::value_parser!(u8).range(0..=6))]
    precision: Option<u8>,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_USAGE),
            };
        }
    };

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_USAGE)
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let file_config = match args.config {
        Some(ref path) => Some(FileConfig::load_from(path)?),
        None => FileConfig::load(),
    };
    let settings = Settings::resolve(
        file_config.as_ref(),
        args.verbose,
        args.precision.map(usize::from),
    );

    if settings.verbose {
        eprintln!("Configuration:");
        eprintln!("  Input: {}", args.file.display());
        if let Some(ref path) = args.config {
            eprintln!("  Config file: {}", path.display());
        }
        eprintln!("  Precision: {}", settings.precision);
        eprintln!();
    }

    let file = match File::open(&args.file) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("File cannot be opened: {}: {}", args.file.display(), e);
            return Ok(ExitCode::from(EXIT_NO_INPUT));
        }
    };

    let report = load_polygons(BufReader::new(file));
    if let Some(ref e) = report.read_error {
        eprintln!(
            "Warning: stopped reading {} early: {}",
            args.file.display(),
            e
        );
    }
    if settings.verbose {
        for rejected in &report.rejected {
            eprintln!("  Skipped line {}: {}", rejected.line, rejected.error);
        }
        eprintln!(
            "Loaded {} polygons, skipped {} records",
            report.polygons.len(),
            report.rejected.len()
        );
    }

    let mut engine = QueryEngine::new(report.polygons)
        .with_precision(settings.precision)
        .with_verbose(settings.verbose);

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    engine
        .run(stdin, stdout)
        .context("Failed to write command output")?;

    Ok(ExitCode::SUCCESS)
}
