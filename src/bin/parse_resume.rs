use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use rayon::prelude::*;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use rs_resume_parser::output::{self, DEFAULT_OUTPUT_DIR};
use rs_resume_parser::{parse_file_with_options, AcquireOptions, Options, ResumeRecord};

#[derive(Parser, Debug)]
#[command(name = "parse_resume")]
#[command(version, about = "Extract structured fields from PDF, DOCX and TXT resumes", long_about = None)]
struct Cli {
    /// Resume files (.pdf, .docx, .txt)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Directory for saved JSON records
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Print records without saving them
    #[arg(long)]
    no_save: bool,

    /// Append a timestamp to saved file names
    #[arg(long)]
    timestamp: bool,

    /// Do not OCR PDF pages that have no text layer
    #[arg(long)]
    no_ocr: bool,

    /// Tesseract language for OCR
    #[arg(long, default_value = "eng")]
    ocr_lang: String,

    /// Rendering DPI for OCR
    #[arg(long, default_value_t = 300)]
    dpi: u32,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let acquire = AcquireOptions {
        ocr_fallback: !cli.no_ocr,
        ocr_dpi: cli.dpi,
        ocr_language: cli.ocr_lang.clone(),
    };
    let options = Options::default();
    let started = Local::now().naive_local();

    // Parsing is independent per file; output stays in input order.
    let results: Vec<(&PathBuf, Result<ResumeRecord>)> = cli
        .inputs
        .par_iter()
        .map(|input| {
            let record = parse_file_with_options(input, &acquire, &options)
                .with_context(|| format!("Failed to parse resume: {}", input.display()));
            (input, record)
        })
        .collect();

    let mut failed = 0;
    for (input, result) in results {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                error!("{err:#}");
                failed += 1;
                continue;
            }
        };

        for job in record.work_experience.iter().flatten() {
            debug!(file = %input.display(), "work experience: {job}");
        }

        println!("{}", serde_json::to_string_pretty(&record)?);

        if !cli.no_save {
            let path = output::output_path(
                &cli.output_dir,
                input,
                cli.timestamp.then_some(started),
            );
            output::persist(&record, &path)
                .with_context(|| format!("Failed to save to: {}", path.display()))?;
            eprintln!("JSON output saved to {}", path.display());
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} file(s) failed to parse");
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
