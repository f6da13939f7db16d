//! Process command - extract data from a single invoice file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::Args;
use console::style;
use tracing::{debug, info};

use invoscan_core::{Analyze, InvoiceAnalyzer, InvoscanError};

use crate::ocr;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (image or plain text); use `-` for image bytes on stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout for json/text, timestamped file for xlsx/zip)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Treat the input as already-recognized OCR text
    #[arg(long)]
    text_only: bool,

    /// OCR timeout in seconds
    #[arg(long, default_value_t = 60)]
    ocr_timeout: u64,

    /// Fail when nothing could be extracted
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
    /// Excel workbook
    Xlsx,
    /// Zip bundle of workbook and summary
    Zip,
}

pub async fn run(args: ProcessArgs) -> anyhow::Result<()> {
    let from_stdin = args.input.as_os_str() == "-";

    if !from_stdin && !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let extension = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let text = if from_stdin {
        ocr::recognize_stdin(args.ocr_timeout)
            .await
            .map_err(InvoscanError::Ocr)?
    } else if args.text_only || extension == "txt" {
        fs::read_to_string(&args.input).map_err(InvoscanError::Io)?
    } else {
        info!("Running OCR on {}", args.input.display());
        ocr::recognize(&args.input, args.ocr_timeout)
            .await
            .map_err(InvoscanError::Ocr)?
    };

    let result = InvoiceAnalyzer::new().analyze(&text);

    debug!(
        "Extraction finished: {} lines, {} generic items, {} ledger items",
        result.lines.len(),
        result.generic_items.len(),
        result.ledger_items.len()
    );

    if args.strict && result.is_empty() {
        return Err(InvoscanError::NoData.into());
    }

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)?;
            write_output(args.output.as_deref(), json.as_bytes(), None)?;
        }
        OutputFormat::Text => {
            let report = invoscan_export::generate_report(&result);
            write_output(args.output.as_deref(), report.as_bytes(), None)?;
        }
        OutputFormat::Xlsx => {
            let workbook = invoscan_export::generate_workbook(&result)?;
            write_output(args.output.as_deref(), &workbook, Some("xlsx"))?;
        }
        OutputFormat::Zip => {
            let workbook = invoscan_export::generate_workbook(&result)?;
            let report = invoscan_export::generate_report(&result);
            let bundle = invoscan_export::bundle(&workbook, &report)?;
            write_output(args.output.as_deref(), &bundle, Some("zip"))?;
        }
    }

    Ok(())
}

/// Writes to the requested path, a timestamped default file for binary
/// formats, or stdout for textual ones.
fn write_output(path: Option<&Path>, bytes: &[u8], binary_ext: Option<&str>) -> anyhow::Result<()> {
    match (path, binary_ext) {
        (Some(path), _) => {
            fs::write(path, bytes)?;
            println!(
                "{} Output written to {}",
                style("✓").green(),
                path.display()
            );
        }
        (None, Some(ext)) => {
            let name = format!("invoice_{}.{}", Local::now().format("%Y%m%d_%H%M%S"), ext);
            fs::write(&name, bytes)?;
            println!("{} Output written to {}", style("✓").green(), name);
        }
        (None, None) => {
            // Textual formats are valid UTF-8 by construction.
            print!("{}", String::from_utf8_lossy(bytes));
        }
    }
    Ok(())
}
