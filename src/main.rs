// Aadhaar card OCR: reads both sides of a card and prints the extracted fields

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use aadhaar_ocr::{
    extract_with_policy,
    models::{ExtractedRecord, ScanResponse, ValidationPolicy},
    processing::{ImageProcessor, PageSegmentation, RecognizerConfig, TesseractRecognizer},
    utils::CardError,
    CardReader,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{debug, warn};

/// Extract structured data from Aadhaar card images
#[derive(Parser)]
#[command(name = "aadhaar-ocr")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// OCR the front and back images and extract the card fields
    Scan(ScanArgs),

    /// Extract the card fields from already recognized text files
    Extract(ExtractArgs),
}

#[derive(Args)]
struct ScanArgs {
    /// Image of the front of the card
    front: PathBuf,

    /// Image of the back of the card
    back: PathBuf,

    /// Inputs are base64 text or data URLs instead of raw image files
    #[arg(long)]
    base64: bool,

    /// Tesseract language(s)
    #[arg(long, env = "AADHAAR_OCR_LANG", default_value = "eng")]
    lang: String,

    /// Directory containing tesseract traineddata files
    #[arg(long, env = "TESSDATA_PREFIX")]
    tessdata: Option<PathBuf>,

    /// Tesseract page segmentation
    #[arg(long, value_enum, default_value = "auto")]
    segmentation: SegmentationArg,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct ExtractArgs {
    /// Recognized text of the front side
    front: PathBuf,

    /// Recognized text of the back side
    back: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Which fields must be found for the scan to succeed
    #[arg(short, long, value_enum, default_value = "all")]
    policy: PolicyArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// JSON response envelope
    Json,
    /// Plain text report
    Text,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    /// Every field is required
    All,
    /// Only the Aadhaar number is required
    IdOnly,
}

impl From<PolicyArg> for ValidationPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::All => ValidationPolicy::AllFields,
            PolicyArg::IdOnly => ValidationPolicy::IdentifierOnly,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SegmentationArg {
    Auto,
    SingleBlock,
    SparseText,
}

impl From<SegmentationArg> for PageSegmentation {
    fn from(arg: SegmentationArg) -> Self {
        match arg {
            SegmentationArg::Auto => PageSegmentation::Auto,
            SegmentationArg::SingleBlock => PageSegmentation::SingleBlock,
            SegmentationArg::SparseText => PageSegmentation::SparseText,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let (result, output) = match cli.command {
        Commands::Scan(args) => (scan(&args), args.output),
        Commands::Extract(args) => (extract_text_files(&args), args.output),
    };

    let success = result.is_ok();
    if let Err(err) = &result {
        debug!("scan failed: {:?}", err);
    }

    match output.format {
        OutputFormat::Json => print_json(&ScanResponse::from(result)),
        OutputFormat::Text => print_report(&result),
    }

    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn scan(args: &ScanArgs) -> Result<ExtractedRecord, CardError> {
    let front = read_image(&args.front, args.base64)?;
    let back = read_image(&args.back, args.base64)?;

    let config = RecognizerConfig {
        language: args.lang.clone(),
        tessdata_dir: args.tessdata.clone(),
        page_segmentation: args.segmentation.into(),
    };

    CardReader::new(TesseractRecognizer::new(config))
        .with_policy(args.output.policy.into())
        .read(&front, &back)
}

fn extract_text_files(args: &ExtractArgs) -> Result<ExtractedRecord, CardError> {
    let front_text = fs::read_to_string(&args.front)?;
    let back_text = fs::read_to_string(&args.back)?;

    Ok(extract_with_policy(
        &front_text,
        &back_text,
        args.output.policy.into(),
    )?)
}

fn read_image(path: &Path, base64: bool) -> Result<Vec<u8>, CardError> {
    if base64 {
        ImageProcessor::decode_base64_payload(&fs::read_to_string(path)?)
    } else {
        Ok(fs::read(path)?)
    }
}

fn print_json(response: &ScanResponse) {
    match serde_json::to_string_pretty(response) {
        Ok(json) => println!("{}", json),
        Err(err) => eprintln!("Failed to serialize response: {}", err),
    }
}

// Function to print a human readable report
fn print_report(result: &Result<ExtractedRecord, CardError>) {
    let record = match result {
        Ok(record) => record,
        Err(err) => {
            eprintln!("Error reading card: {}", err);
            return;
        }
    };

    fn show(value: Option<&str>) -> &str {
        value.unwrap_or("-")
    }

    println!("AADHAAR CARD DETAILS:");
    println!("  Aadhaar Number: {}", show(record.identifier_number.as_deref()));
    println!("  Name: {}", show(record.name.as_deref()));
    println!("  Date of Birth: {}", show(record.date_of_birth.as_deref()));
    println!(
        "  Gender: {}",
        record
            .gender
            .map(|gender| gender.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    println!("  Address: {}", show(record.address.as_deref()));

    if let Some(dob) = record.date_of_birth.as_deref() {
        if record.birth_date().is_none() {
            warn!("date of birth {} is not a valid calendar date", dob);
        }
    }
}
