//! ID card scan CLI
//!
//! Usage: idscan_scan [OPTIONS] <IMAGE>...
//!
//! Example:
//!   idscan_scan card.png
//!   idscan_scan --lang eng+hin --timeout 60 front.jpg back.jpg
//!
//! Prints one JSON object per image on stdout, e.g.
//!   {"idNumber":"499118665246","valid":"Valid ID number"}
//!   {"error":"ID number not found in the image"}
//!
//! At most `--jobs` OCR processes run at once (default: CPU count).
//!
//! Exit code: 0 when every image produced a verdict, otherwise the highest of
//! 1 (missing image), 2 (no ID number found), 3 (unreadable image or OCR failure).

use anyhow::{Context, Result};
use clap::Parser;
use idscan_verhoeff::{RecognizerConfig, ScanResponse, TesseractRecognizer, verify_image_file};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "idscan_scan")]
#[command(version, about = "Extract and validate the ID number printed on card images", long_about = None)]
struct Cli {
    /// Image files to scan
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// Tesseract executable [env: IDSCAN_TESSERACT_BIN]
    #[arg(long)]
    tesseract: Option<PathBuf>,

    /// OCR language(s), e.g. eng or eng+hin [env: IDSCAN_OCR_LANG]
    #[arg(short, long)]
    lang: Option<String>,

    /// OCR timeout per image in seconds [env: IDSCAN_OCR_TIMEOUT_SECS]
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Extra arguments passed to tesseract (e.g. --psm 6)
    #[arg(long = "ocr-arg", allow_hyphen_values = true)]
    ocr_args: Vec<String>,

    /// Maximum concurrent OCR processes [default: CPU count]
    #[arg(short, long)]
    jobs: Option<NonZeroUsize>,

    /// Pretty-print JSON
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    /// Environment settings with command-line flags applied on top
    fn recognizer_config(&self, base: RecognizerConfig) -> Result<RecognizerConfig> {
        let mut config = base;
        if let Some(program) = &self.tesseract {
            config = config.with_program(program);
        }
        if let Some(lang) = &self.lang {
            config = config.with_language(lang);
        }
        if let Some(secs) = self.timeout {
            anyhow::ensure!(secs > 0, "--timeout must be at least 1 second");
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if !self.ocr_args.is_empty() {
            config = config.with_extra_args(self.ocr_args.clone());
        }
        Ok(config)
    }

    fn jobs(&self) -> usize {
        self.jobs
            .or_else(|| std::thread::available_parallelism().ok())
            .map_or(1, NonZeroUsize::get)
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_logging();
    let cli = Cli::parse();

    let base = RecognizerConfig::from_env().context("invalid OCR environment settings")?;
    let config = cli.recognizer_config(base)?;
    info!(
        program = %config.program.display(),
        language = %config.language,
        timeout_secs = config.timeout.as_secs(),
        images = cli.images.len(),
        jobs = cli.jobs(),
        "starting scan"
    );
    let recognizer = TesseractRecognizer::new(config);
    let start = Instant::now();

    let permits = Arc::new(Semaphore::new(cli.jobs()));
    let mut tasks = JoinSet::new();
    for (index, path) in cli.images.iter().cloned().enumerate() {
        let recognizer = recognizer.clone();
        let permits = Arc::clone(&permits);
        tasks.spawn(async move {
            let _permit = permits.acquire_owned().await;
            let result = verify_image_file(&recognizer, &path).await;
            (index, path, result)
        });
    }

    let mut results = Vec::with_capacity(cli.images.len());
    while let Some(joined) = tasks.join_next().await {
        results.push(joined.context("scan task panicked")?);
    }
    results.sort_by_key(|(index, _, _)| *index);

    let mut exit_code = 0;
    for (_, path, result) in &results {
        match result {
            Ok(report) => info!(
                path = %path.display(),
                id_number = %report.id_number,
                valid = report.valid,
                "scanned"
            ),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "scan failed");
                exit_code = exit_code.max(e.exit_code());
            }
        }

        let response = ScanResponse::from(result);
        let line = if cli.pretty {
            serde_json::to_string_pretty(&response)?
        } else {
            serde_json::to_string(&response)?
        };
        println!("{}", line);
    }

    info!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        "scan completed"
    );
    Ok(ExitCode::from(exit_code as u8))
}
