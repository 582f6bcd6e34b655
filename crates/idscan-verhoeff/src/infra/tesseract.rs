//! Tesseract CLI recognizer
//!
//! Runs `tesseract stdin stdout -l <lang>` and pipes the image through the
//! child's stdin, so no temporary files are written.

use crate::config::RecognizerConfig;
use crate::infra::recognizer::{RecognitionError, TextRecognizer};
use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Instant;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct TesseractRecognizer {
    config: RecognizerConfig,
}

impl TesseractRecognizer {
    pub fn new(config: RecognizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.config.program);
        cmd.arg("stdin")
            .arg("stdout")
            .arg("-l")
            .arg(&self.config.language)
            .args(&self.config.extra_args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }

    async fn run(&self, image: &[u8]) -> Result<String, RecognitionError> {
        let mut child = self
            .command()
            .spawn()
            .map_err(|source| RecognitionError::Spawn {
                program: self.config.program.display().to_string(),
                source,
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| RecognitionError::Backend("child stdin was not captured".into()))?;

        // Feed stdin while draining stdout/stderr so neither pipe can fill up
        let feed = async move {
            let result = stdin.write_all(image).await;
            drop(stdin);
            result
        };
        let (written, output) = tokio::join!(feed, child.wait_with_output());
        let output = output?;

        if !output.status.success() {
            return Err(RecognitionError::Failed {
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        // A program may exit before consuming all input; only its exit status matters then
        if let Err(e) = written
            && e.kind() != ErrorKind::BrokenPipe
        {
            return Err(RecognitionError::Io(e));
        }

        String::from_utf8(output.stdout).map_err(RecognitionError::Undecodable)
    }
}

impl Default for TesseractRecognizer {
    fn default() -> Self {
        Self::new(RecognizerConfig::default())
    }
}

impl TextRecognizer for TesseractRecognizer {
    async fn recognize(&self, image: &[u8]) -> Result<String, RecognitionError> {
        debug!(
            program = %self.config.program.display(),
            language = %self.config.language,
            bytes = image.len(),
            "running OCR"
        );
        let start = Instant::now();

        let text = tokio::time::timeout(self.config.timeout, self.run(image))
            .await
            .map_err(|_| RecognitionError::Timeout(self.config.timeout))??;

        info!(
            chars = text.chars().count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "OCR complete"
        );
        Ok(text)
    }
}
