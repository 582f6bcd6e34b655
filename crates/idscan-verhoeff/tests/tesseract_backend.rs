//! Tesseract recognizer against stand-in shell scripts
//!
//! Each script mimics one behavior of the real binary: printing recognized
//! text, failing on a corrupt image, or hanging.

#![cfg(all(unix, feature = "tesseract"))]

use idscan_verhoeff::{
    RecognitionError, RecognizerConfig, TesseractRecognizer, TextRecognizer, VerifyError,
    verify_image,
};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tempfile::TempDir;

const JPEG_MAGIC: &[u8] = b"\xFF\xD8\xFF\xE0fake-jpeg-body";

fn write_script(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn recognizer(program: PathBuf, timeout: Duration) -> TesseractRecognizer {
    TesseractRecognizer::new(
        RecognizerConfig::default()
            .with_program(program)
            .with_timeout(timeout),
    )
}

#[tokio::test]
async fn recognized_text_flows_into_verification() {
    let dir = TempDir::new().unwrap();
    let script = write_script(
        &dir,
        "ocr_ok.sh",
        "cat > /dev/null\nprintf 'GOVERNMENT OF INDIA\\n4991 1866 5246\\n'",
    );
    let ocr = recognizer(script, Duration::from_secs(10));

    let report = verify_image(&ocr, Some(JPEG_MAGIC)).await.unwrap();
    assert_eq!(report.id_number.to_string(), "499118665246");
    assert!(report.valid);
}

#[tokio::test]
async fn arguments_are_passed_to_program() {
    let dir = TempDir::new().unwrap();
    // Echo the arguments back as the recognized text
    let script = write_script(&dir, "ocr_args.sh", "cat > /dev/null\necho \"$@\"");
    let ocr = TesseractRecognizer::new(
        RecognizerConfig::default()
            .with_program(script)
            .with_language("hin"),
    );

    let text = ocr.recognize(JPEG_MAGIC).await.unwrap();
    assert_eq!(text.trim(), "stdin stdout -l hin");
}

#[tokio::test]
async fn image_bytes_reach_stdin() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "ocr_cat.sh", "cat");
    let ocr = recognizer(script, Duration::from_secs(10));

    let image = b"\x89PNG\r\n\x1a\n 1234 5678 9010 ";
    let text = ocr.recognize(image).await.unwrap();
    assert!(text.contains("1234 5678 9010"));
}

#[tokio::test]
async fn non_zero_exit_is_recognition_failure() {
    let dir = TempDir::new().unwrap();
    let script = write_script(
        &dir,
        "ocr_fail.sh",
        "cat > /dev/null\necho 'Error in pixReadMem: Unknown format' >&2\nexit 1",
    );
    let ocr = recognizer(script, Duration::from_secs(10));

    match ocr.recognize(JPEG_MAGIC).await {
        Err(RecognitionError::Failed { status, stderr }) => {
            assert_eq!(status, Some(1));
            assert!(stderr.contains("pixReadMem"));
        }
        other => panic!("unexpected result: {:?}", other),
    }

    let err = verify_image(&ocr, Some(JPEG_MAGIC)).await.unwrap_err();
    assert!(matches!(err, VerifyError::Recognition(_)));
}

#[tokio::test]
async fn non_utf8_output_is_recognition_failure() {
    let dir = TempDir::new().unwrap();
    let script = write_script(
        &dir,
        "ocr_binary.sh",
        "cat > /dev/null\nprintf '\\377\\376 1234 5678 9010\\n'",
    );
    let ocr = recognizer(script, Duration::from_secs(10));

    let err = ocr.recognize(JPEG_MAGIC).await.unwrap_err();
    assert!(matches!(err, RecognitionError::Undecodable(_)), "{:?}", err);

    let err = verify_image(&ocr, Some(JPEG_MAGIC)).await.unwrap_err();
    assert!(matches!(err, VerifyError::Recognition(_)));
    assert_eq!(err.exit_code(), 3);
}

#[tokio::test]
async fn hanging_program_times_out() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "ocr_hang.sh", "sleep 30");
    let ocr = recognizer(script, Duration::from_millis(200));

    let start = Instant::now();
    let err = ocr.recognize(JPEG_MAGIC).await.unwrap_err();
    assert!(matches!(err, RecognitionError::Timeout(_)), "{:?}", err);
    assert!(start.elapsed() < Duration::from_secs(10));
}

#[tokio::test]
async fn empty_output_is_not_found() {
    let dir = TempDir::new().unwrap();
    let script = write_script(&dir, "ocr_empty.sh", "cat > /dev/null");
    let ocr = recognizer(script, Duration::from_secs(10));

    let err = verify_image(&ocr, Some(JPEG_MAGIC)).await.unwrap_err();
    assert!(matches!(err, VerifyError::NotFound));
}
