//! External tesseract OCR invocation.
//!
//! The OCR engine is the slow, fallible collaborator: it runs out of process
//! under a hard timeout, and stdin input goes through a temp file that is
//! removed as soon as recognition finishes.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, info};

use invoscan_core::OcrError;

/// Runs `tesseract <image> stdout -l eng` and returns the recognized text.
pub async fn recognize(image: &Path, timeout_secs: u64) -> Result<String, OcrError> {
    info!("Running tesseract on {}", image.display());

    let run = Command::new("tesseract")
        .arg(image)
        .arg("stdout")
        .args(["-l", "eng"])
        .kill_on_drop(true)
        .output();

    let output = timeout(Duration::from_secs(timeout_secs), run)
        .await
        .map_err(|_| OcrError::Timeout(timeout_secs))?
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                OcrError::Unavailable("tesseract binary not found".to_string())
            } else {
                OcrError::Unavailable(e.to_string())
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(OcrError::Failed(stderr));
    }

    debug!("tesseract produced {} bytes of text", output.stdout.len());
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Reads image bytes from stdin into a temp file and recognizes them.
///
/// The temp file lives only for the duration of the call.
pub async fn recognize_stdin(timeout_secs: u64) -> Result<String, OcrError> {
    let mut bytes = Vec::new();
    tokio::io::stdin().read_to_end(&mut bytes).await?;

    let mut file = tempfile::Builder::new().suffix(".png").tempfile()?;
    file.write_all(&bytes)?;
    file.flush()?;

    recognize(file.path(), timeout_secs).await
}
