use photoindex::capture::{CaptureError, CaptureOptions, CaptureSource, CapturedPhoto};
use std::io::{IsTerminal, Read};

/// Capture source that takes the image bytes piped into stdin.
///
/// An interactive terminal has nothing to pick from, so it counts as a cancel,
/// as does an empty pipe.
#[derive(Default)]
pub struct StdinCapture {
    consumed: bool,
}

impl CaptureSource for StdinCapture {
    fn capture(&mut self, _options: &CaptureOptions) -> Result<CapturedPhoto, CaptureError> {
        let stdin = std::io::stdin();
        if self.consumed || stdin.is_terminal() {
            return Err(CaptureError::Cancelled);
        }
        self.consumed = true;

        let mut data = Vec::new();
        stdin
            .lock()
            .read_to_end(&mut data)
            .map_err(|e| CaptureError::Failed(format!("stdin: {}", e)))?;
        if data.is_empty() {
            return Err(CaptureError::Cancelled);
        }

        Ok(CapturedPhoto {
            web_path: None,
            data,
        })
    }
}
