use crate::capture::{CaptureOptions, CaptureSource};
use crate::commands::{CmdMessage, CmdResult, DisplayPhoto};
use crate::error::Result;
use crate::index::{AddOutcome, PhotoIndex};
use crate::store::{BlobStore, MetadataStore};

pub fn run<M: MetadataStore, B: BlobStore, C: CaptureSource>(
    index: &mut PhotoIndex<M, B>,
    source: &mut C,
    options: &CaptureOptions,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match index.capture(source, options)? {
        AddOutcome::Added(record) => {
            result.add_message(CmdMessage::success(format!(
                "Photo added: {}",
                record.storage_key
            )));
            result.affected_photos.push(DisplayPhoto { index: 1, record });
        }
        AddOutcome::Cancelled => {
            result.add_message(CmdMessage::info("Capture cancelled."));
        }
        AddOutcome::CaptureFailed(reason) => {
            result.add_message(CmdMessage::warning(format!(
                "Could not capture photo: {}",
                reason
            )));
        }
        AddOutcome::BlobWriteFailed(reason) => {
            result.add_message(CmdMessage::error(format!(
                "Could not save photo: {}",
                reason
            )));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::{CaptureError, CapturedPhoto};
    use crate::commands::MessageLevel;
    use crate::index::InMemoryIndex;

    struct OneShot(Option<std::result::Result<CapturedPhoto, CaptureError>>);

    impl CaptureSource for OneShot {
        fn capture(
            &mut self,
            _options: &CaptureOptions,
        ) -> std::result::Result<CapturedPhoto, CaptureError> {
            self.0.take().unwrap_or(Err(CaptureError::Cancelled))
        }
    }

    fn shot(bytes: &[u8]) -> OneShot {
        OneShot(Some(Ok(CapturedPhoto {
            web_path: None,
            data: bytes.to_vec(),
        })))
    }

    #[test]
    fn reports_added_photo() {
        let mut index = InMemoryIndex::in_memory();
        let result = run(&mut index, &mut shot(b"img"), &CaptureOptions::default()).unwrap();

        assert_eq!(result.affected_photos.len(), 1);
        assert_eq!(result.affected_photos[0].index, 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(result.messages[0].content.starts_with("Photo added"));
    }

    #[test]
    fn cancel_is_informational() {
        let mut index = InMemoryIndex::in_memory();
        let result = run(
            &mut index,
            &mut OneShot(None),
            &CaptureOptions::default(),
        )
        .unwrap();

        assert!(result.affected_photos.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert!(!result.has_errors());
        assert!(index.is_empty());
    }

    #[test]
    fn blob_write_failure_is_reported_as_error() {
        let mut index = InMemoryIndex::in_memory();
        index.blob_store().set_simulate_write_error(true);
        let result = run(&mut index, &mut shot(b"img"), &CaptureOptions::default()).unwrap();

        assert!(result.has_errors());
        assert!(index.is_empty());
    }
}
