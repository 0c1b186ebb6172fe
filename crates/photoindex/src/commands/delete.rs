use crate::commands::{CmdMessage, CmdResult, DisplayPhoto};
use crate::error::Result;
use crate::gate::{Confirmation, ConfirmationGate, Decision};
use crate::index::{DeleteOutcome, PhotoIndex};
use crate::store::{BlobStore, MetadataStore};
use tracing::debug;

use super::helpers::resolve_display_index;

/// Ask `gate` to confirm, then delete the photo at `display_index`.
///
/// The index is only touched on the confirm branch.
pub fn run<M: MetadataStore, B: BlobStore, G: ConfirmationGate>(
    index: &mut PhotoIndex<M, B>,
    gate: &mut G,
    display_index: usize,
) -> Result<CmdResult> {
    let (position, record) = resolve_display_index(index, display_index)?;
    let mut result = CmdResult::default();

    if gate.confirm(&Confirmation::DELETE_PHOTO) == Decision::Cancel {
        debug!(storage_key = %record.storage_key, "delete cancelled at confirmation");
        result.add_message(CmdMessage::info("Deletion cancelled."));
        return Ok(result);
    }

    match index.delete(&record, position)? {
        DeleteOutcome::Removed {
            record, orphaned, ..
        } => {
            result.add_message(CmdMessage::success(format!(
                "Photo deleted ({}): {}",
                display_index, record.storage_key
            )));
            if orphaned {
                result.add_message(CmdMessage::warning(
                    "The photo file could not be removed. Run `doctor` to clean it up.",
                ));
            }
            result.affected_photos.push(DisplayPhoto {
                index: display_index,
                record,
            });
        }
        DeleteOutcome::NotFound => {
            result.add_message(CmdMessage::info(format!(
                "Photo {} was already removed.",
                display_index
            )));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::CapturedPhoto;
    use crate::commands::MessageLevel;
    use crate::gate::FixedGate;
    use crate::index::InMemoryIndex;

    fn seeded(count: u8) -> InMemoryIndex {
        let mut index = InMemoryIndex::in_memory();
        for i in 0..count {
            index
                .add(CapturedPhoto {
                    web_path: None,
                    data: vec![i],
                })
                .unwrap();
        }
        index
    }

    struct CountingGate {
        asked: usize,
        answer: Decision,
    }

    impl ConfirmationGate for CountingGate {
        fn confirm(&mut self, request: &Confirmation) -> Decision {
            assert_eq!(request.header, "Delete photo");
            self.asked += 1;
            self.answer
        }
    }

    #[test]
    fn confirmed_delete_removes_photo() {
        let mut index = seeded(2);
        let oldest = index.entries()[1].clone();

        let result = run(&mut index, &mut FixedGate(Decision::Confirm), 2).unwrap();

        assert_eq!(index.len(), 1);
        assert!(index.position_of(&oldest.storage_key).is_none());
        assert_eq!(result.affected_photos[0].record.storage_key, oldest.storage_key);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn cancelled_delete_touches_nothing() {
        let mut index = seeded(2);
        let writes = index.metadata_store().write_count();
        let mut gate = CountingGate {
            asked: 0,
            answer: Decision::Cancel,
        };

        let result = run(&mut index, &mut gate, 1).unwrap();

        assert_eq!(gate.asked, 1);
        assert_eq!(index.len(), 2);
        assert_eq!(index.metadata_store().write_count(), writes);
        assert!(result.messages[0].content.contains("cancelled"));
    }

    #[test]
    fn orphaned_blob_adds_warning() {
        let mut index = seeded(1);
        index.blob_store().set_simulate_delete_error(true);

        let result = run(&mut index, &mut FixedGate(Decision::Confirm), 1).unwrap();

        assert!(index.is_empty());
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning && m.content.contains("doctor")));
    }

    #[test]
    fn unknown_index_fails_before_asking() {
        let mut index = seeded(1);
        let mut gate = CountingGate {
            asked: 0,
            answer: Decision::Confirm,
        };

        assert!(run(&mut index, &mut gate, 5).is_err());
        assert_eq!(gate.asked, 0);
    }
}
