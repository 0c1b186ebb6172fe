use crate::error::{PhotoError, Result};
use crate::index::PhotoIndex;
use crate::model::PhotoRecord;
use crate::store::{BlobStore, MetadataStore};

/// Resolve a 1-based display index to `(position, record)`.
pub fn resolve_display_index<M: MetadataStore, B: BlobStore>(
    index: &PhotoIndex<M, B>,
    display_index: usize,
) -> Result<(usize, PhotoRecord)> {
    let position = display_index
        .checked_sub(1)
        .ok_or_else(|| PhotoError::Api("Photo indexes start at 1".to_string()))?;
    let record = index.get(position).ok_or_else(|| {
        PhotoError::Api(format!(
            "Photo {} not found ({} in catalog)",
            display_index,
            index.len()
        ))
    })?;
    Ok((position, record.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::CapturedPhoto;
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

    #[test]
    fn resolves_newest_as_one() {
        let index = seeded(3);
        let (position, record) = resolve_display_index(&index, 1).unwrap();
        assert_eq!(position, 0);
        assert_eq!(record, index.entries()[0]);
    }

    #[test]
    fn rejects_zero() {
        let index = seeded(1);
        assert!(matches!(
            resolve_display_index(&index, 0),
            Err(PhotoError::Api(_))
        ));
    }

    #[test]
    fn rejects_out_of_range() {
        let index = seeded(2);
        match resolve_display_index(&index, 3) {
            Err(PhotoError::Api(msg)) => assert!(msg.contains("Photo 3 not found")),
            other => panic!("Expected Api error, got {:?}", other),
        }
    }
}
