use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::PhotoIndex;
use crate::store::{BlobStore, MetadataStore};

use super::helpers::resolve_display_index;

/// Blob locations for one photo, or for the whole catalog when `display_index` is `None`.
pub fn run<M: MetadataStore, B: BlobStore>(
    index: &PhotoIndex<M, B>,
    display_index: Option<usize>,
) -> Result<CmdResult> {
    let paths = match display_index {
        Some(n) => {
            let (_, record) = resolve_display_index(index, n)?;
            vec![index.locate(&record.storage_key)?]
        }
        None => index
            .entries()
            .iter()
            .map(|r| index.locate(&r.storage_key))
            .collect::<Result<Vec<_>>>()?,
    };

    Ok(CmdResult::default().with_photo_paths(paths))
}
