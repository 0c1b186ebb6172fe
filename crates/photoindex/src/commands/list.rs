use crate::commands::{display_photos, CmdResult};
use crate::error::Result;
use crate::index::PhotoIndex;
use crate::store::{BlobStore, MetadataStore};

pub fn run<M: MetadataStore, B: BlobStore>(index: &PhotoIndex<M, B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_photos(display_photos(index.entries())))
}
