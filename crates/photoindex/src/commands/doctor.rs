use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::PhotoIndex;
use crate::store::{BlobStore, MetadataStore};

pub fn run<M: MetadataStore, B: BlobStore>(index: &mut PhotoIndex<M, B>) -> Result<CmdResult> {
    let report = index.reconcile()?;
    let mut result = CmdResult::default();

    if report.is_clean() {
        result.add_message(CmdMessage::success("No inconsistencies found."));
        return Ok(result);
    }

    result.add_message(CmdMessage::warning("Inconsistencies found:"));
    if report.removed_orphans > 0 {
        result.add_message(CmdMessage::success(format!(
            "  - Removed {} photo file(s) not listed in the catalog.",
            report.removed_orphans
        )));
    }
    if report.failed_removals > 0 {
        result.add_message(CmdMessage::error(format!(
            "  - Could not remove {} unlisted photo file(s).",
            report.failed_removals
        )));
    }
    if report.missing_blobs > 0 {
        result.add_message(CmdMessage::info(format!(
            "  - {} catalog photo(s) have no file and will show as unavailable.",
            report.missing_blobs
        )));
    }

    Ok(result)
}
