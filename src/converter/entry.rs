//! Entry links - references to other documents, with draft handling.

use crate::core::export::ExportedEntry;
use crate::core::record::{DraftLinkRecord, ReferenceRecord, Resolution, StrengthenOnPublish};
use crate::diagnostics::Diagnostic;

/// Prefix marking a document id as a draft.
pub const DRAFT_PREFIX: &str = "drafts.";

/// An entry that has never been published is a draft.
pub fn is_draft(entry: &ExportedEntry) -> bool {
    entry.sys.published_version.is_none()
}

/// Whether a document id carries the draft prefix.
pub fn is_draft_id(id: &str) -> bool {
    id.starts_with(DRAFT_PREFIX)
}

/// Draft counterpart of a published document id.
pub fn draft_id(id: &str) -> String {
    format!("{DRAFT_PREFIX}{id}")
}

/// Builds the reference from document `current_entry_id` to `linked`.
///
/// Drafts may only be linked from other drafts.
pub fn resolve_entry(
    current_entry_id: &str,
    linked: &ExportedEntry,
    weak_refs: bool,
) -> Resolution {
    if !is_draft(linked) {
        return Resolution::Reference(ReferenceRecord {
            target_id: linked.id().to_string(),
            weak: weak_refs,
        });
    }

    if !is_draft_id(current_entry_id) {
        return Resolution::Unresolvable(Diagnostic::LinkToDraft {
            id: linked.id().to_string(),
        });
    }

    Resolution::DraftLink(DraftLinkRecord {
        target_id: draft_id(linked.id()),
        weak: true,
        strengthen_on_publish: StrengthenOnPublish::for_content_type(linked.content_type_id()),
    })
}
