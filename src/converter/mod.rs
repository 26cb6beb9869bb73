//! Link resolution from a Contentful export into Sanity import records.

mod asset;
mod entry;
mod url;

use crate::core::export::{ExportDataset, ExportedAsset, ExportedEntry, LinkType, SysLink};
use crate::core::record::Resolution;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::{error::Error, ResolverOptions, Result};
use std::collections::HashMap;

pub use self::asset::resolve_asset;
pub use self::entry::{draft_id, is_draft, is_draft_id, resolve_entry, DRAFT_PREFIX};
pub use self::url::prefix_url;

/// Resolves links against one export snapshot.
///
/// Assets and entries are indexed by id on construction; when an id occurs
/// more than once the first occurrence is used.
pub struct LinkResolver<'a> {
    options: &'a ResolverOptions,
    assets: HashMap<&'a str, &'a ExportedAsset>,
    entries: HashMap<&'a str, &'a ExportedEntry>,
}

impl<'a> LinkResolver<'a> {
    /// Creates a resolver over `dataset` with the given options.
    pub fn new(dataset: &'a ExportDataset, options: &'a ResolverOptions) -> Self {
        let mut assets = HashMap::with_capacity(dataset.assets.len());
        for asset in &dataset.assets {
            assets.entry(asset.id()).or_insert(asset);
        }

        let mut entries = HashMap::with_capacity(dataset.entries.len());
        for entry in &dataset.entries {
            entries.entry(entry.id()).or_insert(entry);
        }

        Self {
            options,
            assets,
            entries,
        }
    }

    /// Resolves `link`, found inside document `current_entry_id`, for `locale`.
    ///
    /// Missing data yields [`Resolution::Unresolvable`] and one diagnostic on
    /// `sink`. Only a link of unknown type is an error.
    pub fn resolve(
        &self,
        current_entry_id: &str,
        link: &SysLink,
        locale: &str,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Resolution> {
        let link_type: LinkType = link
            .sys
            .link_type
            .parse()
            .map_err(|link_type| Error::MalformedLink {
                id: link.id().to_string(),
                link_type,
            })?;

        let resolution = match link_type {
            LinkType::Asset => self.resolve_asset_link(link, locale),
            LinkType::Entry => self.resolve_entry_link(current_entry_id, link),
        };

        if let Resolution::Unresolvable(diagnostic) = &resolution {
            sink.report(diagnostic);
        }

        Ok(resolution)
    }

    fn resolve_asset_link(&self, link: &SysLink, locale: &str) -> Resolution {
        match self.assets.get(link.id()) {
            Some(asset) => resolve_asset(asset, locale, self.options.default_locale.as_deref()),
            None => Resolution::Unresolvable(Diagnostic::MissingAsset {
                id: link.id().to_string(),
            }),
        }
    }

    fn resolve_entry_link(&self, current_entry_id: &str, link: &SysLink) -> Resolution {
        match self.entries.get(link.id()) {
            Some(entry) => resolve_entry(current_entry_id, entry, self.options.weak_refs),
            None => Resolution::Unresolvable(Diagnostic::MissingEntry {
                id: link.id().to_string(),
            }),
        }
    }
}

/// One-shot form of [`LinkResolver::resolve`].
pub fn resolve_link(
    current_entry_id: &str,
    link: &SysLink,
    locale: &str,
    dataset: &ExportDataset,
    options: &ResolverOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<Resolution> {
    LinkResolver::new(dataset, options).resolve(current_entry_id, link, locale, sink)
}
