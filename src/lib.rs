//! # contentful2sanity
//!
//! Resolves links found in a Contentful export into Sanity import records:
//! inline assets, document references, or weak draft-to-draft references.
//!
//! ## Example
//!
//! ```no_run
//! use contentful2sanity::{
//!     ExportDataset, LinkResolver, ResolverOptions, StderrSink, SysLink,
//! };
//!
//! let dataset = ExportDataset::from_path("export.json").unwrap();
//! let options = ResolverOptions {
//!     default_locale: Some("en-US".into()),
//!     ..Default::default()
//! };
//!
//! let resolver = LinkResolver::new(&dataset, &options);
//! let record = resolver
//!     .resolve("post-1", &SysLink::asset("hero"), "de", &mut StderrSink)
//!     .unwrap();
//! println!("{}", serde_json::to_string(&record).unwrap());
//! ```

pub mod converter;
pub mod core;
pub mod diagnostics;
pub mod error;
pub mod localization;

pub use converter::{resolve_link, LinkResolver};
pub use crate::core::export::{ExportDataset, LinkType, SysLink};
pub use crate::core::record::{AssetKind, AssetRecord, DraftLinkRecord, ReferenceRecord, Resolution};
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, NullSink, StderrSink};
pub use error::{Error, Result};

/// Options for link resolution.
#[derive(Debug, Clone, Default)]
pub struct ResolverOptions {
    /// Locale read when the requested locale has no value.
    pub default_locale: Option<String>,
    /// Whether references to published entries are marked weak.
    pub weak_refs: bool,
}
