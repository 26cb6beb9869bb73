//! Warnings raised when a link cannot be resolved.
//!
//! The resolver never fails on missing data. It hands a [`Diagnostic`] to a
//! [`DiagnosticSink`] and lets the host decide where it goes.

use std::fmt;

/// Why a link produced no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    MissingAsset { id: String },
    MissingFile { asset_id: String },
    MissingAssetUrl { asset_id: String },
    MissingEntry { id: String },
    /// A published entry links to an unpublished one.
    LinkToDraft { id: String },
}

impl Diagnostic {
    /// Identifier of the asset or entry the diagnostic is about.
    pub fn id(&self) -> &str {
        match self {
            Diagnostic::MissingAsset { id }
            | Diagnostic::MissingEntry { id }
            | Diagnostic::LinkToDraft { id } => id,
            Diagnostic::MissingFile { asset_id } | Diagnostic::MissingAssetUrl { asset_id } => {
                asset_id
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingAsset { id } => write!(f, "Missing asset with ID [{id}]"),
            Diagnostic::MissingFile { asset_id } => write!(f, "Missing file in asset [{asset_id}]"),
            Diagnostic::MissingAssetUrl { asset_id } => {
                write!(f, "Missing asset url [{asset_id}]")
            }
            Diagnostic::MissingEntry { id } => write!(f, "Missing entry with ID [{id}]"),
            Diagnostic::LinkToDraft { id } => write!(f, "Link to draft entry with ID [{id}]"),
        }
    }
}

/// Receiver for diagnostics.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: &Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: FnMut(&Diagnostic),
{
    fn report(&mut self, diagnostic: &Diagnostic) {
        self(diagnostic)
    }
}

/// Prints each diagnostic to stderr as a warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&mut self, diagnostic: &Diagnostic) {
        eprintln!("warning: {}", diagnostic);
    }
}

/// Drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _diagnostic: &Diagnostic) {}
}

/// Keeps diagnostics in memory until the host drains them.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: &Diagnostic) {
        self.diagnostics.push(diagnostic.clone());
    }
}
