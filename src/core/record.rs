//! Records produced for the import side.

use crate::diagnostics::Diagnostic;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Asset flavor, derived from the file's MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    File,
    Image,
}

impl AssetKind {
    /// `image/*` content types are images, everything else is a plain file.
    pub fn from_content_type(content_type: &str) -> Self {
        if content_type.starts_with("image/") {
            AssetKind::Image
        } else {
            AssetKind::File
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AssetKind::File => "file",
            AssetKind::Image => "image",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An inline asset to be uploaded by the importer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetRecord {
    #[serde(rename = "_type")]
    pub kind: AssetKind,
    /// `"<kind>@<url>"`
    #[serde(rename = "_sanityAsset")]
    pub asset_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AssetRecord {
    pub fn new(kind: AssetKind, url: &str) -> Self {
        Self {
            kind,
            asset_key: format!("{kind}@{url}"),
            title: None,
            description: None,
        }
    }
}

/// Reference to a published document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "_type", rename = "reference")]
pub struct ReferenceRecord {
    #[serde(rename = "_ref")]
    pub target_id: String,
    #[serde(rename = "_weak", skip_serializing_if = "is_false")]
    pub weak: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Weak reference from one draft to another, strengthened once the target
/// gets published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "_type", rename = "reference")]
pub struct DraftLinkRecord {
    #[serde(rename = "_ref")]
    pub target_id: String,
    #[serde(rename = "_weak")]
    pub weak: bool,
    #[serde(rename = "_strengthenOnPublish")]
    pub strengthen_on_publish: StrengthenOnPublish,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthenOnPublish {
    #[serde(rename = "type")]
    pub content_type: String,
    pub template: TemplateHint,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateHint {
    pub id: String,
    pub params: BTreeMap<String, serde_json::Value>,
}

impl StrengthenOnPublish {
    /// Hint whose template is the content type itself, with no parameters.
    pub fn for_content_type(content_type: &str) -> Self {
        Self {
            content_type: content_type.to_string(),
            template: TemplateHint {
                id: content_type.to_string(),
                params: BTreeMap::new(),
            },
        }
    }
}

/// Outcome of resolving a single link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Asset(AssetRecord),
    Reference(ReferenceRecord),
    DraftLink(DraftLinkRecord),
    /// Nothing to emit; the reason has also been reported to the sink.
    Unresolvable(Diagnostic),
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Resolution::Unresolvable(_))
    }

    /// The reason this link could not be resolved, if it could not.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Resolution::Unresolvable(diagnostic) => Some(diagnostic),
            _ => None,
        }
    }
}

/// Serializes as the record itself, or `null` when unresolvable.
impl Serialize for Resolution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Resolution::Asset(record) => record.serialize(serializer),
            Resolution::Reference(record) => record.serialize(serializer),
            Resolution::DraftLink(record) => record.serialize(serializer),
            Resolution::Unresolvable(_) => serializer.serialize_none(),
        }
    }
}
