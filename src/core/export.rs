//! In-memory model of a Contentful space export.

use crate::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// A field value keyed by locale code (`"en-US" -> value`).
pub type LocalizedField<T> = HashMap<String, T>;

/// Reads a localized field, dropping locales whose value is null or
/// malformed so that lookups fall back as if the locale were absent.
fn localized<'de, D, T>(
    deserializer: D,
) -> std::result::Result<Option<LocalizedField<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<HashMap<String, Value>>::deserialize(deserializer)?;
    Ok(raw.map(|values| {
        values
            .into_iter()
            .filter_map(|(locale, value)| {
                serde_json::from_value(value)
                    .ok()
                    .map(|parsed| (locale, parsed))
            })
            .collect()
    }))
}

/// Snapshot of an exported space: the assets, entries and locales it holds.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportDataset {
    #[serde(default)]
    pub assets: Vec<ExportedAsset>,
    #[serde(default)]
    pub entries: Vec<ExportedEntry>,
    #[serde(default)]
    pub locales: Vec<ExportedLocale>,
}

impl ExportDataset {
    /// Reads an export JSON file from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_slice(&bytes)
    }

    /// Parses an export from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Parses an export from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// First asset with the given id.
    pub fn asset(&self, id: &str) -> Option<&ExportedAsset> {
        self.assets.iter().find(|asset| asset.sys.id == id)
    }

    /// First entry with the given id.
    pub fn entry(&self, id: &str) -> Option<&ExportedEntry> {
        self.entries.iter().find(|entry| entry.sys.id == id)
    }

    /// Code of the locale flagged as the space default, if any.
    pub fn default_locale(&self) -> Option<&str> {
        self.locales
            .iter()
            .find(|locale| locale.default)
            .map(|locale| locale.code.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportedLocale {
    pub code: String,
    #[serde(default)]
    pub default: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportedAsset {
    pub sys: AssetSys,
    #[serde(default)]
    pub fields: AssetFields,
}

impl ExportedAsset {
    pub fn id(&self) -> &str {
        &self.sys.id
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetSys {
    pub id: String,
}

/// Localized asset fields. Any of them may be missing from the export.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetFields {
    #[serde(default, deserialize_with = "localized")]
    pub file: Option<LocalizedField<AssetFile>>,
    #[serde(default, deserialize_with = "localized")]
    pub title: Option<LocalizedField<String>>,
    #[serde(default, deserialize_with = "localized")]
    pub description: Option<LocalizedField<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetFile {
    pub url: Option<String>,
    #[serde(default)]
    pub content_type: String,
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportedEntry {
    pub sys: EntrySys,
}

impl ExportedEntry {
    pub fn id(&self) -> &str {
        &self.sys.id
    }

    /// Identifier of the content type this entry instantiates.
    pub fn content_type_id(&self) -> &str {
        &self.sys.content_type.sys.id
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrySys {
    pub id: String,
    #[serde(default)]
    pub content_type: ContentTypeLink,
    /// Absent until the entry has been published at least once.
    pub published_version: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentTypeLink {
    #[serde(default)]
    pub sys: ContentTypeSys,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentTypeSys {
    #[serde(default)]
    pub id: String,
}

/// Kinds of link the resolver knows how to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkType {
    Asset,
    Entry,
}

impl LinkType {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkType::Asset => "Asset",
            LinkType::Entry => "Entry",
        }
    }
}

impl FromStr for LinkType {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "Asset" => Ok(LinkType::Asset),
            "Entry" => Ok(LinkType::Entry),
            other => Err(other.to_string()),
        }
    }
}

/// A `{"sys": {"type": "Link", "linkType": ..., "id": ...}}` object.
///
/// `linkType` stays a raw string so that unsupported kinds reach the
/// resolver and are reported there.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SysLink {
    pub sys: LinkSys,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSys {
    #[serde(rename = "type", default = "link_type_tag")]
    pub kind: String,
    pub link_type: String,
    pub id: String,
}

fn link_type_tag() -> String {
    "Link".to_string()
}

impl SysLink {
    pub fn new(link_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            sys: LinkSys {
                kind: link_type_tag(),
                link_type: link_type.into(),
                id: id.into(),
            },
        }
    }

    pub fn asset(id: impl Into<String>) -> Self {
        Self::new(LinkType::Asset.as_str(), id)
    }

    pub fn entry(id: impl Into<String>) -> Self {
        Self::new(LinkType::Entry.as_str(), id)
    }

    pub fn id(&self) -> &str {
        &self.sys.id
    }

    /// Converts a JSON value into a link if it has the link shape.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !is_contentful_link(value) {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }
}

/// Returns true when `value` is a link object rather than inline content.
pub fn is_contentful_link(value: &Value) -> bool {
    let Some(sys) = value.get("sys").and_then(Value::as_object) else {
        return false;
    };
    sys.get("type").and_then(Value::as_str) == Some("Link")
        && sys.get("linkType").is_some_and(Value::is_string)
        && sys.get("id").is_some_and(Value::is_string)
}
