//! Asset links - turns an exported asset into an inline asset record.

use super::url::prefix_url;
use crate::core::export::ExportedAsset;
use crate::core::record::{AssetKind, AssetRecord, Resolution};
use crate::diagnostics::Diagnostic;
use crate::localization::{lookup_localized, lookup_localized_text};

/// Builds the asset record for `asset` in `locale`.
pub fn resolve_asset(
    asset: &ExportedAsset,
    locale: &str,
    default_locale: Option<&str>,
) -> Resolution {
    let fields = &asset.fields;

    let Some(file) = lookup_localized(fields.file.as_ref(), locale, default_locale) else {
        return Resolution::Unresolvable(Diagnostic::MissingFile {
            asset_id: asset.id().to_string(),
        });
    };

    let kind = AssetKind::from_content_type(&file.content_type);

    let Some(url) = file.url.as_deref().filter(|url| !url.is_empty()) else {
        return Resolution::Unresolvable(Diagnostic::MissingAssetUrl {
            asset_id: asset.id().to_string(),
        });
    };

    let mut record = AssetRecord::new(kind, &prefix_url(url));
    record.title =
        lookup_localized_text(fields.title.as_ref(), locale, default_locale).map(str::to_string);
    record.description =
        lookup_localized_text(fields.description.as_ref(), locale, default_locale)
            .map(str::to_string);

    Resolution::Asset(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::export::{AssetFields, AssetFile, AssetSys};
    use std::collections::HashMap;

    fn asset_with_file(locale: &str, url: Option<&str>, content_type: &str) -> ExportedAsset {
        let file = AssetFile {
            url: url.map(str::to_string),
            content_type: content_type.to_string(),
            file_name: None,
        };
        ExportedAsset {
            sys: AssetSys {
                id: "a1".to_string(),
            },
            fields: AssetFields {
                file: Some(HashMap::from([(locale.to_string(), file)])),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_image_with_protocol_relative_url() {
        let asset = asset_with_file("en", Some("//img.example.com/x.png"), "image/png");
        let Resolution::Asset(record) = resolve_asset(&asset, "en", None) else {
            panic!("expected asset record");
        };
        assert_eq!(record.kind, AssetKind::Image);
        assert_eq!(record.asset_key, "image@https://img.example.com/x.png");
        assert_eq!(record.title, None);
    }

    #[test]
    fn test_plain_file_url_is_unchanged() {
        let asset = asset_with_file("en", Some("https://cdn.example.com/doc.pdf"), "application/pdf");
        let Resolution::Asset(record) = resolve_asset(&asset, "en", None) else {
            panic!("expected asset record");
        };
        assert_eq!(record.asset_key, "file@https://cdn.example.com/doc.pdf");
    }

    #[test]
    fn test_missing_file_for_locale() {
        let asset = asset_with_file("en", Some("//x/y"), "image/png");
        assert_eq!(
            resolve_asset(&asset, "fr", None),
            Resolution::Unresolvable(Diagnostic::MissingFile {
                asset_id: "a1".to_string()
            })
        );
        assert!(resolve_asset(&asset, "fr", Some("en")).is_resolved());
    }

    #[test]
    fn test_missing_url() {
        let asset = asset_with_file("en", None, "image/png");
        assert_eq!(
            resolve_asset(&asset, "en", None),
            Resolution::Unresolvable(Diagnostic::MissingAssetUrl {
                asset_id: "a1".to_string()
            })
        );
    }

    #[test]
    fn test_empty_url_counts_as_missing() {
        let asset = asset_with_file("en", Some(""), "image/png");
        let resolution = resolve_asset(&asset, "en", None);
        assert_eq!(
            resolution.diagnostic(),
            Some(&Diagnostic::MissingAssetUrl {
                asset_id: "a1".to_string()
            })
        );
    }

    #[test]
    fn test_metadata_fallback() {
        let mut asset = asset_with_file("en", Some("//x/y.jpg"), "image/jpeg");
        asset.fields.title = Some(HashMap::from([
            ("fr".to_string(), "Titre".to_string()),
            ("en".to_string(), "Title".to_string()),
        ]));
        asset.fields.description = Some(HashMap::from([("en".to_string(), "Desc".to_string())]));

        let Resolution::Asset(record) = resolve_asset(&asset, "fr", Some("en")) else {
            panic!("expected asset record");
        };
        assert_eq!(record.title.as_deref(), Some("Titre"));
        assert_eq!(record.description.as_deref(), Some("Desc"));
    }
}
