//! Locale lookup with fallback to a default locale.

use crate::core::export::LocalizedField;

/// Looks up `locale` in a localized field, then `default_locale` if given.
///
/// The fallback is only consulted when the primary locale has no value.
pub fn lookup_localized<'a, T>(
    field: Option<&'a LocalizedField<T>>,
    locale: &str,
    default_locale: Option<&str>,
) -> Option<&'a T> {
    let field = field?;
    field
        .get(locale)
        .or_else(|| default_locale.and_then(|fallback| field.get(fallback)))
}

/// Like [`lookup_localized`] for text, treating empty strings as missing.
pub fn lookup_localized_text<'a>(
    field: Option<&'a LocalizedField<String>>,
    locale: &str,
    default_locale: Option<&str>,
) -> Option<&'a str> {
    let field = field?;
    let non_empty = |code: &str| field.get(code).map(String::as_str).filter(|s| !s.is_empty());
    non_empty(locale).or_else(|| default_locale.and_then(non_empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(pairs: &[(&str, &str)]) -> LocalizedField<String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_primary_locale_wins() {
        let titles = field(&[("en", "Hello"), ("fr", "Bonjour")]);
        assert_eq!(
            lookup_localized(Some(&titles), "fr", Some("en")).map(String::as_str),
            Some("Bonjour")
        );
    }

    #[test]
    fn test_falls_back_to_default() {
        let titles = field(&[("en", "Hello")]);
        assert_eq!(
            lookup_localized(Some(&titles), "fr", Some("en")).map(String::as_str),
            Some("Hello")
        );
        assert_eq!(lookup_localized(Some(&titles), "fr", None), None);
        assert_eq!(lookup_localized(Some(&titles), "fr", Some("de")), None);
    }

    #[test]
    fn test_missing_field() {
        assert_eq!(lookup_localized::<String>(None, "en", Some("en")), None);
        assert_eq!(lookup_localized_text(None, "en", Some("en")), None);
    }

    #[test]
    fn test_empty_text_falls_back() {
        let titles = field(&[("fr", ""), ("en", "Hello")]);
        assert_eq!(lookup_localized_text(Some(&titles), "fr", Some("en")), Some("Hello"));

        let blank = field(&[("fr", ""), ("en", "")]);
        assert_eq!(lookup_localized_text(Some(&blank), "fr", Some("en")), None);
        assert_eq!(lookup_localized_text(Some(&blank), "fr", None), None);
    }
}
