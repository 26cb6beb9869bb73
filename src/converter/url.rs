//! Asset URL normalization.

/// Completes a protocol-relative URL (`//host/path`) with `https:`.
pub fn prefix_url(url: &str) -> String {
    if url.starts_with("//") {
        format!("https:{url}")
    } else {
        url.to_string()
    }
}
