//! Navigation URL normalization.

/// Prefixes of URLs that point outside the site and are never rewritten.
const EXTERNAL_PREFIXES: [&str; 5] = ["http://", "https://", "mailto:", "tel:", "#"];

/// Normalize a navigation URL to the site's canonical directory form.
///
/// - `#` (and any fragment-only or external URL) is returned as-is
/// - a trailing `/index.html` becomes `/`
/// - a trailing `.html` becomes `/`
/// - a leading and a trailing `/` are ensured
///
/// A query string or fragment is kept after the normalized path.
///
/// The function is idempotent: `normalize_url(&normalize_url(u)) == normalize_url(u)`.
#[must_use]
pub fn normalize_url(url: &str) -> String {
    let url = url.trim();
    if EXTERNAL_PREFIXES.iter().any(|prefix| url.starts_with(prefix)) {
        return url.to_string();
    }
    let (url, suffix) = url.find(['?', '#']).map_or((url, ""), |at| url.split_at(at));

    let mut path = if url == "index.html" {
        String::from("/")
    } else if let Some(stripped) = url.strip_suffix("/index.html") {
        format!("{stripped}/")
    } else if let Some(stripped) = url.strip_suffix(".html") {
        format!("{stripped}/")
    } else {
        url.to_string()
    };

    if !path.starts_with('/') {
        path.insert(0, '/');
    }
    if !path.ends_with('/') {
        path.push('/');
    }
    path.push_str(suffix);
    path
}
