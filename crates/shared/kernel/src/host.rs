//! Host derivation from configured site domains.
//!
//! Site domains are operator input and arrive in whatever shape the operator
//! typed: a full URL, a bare authority, or garbage. Attribution only wants a
//! host-shaped string out of that, and never an error.

use url::Url;

/// Extracts the host component of a configured domain string.
///
/// * `https://www.example.org/path` → `www.example.org`
/// * `www.example.org` → `www.example.org` (kept verbatim)
/// * `mailto:team@example.org` → `mailto:team@example.org` (no host; kept verbatim)
/// * `not a valid uri` → `None`
///
/// Strings that cannot anchor a URL even with an `https://` prefix yield
/// `None`; malformed input is never surfaced as an error.
#[must_use]
pub fn host_candidate(domain: &str) -> Option<String> {
    let raw = domain.trim();
    if raw.is_empty() {
        return None;
    }

    match Url::parse(raw) {
        Ok(url) => Some(url.host_str().map_or_else(|| raw.to_owned(), str::to_owned)),
        // Bare authorities ("www.example.org") are not absolute URLs; retry
        // with a scheme to see whether the string is host-shaped at all.
        Err(_) => Url::parse(&format!("https://{raw}"))
            .ok()
            .filter(|url| url.host_str().is_some())
            .map(|_| raw.to_owned()),
    }
}
