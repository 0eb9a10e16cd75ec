//! Redirect target construction.

use ghub_domain::constants::HOST_PARAM;
use ghub_domain::params::ParamMap;
use url::Url;

/// Builds the canonical donation URL from a redirect decision.
///
/// The `host` entry supplies scheme, host and port; a bare authority gets an
/// `https://` scheme. The remaining entries become the query string in
/// decision order, percent-encoded. Returns `None` when the `host` entry is
/// missing or cannot anchor a URL; the caller falls back to rendering
/// locally.
#[must_use]
pub fn donation_url(path: &str, params: &ParamMap) -> Option<Url> {
    let mut url = parse_base(params.get(HOST_PARAM)?)?;
    url.set_path(path);
    url.set_query(None);
    url.set_fragment(None);

    let query: Vec<(&str, &str)> = params.iter().filter(|(key, _)| *key != HOST_PARAM).collect();
    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
    }

    Some(url)
}

fn parse_base(raw: &str) -> Option<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    Url::parse(raw)
        .ok()
        .filter(|url| url.host_str().is_some())
        .or_else(|| Url::parse(&format!("https://{raw}")).ok().filter(|url| url.host_str().is_some()))
}
