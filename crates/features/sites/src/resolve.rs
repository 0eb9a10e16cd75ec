use crate::registry::SiteRegistry;
use ghub_domain::constants::SITE_ID_PARAM;
use ghub_domain::params::ParamMap;
use ghub_domain::site::{Site, SiteId};
use url::Url;

/// Resolves which network site an inbound request belongs to.
///
/// Precedence: an `inat_site_id` query parameter naming a known site, then a
/// `Host` header matching a configured site domain, then the default site.
/// Unknown ids and unknown hosts fall through silently to the next source.
#[must_use]
pub fn resolve_request_site<'a>(
    registry: &'a SiteRegistry,
    host_header: Option<&str>,
    params: &ParamMap,
) -> &'a Site {
    if let Some(site) = params
        .get(SITE_ID_PARAM)
        .and_then(|raw| raw.trim().parse::<SiteId>().ok())
        .and_then(|id| registry.get(id))
    {
        return site;
    }

    if let Some(site) =
        host_header.and_then(normalize_host).and_then(|host| registry.by_host(&host))
    {
        return site;
    }

    registry.default()
}

/// Reduces a `Host` header value to a bare lowercase host, dropping any port.
fn normalize_host(header: &str) -> Option<String> {
    let raw = header.trim();
    if raw.is_empty() {
        return None;
    }

    Url::parse(&format!("https://{raw}"))
        .ok()
        .and_then(|url| url.host_str().map(str::to_owned))
}
