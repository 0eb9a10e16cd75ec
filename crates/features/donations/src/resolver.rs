//! Redirect parameter derivation.
//!
//! The decision logic behind every donation route: does this request get
//! redirected to the canonical donation page, and with which attribution
//! parameters?

use ghub_domain::constants::{HOST_PARAM, SITE_ID_PARAM, UTM_MEDIUM, UTM_SOURCE, WEB_MEDIUM};
use ghub_domain::params::ParamMap;
use ghub_domain::site::Site;
use ghub_kernel::host::host_candidate;

/// Decides whether a donation request must be redirected, and computes the
/// parameters to attach to the canonical donation URL if so.
///
/// Two branches produce a redirect:
///
/// * **Cross-site** — the request was attributed to a site other than the
///   default one. The visitor is sent to the default site's donation page
///   with `utm_source` naming where they came from.
/// * **First touch** — the request already targets the default site but
///   carries no usable `utm_source`, so one is derived (`utm_medium` is
///   pinned to `web` for this case).
///
/// A same-site request with a non-blank `utm_source` needs no redirect and
/// yields `None`.
///
/// Incoming parameters are carried over and silently override the derived
/// `host`/`utm_source`/`utm_medium` values (last write wins). The
/// `inat_site_id` selector is consumed here and never forwarded. A domain
/// that yields no host candidate degrades to an absent `utm_source`; it is
/// never an error.
#[must_use]
pub fn redirect_params(
    current: Option<&Site>,
    default_site: &Site,
    incoming: &ParamMap,
) -> Option<ParamMap> {
    let utm_source = current
        .and_then(|site| host_candidate(&site.domain))
        .or_else(|| host_candidate(&default_site.domain));

    if current.is_some_and(|site| site.id != default_site.id) {
        return Some(decision(default_site, utm_source, None, incoming));
    }

    if incoming.get(UTM_SOURCE).is_none_or(|value| value.trim().is_empty()) {
        return Some(decision(default_site, utm_source, Some(WEB_MEDIUM), incoming));
    }

    None
}

fn decision(
    default_site: &Site,
    utm_source: Option<String>,
    utm_medium: Option<&str>,
    incoming: &ParamMap,
) -> ParamMap {
    let mut params = ParamMap::new();
    params.insert(HOST_PARAM, default_site.domain.clone());
    if let Some(source) = utm_source {
        params.insert(UTM_SOURCE, source);
    }
    if let Some(medium) = utm_medium {
        params.insert(UTM_MEDIUM, medium);
    }

    for (key, value) in incoming {
        if key != SITE_ID_PARAM {
            params.insert(key, value);
        }
    }

    params
}
