use ghub_donations::redirect_params;
use ghub_domain::params::ParamMap;
use ghub_domain::site::Site;

fn default_site() -> Site {
    Site::new(1u64, "GiveHub", "https://www.givehub.org")
}

fn partner_site() -> Site {
    Site::new(2u64, "Partner", "https://partner.givehub.org")
}

#[test]
fn cross_site_redirects_with_default_host() {
    let decision =
        redirect_params(Some(&partner_site()), &default_site(), &ParamMap::new()).expect("decision");

    assert_eq!(decision.get("host"), Some("https://www.givehub.org"));
    assert_eq!(decision.get("utm_source"), Some("partner.givehub.org"));
    assert_eq!(decision.get("utm_medium"), None);
}

#[test]
fn same_site_with_utm_source_renders_normally() {
    let site = default_site();
    let incoming: ParamMap = [("utm_source", "newsletter")].into_iter().collect();

    assert!(redirect_params(Some(&site), &site, &incoming).is_none());
}

#[test]
fn same_site_without_utm_source_gets_first_touch_attribution() {
    let site = default_site();

    let decision = redirect_params(Some(&site), &site, &ParamMap::new()).expect("decision");

    assert_eq!(decision.get("host"), Some("https://www.givehub.org"));
    assert_eq!(decision.get("utm_source"), Some("www.givehub.org"));
    assert_eq!(decision.get("utm_medium"), Some("web"));
}

#[test]
fn blank_utm_source_counts_as_missing() {
    let site = default_site();
    let incoming: ParamMap = [("utm_source", "   ")].into_iter().collect();

    let decision = redirect_params(Some(&site), &site, &incoming).expect("decision");
    assert_eq!(decision.get("utm_medium"), Some("web"));
}

#[test]
fn utm_source_is_host_component_of_current_domain() {
    let current = Site::new(1u64, "Example", "https://example.org/path");
    let default_site = Site::new(1u64, "GiveHub", "https://www.inaturalist.org");

    let decision = redirect_params(Some(&current), &default_site, &ParamMap::new()).expect("decision");

    assert_eq!(decision.get("host"), Some("https://www.inaturalist.org"));
    assert_eq!(decision.get("utm_source"), Some("example.org"));
    assert_eq!(decision.get("utm_medium"), Some("web"));
}

#[test]
fn unparseable_current_domain_falls_back_to_default_host() {
    let current = Site::new(2u64, "Broken", "not a valid uri");

    let decision =
        redirect_params(Some(&current), &default_site(), &ParamMap::new()).expect("decision");

    assert_eq!(decision.get("utm_source"), Some("www.givehub.org"));
}

#[test]
fn missing_current_site_uses_default_domain() {
    let decision = redirect_params(None, &default_site(), &ParamMap::new()).expect("decision");

    assert_eq!(decision.get("utm_source"), Some("www.givehub.org"));
    assert_eq!(decision.get("utm_medium"), Some("web"));
}

#[test]
fn incoming_parameters_override_derived_values() {
    let incoming: ParamMap =
        [("utm_source", "newsletter"), ("inat_site_id", "5")].into_iter().collect();

    let decision =
        redirect_params(Some(&partner_site()), &default_site(), &incoming).expect("decision");

    assert_eq!(decision.get("host"), Some("https://www.givehub.org"));
    assert_eq!(decision.get("utm_source"), Some("newsletter"));
    assert!(!decision.contains_key("inat_site_id"));
}

#[test]
fn passthrough_parameters_keep_arrival_order() {
    let incoming: ParamMap =
        [("utm_campaign", "spring"), ("utm_term", "birds")].into_iter().collect();

    let decision =
        redirect_params(Some(&partner_site()), &default_site(), &incoming).expect("decision");

    let keys: Vec<_> = decision.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, ["host", "utm_source", "utm_campaign", "utm_term"]);
}

#[test]
fn unparseable_domains_everywhere_omit_utm_source() {
    let current = Site::new(1u64, "Broken", "not a valid uri");
    let default_site = Site::new(1u64, "AlsoBroken", "also not valid");

    let decision = redirect_params(Some(&current), &default_site, &ParamMap::new()).expect("decision");

    assert_eq!(decision.get("host"), Some("also not valid"));
    assert!(!decision.contains_key("utm_source"));
    assert_eq!(decision.get("utm_medium"), Some("web"));
}
