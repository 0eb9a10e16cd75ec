use ghub_domain::params::ParamMap;
use ghub_domain::site::Site;
use ghub_donations::redirect_params;
use proptest::prelude::*;

fn param_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("inat_site_id".to_owned()),
        Just("utm_source".to_owned()),
        Just("utm_medium".to_owned()),
        Just("host".to_owned()),
        "[a-z_]{1,12}",
    ]
}

fn incoming_params() -> impl Strategy<Value = ParamMap> {
    proptest::collection::vec((param_key(), "[ -~]{0,24}"), 0..8)
        .prop_map(|pairs| pairs.into_iter().collect())
}

fn domain() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("https://www.givehub.org".to_owned()),
        Just("partner.givehub.org".to_owned()),
        Just("not a valid uri".to_owned()),
        Just(String::new()),
        "[ -~]{0,24}",
    ]
}

proptest! {
    #[test]
    fn decision_never_forwards_site_selector(
        current_id in 1u64..4,
        current_domain in domain(),
        default_domain in domain(),
        incoming in incoming_params(),
    ) {
        let current = Site::new(current_id, "Current", current_domain);
        let default_site = Site::new(1u64, "Default", default_domain);

        if let Some(decision) = redirect_params(Some(&current), &default_site, &incoming) {
            prop_assert!(!decision.contains_key("inat_site_id"));
        }
    }

    #[test]
    fn cross_site_always_produces_a_decision(
        current_domain in domain(),
        incoming in incoming_params(),
    ) {
        let current = Site::new(2u64, "Partner", current_domain);
        let default_site = Site::new(1u64, "Default", "https://www.givehub.org");

        let decision = redirect_params(Some(&current), &default_site, &incoming);
        prop_assert!(decision.is_some());

        // Derived host holds unless the caller explicitly overrides it.
        let decision = decision.unwrap();
        if !incoming.contains_key("host") {
            prop_assert_eq!(decision.get("host"), Some("https://www.givehub.org"));
        }
    }

    #[test]
    fn same_site_with_attribution_never_redirects(
        source in "[a-z]{1,16}",
        mut incoming in incoming_params(),
    ) {
        incoming.insert("utm_source", source);
        let site = Site::new(1u64, "Default", "https://www.givehub.org");

        prop_assert!(redirect_params(Some(&site), &site, &incoming).is_none());
    }

    #[test]
    fn same_site_decision_always_carries_web_medium(
        mut incoming in incoming_params(),
    ) {
        incoming.remove("utm_source");
        incoming.remove("utm_medium");
        let site = Site::new(1u64, "Default", "https://www.givehub.org");

        let decision = redirect_params(Some(&site), &site, &incoming).unwrap();
        prop_assert_eq!(decision.get("utm_medium"), Some("web"));
    }
}
