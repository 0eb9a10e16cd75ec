use ghub_domain::constants::{
    HOST_PARAM, SITE_ID_PARAM, UTM_MEDIUM, UTM_SOURCE, WEB_MEDIUM,
};

#[test]
fn constants_match_wire_strings() {
    assert_eq!(HOST_PARAM, "host");
    assert_eq!(SITE_ID_PARAM, "inat_site_id");
    assert_eq!(UTM_SOURCE, "utm_source");
    assert_eq!(UTM_MEDIUM, "utm_medium");
    assert_eq!(WEB_MEDIUM, "web");
}
