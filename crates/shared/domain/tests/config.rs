use ghub_domain::config::{ApiConfig, ServerConfig, SitesConfig};
use ghub_domain::site::SiteId;
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4680);
    assert!(server.ssl.is_none());

    let sites = SitesConfig::default();
    assert_eq!(sites.default, SiteId(0));
    assert!(sites.sites.is_empty());
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "sites": {
            "default": 1,
            "sites": [
                { "id": 1, "name": "GiveHub", "domain": "https://www.givehub.org" },
                { "id": 2, "name": "Partner", "domain": "partner.givehub.org" }
            ]
        }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.sites.default, SiteId(1));
    assert_eq!(cfg.sites.sites.len(), 2);
    assert_eq!(cfg.sites.sites[1].domain, "partner.givehub.org");
}

#[test]
fn api_config_copy_on_write() {
    let base = ApiConfig::default();
    let mut patched = base.clone();
    patched.server.port = 9000;

    assert_eq!(base.server.port, 4680);
    assert_eq!(patched.server.port, 9000);
}
