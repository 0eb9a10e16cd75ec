use ghub_domain::params::ParamMap;

/// Decodes a raw query string into an ordered [`ParamMap`].
///
/// Arrival order is preserved and a repeated key keeps its first position
/// with the last value, matching the map semantics the redirect resolver
/// builds on. An absent query yields an empty map.
#[must_use]
pub fn parse_query(raw: Option<&str>) -> ParamMap {
    let Some(raw) = raw else {
        return ParamMap::new();
    };

    url::form_urlencoded::parse(raw.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_yields_empty_map() {
        assert!(parse_query(None).is_empty());
    }

    #[test]
    fn decodes_in_arrival_order() {
        let params = parse_query(Some("utm_source=spring%20news&inat_site_id=5&utm_term=birds"));

        let keys: Vec<_> = params.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["utm_source", "inat_site_id", "utm_term"]);
        assert_eq!(params.get("utm_source"), Some("spring news"));
    }

    #[test]
    fn repeated_key_applies_last_wins() {
        let params = parse_query(Some("a=1&b=2&a=3"));
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("a"), Some("3"));
    }

    #[test]
    fn valueless_key_decodes_to_empty_string() {
        let params = parse_query(Some("utm_source=&flag"));
        assert_eq!(params.get("utm_source"), Some(""));
        assert_eq!(params.get("flag"), Some(""));
    }
}
