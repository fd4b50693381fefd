use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn default_config_is_same_origin_with_gateway_prefixes() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.base_url, "");
    assert_eq!(cfg.customers_prefix, DEFAULT_CUSTOMERS_PREFIX);
    assert_eq!(cfg.visits_prefix, DEFAULT_VISITS_PREFIX);
    assert_eq!(cfg.vets_prefix, DEFAULT_VETS_PREFIX);
    assert_eq!(cfg.genai_path, DEFAULT_GENAI_PATH);
}

#[test]
fn new_trims_trailing_slash_without_validating() {
    assert_eq!(ApiConfig::new("https://gateway.example/").base_url, "https://gateway.example");
    assert_eq!(ApiConfig::new("not a url").base_url, "not a url");
}

#[test]
fn from_lookup_with_nothing_set_matches_default() {
    assert_eq!(ApiConfig::from_lookup(|_| None), ApiConfig::default());
}

#[test]
fn from_lookup_applies_overrides() {
    let cfg = ApiConfig::from_lookup(lookup_from(&[
        (BASE_URL_KEY, "https://abc.execute-api.us-west-2.amazonaws.com/prod/"),
        (CUSTOMERS_PREFIX_KEY, "customers/"),
        (VISITS_PREFIX_KEY, "/visits"),
        (VETS_PREFIX_KEY, "/vets-service"),
        (GENAI_PATH_KEY, "/genai"),
    ]));
    assert_eq!(cfg.base_url, "https://abc.execute-api.us-west-2.amazonaws.com/prod");
    assert_eq!(cfg.customers_prefix, "/customers");
    assert_eq!(cfg.visits_prefix, "/visits");
    assert_eq!(cfg.vets_prefix, "/vets-service");
    assert_eq!(cfg.genai_path, "/genai");
}

#[test]
fn from_lookup_ignores_blank_values() {
    let cfg = ApiConfig::from_lookup(lookup_from(&[(BASE_URL_KEY, "   "), (VETS_PREFIX_KEY, "")]));
    assert_eq!(cfg.base_url, "");
    assert_eq!(cfg.vets_prefix, DEFAULT_VETS_PREFIX);
}
