use super::*;
use proptest::prelude::*;

const API: &str = "https://api.scryfall.com/cards/search";

#[test]
fn test_raw_query_is_taken_verbatim() {
    let target = SearchTarget::from_input("t:goblin cmc<=2").unwrap();
    assert_eq!(target.query, "t:goblin cmc<=2");
    assert_eq!(target.unique, None);
}

#[test]
fn test_raw_query_is_trimmed() {
    let target = SearchTarget::from_input("   c:r  ").unwrap();
    assert_eq!(target.query, "c:r");
}

#[test]
fn test_blank_query_is_rejected() {
    assert_eq!(SearchTarget::from_input("   "), Err(ScryError::NoQuery));
}

#[test]
fn test_page_url_query_is_decoded() {
    let target =
        SearchTarget::from_input("https://scryfall.com/search?q=t%3Agoblin+cmc%3C%3D2&as=grid")
            .unwrap();
    assert_eq!(target.query, "t:goblin cmc<=2");
}

#[test]
fn test_page_url_without_scheme() {
    let target = SearchTarget::from_input("scryfall.com/search?q=o:flying").unwrap();
    assert_eq!(target.query, "o:flying");
}

#[test]
fn test_page_url_carries_unique_mode() {
    let target =
        SearchTarget::from_input("https://scryfall.com/search?q=lightning+bolt&unique=prints")
            .unwrap();
    assert_eq!(target.unique.as_deref(), Some("prints"));
}

#[test]
fn test_page_url_without_q_is_rejected() {
    let result = SearchTarget::from_input("https://scryfall.com/search?as=grid");
    assert_eq!(result, Err(ScryError::NoQuery));
}

#[test]
fn test_page_url_with_empty_q_is_rejected() {
    let result = SearchTarget::from_input("https://scryfall.com/search?q=");
    assert_eq!(result, Err(ScryError::NoQuery));
}

#[test]
fn test_other_host_is_rejected() {
    let result = SearchTarget::from_input("https://example.com/search?q=goblin");
    assert!(matches!(result, Err(ScryError::NotSearchPage(_))));
}

#[test]
fn test_non_search_page_is_rejected() {
    let result = SearchTarget::from_input("https://scryfall.com/card/m21/1");
    assert!(matches!(result, Err(ScryError::NotSearchPage(_))));
}

#[test]
fn test_api_url_encodes_query() {
    let target = SearchTarget::new("t:goblin cmc<=2").unwrap();
    let url = target.api_url(API).unwrap();

    assert!(url.starts_with("https://api.scryfall.com/cards/search?q="));
    assert!(!url.contains(' '));
    assert!(url.contains("t%3Agoblin"));
}

#[test]
fn test_api_url_includes_unique() {
    let target = SearchTarget::new("bolt")
        .unwrap()
        .with_unique(Some("art".to_string()));
    let url = target.api_url(API).unwrap();
    assert!(url.ends_with("&unique=art"));
}

#[test]
fn test_with_unique_none_keeps_existing() {
    let target = SearchTarget::from_input("https://scryfall.com/search?q=bolt&unique=art")
        .unwrap()
        .with_unique(None);
    assert_eq!(target.unique.as_deref(), Some("art"));
}

#[test]
fn test_api_url_rejects_bad_base() {
    let target = SearchTarget::new("bolt").unwrap();
    assert!(matches!(
        target.api_url("not a url"),
        Err(ScryError::InvalidUrl(_))
    ));
}

// Whatever the query text, the API URL decodes back to the same query.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_api_url_preserves_query(query in "[a-zA-Z0-9:<>=!\"() +-]{1,40}") {
        prop_assume!(!query.trim().is_empty());
        let target = SearchTarget::new(query.clone()).unwrap();
        let url = Url::parse(&target.api_url(API).unwrap()).unwrap();

        let q = url.query_pairs().find(|(k, _)| k == "q").map(|(_, v)| v.into_owned());
        prop_assert_eq!(q, Some(query.trim().to_string()));
    }
}
