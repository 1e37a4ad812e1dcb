use loan_client::application::token::{NoToken, StaticToken, TokenProvider, TokenStore};
use loan_client::constants::AUTH_TOKEN_KEY;
use std::sync::Arc;

#[test]
fn no_token_yields_nothing() {
    assert_eq!(NoToken.token(), None);
}

#[test]
fn static_token_yields_value_and_hides_it_in_debug() {
    let provider = StaticToken::new("abc");
    assert_eq!(provider.token().as_deref(), Some("abc"));
    assert!(!format!("{:?}", provider).contains("abc"));
}

#[test]
fn token_store_uses_auth_token_key() {
    let store = TokenStore::new();
    store.set_item(AUTH_TOKEN_KEY, "from-storage");
    assert_eq!(store.token().as_deref(), Some("from-storage"));

    store.set_item("theme", "dark");
    assert_eq!(store.get_item("theme").as_deref(), Some("dark"));

    store.clear_token();
    assert_eq!(store.token(), None);
    assert_eq!(store.get_item("theme").as_deref(), Some("dark"));

    store.remove_item("theme");
    assert_eq!(store.get_item("theme"), None);
}

#[test]
fn token_store_is_shared_across_threads() {
    let store = TokenStore::new();
    let provider: Arc<dyn TokenProvider> = Arc::new(store.clone());

    let writer = store.clone();
    std::thread::spawn(move || writer.set_token("t-1"))
        .join()
        .unwrap();

    assert_eq!(provider.token().as_deref(), Some("t-1"));
    assert!(format!("{:?}", store).contains("has_token: true"));
}

#[test]
fn closures_are_providers() {
    let provider: Arc<dyn TokenProvider> = Arc::new(|| Some("closure".to_string()));
    assert_eq!(provider.token().as_deref(), Some("closure"));
}
