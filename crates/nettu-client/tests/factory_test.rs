//! Credential resolution and bundle construction

use std::sync::Arc;

use nettu_client::{
    ClientConfig, ClientFactory, Credentials, NettuClient, NettuUserClient, PartialCredentials,
};

fn headers_of(creds: Option<PartialCredentials>) -> Vec<(String, String)> {
    let factory = ClientFactory::new(Arc::new(ClientConfig::default()), creds).unwrap();
    factory.credentials().create_auth_headers().to_pairs()
}

fn pair(name: &str, value: &str) -> (String, String) {
    (name.to_string(), value.to_string())
}

#[test]
fn test_api_key_wins_over_account() {
    let headers = headers_of(Some(
        PartialCredentials::default()
            .with_api_key("k")
            .with_nettu_account("a"),
    ));
    assert_eq!(headers, vec![pair("x-api-key", "k")]);
}

#[test]
fn test_account_with_token() {
    let headers = headers_of(Some(
        PartialCredentials::default()
            .with_nettu_account("a")
            .with_token("t"),
    ));
    assert_eq!(
        headers,
        vec![pair("authorization", "Bearer t"), pair("nettu-account", "a")]
    );
}

#[test]
fn test_account_without_token() {
    let headers = headers_of(Some(PartialCredentials::default().with_nettu_account("a")));
    assert_eq!(headers, vec![pair("nettu-account", "a")]);
}

#[test]
fn test_no_credentials() {
    assert!(headers_of(None).is_empty());
    assert!(headers_of(Some(PartialCredentials::default())).is_empty());
}

#[test]
fn test_headers_are_stable() {
    let factory = ClientFactory::new(
        Arc::new(ClientConfig::default()),
        Some(PartialCredentials::default().with_nettu_account("a").with_token("t")),
    )
    .unwrap();

    let first = factory.credentials().create_auth_headers();
    let mut copy = first.to_pairs();
    copy.clear();
    assert_eq!(first, factory.credentials().create_auth_headers());
    assert_eq!(factory.credentials().create_auth_headers().len(), 2);
}

#[test]
fn test_bundles_from_one_factory_share_state() {
    let config = Arc::new(ClientConfig::new("http://localhost:5000/api/v1"));
    let factory = ClientFactory::new(
        config.clone(),
        Some(PartialCredentials::default().with_api_key("k")),
    )
    .unwrap();

    let admin = factory.admin();
    let user = factory.user();

    let admin_bases = [
        admin.account().base(),
        admin.calendar().base(),
        admin.events().base(),
        admin.health().base(),
        admin.service().base(),
        admin.schedule().base(),
        admin.user().base(),
    ];
    let user_bases = [
        user.calendar().base(),
        user.events().base(),
        user.service().base(),
        user.schedule().base(),
        user.user().base(),
    ];

    for base in admin_bases.iter().chain(user_bases.iter()) {
        assert!(Arc::ptr_eq(base.credentials(), factory.credentials()));
        assert!(Arc::ptr_eq(base.config(), &config));
    }
}

#[test]
fn test_shortcut_constructors_share_config() {
    let config = Arc::new(ClientConfig::default());
    let admin = NettuClient::new(config.clone(), None).unwrap();
    let user = NettuUserClient::new(config.clone(), None).unwrap();

    assert!(Arc::ptr_eq(admin.health().base().config(), &config));
    assert!(Arc::ptr_eq(user.calendar().base().config(), &config));
    assert_eq!(admin.account().base().credentials().as_ref(), &Credentials::Empty);
    // Each shortcut resolves its own strategy
    assert!(!Arc::ptr_eq(
        admin.account().base().credentials(),
        user.user().base().credentials()
    ));
}

#[test]
fn test_credentials_from_config_document() {
    let creds: PartialCredentials =
        serde_json::from_str(r#"{"apiKey":"","nettuAccount":"a","token":"t"}"#).unwrap();
    let factory = ClientFactory::new(Arc::new(ClientConfig::default()), Some(creds)).unwrap();
    assert!(matches!(
        factory.credentials().as_ref(),
        Credentials::User { nettu_account, token: Some(token) } if nettu_account == "a" && token == "t"
    ));
}
