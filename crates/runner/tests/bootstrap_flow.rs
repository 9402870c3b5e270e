//! Integration test: configuration -> bootstrap -> bulk subscribe
//!
//! Wires a process from the embedded default configuration and checks
//! what reaches the session queue.

use mdgate_core::SubscriptionRequestType;
use mdgate_gateway::{Session, config::load_config_from_str, load_default_config};
use mdgate_runner::{bootstrap, subscribe_all};

#[tokio::test]
async fn test_bootstrap_default_config() {
    let _ = env_logger::try_init();
    let config = load_default_config().unwrap();
    let mut gateway = bootstrap(&config).unwrap();

    assert!(gateway.session.is_logged_on());
    assert_eq!(gateway.tickers.len(), config.subscription.tickers.len());

    let summary = subscribe_all(&gateway.service, &gateway.tickers, true);
    assert_eq!(summary.accepted, gateway.tickers);
    assert!(summary.refused.is_empty());
    assert!(summary.failed.is_empty());

    for ticker in &gateway.tickers {
        let request = gateway.outbound.recv().await.unwrap();
        assert_eq!(
            request.md_req_id().as_str(),
            config.subscription.tickers[ticker]
        );
        assert_eq!(
            request.request_type(),
            SubscriptionRequestType::SnapshotPlusUpdates
        );
    }
}

#[tokio::test]
async fn test_unsubscribe_pass() {
    let _ = env_logger::try_init();
    let config = load_default_config().unwrap();
    let mut gateway = bootstrap(&config).unwrap();

    let summary = subscribe_all(&gateway.service, &gateway.tickers, false);
    assert_eq!(summary.accepted.len(), gateway.tickers.len());

    let request = gateway.outbound.recv().await.unwrap();
    assert_eq!(
        request.request_type(),
        SubscriptionRequestType::DisablePrevious
    );
}

#[test]
fn test_logged_out_session_refuses() {
    let _ = env_logger::try_init();
    let config = load_default_config().unwrap();
    let gateway = bootstrap(&config).unwrap();
    gateway.session.logout();

    let summary = subscribe_all(&gateway.service, &gateway.tickers, true);
    assert!(summary.accepted.is_empty());
    assert_eq!(summary.refused, gateway.tickers);
}

#[test]
fn test_unknown_tickers_reported_as_failed() {
    let _ = env_logger::try_init();
    let config = load_default_config().unwrap();
    let gateway = bootstrap(&config).unwrap();

    let tickers = vec!["EURUSD".to_string(), "NOPE".to_string()];
    let summary = subscribe_all(&gateway.service, &tickers, true);
    assert_eq!(summary.accepted, vec!["EURUSD".to_string()]);
    assert_eq!(summary.failed, vec!["NOPE".to_string()]);
}

#[test]
fn test_bootstrap_rejects_invalid_config() {
    let config = load_config_from_str(
        r#"{ "session": { "sender_comp_id": "CLIENT1", "target_comp_id": "LMAX" } }"#,
    )
    .unwrap();

    assert!(bootstrap(&config).is_err());
}
