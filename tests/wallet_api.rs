//! WalletApi client against a mocked WalletAPI.

use std::str::FromStr;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use turtlecoin_rpc::error::{Error, WalletApiError};
use turtlecoin_rpc::prelude::*;

const ADDRESS: &str = "TRTLv2Fyavy8CXG8BPEbNeCHFZ1fuDCYCZ3vW5H5LXN4K2M2MHUpTENip9bbavpHvvPwb4NDkBWrNgURAd5DB38FHXWZyoBh4wW";
const TX_HASH: &str = "3bdfb1bd3f6c3c2a3b05e5fb3e6a5a5c8f9b8ab0a2c6d2b8e2b4f1c2d5e7f809";

fn wallet_for(server: &MockServer) -> WalletApi {
    let addr = server.address();
    WalletApi::builder()
        .api_key("password")
        .host(addr.ip().to_string())
        .port(addr.port())
        .build()
        .expect("wallet client should build")
}

#[tokio::test]
async fn api_key_header_on_every_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/addresses/primary"))
        .and(header("x-api-key", "password"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"address": ADDRESS})))
        .expect(1)
        .mount(&server)
        .await;

    let address = wallet_for(&server).primary_address().await.unwrap();
    assert_eq!(address, ADDRESS);
}

#[tokio::test]
async fn unauthorized_maps_to_api_key_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = wallet_for(&server).status().await.unwrap_err();
    assert!(matches!(err, Error::WalletApi(WalletApiError::Unauthorized)));
    assert_eq!(err.to_string(), "API key is missing or invalid");
}

#[tokio::test]
async fn forbidden_means_no_wallet_open() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/balance"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = wallet_for(&server).balance(None).await.unwrap_err();
    assert!(matches!(err, Error::WalletApi(WalletApiError::NoWalletOpen)));
}

#[tokio::test]
async fn open_sends_default_node() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/wallet/open"))
        .and(body_json(json!({
            "daemonHost": "127.0.0.1",
            "daemonPort": 11898,
            "daemonSSL": false,
            "filename": "mywallet.wallet",
            "password": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    wallet_for(&server)
        .open("mywallet.wallet", "hunter2", None)
        .await
        .unwrap();
}

#[tokio::test]
async fn balance_for_address_in_display_units() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/balance/{}", ADDRESS)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "unlocked": 115,
            "locked": 0
        })))
        .mount(&server)
        .await;

    let balance = wallet_for(&server).balance(Some(ADDRESS)).await.unwrap();
    assert_eq!(balance.unlocked, Decimal::from_str("1.15").unwrap());
    assert_eq!(balance.locked, Decimal::ZERO);
}

#[tokio::test]
async fn send_advanced_converts_destinations() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/transactions/send/advanced"))
        .and(body_json(json!({
            "destinations": [{"address": ADDRESS, "amount": 115}],
            "fee": 10,
            "unlockTime": 0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"transactionHash": TX_HASH})))
        .expect(1)
        .mount(&server)
        .await;

    let wallet = wallet_for(&server);
    let destination = wallet
        .new_destination(ADDRESS, Decimal::from_str("1.15").unwrap())
        .unwrap();
    assert_eq!(destination.amount, 115);

    let hash = wallet
        .send_advanced(&SendAdvanced::new(vec![destination]))
        .await
        .unwrap();
    assert_eq!(hash, TX_HASH);
}

#[tokio::test]
async fn validate_address_echoes_or_rejects() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/addresses/validate"))
        .and(body_json(json!({"address": ADDRESS})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "actualAddress": ADDRESS,
            "addressType": "standard",
            "isIntegrated": false,
            "paymentID": "",
            "publicSpendKey": "ab",
            "publicViewKey": "cd"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/addresses/validate"))
        .and(body_json(json!({"address": "TRTLnope"})))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errorCode": 6,
            "errorMessage": "The address given is not valid"
        })))
        .mount(&server)
        .await;

    let wallet = wallet_for(&server);
    let valid = wallet.validate_address(ADDRESS).await.unwrap();
    assert_eq!(valid.actual_address, ADDRESS);
    assert!(!valid.is_integrated);

    let err = wallet.validate_address("TRTLnope").await.unwrap_err();
    match err {
        Error::WalletApi(WalletApiError::BadRequest(message)) => {
            assert_eq!(message, "The address given is not valid");
        }
        other => panic!("expected BadRequest, got {other:?}"),
    }
}

#[tokio::test]
async fn transactions_in_range() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/transactions/100/200"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transactions": [{
                "blockHeight": 150,
                "fee": 10,
                "hash": TX_HASH,
                "isCoinbaseTransaction": false,
                "paymentID": "",
                "timestamp": 1560000000,
                "unlockTime": 0,
                "transfers": [{"address": ADDRESS, "amount": -1010}]
            }]
        })))
        .mount(&server)
        .await;

    let txs = wallet_for(&server)
        .transactions(Some(100), Some(200))
        .await
        .unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].fee, Decimal::from_str("0.1").unwrap());
    assert_eq!(txs[0].transfers[0].amount, Decimal::from_str("-10.1").unwrap());
}

#[tokio::test]
async fn save_and_reset_use_put() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/save"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/reset"))
        .and(body_json(json!({"scanHeight": 500})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let wallet = wallet_for(&server);
    let (saved, reset) = tokio::join!(wallet.save(), wallet.reset(Some(500)));
    saved.unwrap();
    reset.unwrap();
}

#[tokio::test]
async fn invalid_inputs_send_nothing() {
    let server = MockServer::start().await;
    let wallet = wallet_for(&server);

    assert!(matches!(
        wallet.validate_address("").await,
        Err(Error::Validation(_))
    ));
    assert!(matches!(
        wallet.set_node(None, None, false).await,
        Err(Error::Validation(_))
    ));
    assert!(matches!(
        wallet.send_advanced(&SendAdvanced::default()).await,
        Err(Error::Validation(_))
    ));
    assert!(matches!(
        wallet.transactions(None, Some(10)).await,
        Err(Error::Validation(_))
    ));
    assert!(matches!(
        wallet.open("", "pw", None).await,
        Err(Error::Validation(_))
    ));

    assert_eq!(server.received_requests().await.unwrap().len(), 0);
}
