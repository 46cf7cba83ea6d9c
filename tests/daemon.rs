//! Daemon client against a mocked TurtleCoind.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use turtlecoin_rpc::error::{Error, HttpError};
use turtlecoin_rpc::prelude::*;

const HASH: &str = "7fb97df81221dd1366051b2d0bc7f49c66c22ac4431d879c895b06d66ef66f4c";

fn daemon_for(server: &MockServer) -> Daemon {
    let addr = server.address();
    Daemon::builder()
        .host(addr.ip().to_string())
        .port(addr.port())
        .build()
        .expect("daemon client should build")
}

fn rpc_result(result: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "jsonrpc": "2.0",
        "result": result
    }))
}

// ─── JSON-RPC ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn block_count_sends_envelope_without_params() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/json_rpc"))
        .and(body_json(json!({
            "jsonrpc": "2.0",
            "method": "getblockcount",
            "params": {}
        })))
        .respond_with(rpc_result(json!({"count": 123456, "status": "OK"})))
        .expect(1)
        .mount(&server)
        .await;

    let count = daemon_for(&server).block_count().await.unwrap();
    assert_eq!(count, 123456);
}

#[tokio::test]
async fn block_hash_uses_positional_params() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/json_rpc"))
        .and(body_partial_json(json!({
            "method": "on_getblockhash",
            "params": [100]
        })))
        .respond_with(rpc_result(json!(HASH)))
        .mount(&server)
        .await;

    let hash = daemon_for(&server).block_hash(100).await.unwrap();
    assert_eq!(hash, HASH);
}

#[tokio::test]
async fn block_header_by_height() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/json_rpc"))
        .and(body_partial_json(json!({
            "method": "getblockheaderbyheight",
            "params": {"height": 1}
        })))
        .respond_with(rpc_result(json!({
            "block_header": {
                "block_size": 419,
                "depth": 2,
                "difficulty": 1,
                "hash": HASH,
                "height": 1,
                "major_version": 1,
                "minor_version": 0,
                "nonce": 2,
                "num_txes": 1,
                "orphan_status": false,
                "prev_hash": HASH,
                "reward": 2935,
                "timestamp": 1512800692
            },
            "status": "OK"
        })))
        .mount(&server)
        .await;

    let header = daemon_for(&server).block_header_by_height(1).await.unwrap();
    assert_eq!(header.height, 1);
    assert_eq!(header.reward, 2935);
    assert_eq!(header.hash, HASH);
}

#[tokio::test]
async fn rpc_error_member_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/json_rpc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "error": {"code": -2, "message": "Too big height"}
        })))
        .mount(&server)
        .await;

    let err = daemon_for(&server).block_hash(99_999_999).await.unwrap_err();
    match err {
        Error::Rpc { code, message } => {
            assert_eq!(code, -2);
            assert_eq!(message, "Too big height");
        }
        other => panic!("expected Rpc error, got {other:?}"),
    }
}

#[tokio::test]
async fn transaction_drops_empty_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/json_rpc"))
        .and(body_partial_json(json!({"method": "f_transaction_json"})))
        .respond_with(rpc_result(json!({
            "status": "OK",
            "tx": {"": "garbage", "version": 1},
            "txDetails": {"hash": HASH}
        })))
        .mount(&server)
        .await;

    let tx = daemon_for(&server).transaction(HASH).await.unwrap();
    assert!(tx["tx"].get("").is_none());
    assert_eq!(tx["tx"]["version"], 1);
}

// ─── POST endpoints ──────────────────────────────────────────────────────────

#[tokio::test]
async fn transactions_status_partitions_hashes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/get_transactions_status"))
        .and(body_json(json!({"transactionHashes": [HASH]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "transactionsInPool": [],
            "transactionsInBlock": [HASH],
            "transactionsUnknown": []
        })))
        .mount(&server)
        .await;

    let status = daemon_for(&server)
        .transactions_status(&[HASH.to_string()])
        .await
        .unwrap();
    assert_eq!(status.in_block, vec![HASH.to_string()]);
    assert!(status.in_pool.is_empty());
}

#[tokio::test]
async fn non_ok_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/get_transactions_status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "Failed",
            "transactionsInPool": [],
            "transactionsInBlock": [],
            "transactionsUnknown": []
        })))
        .mount(&server)
        .await;

    let err = daemon_for(&server)
        .transactions_status(&[HASH.to_string()])
        .await
        .unwrap_err();
    assert!(matches!(err, Error::StatusNotOk { ref status, .. } if status == "Failed"));
}

#[tokio::test]
async fn send_raw_transaction_reports_rejection_reason() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/sendrawtransaction"))
        .and(body_json(json!({"tx_as_hex": "0100"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "Failed",
            "error": "Transaction was rejected by daemon"
        })))
        .mount(&server)
        .await;

    let err = daemon_for(&server)
        .send_raw_transaction("0100")
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Status is not OK: Failed (Transaction was rejected by daemon)"
    );
}

#[tokio::test]
async fn invalid_inputs_send_nothing() {
    let server = MockServer::start().await;
    let daemon = daemon_for(&server);

    assert!(matches!(
        daemon.transaction("not-a-hash").await,
        Err(Error::Validation(_))
    ));
    assert!(matches!(
        daemon.transactions_status(&[]).await,
        Err(Error::Validation(_))
    ));
    assert!(matches!(
        daemon.send_raw_transaction("xyz").await,
        Err(Error::Validation(_))
    ));
    assert!(matches!(
        daemon.global_indexes_for_range(10, 5).await,
        Err(Error::Validation(_))
    ));
    assert!(matches!(
        daemon.block_template("", None).await,
        Err(Error::Validation(_))
    ));

    assert_eq!(server.received_requests().await.unwrap().len(), 0);
}

// ─── GET endpoints ───────────────────────────────────────────────────────────

#[tokio::test]
async fn height_and_fee_concurrently() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/height"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "height": 1_500_000,
            "network_height": 1_500_001,
            "status": "OK"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/fee"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "address": "TRTLv1",
            "amount": 5000,
            "status": "OK"
        })))
        .mount(&server)
        .await;

    let daemon = daemon_for(&server);
    let (height, fee) = tokio::join!(daemon.height(), daemon.fee());
    let height = height.unwrap();
    let fee = fee.unwrap();

    assert_eq!(height.height, 1_500_000);
    assert_eq!(height.network_height, 1_500_001);
    assert_eq!(fee.amount, 5000);
    assert_eq!(fee.address, "TRTLv1");
}

#[tokio::test]
async fn http_failure_keeps_status_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/info"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = daemon_for(&server).info().await.unwrap_err();
    assert!(matches!(
        err,
        Error::Http(HttpError::Status { status: 503, .. })
    ));
}

#[tokio::test]
async fn timeout_fails_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/height"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"height": 1, "network_height": 1, "status": "OK"}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let addr = server.address();
    let daemon = Daemon::builder()
        .host(addr.ip().to_string())
        .port(addr.port())
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = daemon.height().await.unwrap_err();
    assert!(
        matches!(err, Error::Http(ref e) if e.is_timeout()),
        "expected timeout, got {err:?}"
    );
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}
