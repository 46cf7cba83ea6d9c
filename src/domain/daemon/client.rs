//! `Daemon`: typed client for the TurtleCoind RPC interface.
//!
//! Covers the JSON-RPC methods on `/json_rpc`, the binary-compatible POST
//! endpoints, the block explorer endpoints and the plain GET endpoints.

use std::time::Duration;

use serde_json::Value;

use super::convert;
use super::wire::*;
use super::{
    BlockHeader, BlockShortHeader, BlockTemplate, BlocksLite, Height, NodeFee, NodeInfo, Peers,
    PoolChanges, RandomOutputs, RawBlocks, SyncRequest, TransactionIndexes, TransactionSummary,
    Transactions, TransactionsStatus, WalletSyncData,
};
use crate::config::ConnectionConfig;
use crate::error::{Error, Result};
use crate::http::{HttpTransport, JsonRpc};
use crate::network::{DEFAULT_DAEMON_PORT, DEFAULT_HOST, DEFAULT_RPC_TIMEOUT};
use crate::shared::{
    require_non_empty, require_non_empty_list, validate_hash, validate_hashes, validate_hex_blob,
};

/// Space reserved in a block template for extra nonce data.
pub const DEFAULT_RESERVE_SIZE: u64 = 8;

/// Blocks returned per call by the bulk block endpoints.
pub const DEFAULT_BLOCK_COUNT: u64 = 100;

/// Client for one TurtleCoind node.
#[derive(Debug, Clone)]
pub struct Daemon {
    rpc: JsonRpc,
}

impl Daemon {
    pub fn builder() -> DaemonBuilder {
        DaemonBuilder::default()
    }

    /// Client for a daemon at `host:port` with default settings.
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self> {
        Self::builder().host(host).port(port).build()
    }

    fn http(&self) -> &HttpTransport {
        self.rpc.transport()
    }

    // ── JSON-RPC ─────────────────────────────────────────────────────────

    /// Full details of a block.
    pub async fn block(&self, hash: &str) -> Result<Value> {
        validate_hash(hash, "block hash")?;
        let result: BlockResult = self.rpc.call("f_block_json", HashParams { hash }).await?;
        Ok(result.block)
    }

    pub async fn block_count(&self) -> Result<u64> {
        let result: CountResult = self.rpc.call_without_params("getblockcount").await?;
        Ok(result.count)
    }

    pub async fn block_hash(&self, height: u64) -> Result<String> {
        self.rpc.call("on_getblockhash", [height]).await
    }

    pub async fn block_header_by_hash(&self, hash: &str) -> Result<BlockHeader> {
        validate_hash(hash, "block hash")?;
        let result: BlockHeaderResult = self
            .rpc
            .call("getblockheaderbyhash", HashParams { hash })
            .await?;
        Ok(result.block_header)
    }

    pub async fn block_header_by_height(&self, height: u64) -> Result<BlockHeader> {
        let result: BlockHeaderResult = self
            .rpc
            .call("getblockheaderbyheight", HeightParams { height })
            .await?;
        Ok(result.block_header)
    }

    /// Abbreviated headers for the 31 blocks up to and including `height`.
    pub async fn block_short_headers(&self, height: u64) -> Result<Vec<BlockShortHeader>> {
        let result: BlocksListResult = self
            .rpc
            .call("f_blocks_list_json", HeightParams { height })
            .await?;
        Ok(result.blocks)
    }

    /// Block template paying the coinbase to `address`.
    ///
    /// `reserve_size` defaults to [`DEFAULT_RESERVE_SIZE`].
    pub async fn block_template(
        &self,
        address: &str,
        reserve_size: Option<u64>,
    ) -> Result<BlockTemplate> {
        require_non_empty(address, "wallet address")?;
        self.rpc
            .call(
                "getblocktemplate",
                BlockTemplateParams {
                    reserve_size: reserve_size.unwrap_or(DEFAULT_RESERVE_SIZE),
                    wallet_address: address,
                },
            )
            .await
    }

    pub async fn currency_id(&self) -> Result<String> {
        let result: CurrencyIdResult = self.rpc.call_without_params("getcurrencyid").await?;
        Ok(result.currency_id_blob)
    }

    pub async fn last_block_header(&self) -> Result<BlockHeader> {
        let result: BlockHeaderResult = self.rpc.call_without_params("getlastblockheader").await?;
        Ok(result.block_header)
    }

    /// Submit a mined block; returns the daemon's status string.
    pub async fn submit_block(&self, blob: &str) -> Result<String> {
        validate_hex_blob(blob, "block blob")?;
        let result: StatusResult = self.rpc.call("submitblock", [blob]).await?;
        Ok(result.status)
    }

    /// Transaction details with the daemon's empty-key entry removed from `tx`.
    pub async fn transaction(&self, hash: &str) -> Result<Value> {
        validate_hash(hash, "transaction hash")?;
        let mut result: Value = self
            .rpc
            .call("f_transaction_json", HashParams { hash })
            .await?;
        convert::strip_empty_tx_key(&mut result);
        Ok(result)
    }

    pub async fn transaction_pool(&self) -> Result<Vec<TransactionSummary>> {
        let result: TransactionPoolResult = self
            .rpc
            .call_without_params("f_on_transactions_pool_json")
            .await?;
        Ok(result.transactions)
    }

    // ── POST endpoints ───────────────────────────────────────────────────

    /// Up to `block_count` detailed blocks after the first known hash or
    /// `timestamp`, whichever is higher.
    pub async fn blocks_detailed(
        &self,
        timestamp: u64,
        hashes: &[String],
        block_count: Option<u64>,
    ) -> Result<Value> {
        for hash in hashes {
            validate_hash(hash, "block hash")?;
        }
        self.http()
            .post(
                "queryblocksdetailed",
                Some(&BlocksDetailedRequest {
                    block_ids: hashes,
                    timestamp,
                    block_count: block_count.unwrap_or(DEFAULT_BLOCK_COUNT),
                }),
            )
            .await
    }

    pub async fn blocks_lite(&self, hashes: &[String], timestamp: u64) -> Result<BlocksLite> {
        validate_hashes(hashes, "block hashes")?;
        let resp: BlocksLiteResponse = self
            .http()
            .post(
                "queryblockslite",
                Some(&BlocksLiteRequest {
                    block_ids: hashes,
                    timestamp,
                }),
            )
            .await?;
        resp.try_into()
    }

    /// Random outputs for mixing; `mixin` defaults to 1.
    pub async fn random_outputs(
        &self,
        amounts: &[u64],
        mixin: Option<u64>,
    ) -> Result<RandomOutputs> {
        require_non_empty_list(amounts, "amounts")?;
        self.http()
            .post(
                "getrandom_outs",
                Some(&RandomOutsRequest {
                    amounts,
                    outs_count: mixin.unwrap_or(1),
                }),
            )
            .await
    }

    pub async fn global_indexes(&self, tx_hash: &str) -> Result<Vec<u64>> {
        validate_hash(tx_hash, "transaction hash")?;
        let resp: GlobalIndexesResponse = self
            .http()
            .post("get_o_indexes", Some(&GlobalIndexesRequest { txid: tx_hash }))
            .await?;
        convert::global_indexes(resp)
    }

    /// Mempool changes since `tail_hash`, as lite transactions.
    pub async fn pool_changes(&self, tail_hash: &str, known: &[String]) -> Result<PoolChanges> {
        validate_pool_request(tail_hash, known)?;
        let resp: PoolChangesLiteResponse = self
            .http()
            .post(
                "get_pool_changes_lite",
                Some(&PoolChangesRequest {
                    tail_block_id: tail_hash,
                    known_txs_ids: known,
                }),
            )
            .await?;
        resp.try_into()
    }

    /// Mempool changes since `tail_hash` with full transactions, unchanged.
    pub async fn pool_changes_full(&self, tail_hash: &str, known: &[String]) -> Result<Value> {
        validate_pool_request(tail_hash, known)?;
        let resp: Value = self
            .http()
            .post(
                "get_pool_changes",
                Some(&PoolChangesRequest {
                    tail_block_id: tail_hash,
                    known_txs_ids: known,
                }),
            )
            .await?;
        convert::check_value_status(&resp)?;
        Ok(resp)
    }

    /// Global indexes for every transaction in `[start, end]`.
    pub async fn global_indexes_for_range(
        &self,
        start_height: u64,
        end_height: u64,
    ) -> Result<Vec<TransactionIndexes>> {
        if end_height < start_height {
            return Err(Error::Validation(format!(
                "end height {} is below start height {}",
                end_height, start_height
            )));
        }
        let resp: IndexRangeResponse = self
            .http()
            .post(
                "get_global_indexes_for_range",
                Some(&IndexRangeRequest {
                    start_height,
                    end_height,
                }),
            )
            .await?;
        convert::index_ranges(resp)
    }

    pub async fn transactions_status(&self, hashes: &[String]) -> Result<TransactionsStatus> {
        validate_hashes(hashes, "transaction hashes")?;
        let resp: TransactionsStatusResponse = self
            .http()
            .post(
                "get_transactions_status",
                Some(&TransactionsStatusRequest {
                    transaction_hashes: hashes,
                }),
            )
            .await?;
        resp.try_into()
    }

    pub async fn wallet_sync_data(&self, request: &SyncRequest) -> Result<WalletSyncData> {
        validate_checkpoints(request)?;
        let resp: WalletSyncDataResponse = self
            .http()
            .post("getwalletsyncdata", Some(&sync_body(request, None)))
            .await?;
        resp.try_into()
    }

    /// Raw hex blocks and transactions; `block_count` defaults to
    /// [`DEFAULT_BLOCK_COUNT`].
    pub async fn raw_blocks(
        &self,
        request: &SyncRequest,
        block_count: Option<u64>,
    ) -> Result<RawBlocks> {
        validate_checkpoints(request)?;
        let body = sync_body(request, Some(block_count.unwrap_or(DEFAULT_BLOCK_COUNT)));
        let resp: RawBlocksResponse = self.http().post("getrawblocks", Some(&body)).await?;
        resp.try_into()
    }

    /// Relay a signed transaction. A rejection carries the daemon's reason.
    pub async fn send_raw_transaction(&self, tx_hex: &str) -> Result<()> {
        validate_hex_blob(tx_hex, "raw transaction")?;
        let resp: SendRawTransactionResponse = self
            .http()
            .post(
                "sendrawtransaction",
                Some(&SendRawTransactionRequest { tx_as_hex: tx_hex }),
            )
            .await?;
        convert::send_raw_transaction(resp)
    }

    pub async fn transactions(&self, hashes: &[String]) -> Result<Transactions> {
        validate_hashes(hashes, "transaction hashes")?;
        let resp: GetTransactionsResponse = self
            .http()
            .post(
                "gettransactions",
                Some(&GetTransactionsRequest { txs_hashes: hashes }),
            )
            .await?;
        resp.try_into()
    }

    // ── Explorer endpoints ───────────────────────────────────────────────

    pub async fn get_blocks(&self, block_ids: &[String]) -> Result<Value> {
        validate_hashes(block_ids, "block IDs")?;
        self.http()
            .post(
                "getblocks",
                Some(&BlockIdsRequest {
                    block_ids,
                    timestamp: None,
                }),
            )
            .await
    }

    pub async fn query_blocks(&self, block_ids: &[String], timestamp: u64) -> Result<Value> {
        validate_hashes(block_ids, "block IDs")?;
        self.http()
            .post(
                "queryblocks",
                Some(&BlockIdsRequest {
                    block_ids,
                    timestamp: Some(timestamp),
                }),
            )
            .await
    }

    pub async fn block_details_by_height(&self, height: u64) -> Result<Value> {
        self.http()
            .post(
                "get_block_details_by_height",
                Some(&BlockHeightRequest {
                    block_height: height,
                }),
            )
            .await
    }

    pub async fn blocks_details_by_heights(&self, heights: &[u64]) -> Result<Value> {
        require_non_empty_list(heights, "block heights")?;
        self.http()
            .post(
                "get_blocks_details_by_heights",
                Some(&BlockHeightsRequest {
                    block_heights: heights,
                }),
            )
            .await
    }

    pub async fn blocks_details_by_hashes(&self, hashes: &[String]) -> Result<Value> {
        validate_hashes(hashes, "block hashes")?;
        self.http()
            .post(
                "get_blocks_details_by_hashes",
                Some(&BlockHashesRequest {
                    block_hashes: hashes,
                }),
            )
            .await
    }

    /// Hashes of blocks mined within `seconds` of `timestamp_begin`.
    pub async fn blocks_hashes_by_timestamps(
        &self,
        timestamp_begin: u64,
        seconds: u64,
    ) -> Result<Value> {
        self.http()
            .post(
                "get_blocks_hashes_by_timestamps",
                Some(&TimestampRangeRequest {
                    timestamp_begin,
                    seconds_count: seconds,
                }),
            )
            .await
    }

    pub async fn transaction_details_by_hashes(&self, hashes: &[String]) -> Result<Value> {
        validate_hashes(hashes, "transaction hashes")?;
        self.http()
            .post(
                "get_transaction_details_by_hashes",
                Some(&TransactionsStatusRequest {
                    transaction_hashes: hashes,
                }),
            )
            .await
    }

    pub async fn transaction_hashes_by_payment_id(&self, payment_id: &str) -> Result<Value> {
        require_non_empty(payment_id, "payment ID")?;
        self.http()
            .post(
                "get_transaction_hashes_by_payment_id",
                Some(&PaymentIdRequest { payment_id }),
            )
            .await
    }

    // ── GET endpoints ────────────────────────────────────────────────────

    pub async fn height(&self) -> Result<Height> {
        self.http().get("height").await
    }

    pub async fn info(&self) -> Result<NodeInfo> {
        self.http().get("info").await
    }

    /// Donation fee configured by the node operator.
    pub async fn fee(&self) -> Result<NodeFee> {
        self.http().get("fee").await
    }

    pub async fn peers(&self) -> Result<Peers> {
        self.http().get("peers").await
    }
}

fn validate_pool_request(tail_hash: &str, known: &[String]) -> Result<()> {
    validate_hash(tail_hash, "tail block hash")?;
    for hash in known {
        validate_hash(hash, "known transaction hash")?;
    }
    Ok(())
}

fn validate_checkpoints(request: &SyncRequest) -> Result<()> {
    for hash in &request.block_hash_checkpoints {
        validate_hash(hash, "block hash checkpoint")?;
    }
    Ok(())
}

fn sync_body(request: &SyncRequest, block_count: Option<u64>) -> SyncDataRequest<'_> {
    SyncDataRequest {
        start_height: request.start_height,
        start_timestamp: request.start_timestamp,
        block_hash_checkpoints: &request.block_hash_checkpoints,
        skip_coinbase_transactions: request.skip_coinbase_transactions,
        block_count,
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct DaemonBuilder {
    config: ConnectionConfig,
}

impl Default for DaemonBuilder {
    fn default() -> Self {
        Self {
            config: ConnectionConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_DAEMON_PORT,
                timeout: DEFAULT_RPC_TIMEOUT,
                ..ConnectionConfig::default()
            },
        }
    }
}

impl DaemonBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    pub fn ssl(mut self, ssl: bool) -> Self {
        self.config.ssl = ssl;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn keep_alive(mut self, keep_alive: bool) -> Self {
        self.config.keep_alive = keep_alive;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Accept self-signed certificates when `ssl` is on.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.config.accept_invalid_certs = accept;
        self
    }

    pub fn build(self) -> Result<Daemon> {
        let transport = HttpTransport::new(&self.config)?;
        tracing::debug!(url = transport.base_url(), "Daemon client ready");
        Ok(Daemon {
            rpc: JsonRpc::new(transport),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let builder = DaemonBuilder::default();
        assert_eq!(builder.config.port, 11898);
        assert_eq!(builder.config.timeout, Duration::from_secs(2));
        assert!(builder.config.keep_alive);
        assert!(!builder.config.ssl);
    }

    #[test]
    fn test_sync_body_shape() {
        let request = SyncRequest::from_height(10).skip_coinbase_transactions(true);
        let body = serde_json::to_value(sync_body(&request, None)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "startHeight": 10,
                "startTimestamp": 0,
                "blockHashCheckpoints": [],
                "skipCoinbaseTransactions": true
            })
        );

        let body = serde_json::to_value(sync_body(&request, Some(100))).unwrap();
        assert_eq!(body["blockCount"], 100);
    }

    #[test]
    fn test_pool_request_validation() {
        let good = "7fb97df81221dd1366051b2d0bc7f49c66c22ac4431d879c895b06d66ef66f4c";
        assert!(validate_pool_request(good, &[]).is_ok());
        assert!(validate_pool_request("short", &[]).is_err());
        assert!(validate_pool_request(good, &["bad".to_string()]).is_err());
    }
}
