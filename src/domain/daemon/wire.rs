//! Wire types for daemon requests and responses.
//!
//! Field names follow the daemon exactly, including the dotted keys of the
//! lite block and pool-change payloads. Response `status` fields are
//! optional here so a missing key can be told apart from a non-OK one.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{BlockHeader, BlockShortHeader, TopBlock, TransactionSummary};

// ─── JSON-RPC results ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct BlockResult {
    pub block: Value,
}

#[derive(Debug, Deserialize)]
pub struct CountResult {
    pub count: u64,
}

#[derive(Debug, Deserialize)]
pub struct BlockHeaderResult {
    pub block_header: BlockHeader,
}

#[derive(Debug, Deserialize)]
pub struct BlocksListResult {
    pub blocks: Vec<BlockShortHeader>,
}

#[derive(Debug, Deserialize)]
pub struct CurrencyIdResult {
    pub currency_id_blob: String,
}

#[derive(Debug, Deserialize)]
pub struct StatusResult {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct TransactionPoolResult {
    pub transactions: Vec<TransactionSummary>,
}

#[derive(Debug, Serialize)]
pub struct HashParams<'a> {
    pub hash: &'a str,
}

#[derive(Debug, Serialize)]
pub struct HeightParams {
    pub height: u64,
}

#[derive(Debug, Serialize)]
pub struct BlockTemplateParams<'a> {
    pub reserve_size: u64,
    pub wallet_address: &'a str,
}

// ─── POST bodies ─────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlocksDetailedRequest<'a> {
    pub block_ids: &'a [String],
    pub timestamp: u64,
    pub block_count: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlocksLiteRequest<'a> {
    pub block_ids: &'a [String],
    pub timestamp: u64,
}

#[derive(Debug, Serialize)]
pub struct RandomOutsRequest<'a> {
    pub amounts: &'a [u64],
    pub outs_count: u64,
}

#[derive(Debug, Serialize)]
pub struct GlobalIndexesRequest<'a> {
    pub txid: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolChangesRequest<'a> {
    pub tail_block_id: &'a str,
    pub known_txs_ids: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexRangeRequest {
    pub start_height: u64,
    pub end_height: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsStatusRequest<'a> {
    pub transaction_hashes: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncDataRequest<'a> {
    pub start_height: u64,
    pub start_timestamp: u64,
    pub block_hash_checkpoints: &'a [String],
    pub skip_coinbase_transactions: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_count: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct SendRawTransactionRequest<'a> {
    pub tx_as_hex: &'a str,
}

#[derive(Debug, Serialize)]
pub struct GetTransactionsRequest<'a> {
    pub txs_hashes: &'a [String],
}

// ─── Explorer bodies ─────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct BlockIdsRequest<'a> {
    pub block_ids: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockHeightRequest {
    pub block_height: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockHeightsRequest<'a> {
    pub block_heights: &'a [u64],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockHashesRequest<'a> {
    pub block_hashes: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimestampRangeRequest {
    pub timestamp_begin: u64,
    pub seconds_count: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIdRequest<'a> {
    pub payment_id: &'a str,
}

// ─── POST responses ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TxPrefixInfo {
    #[serde(rename = "transactionPrefixInfo.txHash")]
    pub tx_hash: String,
    #[serde(rename = "transactionPrefixInfo.txPrefix")]
    pub tx_prefix: Value,
}

#[derive(Debug, Deserialize)]
pub struct BlockShortInfo {
    #[serde(rename = "blockShortInfo.block", with = "crate::shared::serde_util::byte_buffer")]
    pub block: Vec<u8>,
    #[serde(rename = "blockShortInfo.blockId")]
    pub block_id: String,
    #[serde(rename = "blockShortInfo.txPrefixes", default)]
    pub tx_prefixes: Vec<TxPrefixInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlocksLiteResponse {
    pub status: Option<String>,
    #[serde(default)]
    pub current_height: u64,
    #[serde(default)]
    pub full_offset: u64,
    #[serde(default)]
    pub start_height: u64,
    #[serde(default)]
    pub items: Vec<BlockShortInfo>,
}

#[derive(Debug, Deserialize)]
pub struct GlobalIndexesResponse {
    pub status: Option<String>,
    #[serde(default)]
    pub o_indexes: Vec<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolChangesLiteResponse {
    pub status: Option<String>,
    #[serde(default)]
    pub added_txs: Vec<TxPrefixInfo>,
    #[serde(default)]
    pub deleted_txs_ids: Vec<String>,
    #[serde(default)]
    pub is_tail_block_actual: bool,
}

#[derive(Debug, Deserialize)]
pub struct IndexRangeEntry {
    pub key: String,
    pub value: Vec<u64>,
}

#[derive(Debug, Deserialize)]
pub struct IndexRangeResponse {
    pub status: Option<String>,
    pub indexes: Option<Vec<IndexRangeEntry>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsStatusResponse {
    pub status: Option<String>,
    pub transactions_in_pool: Option<Vec<String>>,
    pub transactions_in_block: Option<Vec<String>>,
    pub transactions_unknown: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletSyncDataResponse {
    pub status: Option<String>,
    pub items: Option<Vec<Value>>,
    #[serde(default)]
    pub synced: bool,
    pub top_block: Option<TopBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBlocksResponse {
    pub status: Option<String>,
    #[serde(default)]
    pub items: Vec<super::RawBlock>,
    #[serde(default)]
    pub synced: bool,
    pub top_block: Option<TopBlock>,
}

#[derive(Debug, Deserialize)]
pub struct SendRawTransactionResponse {
    pub status: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GetTransactionsResponse {
    pub status: Option<String>,
    #[serde(flatten)]
    pub transactions: super::Transactions,
}
