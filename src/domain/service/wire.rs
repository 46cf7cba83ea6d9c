//! Wire types for TurtleService JSON-RPC params and results.

use serde::{Deserialize, Serialize};

use super::NewTransfer;

// ─── Params ──────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAddressParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_spend_key: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_spend_key: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegratedAddressParams<'a> {
    pub address: &'a str,
    pub payment_id: &'a str,
}

#[derive(Debug, Serialize)]
pub struct AddressParams<'a> {
    pub address: &'a str,
}

#[derive(Debug, Serialize)]
pub struct OptionalAddressParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct AddressesParams<'a> {
    pub addresses: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionHashParams<'a> {
    pub transaction_hash: &'a str,
}

#[derive(Debug, Serialize)]
pub struct EstimateFusionParams<'a> {
    pub threshold: u64,
    pub addresses: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockHashesParams {
    pub first_block_index: u64,
    pub block_count: u64,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQueryParams<'a> {
    pub addresses: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_block_index: Option<u64>,
    pub block_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_height: Option<u64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendFusionParams<'a> {
    pub threshold: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonymity: Option<u64>,
    pub addresses: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_address: Option<&'a str>,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTransactionParams<'a> {
    pub addresses: &'a [String],
    pub transfers: &'a [NewTransfer],
    pub fee: u64,
    pub unlock_time: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonymity: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<&'a str>,
    pub change_address: String,
}

// ─── Results ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AddressResult {
    pub address: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegratedAddressResult {
    pub integrated_address: String,
}

#[derive(Debug, Deserialize)]
pub struct AddressesResult {
    pub addresses: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResult {
    pub available_balance: u64,
    pub locked_amount: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockHashesResult {
    pub block_hashes: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionHashesResult {
    pub transaction_hashes: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct NodeFeeInfoResult {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub amount: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MnemonicSeedResult {
    pub mnemonic_seed: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewKeyResult {
    pub view_secret_key: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionHashResult {
    pub transaction_hash: String,
}

#[derive(Debug, Deserialize)]
pub struct TransactionResult {
    pub transaction: RawTransaction,
}

#[derive(Debug, Deserialize)]
pub struct ItemsResult<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTransfer {
    #[serde(default)]
    pub address: String,
    pub amount: i64,
    #[serde(rename = "type", default)]
    pub transfer_type: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    pub transaction_hash: String,
    #[serde(default)]
    pub block_index: u64,
    #[serde(default)]
    pub timestamp: u64,
    pub amount: i64,
    pub fee: u64,
    #[serde(default)]
    pub extra: String,
    #[serde(default)]
    pub is_base: bool,
    #[serde(default)]
    pub payment_id: String,
    #[serde(default)]
    pub state: u64,
    #[serde(default)]
    pub unlock_time: u64,
    #[serde(default)]
    pub transfers: Vec<RawTransfer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBlockTransactions {
    pub block_hash: String,
    #[serde(default)]
    pub transactions: Vec<RawTransaction>,
}
