//! Wire types for WalletAPI request bodies and responses.

use serde::{Deserialize, Serialize};

use super::Destination;

// ─── Request bodies ──────────────────────────────────────────────────────────

fn no_addresses(addresses: &&[String]) -> bool {
    addresses.is_empty()
}

/// Body shared by `/wallet/open`, `/wallet/create` and the `/wallet/import/*`
/// endpoints. Import-only fields are omitted when unset.
#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletFileRequest<'a> {
    pub daemon_host: &'a str,
    pub daemon_port: u16,
    #[serde(rename = "daemonSSL")]
    pub daemon_ssl: bool,
    pub filename: &'a str,
    pub password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_height: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_view_key: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_spend_key: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mnemonic_seed: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportAddressRequest<'a> {
    pub private_spend_key: &'a str,
    pub scan_height: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportViewAddressRequest<'a> {
    pub public_spend_key: &'a str,
    pub scan_height: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetRequest {
    pub scan_height: u64,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendAdvancedRequest<'a> {
    pub destinations: &'a [Destination],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mixin: Option<u64>,
    pub fee: u64,
    #[serde(skip_serializing_if = "no_addresses")]
    pub source_addresses: &'a [String],
    #[serde(rename = "paymentID", skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_address: Option<&'a str>,
    pub unlock_time: u64,
}

#[derive(Debug, Serialize)]
pub struct SendBasicRequest<'a> {
    pub destination: &'a str,
    pub amount: u64,
    #[serde(rename = "paymentID", skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FusionAdvancedRequest<'a> {
    pub destination: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mixin: Option<u64>,
    #[serde(skip_serializing_if = "no_addresses")]
    pub source_addresses: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetNodeRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daemon_host: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daemon_port: Option<u16>,
    #[serde(rename = "daemonSSL")]
    pub daemon_ssl: bool,
}

#[derive(Debug, Serialize)]
pub struct ValidateAddressRequest<'a> {
    pub address: &'a str,
}

// ─── Responses ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AddressesResponse {
    pub addresses: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddressResponse {
    pub address: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegratedAddressResponse {
    pub integrated_address: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateViewKeyResponse {
    pub private_view_key: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MnemonicResponse {
    pub mnemonic_seed: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionHashResponse {
    pub transaction_hash: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPrivateKeyResponse {
    pub transaction_private_key: String,
}

#[derive(Debug, Deserialize)]
pub struct BalanceResponse {
    pub unlocked: u64,
    pub locked: u64,
}

#[derive(Debug, Deserialize)]
pub struct AddressBalanceResponse {
    pub address: String,
    pub unlocked: u64,
    pub locked: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransferResponse {
    pub address: String,
    pub amount: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub hash: String,
    #[serde(default)]
    pub block_height: u64,
    #[serde(default)]
    pub timestamp: u64,
    pub fee: u64,
    #[serde(rename = "paymentID", default)]
    pub payment_id: String,
    #[serde(default)]
    pub unlock_time: u64,
    #[serde(default)]
    pub is_coinbase_transaction: bool,
    #[serde(default)]
    pub transfers: Vec<TransferResponse>,
}

#[derive(Debug, Deserialize)]
pub struct TransactionEnvelope {
    pub transaction: TransactionResponse,
}

#[derive(Debug, Deserialize)]
pub struct TransactionsEnvelope {
    pub transactions: Vec<TransactionResponse>,
}
