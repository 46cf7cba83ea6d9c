//! Legacy TurtleService wallet domain (JSON-RPC).
//!
//! Amounts in returned types are display units; amounts in request types
//! are converted to atomic units before sending.

pub mod client;
pub mod convert;
pub mod wire;

pub use client::{WalletService, WalletServiceBuilder};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── Requests ────────────────────────────────────────────────────────────────

/// A single destination, already in atomic units. Build with
/// [`WalletService::new_transfer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransfer {
    pub address: String,
    pub amount: u64,
}

/// Parameters for `sendTransaction` and `createDelayedTransaction`.
///
/// Unset optionals fall back to the client's [`ServiceDefaults`](crate::config::ServiceDefaults).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendTransaction {
    pub transfers: Vec<NewTransfer>,
    /// Source addresses; empty means any.
    pub addresses: Vec<String>,
    /// Display units.
    pub fee: Option<Decimal>,
    pub unlock_time: Option<u64>,
    pub mixin: Option<u64>,
    pub extra: Option<String>,
    pub payment_id: Option<String>,
    /// Defaults to the wallet's first address.
    pub change_address: Option<String>,
}

impl SendTransaction {
    pub fn new(transfers: Vec<NewTransfer>) -> Self {
        Self {
            transfers,
            ..Default::default()
        }
    }

    pub fn fee(mut self, fee: Decimal) -> Self {
        self.fee = Some(fee);
        self
    }

    pub fn mixin(mut self, mixin: u64) -> Self {
        self.mixin = Some(mixin);
        self
    }

    pub fn payment_id(mut self, payment_id: impl Into<String>) -> Self {
        self.payment_id = Some(payment_id.into());
        self
    }

    pub fn change_address(mut self, address: impl Into<String>) -> Self {
        self.change_address = Some(address.into());
        self
    }
}

/// Block range and filters for `getTransactions` / `getTransactionHashes`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionQuery {
    pub addresses: Vec<String>,
    /// Takes precedence over `first_block_index` when set.
    pub block_hash: Option<String>,
    pub first_block_index: Option<u64>,
    pub block_count: Option<u64>,
    pub payment_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FusionRequest {
    pub threshold: Option<u64>,
    pub mixin: Option<u64>,
    pub addresses: Vec<String>,
    pub destination_address: Option<String>,
}

// ─── Responses ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub available_balance: Decimal,
    pub locked_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeFeeInfo {
    pub address: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendKeys {
    pub spend_secret_key: String,
    pub spend_public_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceStatus {
    pub block_count: u64,
    pub known_block_count: u64,
    pub last_block_hash: String,
    pub peer_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FusionEstimate {
    pub fusion_ready_count: u64,
    pub total_output_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionHashesInBlock {
    pub block_hash: String,
    pub transaction_hashes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionTransfer {
    pub address: String,
    /// Negative for outgoing transfers.
    pub amount: Decimal,
    pub transfer_type: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTransaction {
    pub transaction_hash: String,
    pub block_index: u64,
    pub timestamp: u64,
    pub amount: Decimal,
    pub fee: Decimal,
    pub extra: String,
    pub is_base: bool,
    pub payment_id: String,
    pub state: u64,
    pub unlock_time: u64,
    pub transfers: Vec<TransactionTransfer>,
}

/// One transfer of one transaction, flattened with its block and
/// transaction details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferEntry {
    pub block_hash: String,
    pub block_index: u64,
    pub transaction_hash: String,
    pub transaction_amount: Decimal,
    pub fee: Decimal,
    pub extra: String,
    pub is_base: bool,
    pub payment_id: String,
    pub state: u64,
    pub timestamp: u64,
    pub unlock_time: u64,
    pub address: String,
    pub amount: Decimal,
    pub transfer_type: i64,
    /// The transfer credits `address`.
    pub inbound: bool,
}
