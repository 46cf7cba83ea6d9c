//! TurtleCoind daemon domain: block, transaction and node-status types.
//!
//! Types that need no reshaping deserialize straight from the daemon's
//! snake_case payloads. The reshaped ones (`BlockLite`, `PoolChanges`,
//! `TransactionIndexes`, `TransactionsStatus`) are built in `convert.rs` from
//! the raw structs in `wire.rs`.

pub mod client;
pub mod convert;
pub mod wire;

pub use client::{Daemon, DaemonBuilder};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ─── Blocks ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockHeader {
    pub block_size: u64,
    pub depth: u64,
    pub difficulty: u64,
    pub hash: String,
    pub height: u64,
    pub major_version: u8,
    pub minor_version: u8,
    pub nonce: u64,
    pub num_txes: u64,
    pub orphan_status: bool,
    pub prev_hash: String,
    pub reward: u64,
    pub timestamp: u64,
}

/// Entry of `f_blocks_list_json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockShortHeader {
    pub cumul_size: u64,
    pub difficulty: u64,
    pub hash: String,
    pub height: u64,
    pub timestamp: u64,
    pub tx_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockTemplate {
    pub blocktemplate_blob: String,
    pub difficulty: u64,
    pub height: u64,
    pub reserved_offset: u64,
    pub status: String,
}

/// A block as returned by `queryblockslite`, with the raw block hex encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockLite {
    /// Hex-encoded block blob.
    pub block: String,
    pub hash: String,
    pub transactions: Vec<BlockLiteTransaction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockLiteTransaction {
    pub hash: String,
    pub prefix: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlocksLite {
    pub current_height: u64,
    pub full_offset: u64,
    pub start_height: u64,
    pub items: Vec<BlockLite>,
}

/// Chain tip reported alongside sync data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopBlock {
    pub hash: String,
    pub height: u64,
}

// ─── Sync ────────────────────────────────────────────────────────────────────

/// Parameters shared by `getwalletsyncdata` and `getrawblocks`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncRequest {
    pub start_height: u64,
    pub start_timestamp: u64,
    /// Highest heights first.
    pub block_hash_checkpoints: Vec<String>,
    pub skip_coinbase_transactions: bool,
}

impl SyncRequest {
    pub fn from_height(start_height: u64) -> Self {
        Self {
            start_height,
            ..Default::default()
        }
    }

    pub fn from_timestamp(start_timestamp: u64) -> Self {
        Self {
            start_timestamp,
            ..Default::default()
        }
    }

    pub fn checkpoints(mut self, hashes: Vec<String>) -> Self {
        self.block_hash_checkpoints = hashes;
        self
    }

    pub fn skip_coinbase_transactions(mut self, skip: bool) -> Self {
        self.skip_coinbase_transactions = skip;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletSyncData {
    /// Wallet-relevant block data, passed through unchanged.
    pub items: Vec<Value>,
    pub synced: bool,
    pub top_block: Option<TopBlock>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBlock {
    pub block: String,
    #[serde(default)]
    pub transactions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBlocks {
    pub items: Vec<RawBlock>,
    pub synced: bool,
    pub top_block: Option<TopBlock>,
}

// ─── Transactions ────────────────────────────────────────────────────────────

/// Mempool entry of `f_on_transactions_pool_json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionSummary {
    pub amount_out: u64,
    pub fee: u64,
    pub hash: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolChanges {
    pub added_txs: Vec<BlockLiteTransaction>,
    pub deleted_txs_ids: Vec<String>,
    /// Whether the supplied tail block is still the chain tip.
    pub synced: bool,
}

/// Global output indexes of one transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionIndexes {
    pub hash: String,
    pub indexes: Vec<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionsStatus {
    pub in_pool: Vec<String>,
    pub in_block: Vec<String>,
    pub unknown: Vec<String>,
}

/// Result of `gettransactions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transactions {
    pub txs_as_hex: Vec<String>,
    pub missed_tx: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RandomOutput {
    pub global_amount_index: u64,
    pub out_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RandomOutputsForAmount {
    pub amount: u64,
    #[serde(default)]
    pub outs: Vec<RandomOutput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomOutputs {
    pub outs: Vec<RandomOutputsForAmount>,
    pub status: String,
}

// ─── Node ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Height {
    pub height: u64,
    pub network_height: u64,
    pub status: String,
}

/// Node operator donation fee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeFee {
    pub address: String,
    pub amount: u64,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Peers {
    pub peers: Vec<String>,
    pub gray_peers: Vec<String>,
    pub status: String,
}

/// `/info`. Fields the daemon adds in newer versions land in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeInfo {
    pub alt_blocks_count: u64,
    pub difficulty: u64,
    pub grey_peerlist_size: u64,
    pub hashrate: u64,
    pub height: u64,
    pub incoming_connections_count: u64,
    pub last_known_block_index: u64,
    pub major_version: u8,
    pub minor_version: u8,
    pub network_height: u64,
    pub outgoing_connections_count: u64,
    pub start_time: u64,
    pub status: String,
    pub supported_height: u64,
    pub synced: bool,
    pub testnet: bool,
    pub tx_count: u64,
    pub tx_pool_size: u64,
    pub upgrade_heights: Vec<u64>,
    pub version: String,
    pub white_peerlist_size: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
