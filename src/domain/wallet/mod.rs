//! WalletAPI domain: REST wallet types.
//!
//! Balances, fees and transfer amounts are display units here; the client
//! converts to and from atomic units at the boundary.

pub mod client;
pub mod convert;
pub mod error_mapper;
pub mod wire;

pub use client::{WalletApi, WalletApiBuilder};
pub use error_mapper::WalletApiErrorMapper;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── Requests ────────────────────────────────────────────────────────────────

/// A payment destination in atomic units. Build with
/// [`WalletApi::new_destination`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub address: String,
    pub amount: u64,
}

/// Parameters for `/transactions/send/advanced`. Unset optionals fall back
/// to the client's [`WalletDefaults`](crate::config::WalletDefaults) or are
/// omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendAdvanced {
    pub destinations: Vec<Destination>,
    pub mixin: Option<u64>,
    /// Display units.
    pub fee: Option<Decimal>,
    pub source_addresses: Vec<String>,
    pub payment_id: Option<String>,
    pub change_address: Option<String>,
    pub unlock_time: Option<u64>,
}

impl SendAdvanced {
    pub fn new(destinations: Vec<Destination>) -> Self {
        Self {
            destinations,
            ..Default::default()
        }
    }

    pub fn mixin(mut self, mixin: u64) -> Self {
        self.mixin = Some(mixin);
        self
    }

    pub fn fee(mut self, fee: Decimal) -> Self {
        self.fee = Some(fee);
        self
    }

    pub fn source_addresses(mut self, addresses: Vec<String>) -> Self {
        self.source_addresses = addresses;
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

    pub fn unlock_time(mut self, unlock_time: u64) -> Self {
        self.unlock_time = Some(unlock_time);
        self
    }
}

// ─── Responses ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletBalance {
    pub unlocked: Decimal,
    pub locked: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBalance {
    pub address: String,
    pub unlocked: Decimal,
    pub locked: Decimal,
}

/// A freshly created subwallet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatedAddress {
    pub address: String,
    pub private_spend_key: String,
    pub public_spend_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpendKeys {
    pub private_spend_key: String,
    pub public_spend_key: String,
}

/// The daemon the open wallet syncs from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalletNode {
    pub daemon_host: String,
    pub daemon_port: u16,
    #[serde(rename = "daemonSSL")]
    pub daemon_ssl: bool,
    pub node_address: String,
    /// Atomic units.
    pub node_fee: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalletStatus {
    pub wallet_block_count: u64,
    pub local_daemon_block_count: u64,
    pub network_block_count: u64,
    pub peer_count: u64,
    pub hashrate: u64,
    pub is_view_wallet: bool,
    pub subwallet_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidatedAddress {
    pub actual_address: String,
    pub address_type: String,
    pub is_integrated: bool,
    #[serde(rename = "paymentID")]
    pub payment_id: String,
    pub public_spend_key: String,
    pub public_view_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletTransfer {
    pub address: String,
    /// Negative for outgoing transfers.
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletTransaction {
    pub hash: String,
    pub block_height: u64,
    pub timestamp: u64,
    pub fee: Decimal,
    pub payment_id: String,
    pub unlock_time: u64,
    pub is_coinbase_transaction: bool,
    pub transfers: Vec<WalletTransfer>,
}
