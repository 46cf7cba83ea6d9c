//! # turtlecoin-rpc
//!
//! Async Rust clients for the three TurtleCoin RPC surfaces.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Constants, configuration, errors, amount conversion
//! 2. **Transport**: `HttpTransport` (REST verbs) and `JsonRpc` (envelope codec)
//! 3. **Clients**: `Daemon` (TurtleCoind), `WalletService` (TurtleService)
//!    and `WalletApi` (WalletAPI), each built from a builder
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use turtlecoin_rpc::prelude::*;
//!
//! let daemon = Daemon::builder().host("127.0.0.1").port(11898).build()?;
//! let height = daemon.height().await?;
//!
//! let wallet = WalletApi::builder().api_key("password").build()?;
//! wallet.open("mywallet.wallet", "hunter2", None).await?;
//! let balance = wallet.balance(None).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Amount conversion, validation and serde helpers.
pub mod shared;

/// Connection settings and per-client parameter defaults.
pub mod config;

/// Unified error types.
pub mod error;

/// Default ports, timeouts and endpoint constants.
pub mod network;

// ── Layer 2: Transport ───────────────────────────────────────────────────────

/// HTTP transport and JSON-RPC envelope handling.
pub mod http;

// ── Layer 3: Clients ─────────────────────────────────────────────────────────

/// Domain modules (vertical slices): types, wire types, conversions, clients.
pub mod domain;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Configuration
    pub use crate::config::{ConnectionConfig, DaemonNode, ServiceDefaults, WalletDefaults};

    // Errors
    pub use crate::error::{Error, HttpError, Result, WalletApiError};

    // Amounts
    pub use crate::shared::{AmountConverter, AmountError};

    // Transport
    pub use crate::http::{ErrorDetail, ErrorMapper, HttpTransport, JsonRpc};

    // Daemon
    pub use crate::domain::daemon::{
        BlockHeader, BlockLite, BlockShortHeader, BlockTemplate, BlocksLite, Daemon,
        DaemonBuilder, Height, NodeFee, NodeInfo, Peers, PoolChanges, RandomOutputs, RawBlocks,
        SyncRequest, Transactions, TransactionsStatus, WalletSyncData,
    };

    // Legacy wallet service
    pub use crate::domain::service::{
        Balance, FusionRequest, NewTransfer, SendTransaction, ServiceStatus, ServiceTransaction,
        TransactionQuery, TransferEntry, WalletService, WalletServiceBuilder,
    };

    // WalletAPI
    pub use crate::domain::wallet::{
        AddressBalance, CreatedAddress, Destination, SendAdvanced, ValidatedAddress, WalletApi,
        WalletApiBuilder, WalletApiErrorMapper, WalletBalance, WalletNode, WalletStatus,
        WalletTransaction,
    };

    pub use rust_decimal::Decimal;
}
