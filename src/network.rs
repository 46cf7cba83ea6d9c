//! Default connection constants for the TurtleCoin services.

use std::time::Duration;

/// Default host for every service.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default TurtleCoind RPC port.
pub const DEFAULT_DAEMON_PORT: u16 = 11898;

/// Default TurtleService (legacy wallet RPC) port.
pub const DEFAULT_SERVICE_PORT: u16 = 8070;

/// Default WalletAPI port.
pub const DEFAULT_WALLET_API_PORT: u16 = 8070;

/// Default request timeout for the daemon and the legacy service.
pub const DEFAULT_RPC_TIMEOUT: Duration = Duration::from_millis(2_000);

/// Default request timeout for WalletAPI (wallet creation can be slow).
pub const DEFAULT_WALLET_API_TIMEOUT: Duration = Duration::from_millis(30_000);

/// `User-Agent` sent when none is configured.
pub const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Atomic units per display unit.
pub const DEFAULT_DECIMAL_DIVISOR: u64 = 100;

/// Fixed JSON-RPC endpoint shared by the daemon and the legacy service.
pub const JSON_RPC_ENDPOINT: &str = "json_rpc";
