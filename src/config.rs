//! Connection and default-parameter configuration.
//!
//! Everything here is resolved once when a client is built and never
//! mutated afterwards.

use std::time::Duration;

use rust_decimal::Decimal;

use crate::network::{
    DEFAULT_DAEMON_PORT, DEFAULT_DECIMAL_DIVISOR, DEFAULT_HOST, DEFAULT_RPC_TIMEOUT,
    DEFAULT_USER_AGENT,
};

// ─── ConnectionConfig ────────────────────────────────────────────────────────

/// Where and how a client talks to its remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,
    /// Use `https` instead of `http`.
    pub ssl: bool,
    pub timeout: Duration,
    /// Keep idle connections in the pool for reuse.
    pub keep_alive: bool,
    /// Sent as `X-API-KEY` when present.
    pub api_key: Option<String>,
    pub user_agent: String,
    /// Skip TLS certificate verification (self-signed daemons).
    pub accept_invalid_certs: bool,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_DAEMON_PORT,
            ssl: false,
            timeout: DEFAULT_RPC_TIMEOUT,
            keep_alive: true,
            api_key: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_invalid_certs: false,
        }
    }
}

impl ConnectionConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    pub fn protocol(&self) -> &'static str {
        if self.ssl {
            "https"
        } else {
            "http"
        }
    }

    /// `<protocol>://<host>:<port>`
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.protocol(), self.host, self.port)
    }
}

// ─── DaemonNode ──────────────────────────────────────────────────────────────

/// The daemon a wallet should sync against (used by WalletAPI open/create/import).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaemonNode {
    pub host: String,
    pub port: u16,
    pub ssl: bool,
}

impl Default for DaemonNode {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_DAEMON_PORT,
            ssl: false,
        }
    }
}

impl DaemonNode {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ssl: false,
        }
    }

    pub fn with_ssl(mut self, ssl: bool) -> Self {
        self.ssl = ssl;
        self
    }
}

// ─── WalletDefaults ──────────────────────────────────────────────────────────

/// Fallback values for optional wallet parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletDefaults {
    /// Decoy count; `None` lets the wallet pick.
    pub mixin: Option<u64>,
    /// Network fee in display units.
    pub fee: Decimal,
    pub unlock_time: u64,
    pub scan_height: u64,
    /// Atomic units per display unit.
    pub decimal_divisor: u64,
}

impl Default for WalletDefaults {
    fn default() -> Self {
        Self {
            mixin: None,
            fee: Decimal::new(1, 1),
            unlock_time: 0,
            scan_height: 0,
            decimal_divisor: DEFAULT_DECIMAL_DIVISOR,
        }
    }
}

// ─── ServiceDefaults ─────────────────────────────────────────────────────────

/// Fallback values specific to the legacy TurtleService RPC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDefaults {
    pub wallet: WalletDefaults,
    pub block_count: u64,
    pub first_block_index: u64,
    pub fusion_threshold: u64,
}

impl Default for ServiceDefaults {
    fn default() -> Self {
        Self {
            wallet: WalletDefaults::default(),
            block_count: 1,
            first_block_index: 1,
            fusion_threshold: 10_000_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_config_defaults() {
        let config = ConnectionConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 11898);
        assert!(config.keep_alive);
        assert!(config.api_key.is_none());
        assert!(config.user_agent.starts_with("turtlecoin-rpc/"));
        assert_eq!(config.base_url(), "http://127.0.0.1:11898");
    }

    #[test]
    fn test_base_url_uses_https_with_ssl() {
        let mut config = ConnectionConfig::new("node.example.org", 443);
        config.ssl = true;
        assert_eq!(config.base_url(), "https://node.example.org:443");
    }

    #[test]
    fn test_wallet_defaults() {
        let defaults = WalletDefaults::default();
        assert_eq!(defaults.fee.to_string(), "0.1");
        assert_eq!(defaults.decimal_divisor, 100);
        assert!(defaults.mixin.is_none());

        let service = ServiceDefaults::default();
        assert_eq!(service.fusion_threshold, 10_000_000);
        assert_eq!(service.first_block_index, 1);
    }
}
