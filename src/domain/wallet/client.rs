//! `WalletApi`: client for the WalletAPI REST service.
//!
//! Every request carries the `X-API-KEY` header. Non-2xx responses are
//! mapped by [`WalletApiErrorMapper`].

use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use serde_json::Value;

use super::convert;
use super::wire::*;
use super::{
    AddressBalance, CreatedAddress, Destination, SendAdvanced, SpendKeys, ValidatedAddress,
    WalletApiErrorMapper, WalletBalance, WalletNode, WalletStatus, WalletTransaction,
};
use crate::config::{ConnectionConfig, DaemonNode, WalletDefaults};
use crate::error::{Error, Result};
use crate::http::HttpTransport;
use crate::network::{DEFAULT_HOST, DEFAULT_WALLET_API_PORT, DEFAULT_WALLET_API_TIMEOUT};
use crate::shared::{path_segment, require_non_empty, validate_hash, AmountConverter};

/// Client for one WalletAPI instance.
#[derive(Debug, Clone)]
pub struct WalletApi {
    http: HttpTransport,
    defaults: WalletDefaults,
    amounts: AmountConverter,
}

impl WalletApi {
    pub fn builder() -> WalletApiBuilder {
        WalletApiBuilder::default()
    }

    pub fn defaults(&self) -> &WalletDefaults {
        &self.defaults
    }

    // ── Amounts ──────────────────────────────────────────────────────────

    pub fn to_atomic_units(&self, amount: Decimal) -> Result<u64> {
        Ok(self.amounts.to_atomic(amount)?)
    }

    pub fn from_atomic_units(&self, amount: i64) -> Decimal {
        self.amounts.from_atomic(amount)
    }

    /// Destination for [`send_advanced`](Self::send_advanced).
    pub fn new_destination(&self, address: &str, amount: Decimal) -> Result<Destination> {
        require_non_empty(address, "wallet address")?;
        Ok(Destination {
            address: address.to_string(),
            amount: self.to_atomic_units(amount)?,
        })
    }

    // ── Wallet file ──────────────────────────────────────────────────────

    pub async fn open(
        &self,
        filename: &str,
        password: &str,
        node: Option<&DaemonNode>,
    ) -> Result<()> {
        let node = node.cloned().unwrap_or_default();
        let body = wallet_file_body(filename, password, &node)?;
        self.post_unit("/wallet/open", &body).await
    }

    pub async fn create(
        &self,
        filename: &str,
        password: &str,
        node: Option<&DaemonNode>,
    ) -> Result<()> {
        let node = node.cloned().unwrap_or_default();
        let body = wallet_file_body(filename, password, &node)?;
        self.post_unit("/wallet/create", &body).await
    }

    pub async fn import_key(
        &self,
        filename: &str,
        password: &str,
        private_view_key: &str,
        private_spend_key: &str,
        scan_height: Option<u64>,
        node: Option<&DaemonNode>,
    ) -> Result<()> {
        require_non_empty(private_view_key, "private view key")?;
        require_non_empty(private_spend_key, "private spend key")?;
        let node = node.cloned().unwrap_or_default();
        let body = WalletFileRequest {
            scan_height: Some(scan_height.unwrap_or(self.defaults.scan_height)),
            private_view_key: Some(private_view_key),
            private_spend_key: Some(private_spend_key),
            ..wallet_file_body(filename, password, &node)?
        };
        self.post_unit("/wallet/import/key", &body).await
    }

    pub async fn import_seed(
        &self,
        filename: &str,
        password: &str,
        mnemonic_seed: &str,
        scan_height: Option<u64>,
        node: Option<&DaemonNode>,
    ) -> Result<()> {
        require_non_empty(mnemonic_seed, "mnemonic seed phrase")?;
        let node = node.cloned().unwrap_or_default();
        let body = WalletFileRequest {
            scan_height: Some(scan_height.unwrap_or(self.defaults.scan_height)),
            mnemonic_seed: Some(mnemonic_seed),
            ..wallet_file_body(filename, password, &node)?
        };
        self.post_unit("/wallet/import/seed", &body).await
    }

    /// Import a view-only wallet.
    pub async fn import_view_only(
        &self,
        filename: &str,
        password: &str,
        private_view_key: &str,
        address: &str,
        scan_height: Option<u64>,
        node: Option<&DaemonNode>,
    ) -> Result<()> {
        require_non_empty(private_view_key, "private view key")?;
        require_non_empty(address, "wallet address")?;
        let node = node.cloned().unwrap_or_default();
        let body = WalletFileRequest {
            scan_height: Some(scan_height.unwrap_or(self.defaults.scan_height)),
            private_view_key: Some(private_view_key),
            address: Some(address),
            ..wallet_file_body(filename, password, &node)?
        };
        self.post_unit("/wallet/import/view", &body).await
    }

    pub async fn close(&self) -> Result<()> {
        self.http.delete("/wallet").await
    }

    pub async fn save(&self) -> Result<()> {
        self.put_unit("/save", None::<&()>).await
    }

    /// Rescan from `scan_height` (default: the configured scan height).
    pub async fn reset(&self, scan_height: Option<u64>) -> Result<()> {
        let body = ResetRequest {
            scan_height: scan_height.unwrap_or(self.defaults.scan_height),
        };
        self.put_unit("/reset", Some(&body)).await
    }

    // ── Node ─────────────────────────────────────────────────────────────

    pub async fn node(&self) -> Result<WalletNode> {
        self.http.get("/node").await
    }

    /// Switch daemons. At least one of `host` and `port` is required.
    pub async fn set_node(&self, host: Option<&str>, port: Option<u16>, ssl: bool) -> Result<()> {
        let host = host.filter(|h| !h.is_empty());
        let port = port.filter(|p| *p != 0);
        if host.is_none() && port.is_none() {
            return Err(Error::Validation(
                "Must specify a minimum a host or port parameter".to_string(),
            ));
        }
        let body = SetNodeRequest {
            daemon_host: host,
            daemon_port: port,
            daemon_ssl: ssl,
        };
        self.put_unit("/node", Some(&body)).await
    }

    pub async fn status(&self) -> Result<WalletStatus> {
        self.http.get("/status").await
    }

    // ── Addresses ────────────────────────────────────────────────────────

    pub async fn addresses(&self) -> Result<Vec<String>> {
        let resp: AddressesResponse = self.http.get("/addresses").await?;
        Ok(resp.addresses)
    }

    pub async fn primary_address(&self) -> Result<String> {
        let resp: AddressResponse = self.http.get("/addresses/primary").await?;
        Ok(resp.address)
    }

    pub async fn create_address(&self) -> Result<CreatedAddress> {
        self.http.post("/addresses/create", None::<&()>).await
    }

    pub async fn create_integrated_address(
        &self,
        address: &str,
        payment_id: &str,
    ) -> Result<String> {
        require_non_empty(address, "wallet address")?;
        require_non_empty(payment_id, "payment ID")?;
        let path = format!(
            "/addresses/{}/{}",
            path_segment(address),
            path_segment(payment_id)
        );
        let resp: IntegratedAddressResponse = self.http.get(&path).await?;
        Ok(resp.integrated_address)
    }

    pub async fn delete_address(&self, address: &str) -> Result<()> {
        require_non_empty(address, "wallet address")?;
        self.http
            .delete(&format!("/addresses/{}", path_segment(address)))
            .await
    }

    /// Import a subwallet from its private spend key; returns its address.
    pub async fn import_address(
        &self,
        private_spend_key: &str,
        scan_height: Option<u64>,
    ) -> Result<String> {
        require_non_empty(private_spend_key, "private spend key")?;
        let body = ImportAddressRequest {
            private_spend_key,
            scan_height: scan_height.unwrap_or(self.defaults.scan_height),
        };
        let resp: AddressResponse = self.http.post("/addresses/import", Some(&body)).await?;
        Ok(resp.address)
    }

    /// Import a view-only subwallet from its public spend key; returns its address.
    pub async fn import_view_address(
        &self,
        public_spend_key: &str,
        scan_height: Option<u64>,
    ) -> Result<String> {
        require_non_empty(public_spend_key, "public spend key")?;
        let body = ImportViewAddressRequest {
            public_spend_key,
            scan_height: scan_height.unwrap_or(self.defaults.scan_height),
        };
        let resp: AddressResponse = self
            .http
            .post("/addresses/import/view", Some(&body))
            .await?;
        Ok(resp.address)
    }

    pub async fn validate_address(&self, address: &str) -> Result<ValidatedAddress> {
        require_non_empty(address, "wallet address")?;
        self.http
            .post("/addresses/validate", Some(&ValidateAddressRequest { address }))
            .await
    }

    // ── Balances ─────────────────────────────────────────────────────────

    /// Balance of one address, or of the whole wallet when `None`.
    pub async fn balance(&self, address: Option<&str>) -> Result<WalletBalance> {
        let path = match address.filter(|a| !a.is_empty()) {
            Some(address) => format!("/balance/{}", path_segment(address)),
            None => "/balance".to_string(),
        };
        let resp: BalanceResponse = self.http.get(&path).await?;
        Ok(convert::balance(resp, &self.amounts))
    }

    pub async fn balances(&self) -> Result<Vec<AddressBalance>> {
        let resp: Vec<AddressBalanceResponse> = self.http.get("/balances").await?;
        Ok(convert::balances(resp, &self.amounts))
    }

    // ── Keys ─────────────────────────────────────────────────────────────

    /// The wallet's shared private view key.
    pub async fn keys(&self) -> Result<String> {
        let resp: PrivateViewKeyResponse = self.http.get("/keys").await?;
        Ok(resp.private_view_key)
    }

    pub async fn spend_keys(&self, address: &str) -> Result<SpendKeys> {
        require_non_empty(address, "wallet address")?;
        self.http
            .get(&format!("/keys/{}", path_segment(address)))
            .await
    }

    pub async fn mnemonic(&self, address: &str) -> Result<String> {
        require_non_empty(address, "wallet address")?;
        let resp: MnemonicResponse = self
            .http
            .get(&format!("/keys/mnemonic/{}", path_segment(address)))
            .await?;
        Ok(resp.mnemonic_seed)
    }

    // ── Sending ──────────────────────────────────────────────────────────

    /// Send `amount` (display units) to `address`; returns the transaction hash.
    pub async fn send_basic(
        &self,
        address: &str,
        amount: Decimal,
        payment_id: Option<&str>,
    ) -> Result<String> {
        require_non_empty(address, "wallet address")?;
        let body = SendBasicRequest {
            destination: address,
            amount: self.to_atomic_units(amount)?,
            payment_id: payment_id.filter(|p| !p.is_empty()),
        };
        let resp: TransactionHashResponse = self
            .http
            .post("/transactions/send/basic", Some(&body))
            .await?;
        Ok(resp.transaction_hash)
    }

    pub async fn send_advanced(&self, request: &SendAdvanced) -> Result<String> {
        let body = convert::send_advanced_body(request, &self.defaults, &self.amounts)?;
        let resp: TransactionHashResponse = self
            .http
            .post("/transactions/send/advanced", Some(&body))
            .await?;
        Ok(resp.transaction_hash)
    }

    pub async fn send_fusion_basic(&self) -> Result<String> {
        let resp: TransactionHashResponse = self
            .http
            .post("/transactions/send/fusion/basic", None::<&()>)
            .await?;
        Ok(resp.transaction_hash)
    }

    pub async fn send_fusion_advanced(
        &self,
        address: &str,
        mixin: Option<u64>,
        source_addresses: &[String],
    ) -> Result<String> {
        require_non_empty(address, "wallet address")?;
        let body = FusionAdvancedRequest {
            destination: address,
            mixin: mixin.or(self.defaults.mixin),
            source_addresses,
        };
        let resp: TransactionHashResponse = self
            .http
            .post("/transactions/send/fusion/advanced", Some(&body))
            .await?;
        Ok(resp.transaction_hash)
    }

    // ── Transactions ─────────────────────────────────────────────────────

    pub async fn transaction_by_hash(&self, hash: &str) -> Result<WalletTransaction> {
        validate_hash(hash, "transaction hash")?;
        let resp: TransactionEnvelope = self
            .http
            .get(&format!("/transactions/hash/{}", hash))
            .await?;
        Ok(convert::transaction(resp.transaction, &self.amounts))
    }

    pub async fn transaction_private_key(&self, hash: &str) -> Result<String> {
        validate_hash(hash, "transaction hash")?;
        let resp: TransactionPrivateKeyResponse = self
            .http
            .get(&format!("/transactions/privatekey/{}", hash))
            .await?;
        Ok(resp.transaction_private_key)
    }

    pub async fn transactions(
        &self,
        start_height: Option<u64>,
        end_height: Option<u64>,
    ) -> Result<Vec<WalletTransaction>> {
        let path = convert::transactions_path(start_height, end_height)?;
        self.get_transactions(&path).await
    }

    pub async fn transactions_by_address(
        &self,
        address: &str,
        start_height: u64,
        end_height: Option<u64>,
    ) -> Result<Vec<WalletTransaction>> {
        let path = convert::transactions_by_address_path(address, start_height, end_height)?;
        self.get_transactions(&path).await
    }

    pub async fn unconfirmed_transactions(
        &self,
        address: Option<&str>,
    ) -> Result<Vec<WalletTransaction>> {
        let path = match address.filter(|a| !a.is_empty()) {
            Some(address) => format!("/transactions/unconfirmed/{}", path_segment(address)),
            None => "/transactions/unconfirmed".to_string(),
        };
        self.get_transactions(&path).await
    }

    // ── Internals ────────────────────────────────────────────────────────

    async fn get_transactions(&self, path: &str) -> Result<Vec<WalletTransaction>> {
        let resp: TransactionsEnvelope = self.http.get(path).await?;
        Ok(convert::transactions(resp.transactions, &self.amounts))
    }

    async fn post_unit<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let _: Value = self.http.post(path, Some(body)).await?;
        Ok(())
    }

    async fn put_unit<B: serde::Serialize>(&self, path: &str, body: Option<&B>) -> Result<()> {
        let _: Value = self.http.put(path, body).await?;
        Ok(())
    }
}

fn wallet_file_body<'a>(
    filename: &'a str,
    password: &'a str,
    node: &'a DaemonNode,
) -> Result<WalletFileRequest<'a>> {
    require_non_empty(filename, "wallet filename")?;
    require_non_empty(password, "wallet password")?;
    Ok(WalletFileRequest {
        daemon_host: &node.host,
        daemon_port: node.port,
        daemon_ssl: node.ssl,
        filename,
        password,
        ..Default::default()
    })
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct WalletApiBuilder {
    config: ConnectionConfig,
    defaults: WalletDefaults,
}

impl Default for WalletApiBuilder {
    fn default() -> Self {
        Self {
            config: ConnectionConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_WALLET_API_PORT,
                timeout: DEFAULT_WALLET_API_TIMEOUT,
                ..ConnectionConfig::default()
            },
            defaults: WalletDefaults::default(),
        }
    }
}

impl WalletApiBuilder {
    /// Required: the `--rpc-password` WalletAPI was started with.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

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

    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.config.accept_invalid_certs = accept;
        self
    }

    pub fn defaults(mut self, defaults: WalletDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn default_mixin(mut self, mixin: u64) -> Self {
        self.defaults.mixin = Some(mixin);
        self
    }

    pub fn default_fee(mut self, fee: Decimal) -> Self {
        self.defaults.fee = fee;
        self
    }

    pub fn default_unlock_time(mut self, unlock_time: u64) -> Self {
        self.defaults.unlock_time = unlock_time;
        self
    }

    pub fn decimal_divisor(mut self, divisor: u64) -> Self {
        self.defaults.decimal_divisor = divisor;
        self
    }

    pub fn build(self) -> Result<WalletApi> {
        if self
            .config
            .api_key
            .as_deref()
            .map_or(true, |k| k.trim().is_empty())
        {
            return Err(Error::Validation("Must supply an API key".to_string()));
        }
        let amounts = AmountConverter::new(self.defaults.decimal_divisor)?;
        let transport =
            HttpTransport::with_error_mapper(&self.config, Some(Arc::new(WalletApiErrorMapper)))?;
        tracing::debug!(url = transport.base_url(), "WalletAPI client ready");
        Ok(WalletApi {
            http: transport,
            defaults: self.defaults,
            amounts,
        })
    }
}
