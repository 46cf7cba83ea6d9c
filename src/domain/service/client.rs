//! `WalletService`: client for the legacy TurtleService JSON-RPC wallet.

use std::time::Duration;

use rust_decimal::Decimal;
use serde_json::Value;

use super::convert;
use super::wire::*;
use super::{
    Balance, FusionEstimate, FusionRequest, NewTransfer, NodeFeeInfo, SendTransaction,
    ServiceStatus, ServiceTransaction, SpendKeys, TransactionHashesInBlock, TransactionQuery,
    TransferEntry,
};
use crate::config::{ConnectionConfig, ServiceDefaults};
use crate::error::{Error, Result};
use crate::http::{HttpTransport, JsonRpc};
use crate::network::{DEFAULT_HOST, DEFAULT_RPC_TIMEOUT, DEFAULT_SERVICE_PORT};
use crate::shared::{require_non_empty, require_non_empty_list, validate_hash, AmountConverter};

/// Client for one TurtleService instance.
#[derive(Debug, Clone)]
pub struct WalletService {
    rpc: JsonRpc,
    defaults: ServiceDefaults,
    amounts: AmountConverter,
}

impl WalletService {
    pub fn builder() -> WalletServiceBuilder {
        WalletServiceBuilder::default()
    }

    pub fn defaults(&self) -> &ServiceDefaults {
        &self.defaults
    }

    // ── Addresses ────────────────────────────────────────────────────────

    /// Create a new address, or import one from a secret or public spend key.
    /// At most one key may be given.
    pub async fn create_address(
        &self,
        secret_spend_key: Option<&str>,
        public_spend_key: Option<&str>,
    ) -> Result<String> {
        let secret_spend_key = secret_spend_key.filter(|k| !k.is_empty());
        let public_spend_key = public_spend_key.filter(|k| !k.is_empty());
        if secret_spend_key.is_some() && public_spend_key.is_some() {
            return Err(Error::Validation(
                "Cannot specify both secretSpendKey and publicSpendKey".to_string(),
            ));
        }

        let result: AddressResult = self
            .rpc
            .call(
                "createAddress",
                CreateAddressParams {
                    secret_spend_key,
                    public_spend_key,
                },
            )
            .await?;
        Ok(result.address)
    }

    pub async fn create_integrated_address(
        &self,
        address: &str,
        payment_id: &str,
    ) -> Result<String> {
        if address.trim().is_empty() || payment_id.trim().is_empty() {
            return Err(Error::Validation(
                "You must supply both address and paymentId".to_string(),
            ));
        }
        let result: IntegratedAddressResult = self
            .rpc
            .call(
                "createIntegratedAddress",
                IntegratedAddressParams {
                    address,
                    payment_id,
                },
            )
            .await?;
        Ok(result.integrated_address)
    }

    pub async fn delete_address(&self, address: &str) -> Result<()> {
        require_non_empty(address, "address")?;
        let _: Value = self
            .rpc
            .call("deleteAddress", AddressParams { address })
            .await?;
        Ok(())
    }

    pub async fn addresses(&self) -> Result<Vec<String>> {
        let result: AddressesResult = self.rpc.call_without_params("getAddresses").await?;
        Ok(result.addresses)
    }

    /// Balance of one address, or of the whole container when `None`.
    pub async fn balance(&self, address: Option<&str>) -> Result<Balance> {
        let address = address.filter(|a| !a.is_empty());
        let result: BalanceResult = self
            .rpc
            .call("getBalance", OptionalAddressParams { address })
            .await?;
        Ok(convert::balance(result, &self.amounts))
    }

    pub async fn mnemonic_seed(&self, address: &str) -> Result<String> {
        require_non_empty(address, "address")?;
        let result: MnemonicSeedResult = self
            .rpc
            .call("getMnemonicSeed", AddressParams { address })
            .await?;
        Ok(result.mnemonic_seed)
    }

    pub async fn spend_keys(&self, address: &str) -> Result<SpendKeys> {
        require_non_empty(address, "address")?;
        self.rpc
            .call("getSpendKeys", AddressParams { address })
            .await
    }

    /// The container's private view key.
    pub async fn view_key(&self) -> Result<String> {
        let result: ViewKeyResult = self.rpc.call_without_params("getViewKey").await?;
        Ok(result.view_secret_key)
    }

    // ── Chain / node ─────────────────────────────────────────────────────

    pub async fn block_hashes(
        &self,
        first_block_index: Option<u64>,
        block_count: Option<u64>,
    ) -> Result<Vec<String>> {
        let result: BlockHashesResult = self
            .rpc
            .call(
                "getBlockHashes",
                BlockHashesParams {
                    first_block_index: convert::first_block_index(
                        first_block_index,
                        &self.defaults,
                    ),
                    block_count: block_count.unwrap_or(self.defaults.block_count),
                },
            )
            .await?;
        Ok(result.block_hashes)
    }

    /// Donation fee of the node the service is connected to.
    pub async fn fee_info(&self) -> Result<NodeFeeInfo> {
        let result: NodeFeeInfoResult = self.rpc.call_without_params("getNodeFeeInfo").await?;
        Ok(convert::node_fee(result, &self.amounts))
    }

    pub async fn status(&self) -> Result<ServiceStatus> {
        self.rpc.call_without_params("getStatus").await
    }

    // ── Transactions ─────────────────────────────────────────────────────

    pub async fn transaction(&self, hash: &str) -> Result<ServiceTransaction> {
        validate_hash(hash, "transaction hash")?;
        let result: TransactionResult = self
            .rpc
            .call(
                "getTransaction",
                TransactionHashParams {
                    transaction_hash: hash,
                },
            )
            .await?;
        Ok(convert::transaction(result.transaction, &self.amounts))
    }

    pub async fn transaction_hashes(
        &self,
        query: &TransactionQuery,
    ) -> Result<Vec<TransactionHashesInBlock>> {
        let params = convert::query_params(query, &self.defaults);
        let result: ItemsResult<TransactionHashesInBlock> =
            self.rpc.call("getTransactionHashes", params).await?;
        Ok(result.items)
    }

    /// Transfers in the queried range, one entry per non-empty-address transfer.
    pub async fn transactions(&self, query: &TransactionQuery) -> Result<Vec<TransferEntry>> {
        let params = convert::query_params(query, &self.defaults);
        let result: ItemsResult<RawBlockTransactions> =
            self.rpc.call("getTransactions", params).await?;
        Ok(convert::flatten_transfers(result.items, &self.amounts))
    }

    pub async fn unconfirmed_transaction_hashes(
        &self,
        addresses: &[String],
    ) -> Result<Vec<String>> {
        let result: TransactionHashesResult = self
            .rpc
            .call(
                "getUnconfirmedTransactionHashes",
                AddressesParams { addresses },
            )
            .await?;
        Ok(result.transaction_hashes)
    }

    /// Destination for [`send_transaction`](Self::send_transaction), with the
    /// amount converted to atomic units.
    pub fn new_transfer(&self, address: &str, amount: Decimal) -> Result<NewTransfer> {
        require_non_empty(address, "address")?;
        Ok(NewTransfer {
            address: address.to_string(),
            amount: self.amounts.to_atomic(amount)?,
        })
    }

    /// Returns the transaction hash.
    pub async fn send_transaction(&self, request: &SendTransaction) -> Result<String> {
        let params = self.send_params(request).await?;
        let result: TransactionHashResult = self.rpc.call("sendTransaction", params).await?;
        Ok(result.transaction_hash)
    }

    /// Build but do not relay; returns the delayed transaction's hash.
    pub async fn create_delayed_transaction(&self, request: &SendTransaction) -> Result<String> {
        let params = self.send_params(request).await?;
        let result: TransactionHashResult =
            self.rpc.call("createDelayedTransaction", params).await?;
        Ok(result.transaction_hash)
    }

    pub async fn delayed_transaction_hashes(&self) -> Result<Vec<String>> {
        let result: TransactionHashesResult = self
            .rpc
            .call_without_params("getDelayedTransactionHashes")
            .await?;
        Ok(result.transaction_hashes)
    }

    pub async fn send_delayed_transaction(&self, hash: &str) -> Result<()> {
        validate_hash(hash, "transaction hash")?;
        let _: Value = self
            .rpc
            .call(
                "sendDelayedTransaction",
                TransactionHashParams {
                    transaction_hash: hash,
                },
            )
            .await?;
        Ok(())
    }

    pub async fn delete_delayed_transaction(&self, hash: &str) -> Result<()> {
        validate_hash(hash, "transaction hash")?;
        let _: Value = self
            .rpc
            .call(
                "deleteDelayedTransaction",
                TransactionHashParams {
                    transaction_hash: hash,
                },
            )
            .await?;
        Ok(())
    }

    // ── Fusion ───────────────────────────────────────────────────────────

    pub async fn estimate_fusion(
        &self,
        threshold: Option<u64>,
        addresses: &[String],
    ) -> Result<FusionEstimate> {
        self.rpc
            .call(
                "estimateFusion",
                EstimateFusionParams {
                    threshold: threshold.unwrap_or(self.defaults.fusion_threshold),
                    addresses,
                },
            )
            .await
    }

    /// Returns the fusion transaction hash.
    pub async fn send_fusion_transaction(&self, request: &FusionRequest) -> Result<String> {
        let result: TransactionHashResult = self
            .rpc
            .call(
                "sendFusionTransaction",
                SendFusionParams {
                    threshold: request
                        .threshold
                        .unwrap_or(self.defaults.fusion_threshold),
                    anonymity: request.mixin.or(self.defaults.wallet.mixin),
                    addresses: &request.addresses,
                    destination_address: request
                        .destination_address
                        .as_deref()
                        .filter(|a| !a.is_empty()),
                },
            )
            .await?;
        Ok(result.transaction_hash)
    }

    // ── Container ────────────────────────────────────────────────────────

    /// Rescan from `scan_height`, or from the wallet's creation height.
    pub async fn reset(&self, scan_height: Option<u64>) -> Result<()> {
        let _: Value = self.rpc.call("reset", ResetParams { scan_height }).await?;
        Ok(())
    }

    pub async fn save(&self) -> Result<()> {
        let _: Value = self.rpc.call_without_params("save").await?;
        Ok(())
    }

    // ── Internals ────────────────────────────────────────────────────────

    /// Resolves defaults; without a change address, the wallet's first
    /// address is fetched and used.
    async fn send_params<'a>(
        &self,
        request: &'a SendTransaction,
    ) -> Result<SendTransactionParams<'a>> {
        require_non_empty_list(&request.transfers, "transfers")?;
        let fee = self
            .amounts
            .to_atomic(request.fee.unwrap_or(self.defaults.wallet.fee))?;

        let change_address = match request.change_address.as_deref().filter(|a| !a.is_empty()) {
            Some(address) => address.to_string(),
            None => self
                .addresses()
                .await?
                .into_iter()
                .next()
                .ok_or_else(|| {
                    Error::Validation("Wallet has no address to send change to".to_string())
                })?,
        };

        Ok(SendTransactionParams {
            addresses: &request.addresses,
            transfers: &request.transfers,
            fee,
            unlock_time: request
                .unlock_time
                .unwrap_or(self.defaults.wallet.unlock_time),
            anonymity: request.mixin.or(self.defaults.wallet.mixin),
            extra: request.extra.as_deref().filter(|e| !e.is_empty()),
            payment_id: request.payment_id.as_deref().filter(|p| !p.is_empty()),
            change_address,
        })
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct WalletServiceBuilder {
    config: ConnectionConfig,
    password: Option<String>,
    defaults: ServiceDefaults,
}

impl Default for WalletServiceBuilder {
    fn default() -> Self {
        Self {
            config: ConnectionConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_SERVICE_PORT,
                timeout: DEFAULT_RPC_TIMEOUT,
                ..ConnectionConfig::default()
            },
            password: None,
            defaults: ServiceDefaults::default(),
        }
    }
}

impl WalletServiceBuilder {
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

    /// The service's `--rpc-password`.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn defaults(mut self, defaults: ServiceDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn default_mixin(mut self, mixin: u64) -> Self {
        self.defaults.wallet.mixin = Some(mixin);
        self
    }

    pub fn default_fee(mut self, fee: Decimal) -> Self {
        self.defaults.wallet.fee = fee;
        self
    }

    pub fn decimal_divisor(mut self, divisor: u64) -> Self {
        self.defaults.wallet.decimal_divisor = divisor;
        self
    }

    pub fn build(self) -> Result<WalletService> {
        let amounts = AmountConverter::new(self.defaults.wallet.decimal_divisor)?;
        let transport = HttpTransport::new(&self.config)?;
        tracing::debug!(url = transport.base_url(), "TurtleService client ready");
        Ok(WalletService {
            rpc: JsonRpc::new(transport).with_password(self.password),
            defaults: self.defaults,
            amounts,
        })
    }
}
