//! Conversions from daemon wire types to domain types, plus the status
//! checks applied to every non-JSON-RPC response.

use serde_json::Value;

use super::wire::{
    BlockShortInfo, BlocksLiteResponse, GetTransactionsResponse, GlobalIndexesResponse,
    IndexRangeResponse, PoolChangesLiteResponse, RawBlocksResponse, SendRawTransactionResponse,
    TransactionsStatusResponse, TxPrefixInfo, WalletSyncDataResponse,
};
use super::{
    BlockLite, BlockLiteTransaction, BlocksLite, PoolChanges, RawBlocks, TransactionIndexes,
    Transactions, TransactionsStatus, WalletSyncData,
};
use crate::error::{Error, Result};

// ─── Status checks ───────────────────────────────────────────────────────────

/// `status` must be present and equal to `OK`, ignoring case.
pub fn check_status(status: Option<&str>) -> Result<()> {
    check_status_with_message(status, None)
}

/// Like [`check_status`], attaching the daemon's error text when not OK.
pub fn check_status_with_message(status: Option<&str>, message: Option<&str>) -> Result<()> {
    let status = status.ok_or(Error::MissingField("status"))?;
    if status.eq_ignore_ascii_case("ok") {
        return Ok(());
    }
    Err(Error::StatusNotOk {
        status: status.to_string(),
        message: message.filter(|m| !m.is_empty()).map(str::to_string),
    })
}

/// Status check for responses kept as raw JSON.
pub fn check_value_status(value: &Value) -> Result<()> {
    check_status(value.get("status").and_then(Value::as_str))
}

// ─── Lite blocks / pool ──────────────────────────────────────────────────────

impl From<TxPrefixInfo> for BlockLiteTransaction {
    fn from(tx: TxPrefixInfo) -> Self {
        Self {
            hash: tx.tx_hash,
            prefix: tx.tx_prefix,
        }
    }
}

impl From<BlockShortInfo> for BlockLite {
    fn from(info: BlockShortInfo) -> Self {
        Self {
            block: hex::encode(&info.block),
            hash: info.block_id,
            transactions: info.tx_prefixes.into_iter().map(Into::into).collect(),
        }
    }
}

impl TryFrom<BlocksLiteResponse> for BlocksLite {
    type Error = Error;

    fn try_from(resp: BlocksLiteResponse) -> Result<Self> {
        check_status(resp.status.as_deref())?;
        Ok(Self {
            current_height: resp.current_height,
            full_offset: resp.full_offset,
            start_height: resp.start_height,
            items: resp.items.into_iter().map(Into::into).collect(),
        })
    }
}

impl TryFrom<PoolChangesLiteResponse> for PoolChanges {
    type Error = Error;

    fn try_from(resp: PoolChangesLiteResponse) -> Result<Self> {
        check_status(resp.status.as_deref())?;
        Ok(Self {
            added_txs: resp.added_txs.into_iter().map(Into::into).collect(),
            deleted_txs_ids: resp.deleted_txs_ids,
            synced: resp.is_tail_block_actual,
        })
    }
}

// ─── Indexes ─────────────────────────────────────────────────────────────────

pub fn global_indexes(resp: GlobalIndexesResponse) -> Result<Vec<u64>> {
    check_status(resp.status.as_deref())?;
    Ok(resp.o_indexes)
}

/// `{key, value}` pairs become `{hash, indexes}`.
pub fn index_ranges(resp: IndexRangeResponse) -> Result<Vec<TransactionIndexes>> {
    let status = resp.status.ok_or(Error::MissingField("status"))?;
    let indexes = resp.indexes.ok_or(Error::MissingField("indexes"))?;
    check_status(Some(&status))?;

    Ok(indexes
        .into_iter()
        .map(|entry| TransactionIndexes {
            hash: entry.key,
            indexes: entry.value,
        })
        .collect())
}

// ─── Transactions ────────────────────────────────────────────────────────────

impl TryFrom<TransactionsStatusResponse> for TransactionsStatus {
    type Error = Error;

    fn try_from(resp: TransactionsStatusResponse) -> Result<Self> {
        let status = resp.status.ok_or(Error::MissingField("status"))?;
        let in_pool = resp
            .transactions_in_pool
            .ok_or(Error::MissingField("transactionsInPool"))?;
        let in_block = resp
            .transactions_in_block
            .ok_or(Error::MissingField("transactionsInBlock"))?;
        let unknown = resp
            .transactions_unknown
            .ok_or(Error::MissingField("transactionsUnknown"))?;
        check_status(Some(&status))?;

        Ok(Self {
            in_pool,
            in_block,
            unknown,
        })
    }
}

impl TryFrom<GetTransactionsResponse> for Transactions {
    type Error = Error;

    fn try_from(resp: GetTransactionsResponse) -> Result<Self> {
        check_status(resp.status.as_deref())?;
        Ok(resp.transactions)
    }
}

pub fn send_raw_transaction(resp: SendRawTransactionResponse) -> Result<()> {
    check_status_with_message(resp.status.as_deref(), resp.error.as_deref())
}

/// Removes the `""` entry the daemon emits inside `tx`.
pub fn strip_empty_tx_key(value: &mut Value) {
    if let Some(tx) = value.get_mut("tx").and_then(Value::as_object_mut) {
        tx.remove("");
    }
}

// ─── Sync ────────────────────────────────────────────────────────────────────

impl TryFrom<WalletSyncDataResponse> for WalletSyncData {
    type Error = Error;

    fn try_from(resp: WalletSyncDataResponse) -> Result<Self> {
        let status = resp.status.ok_or(Error::MissingField("status"))?;
        let items = resp.items.ok_or(Error::MissingField("items"))?;
        check_status(Some(&status))?;

        Ok(Self {
            items,
            synced: resp.synced,
            top_block: resp.top_block,
        })
    }
}

impl TryFrom<RawBlocksResponse> for RawBlocks {
    type Error = Error;

    fn try_from(resp: RawBlocksResponse) -> Result<Self> {
        check_status(resp.status.as_deref())?;
        Ok(Self {
            items: resp.items,
            synced: resp.synced,
            top_block: resp.top_block,
        })
    }
}
