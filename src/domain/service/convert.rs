//! Conversions from TurtleService results to domain types.

use super::wire::{
    BalanceResult, NodeFeeInfoResult, RawBlockTransactions, RawTransaction, RawTransfer,
    TransactionQueryParams,
};
use super::{
    Balance, NodeFeeInfo, ServiceTransaction, TransactionQuery, TransactionTransfer,
    TransferEntry,
};
use crate::config::ServiceDefaults;
use crate::shared::AmountConverter;

pub fn balance(raw: BalanceResult, amounts: &AmountConverter) -> Balance {
    Balance {
        available_balance: amounts.from_atomic(raw.available_balance),
        locked_amount: amounts.from_atomic(raw.locked_amount),
    }
}

pub fn node_fee(raw: NodeFeeInfoResult, amounts: &AmountConverter) -> NodeFeeInfo {
    NodeFeeInfo {
        address: raw.address,
        amount: amounts.from_atomic(raw.amount),
    }
}

fn transfer(raw: RawTransfer, amounts: &AmountConverter) -> TransactionTransfer {
    TransactionTransfer {
        address: raw.address,
        amount: amounts.from_atomic(raw.amount),
        transfer_type: raw.transfer_type,
    }
}

pub fn transaction(raw: RawTransaction, amounts: &AmountConverter) -> ServiceTransaction {
    ServiceTransaction {
        transaction_hash: raw.transaction_hash,
        block_index: raw.block_index,
        timestamp: raw.timestamp,
        amount: amounts.from_atomic(raw.amount),
        fee: amounts.from_atomic(raw.fee),
        extra: raw.extra,
        is_base: raw.is_base,
        payment_id: raw.payment_id,
        state: raw.state,
        unlock_time: raw.unlock_time,
        transfers: raw
            .transfers
            .into_iter()
            .map(|t| transfer(t, amounts))
            .collect(),
    }
}

/// One entry per transfer with a non-empty address, across all blocks.
pub fn flatten_transfers(
    blocks: Vec<RawBlockTransactions>,
    amounts: &AmountConverter,
) -> Vec<TransferEntry> {
    let mut entries = Vec::new();
    for block in blocks {
        for tx in block.transactions {
            for t in tx.transfers.iter().filter(|t| !t.address.is_empty()) {
                entries.push(TransferEntry {
                    block_hash: block.block_hash.clone(),
                    block_index: tx.block_index,
                    transaction_hash: tx.transaction_hash.clone(),
                    transaction_amount: amounts.from_atomic(tx.amount),
                    fee: amounts.from_atomic(tx.fee),
                    extra: tx.extra.clone(),
                    is_base: tx.is_base,
                    payment_id: tx.payment_id.clone(),
                    state: tx.state,
                    timestamp: tx.timestamp,
                    unlock_time: tx.unlock_time,
                    address: t.address.clone(),
                    amount: amounts.from_atomic(t.amount),
                    transfer_type: t.transfer_type,
                    inbound: t.amount > 0,
                });
            }
        }
    }
    entries
}

/// Block indexes start at 1; anything lower falls back to the default.
pub fn first_block_index(requested: Option<u64>, defaults: &ServiceDefaults) -> u64 {
    requested
        .filter(|index| *index >= 1)
        .unwrap_or(defaults.first_block_index)
}

/// A block hash wins over a first block index.
pub fn query_params<'a>(
    query: &'a TransactionQuery,
    defaults: &ServiceDefaults,
) -> TransactionQueryParams<'a> {
    let block_hash = query.block_hash.as_deref().filter(|h| !h.is_empty());
    let first_block_index = match block_hash {
        Some(_) => None,
        None => Some(first_block_index(query.first_block_index, defaults)),
    };

    TransactionQueryParams {
        addresses: &query.addresses,
        block_hash,
        first_block_index,
        block_count: query.block_count.unwrap_or(defaults.block_count),
        payment_id: query.payment_id.as_deref().filter(|p| !p.is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_blocks() -> Vec<RawBlockTransactions> {
        serde_json::from_value(json!([{
            "blockHash": "b1",
            "transactions": [{
                "transactionHash": "t1",
                "blockIndex": 42,
                "timestamp": 1530000000,
                "amount": -1010,
                "fee": 10,
                "extra": "01ab",
                "isBase": false,
                "paymentId": "",
                "state": 0,
                "unlockTime": 0,
                "transfers": [
                    {"address": "TRTLsender", "amount": -1010, "type": 0},
                    {"address": "", "amount": 1000, "type": 0},
                    {"address": "TRTLchange", "amount": 250, "type": 2}
                ]
            }]
        }]))
        .unwrap()
    }

    #[test]
    fn test_flatten_skips_empty_addresses() {
        let entries = flatten_transfers(sample_blocks(), &AmountConverter::default());
        assert_eq!(entries.len(), 2);

        let out = &entries[0];
        assert_eq!(out.block_hash, "b1");
        assert_eq!(out.address, "TRTLsender");
        assert_eq!(out.amount, dec("-10.1"));
        assert_eq!(out.transaction_amount, dec("-10.1"));
        assert_eq!(out.fee, dec("0.1"));
        assert!(!out.inbound);

        let change = &entries[1];
        assert_eq!(change.amount, dec("2.5"));
        assert_eq!(change.transfer_type, 2);
        assert!(change.inbound);
    }

    #[test]
    fn test_transaction_display_units() {
        let raw = sample_blocks().remove(0).transactions.remove(0);
        let tx = transaction(raw, &AmountConverter::default());
        assert_eq!(tx.amount, dec("-10.1"));
        assert_eq!(tx.transfers.len(), 3);
        assert_eq!(tx.transfers[1].amount, dec("10"));
    }

    #[test]
    fn test_balance_display_units() {
        let b = balance(
            BalanceResult {
                available_balance: 12345,
                locked_amount: 5,
            },
            &AmountConverter::default(),
        );
        assert_eq!(b.available_balance, dec("123.45"));
        assert_eq!(b.locked_amount, dec("0.05"));
    }

    #[test]
    fn test_query_block_hash_wins() {
        let defaults = ServiceDefaults::default();
        let query = TransactionQuery {
            block_hash: Some("abc".to_string()),
            first_block_index: Some(5),
            ..Default::default()
        };
        let params = query_params(&query, &defaults);
        assert_eq!(params.block_hash, Some("abc"));
        assert_eq!(params.first_block_index, None);
        assert_eq!(params.block_count, 1);

        let v = serde_json::to_value(&params).unwrap();
        assert!(v.get("firstBlockIndex").is_none());
        assert!(v.get("paymentId").is_none());
    }

    #[test]
    fn test_query_defaults_first_block_index() {
        let defaults = ServiceDefaults::default();
        let query = TransactionQuery::default();
        let params = query_params(&query, &defaults);
        assert_eq!(params.block_hash, None);
        assert_eq!(params.first_block_index, Some(1));

        let query = TransactionQuery {
            first_block_index: Some(0),
            ..Default::default()
        };
        let params = query_params(&query, &defaults);
        assert_eq!(params.first_block_index, Some(1));

        let v = serde_json::to_value(&params).unwrap();
        assert_eq!(v["firstBlockIndex"], 1);
        assert!(v.get("blockHash").is_none());
    }

    #[test]
    fn test_first_block_index_below_one_uses_default() {
        let defaults = ServiceDefaults {
            first_block_index: 7,
            ..Default::default()
        };
        assert_eq!(first_block_index(Some(0), &defaults), 7);
        assert_eq!(first_block_index(None, &defaults), 7);
        assert_eq!(first_block_index(Some(3), &defaults), 3);
    }
}
