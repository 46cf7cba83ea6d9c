//! Conversions between WalletAPI wire types and domain types.

use super::wire::{
    AddressBalanceResponse, BalanceResponse, SendAdvancedRequest, TransactionResponse,
};
use super::{AddressBalance, SendAdvanced, WalletBalance, WalletTransaction, WalletTransfer};
use crate::config::WalletDefaults;
use crate::error::{Error, Result};
use crate::shared::{path_segment, require_non_empty, AmountConverter};

// ─── Responses ───────────────────────────────────────────────────────────────

pub fn balance(raw: BalanceResponse, amounts: &AmountConverter) -> WalletBalance {
    WalletBalance {
        unlocked: amounts.from_atomic(raw.unlocked),
        locked: amounts.from_atomic(raw.locked),
    }
}

pub fn balances(
    raw: Vec<AddressBalanceResponse>,
    amounts: &AmountConverter,
) -> Vec<AddressBalance> {
    raw.into_iter()
        .map(|b| AddressBalance {
            address: b.address,
            unlocked: amounts.from_atomic(b.unlocked),
            locked: amounts.from_atomic(b.locked),
        })
        .collect()
}

/// Fee and transfer amounts to display units.
pub fn transaction(raw: TransactionResponse, amounts: &AmountConverter) -> WalletTransaction {
    WalletTransaction {
        hash: raw.hash,
        block_height: raw.block_height,
        timestamp: raw.timestamp,
        fee: amounts.from_atomic(raw.fee),
        payment_id: raw.payment_id,
        unlock_time: raw.unlock_time,
        is_coinbase_transaction: raw.is_coinbase_transaction,
        transfers: raw
            .transfers
            .into_iter()
            .map(|t| WalletTransfer {
                address: t.address,
                amount: amounts.from_atomic(t.amount),
            })
            .collect(),
    }
}

pub fn transactions(
    raw: Vec<TransactionResponse>,
    amounts: &AmountConverter,
) -> Vec<WalletTransaction> {
    raw.into_iter().map(|t| transaction(t, amounts)).collect()
}

// ─── Requests ────────────────────────────────────────────────────────────────

/// Resolves fee, mixin and unlock time against the defaults and drops empty
/// optionals.
pub fn send_advanced_body<'a>(
    request: &'a SendAdvanced,
    defaults: &WalletDefaults,
    amounts: &AmountConverter,
) -> Result<SendAdvancedRequest<'a>> {
    if request.destinations.is_empty() {
        return Err(Error::Validation(
            "Must supply an array of destinations".to_string(),
        ));
    }
    for destination in &request.destinations {
        if destination.address.trim().is_empty() {
            return Err(Error::Validation(
                "Must supply a wallet address in destination object".to_string(),
            ));
        }
    }

    Ok(SendAdvancedRequest {
        destinations: &request.destinations,
        mixin: request.mixin.or(defaults.mixin),
        fee: amounts.to_atomic(request.fee.unwrap_or(defaults.fee))?,
        source_addresses: &request.source_addresses,
        payment_id: request.payment_id.as_deref().filter(|p| !p.is_empty()),
        change_address: request.change_address.as_deref().filter(|a| !a.is_empty()),
        unlock_time: request.unlock_time.unwrap_or(defaults.unlock_time),
    })
}

/// `/transactions[/start[/end]]`
pub fn transactions_path(start_height: Option<u64>, end_height: Option<u64>) -> Result<String> {
    match (start_height, end_height) {
        (None, None) => Ok("/transactions".to_string()),
        (Some(start), None) => Ok(format!("/transactions/{}", start)),
        (Some(start), Some(end)) => Ok(format!("/transactions/{}/{}", start, end)),
        (None, Some(_)) => Err(Error::Validation(
            "Must supply a start height with an end height".to_string(),
        )),
    }
}

/// `/transactions/address/{address}/{start}[/end]`
pub fn transactions_by_address_path(
    address: &str,
    start_height: u64,
    end_height: Option<u64>,
) -> Result<String> {
    require_non_empty(address, "wallet address")?;
    let mut path = format!(
        "/transactions/address/{}/{}",
        path_segment(address),
        start_height
    );
    if let Some(end) = end_height {
        path.push_str(&format!("/{}", end));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wallet::Destination;
    use rust_decimal::Decimal;
    use serde_json::json;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_transaction_display_units() {
        let raw: TransactionResponse = serde_json::from_value(json!({
            "blockHeight": 100,
            "fee": 10,
            "hash": "abc",
            "isCoinbaseTransaction": false,
            "paymentID": "",
            "timestamp": 1560000000,
            "unlockTime": 0,
            "transfers": [
                {"address": "TRTLa", "amount": -1234},
                {"address": "TRTLb", "amount": 1224}
            ]
        }))
        .unwrap();

        let tx = transaction(raw, &AmountConverter::default());
        assert_eq!(tx.fee, dec("0.1"));
        assert_eq!(tx.transfers[0].amount, dec("-12.34"));
        assert_eq!(tx.transfers[1].amount, dec("12.24"));
        assert_eq!(tx.block_height, 100);
    }

    #[test]
    fn test_send_advanced_omits_empty_optionals() {
        let request = SendAdvanced::new(vec![Destination {
            address: "TRTLa".to_string(),
            amount: 115,
        }]);
        let body = send_advanced_body(
            &request,
            &WalletDefaults::default(),
            &AmountConverter::default(),
        )
        .unwrap();
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(
            v,
            json!({
                "destinations": [{"address": "TRTLa", "amount": 115}],
                "fee": 10,
                "unlockTime": 0
            })
        );
    }

    #[test]
    fn test_send_advanced_with_options() {
        let request = SendAdvanced::new(vec![Destination {
            address: "TRTLa".to_string(),
            amount: 1,
        }])
        .mixin(3)
        .fee(dec("0.25"))
        .source_addresses(vec!["TRTLsrc".to_string()])
        .payment_id("ff");
        let body = send_advanced_body(
            &request,
            &WalletDefaults::default(),
            &AmountConverter::default(),
        )
        .unwrap();
        let v = serde_json::to_value(&body).unwrap();
        assert_eq!(v["mixin"], 3);
        assert_eq!(v["fee"], 25);
        assert_eq!(v["sourceAddresses"], json!(["TRTLsrc"]));
        assert_eq!(v["paymentID"], "ff");
        assert!(v.get("changeAddress").is_none());
    }

    #[test]
    fn test_send_advanced_rejects_missing_destinations() {
        let request = SendAdvanced::default();
        assert!(send_advanced_body(
            &request,
            &WalletDefaults::default(),
            &AmountConverter::default()
        )
        .is_err());
    }

    #[test]
    fn test_transactions_paths() {
        assert_eq!(transactions_path(None, None).unwrap(), "/transactions");
        assert_eq!(transactions_path(Some(5), None).unwrap(), "/transactions/5");
        assert_eq!(transactions_path(Some(5), Some(9)).unwrap(), "/transactions/5/9");
        assert!(transactions_path(None, Some(9)).is_err());

        assert_eq!(
            transactions_by_address_path("TRTLa", 0, Some(10)).unwrap(),
            "/transactions/address/TRTLa/0/10"
        );
        assert!(transactions_by_address_path("", 0, None).is_err());
    }
}
