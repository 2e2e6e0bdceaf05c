use crate::formatting::{nqt_to_burst, opt_u64_from_str_or_num, u64_from_str_or_num};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Transaction {
    pub transaction: String,
    #[serde(rename = "amountNQT", deserialize_with = "u64_from_str_or_num")]
    pub amount_nqt: u64,
    #[serde(rename = "feeNQT", default, deserialize_with = "opt_u64_from_str_or_num")]
    pub fee_nqt: Option<u64>,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(rename = "senderRS", default)]
    pub sender_rs: Option<String>,
    #[serde(default)]
    pub recipient: Option<String>,
    #[serde(rename = "recipientRS", default)]
    pub recipient_rs: Option<String>,
    #[serde(default, deserialize_with = "opt_u64_from_str_or_num")]
    pub confirmations: Option<u64>,
    #[serde(default)]
    pub timestamp: Option<u64>,
    #[serde(default, deserialize_with = "opt_u64_from_str_or_num")]
    pub height: Option<u64>,
    #[serde(rename = "type", default)]
    pub transaction_type: Option<u8>,
    #[serde(default)]
    pub subtype: Option<u8>,
    #[serde(rename = "fullHash", default)]
    pub full_hash: Option<String>,
}
impl Transaction {
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.confirmations.is_some_and(|c| c > 0)
    }
    #[must_use]
    pub fn amount(&self) -> String {
        nqt_to_burst(self.amount_nqt)
    }
}

/// One page of account history in the order the node returned it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub struct Transactions {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(rename = "requestProcessingTime", default)]
    pub request_processing_time: u64,
}
impl Transactions {
    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
    /// Keys the page by transaction id; a repeated id keeps its last entry.
    #[must_use]
    pub fn into_lookup(self) -> HashMap<String, Transaction> {
        self.transactions
            .into_iter()
            .map(|tx| (tx.transaction.clone(), tx))
            .collect()
    }
}
