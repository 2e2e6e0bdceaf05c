use crate::formatting::{opt_u64_from_str_or_num, u64_from_str_or_num};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Balance {
    #[serde(rename = "balanceNQT", deserialize_with = "u64_from_str_or_num")]
    pub balance_nqt: u64,
    #[serde(
        rename = "unconfirmedBalanceNQT",
        default,
        deserialize_with = "opt_u64_from_str_or_num"
    )]
    pub unconfirmed_balance_nqt: Option<u64>,
    #[serde(
        rename = "guaranteedBalanceNQT",
        default,
        deserialize_with = "opt_u64_from_str_or_num"
    )]
    pub guaranteed_balance_nqt: Option<u64>,
    #[serde(
        rename = "forgedBalanceNQT",
        default,
        deserialize_with = "opt_u64_from_str_or_num"
    )]
    pub forged_balance_nqt: Option<u64>,
    #[serde(rename = "requestProcessingTime", default)]
    pub request_processing_time: u64,
}
