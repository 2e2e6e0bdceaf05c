use crate::api::wallet::WalletAPI;
use crate::api::TransactionQuery;
use crate::rpc::{get_client, post, StatusCheck};
use async_trait::async_trait;
use burst_faucet_core::blockchain::balance::Balance;
use burst_faucet_core::blockchain::mining_info::MiningInfo;
use burst_faucet_core::blockchain::send_money::SendMoneyResponse;
use burst_faucet_core::blockchain::timestamp::Timestamp;
use burst_faucet_core::blockchain::transaction::Transactions;
use burst_faucet_core::config::WalletNodeConfig;
use burst_faucet_core::constants::{
    GET_ACCOUNT_TRANSACTIONS, GET_BALANCE, GET_MINING_INFO, GET_TIME, SEND_MONEY,
    SEND_MONEY_DEADLINE,
};
use burst_faucet_core::errors::WalletError;
use burst_faucet_core::formatting::burst_to_nqt;
use log::{debug, error, info, trace, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::io::Error;

pub struct WalletClient {
    client: Client,
    url: String,
    config: WalletNodeConfig,
}
impl WalletClient {
    pub fn new(config: WalletNodeConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(WalletClient {
            client: get_client(&config)?,
            url: config.api_url(),
            config,
        })
    }
    #[must_use]
    pub fn config(&self) -> &WalletNodeConfig {
        &self.config
    }
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
    async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        params: &[(&str, String)],
        status_check: StatusCheck,
    ) -> Result<T, WalletError> {
        post(
            &self.client,
            &self.url,
            method,
            params,
            &self.config.additional_headers,
            self.config.connection_timeout_ms,
            status_check,
        )
        .await
    }
}

#[async_trait]
impl WalletAPI for WalletClient {
    async fn send_money(
        &self,
        amount: u64,
        recipient_id: &str,
        secret_phrase: &str,
    ) -> Result<SendMoneyResponse, WalletError> {
        let amount_nqt = to_nqt(SEND_MONEY, "amount", amount)?;
        let fee_nqt = to_nqt(SEND_MONEY, "fee", self.config.fee)?;
        if recipient_id.trim().is_empty() {
            return Err(invalid_request(SEND_MONEY, "recipient must not be empty"));
        }
        let params = [
            ("recipient", recipient_id.to_string()),
            ("amountNQT", amount_nqt.to_string()),
            ("feeNQT", fee_nqt.to_string()),
            ("deadline", SEND_MONEY_DEADLINE.to_string()),
            ("secretPhrase", secret_phrase.to_string()),
        ];
        let result = self
            .request::<SendMoneyResponse>(SEND_MONEY, &params, StatusCheck::MarkerOnly)
            .await
            .and_then(|resp| {
                if resp.transaction.trim().is_empty() {
                    Err(WalletError::InvalidResponse {
                        method: SEND_MONEY.to_string(),
                        message: "missing transaction id".to_string(),
                        body: String::new(),
                    })
                } else {
                    Ok(resp)
                }
            });
        match &result {
            Ok(resp) => info!(
                "send '{amount}' BURST to recipientId: '{recipient_id}' in '{}' ms",
                resp.request_processing_time
            ),
            Err(e) => log_failure(e),
        }
        result
    }

    async fn get_account_transactions(
        &self,
        account_id: &str,
        query: TransactionQuery,
    ) -> Result<Transactions, WalletError> {
        let mut params = vec![("account", account_id.to_string())];
        let limit = match query {
            TransactionQuery::Range { offset, page_size } => {
                if page_size == 0 {
                    return Err(invalid_request(
                        GET_ACCOUNT_TRANSACTIONS,
                        "page size must be greater than 0",
                    ));
                }
                let last_index = offset.checked_add(page_size - 1).ok_or_else(|| {
                    invalid_request(GET_ACCOUNT_TRANSACTIONS, "index range overflows")
                })?;
                params.push(("firstIndex", offset.to_string()));
                params.push(("lastIndex", last_index.to_string()));
                Some(page_size as usize)
            }
            TransactionQuery::Since { timestamp } => {
                params.push(("timestamp", timestamp.to_string()));
                None
            }
        };
        let result = self
            .request::<Transactions>(GET_ACCOUNT_TRANSACTIONS, &params, StatusCheck::RequireOk)
            .await
            .map(|mut page| {
                if let Some(limit) = limit {
                    if page.transactions.len() > limit {
                        warn!(
                            "Node returned {} transactions for a page of {limit}, truncating",
                            page.transactions.len()
                        );
                        page.transactions.truncate(limit);
                    }
                }
                page
            });
        match &result {
            Ok(page) => info!(
                "received '{}' transactions in '{}' ms",
                page.len(),
                page.request_processing_time
            ),
            Err(e) => log_failure(e),
        }
        result
    }

    async fn get_balance(&self, account_id: &str) -> Result<Balance, WalletError> {
        let result = self
            .request::<Balance>(
                GET_BALANCE,
                &[("account", account_id.to_string())],
                StatusCheck::MarkerOnly,
            )
            .await;
        match &result {
            Ok(balance) => info!(
                "received balance from accountId: '{account_id}' in '{}' ms",
                balance.request_processing_time
            ),
            Err(e) => log_failure(e),
        }
        result
    }

    async fn get_time(&self) -> Result<Timestamp, WalletError> {
        let result = self
            .request::<Timestamp>(GET_TIME, &[], StatusCheck::MarkerOnly)
            .await;
        match &result {
            Ok(timestamp) => info!(
                "received timestamp: '{}' in '{}' ms",
                timestamp.time, timestamp.request_processing_time
            ),
            Err(e) => log_failure(e),
        }
        result
    }

    async fn get_mining_info(&self) -> Result<MiningInfo, WalletError> {
        let result = self
            .request::<MiningInfo>(GET_MINING_INFO, &[], StatusCheck::MarkerOnly)
            .await;
        match &result {
            Ok(info) => debug!(
                "received mining info for height '{}' with base target '{}'",
                info.height, info.base_target
            ),
            Err(WalletError::Timeout { timeout_ms, .. }) => warn!(
                "Unable to get mining info caused by connectionTimeout, currently '{}' sec. try increasing it!",
                *timeout_ms as f64 / 1000.0
            ),
            Err(e) => trace!("Unable to get mining info from wallet: {e}"),
        }
        result
    }
}

fn to_nqt(method: &str, field: &str, burst: u64) -> Result<u64, WalletError> {
    burst_to_nqt(burst)
        .ok_or_else(|| invalid_request(method, &format!("{field} {burst} overflows NQT")))
}

fn invalid_request(method: &str, message: &str) -> WalletError {
    WalletError::InvalidRequest {
        method: method.to_string(),
        message: message.to_string(),
    }
}

fn log_failure(err: &WalletError) {
    match err {
        WalletError::Node { .. } => error!("Error: {err}"),
        WalletError::InvalidResponse { body, .. } => error!("{err}, body: {body}"),
        WalletError::Timeout { .. }
        | WalletError::Transport { .. }
        | WalletError::BadStatus { .. }
        | WalletError::InvalidRequest { .. } => warn!("{err}"),
    }
}
