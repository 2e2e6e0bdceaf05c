use crate::api::TransactionQuery;
use async_trait::async_trait;
use burst_faucet_core::blockchain::balance::Balance;
use burst_faucet_core::blockchain::mining_info::MiningInfo;
use burst_faucet_core::blockchain::send_money::SendMoneyResponse;
use burst_faucet_core::blockchain::timestamp::Timestamp;
use burst_faucet_core::blockchain::transaction::{Transaction, Transactions};
use burst_faucet_core::errors::WalletError;
use log::debug;
use std::collections::HashMap;

#[async_trait]
pub trait WalletAPI: Send + Sync {
    /// Transfers `amount` whole BURST to `recipient_id`. Never retried.
    async fn send_money(
        &self,
        amount: u64,
        recipient_id: &str,
        secret_phrase: &str,
    ) -> Result<SendMoneyResponse, WalletError>;
    async fn get_account_transactions(
        &self,
        account_id: &str,
        query: TransactionQuery,
    ) -> Result<Transactions, WalletError>;
    async fn get_balance(&self, account_id: &str) -> Result<Balance, WalletError>;
    async fn get_time(&self) -> Result<Timestamp, WalletError>;
    async fn get_mining_info(&self) -> Result<MiningInfo, WalletError>;

    /// One page of history keyed by transaction id, never more than `page_size` entries.
    /// A node answering with a non-success status yields an empty map.
    async fn get_transactions(
        &self,
        account_id: &str,
        offset: u32,
        page_size: u32,
    ) -> Result<HashMap<String, Transaction>, WalletError> {
        lookup_or_empty(
            self.get_account_transactions(
                account_id,
                TransactionQuery::Range { offset, page_size },
            )
            .await,
        )
    }
    async fn get_transactions_since(
        &self,
        account_id: &str,
        timestamp: u64,
    ) -> Result<HashMap<String, Transaction>, WalletError> {
        lookup_or_empty(
            self.get_account_transactions(account_id, TransactionQuery::Since { timestamp })
                .await,
        )
    }
}

fn lookup_or_empty(
    page: Result<Transactions, WalletError>,
) -> Result<HashMap<String, Transaction>, WalletError> {
    match page {
        Ok(page) => Ok(page.into_lookup()),
        Err(e @ WalletError::BadStatus { .. }) => {
            debug!("Returning empty transaction lookup, {e}");
            Ok(HashMap::new())
        }
        Err(e) => Err(e),
    }
}
