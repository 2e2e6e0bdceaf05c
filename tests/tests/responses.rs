#[cfg(test)]
mod tests {
    use burst_faucet_core::blockchain::balance::Balance;
    use burst_faucet_core::blockchain::mining_info::MiningInfo;
    use burst_faucet_core::blockchain::send_money::SendMoneyResponse;
    use burst_faucet_core::blockchain::timestamp::Timestamp;
    use burst_faucet_core::blockchain::transaction::Transactions;

    #[test]
    fn test_balance_with_numeric_amounts() {
        let balance: Balance =
            serde_json::from_str(r#"{"balanceNQT":0,"requestProcessingTime":1}"#).unwrap();
        assert_eq!(balance.balance_nqt, 0);
        assert_eq!(balance.unconfirmed_balance_nqt, None);
    }

    #[test]
    fn test_balance_rejects_negative() {
        assert!(serde_json::from_str::<Balance>(r#"{"balanceNQT":"-5"}"#).is_err());
    }

    #[test]
    fn test_timestamp() {
        let ts: Timestamp = serde_json::from_str(r#"{"time":1000}"#).unwrap();
        assert_eq!(ts.time, 1000);
        assert_eq!(ts.request_processing_time, 0);
    }

    #[test]
    fn test_mining_info_numeric() {
        let info: MiningInfo = serde_json::from_str(
            r#"{"generationSignature":"ff00","baseTarget":70312,"height":500000}"#,
        )
        .unwrap();
        assert_eq!(info.base_target, 70312);
        assert_eq!(info.height, 500_000);
        assert_eq!(info.request_processing_time, None);
    }

    #[test]
    fn test_mining_info_requires_signature() {
        assert!(serde_json::from_str::<MiningInfo>(r#"{"baseTarget":1,"height":1}"#).is_err());
    }

    #[test]
    fn test_send_money_minimal() {
        let resp: SendMoneyResponse =
            serde_json::from_str(r#"{"transaction":"42","requestProcessingTime":3}"#).unwrap();
        assert_eq!(resp.transaction, "42");
        assert_eq!(resp.full_hash, None);
        assert_eq!(resp.broadcasted, None);
    }

    #[test]
    fn test_unconfirmed_transaction() {
        let page: Transactions = serde_json::from_str(
            r#"{"transactions":[{"transaction":"77","amountNQT":"100000000","recipient":"5","type":0,"subtype":0}],"requestProcessingTime":0}"#,
        )
        .unwrap();
        assert_eq!(page.len(), 1);
        let tx = &page.transactions[0];
        assert_eq!(tx.confirmations, None);
        assert!(!tx.is_confirmed());
        assert_eq!(tx.amount(), "1");
    }

    #[test]
    fn test_duplicate_ids_collapse() {
        let page: Transactions = serde_json::from_str(
            r#"{"transactions":[{"transaction":"1","amountNQT":"1"},{"transaction":"1","amountNQT":"2"}]}"#,
        )
        .unwrap();
        let lookup = page.into_lookup();
        assert_eq!(lookup.len(), 1);
        assert_eq!(lookup["1"].amount_nqt, 2);
    }

    #[test]
    fn test_empty_page() {
        let page: Transactions = serde_json::from_str(r#"{"requestProcessingTime":0}"#).unwrap();
        assert!(page.is_empty());
        assert!(page.into_lookup().is_empty());
    }
}
