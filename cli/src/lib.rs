use burst_faucet_clients::api::wallet::WalletAPI;
use burst_faucet_clients::rpc::wallet::WalletClient;
use burst_faucet_core::config::WalletNodeConfig;
use burst_faucet_logger::{parse_level, FaucetLogger};
use clap::Parser;
use cli::{Cli, RootCommands};
use log::info;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{Error, ErrorKind};
use std::path::Path;

pub mod cli;

pub async fn run_cli() -> Result<(), Error> {
    let cli = Cli::parse();
    let level = parse_level(&cli.log_level).ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidInput,
            format!("Unknown log level: {}", cli.log_level),
        )
    })?;
    let _logger = FaucetLogger::builder()
        .use_colors(true)
        .current_level(level)
        .init()
        .map_err(|e| Error::other(format!("{e:?}")))?;
    let config = load_config(cli.config.as_deref(), cli.wallet_server, cli.fee, cli.timeout)?;
    info!("Using wallet node {}", config.wallet_server);
    let client = WalletClient::new(config)?;
    println!("{}", run_command(&client, cli.action).await?);
    Ok(())
}

/// File (or defaults), then environment, then command line flags.
pub fn load_config(
    path: Option<&Path>,
    wallet_server: Option<String>,
    fee: Option<u64>,
    timeout: Option<u64>,
) -> Result<WalletNodeConfig, Error> {
    let mut config = match path {
        Some(path) => WalletNodeConfig::try_from(path)?,
        None => WalletNodeConfig::default(),
    }
    .with_env_overrides()?;
    if let Some(wallet_server) = wallet_server {
        config.wallet_server = wallet_server;
    }
    if let Some(fee) = fee {
        config.fee = fee;
    }
    if let Some(timeout) = timeout {
        config.connection_timeout_ms = timeout;
    }
    config.validate()?;
    Ok(config)
}

pub async fn run_command<C: WalletAPI + ?Sized>(
    client: &C,
    action: RootCommands,
) -> Result<String, Error> {
    match action {
        RootCommands::SendMoney {
            amount,
            recipient,
            secret_phrase,
        } => to_output(&client.send_money(amount, &recipient, &secret_phrase).await?),
        RootCommands::GetBalance { account } => to_output(&client.get_balance(&account).await?),
        RootCommands::GetTime => to_output(&client.get_time().await?),
        RootCommands::GetMiningInfo => to_output(&client.get_mining_info().await?),
        RootCommands::GetTransactions {
            account,
            offset,
            page_size,
        } => to_output(
            &client
                .get_transactions(&account, offset, page_size)
                .await?
                .into_iter()
                .collect::<BTreeMap<_, _>>(),
        ),
        RootCommands::GetTransactionsSince { account, timestamp } => to_output(
            &client
                .get_transactions_since(&account, timestamp)
                .await?
                .into_iter()
                .collect::<BTreeMap<_, _>>(),
        ),
    }
}

fn to_output<T: Serialize>(value: &T) -> Result<String, Error> {
    serde_json::to_string_pretty(value).map_err(|e| Error::new(ErrorKind::InvalidData, e))
}
