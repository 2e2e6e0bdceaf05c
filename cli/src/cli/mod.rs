use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[arg(short, long, value_name = "Path to the faucet yaml config")]
    pub config: Option<PathBuf>,

    #[arg(long, value_name = "Wallet Server Url")]
    pub wallet_server: Option<String>,
    #[arg(long, value_name = "Transfer Fee in BURST")]
    pub fee: Option<u64>,
    #[arg(long, value_name = "Connection Timeout in ms")]
    pub timeout: Option<u64>,
    #[arg(long, value_name = "Log Level", default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub action: RootCommands,
}

#[derive(Debug, Subcommand)]
pub enum RootCommands {
    #[command(about = "Sends whole BURST from the faucet account to a recipient", long_about = None)]
    SendMoney {
        #[arg(short, long)]
        amount: u64,
        #[arg(short, long)]
        recipient: String,
        #[arg(short, long, env = "FAUCET_SECRET_PHRASE", hide_env_values = true)]
        secret_phrase: String,
    },
    #[command(about = "Gets the balance of an account", long_about = None)]
    GetBalance {
        #[arg(short, long)]
        account: String,
    },
    #[command(about = "Gets the wallet node time", long_about = None)]
    GetTime,
    #[command(about = "Gets the current generation signature, base target and height", long_about = None)]
    GetMiningInfo,
    #[command(about = "Gets one page of an account's transactions", long_about = None)]
    GetTransactions {
        #[arg(short, long)]
        account: String,
        #[arg(short, long, default_value_t = 0)]
        offset: u32,
        #[arg(short, long, default_value_t = 10)]
        page_size: u32,
    },
    #[command(about = "Gets an account's transactions since a node timestamp", long_about = None)]
    GetTransactionsSince {
        #[arg(short, long)]
        account: String,
        #[arg(short, long)]
        timestamp: u64,
    },
}
