/// Smallest currency unit per whole BURST.
pub const NQT_PER_BURST: u64 = 100_000_000;

/// Path of the wallet node's HTTP API, appended to the configured server.
pub const BURST_API_PATH: &str = "burst";

/// Transaction deadline in minutes attached to every transfer.
pub const SEND_MONEY_DEADLINE: u16 = 1000;

pub const DEFAULT_WALLET_SERVER: &str = "http://localhost:8125";
pub const DEFAULT_FEE: u64 = 1;
pub const DEFAULT_CONNECTION_TIMEOUT_MS: u64 = 10_000;

//Request Types
pub const SEND_MONEY: &str = "sendMoney";
pub const GET_ACCOUNT_TRANSACTIONS: &str = "getAccountTransactions";
pub const GET_BALANCE: &str = "getBalance";
pub const GET_TIME: &str = "getTime";
pub const GET_MINING_INFO: &str = "getMiningInfo";

/// Field a node response carries when the request failed on the node side.
pub const ERROR_MARKER: &str = "errorDescription";
