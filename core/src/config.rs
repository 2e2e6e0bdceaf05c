use crate::constants::{
    BURST_API_PATH, DEFAULT_CONNECTION_TIMEOUT_MS, DEFAULT_FEE, DEFAULT_WALLET_SERVER,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::convert::TryFrom;
use std::env;
use std::fs;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const WALLET_SERVER_ENV: &str = "WALLET_SERVER";
pub const FEE_ENV: &str = "FAUCET_FEE";
pub const CONNECTION_TIMEOUT_ENV: &str = "CONNECTION_TIMEOUT_MS";

fn wallet_server() -> String {
    DEFAULT_WALLET_SERVER.to_string()
}
const fn fee() -> u64 {
    DEFAULT_FEE
}
const fn connection_timeout_ms() -> u64 {
    DEFAULT_CONNECTION_TIMEOUT_MS
}

/// Settings a wallet client is constructed from.
///
/// `fee` is in whole BURST and scaled to NQT per transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletNodeConfig {
    #[serde(default = "wallet_server")]
    pub wallet_server: String,
    #[serde(default = "fee")]
    pub fee: u64,
    #[serde(default = "connection_timeout_ms")]
    pub connection_timeout_ms: u64,
    #[serde(default)]
    pub additional_headers: Option<HashMap<String, String>>,
}
impl Default for WalletNodeConfig {
    fn default() -> Self {
        WalletNodeConfig {
            wallet_server: wallet_server(),
            fee: fee(),
            connection_timeout_ms: connection_timeout_ms(),
            additional_headers: None,
        }
    }
}

impl WalletNodeConfig {
    #[must_use]
    pub fn new(wallet_server: &str, fee: u64, connection_timeout_ms: u64) -> Self {
        WalletNodeConfig {
            wallet_server: wallet_server.to_string(),
            fee,
            connection_timeout_ms,
            additional_headers: None,
        }
    }
    #[must_use]
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_millis(self.connection_timeout_ms)
    }
    #[must_use]
    pub fn api_url(&self) -> String {
        format!(
            "{}/{}",
            self.wallet_server.trim_end_matches('/'),
            BURST_API_PATH
        )
    }
    pub fn validate(&self) -> Result<(), Error> {
        if self.wallet_server.trim().is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "wallet_server must not be empty",
            ));
        }
        if !(self.wallet_server.starts_with("http://")
            || self.wallet_server.starts_with("https://"))
        {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!(
                    "wallet_server must be an http(s) url, got {}",
                    self.wallet_server
                ),
            ));
        }
        if self.connection_timeout_ms == 0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "connection_timeout_ms must be greater than 0",
            ));
        }
        Ok(())
    }
    pub fn with_env_overrides(self) -> Result<Self, Error> {
        self.apply_overrides(|key| env::var(key).ok())
    }
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(server) = lookup(WALLET_SERVER_ENV) {
            self.wallet_server = server;
        }
        if let Some(fee) = lookup(FEE_ENV) {
            self.fee = fee.trim().parse().map_err(|e| {
                Error::new(
                    ErrorKind::InvalidInput,
                    format!("Invalid {FEE_ENV} '{fee}': {e:?}"),
                )
            })?;
        }
        if let Some(timeout) = lookup(CONNECTION_TIMEOUT_ENV) {
            self.connection_timeout_ms = timeout.trim().parse().map_err(|e| {
                Error::new(
                    ErrorKind::InvalidInput,
                    format!("Invalid {CONNECTION_TIMEOUT_ENV} '{timeout}': {e:?}"),
                )
            })?;
        }
        Ok(self)
    }
    pub fn save_as_yaml<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        fs::write(
            path.as_ref(),
            serde_yaml::to_string(&self)
                .map_err(|e| Error::new(ErrorKind::Other, format!("{e:?}")))?,
        )
    }
}

impl TryFrom<&Path> for WalletNodeConfig {
    type Error = Error;
    fn try_from(value: &Path) -> Result<Self, Self::Error> {
        serde_yaml::from_str::<WalletNodeConfig>(&fs::read_to_string(value)?)
            .map_err(|e| Error::new(ErrorKind::InvalidData, format!("{e:?}")))
    }
}
impl TryFrom<&PathBuf> for WalletNodeConfig {
    type Error = Error;
    fn try_from(value: &PathBuf) -> Result<Self, Self::Error> {
        Self::try_from(value.as_path())
    }
}
