pub mod wallet;

use burst_faucet_core::config::WalletNodeConfig;
use burst_faucet_core::constants::ERROR_MARKER;
use burst_faucet_core::errors::{NodeError, WalletError};
use log::debug;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::str::FromStr;

fn _version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
fn _pkg_name() -> &'static str {
    env!("CARGO_PKG_NAME")
}

pub fn version() -> String {
    format!("{}: {}", _pkg_name(), _version())
}

#[test]
fn test_version() {
    println!("{}", version());
}

pub fn get_client(config: &WalletNodeConfig) -> Result<Client, Error> {
    ClientBuilder::new()
        .connect_timeout(config.connection_timeout())
        .timeout(config.connection_timeout())
        .user_agent(version())
        .build()
        .map_err(|e| Error::new(ErrorKind::Other, format!("{:?}", e)))
}

pub fn get_headers(
    method: &str,
    additional_headers: &Option<HashMap<String, String>>,
) -> Result<HeaderMap, WalletError> {
    let mut header_map = HeaderMap::new();
    if let Some(m) = additional_headers {
        for (k, v) in m {
            header_map.insert(
                HeaderName::from_str(k).map_err(|e| WalletError::InvalidRequest {
                    method: method.to_string(),
                    message: format!("Failed to Parse Header Name {k}, {e}"),
                })?,
                HeaderValue::from_str(v).map_err(|e| WalletError::InvalidRequest {
                    method: method.to_string(),
                    message: format!("Failed to Parse Header value for {k}, {e}"),
                })?,
            );
        }
    }
    Ok(header_map)
}

/// Sends one form-encoded `requestType` call and classifies the answer.
///
/// `params` must not include `requestType`; it is added from `method`.
/// Parameter values are never logged since they may carry a secret phrase.
pub async fn post<T>(
    client: &Client,
    url: &str,
    method: &str,
    params: &[(&str, String)],
    additional_headers: &Option<HashMap<String, String>>,
    timeout_ms: u64,
    status_check: StatusCheck,
) -> Result<T, WalletError>
where
    T: DeserializeOwned,
{
    let header_map = get_headers(method, additional_headers)?;
    let mut form: Vec<(&str, &str)> = Vec::with_capacity(params.len() + 1);
    form.push(("requestType", method));
    form.extend(params.iter().map(|(k, v)| (*k, v.as_str())));
    debug!("Sending {method} to {url}");
    let resp = client
        .post(url)
        .headers(header_map)
        .form(&form)
        .send()
        .await
        .map_err(|e| request_error(method, timeout_ms, e))?;
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| request_error(method, timeout_ms, e))?;
    debug!("Got {status} for {method}");
    parse_response(method, status, &body, status_check)
}

pub fn request_error(method: &str, timeout_ms: u64, err: reqwest::Error) -> WalletError {
    if err.is_timeout() {
        WalletError::Timeout {
            method: method.to_string(),
            timeout_ms,
        }
    } else {
        WalletError::Transport {
            method: method.to_string(),
            message: err.to_string(),
        }
    }
}

/// How the HTTP status of an answer is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCheck {
    /// Only the `errorDescription` field signals a failure, whatever the status.
    MarkerOnly,
    /// Anything but 200 is `BadStatus` before the body is looked at.
    RequireOk,
}

/// With `RequireOk` a status other than 200 fails first. Then an
/// `errorDescription` field on the top level object, then decoding into `T`.
pub fn parse_response<T>(
    method: &str,
    status: StatusCode,
    body: &str,
    status_check: StatusCheck,
) -> Result<T, WalletError>
where
    T: DeserializeOwned,
{
    if status_check == StatusCheck::RequireOk && status != StatusCode::OK {
        return Err(WalletError::BadStatus {
            method: method.to_string(),
            status: status.as_u16(),
            body: body.to_string(),
        });
    }
    let value: Value = serde_json::from_str(body).map_err(|e| WalletError::InvalidResponse {
        method: method.to_string(),
        message: e.to_string(),
        body: body.to_string(),
    })?;
    if let Some(marker) = value.get(ERROR_MARKER) {
        let error = serde_json::from_value::<NodeError>(value.clone()).unwrap_or_else(|_| {
            NodeError {
                error_code: None,
                error_description: marker.to_string(),
            }
        });
        return Err(WalletError::Node {
            method: method.to_string(),
            error,
        });
    }
    serde_json::from_value(value).map_err(|e| WalletError::InvalidResponse {
        method: method.to_string(),
        message: e.to_string(),
        body: body.to_string(),
    })
}
