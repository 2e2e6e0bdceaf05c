use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct SendMoneyResponse {
    pub transaction: String,
    #[serde(rename = "fullHash", default)]
    pub full_hash: Option<String>,
    #[serde(default)]
    pub broadcasted: Option<bool>,
    #[serde(rename = "requestProcessingTime", default)]
    pub request_processing_time: u64,
}
