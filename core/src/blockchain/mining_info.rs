use crate::formatting::u64_from_str_or_num;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct MiningInfo {
    #[serde(rename = "generationSignature")]
    pub generation_signature: String,
    #[serde(rename = "baseTarget", deserialize_with = "u64_from_str_or_num")]
    pub base_target: u64,
    #[serde(deserialize_with = "u64_from_str_or_num")]
    pub height: u64,
    #[serde(rename = "requestProcessingTime", default)]
    pub request_processing_time: Option<u64>,
}
