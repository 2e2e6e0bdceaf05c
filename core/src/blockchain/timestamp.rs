use serde::{Deserialize, Serialize};

/// Node clock, in seconds since the Burst genesis block.
#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Timestamp {
    pub time: u64,
    #[serde(rename = "requestProcessingTime", default)]
    pub request_processing_time: u64,
}
