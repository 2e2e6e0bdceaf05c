use crate::constants::NQT_PER_BURST;
use serde::de::Error as SerdeError;
use serde::{Deserialize, Deserializer};

/// Scales whole BURST to NQT, `None` on overflow.
#[must_use]
pub fn burst_to_nqt(burst: u64) -> Option<u64> {
    burst.checked_mul(NQT_PER_BURST)
}

#[must_use]
pub fn nqt_to_burst(nqt: u64) -> String {
    let whole = nqt / NQT_PER_BURST;
    let fraction = nqt % NQT_PER_BURST;
    if fraction == 0 {
        whole.to_string()
    } else {
        let fraction = format!("{fraction:08}");
        format!("{whole}.{}", fraction.trim_end_matches('0'))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Number(u64),
    String(String),
}
impl StringOrNumber {
    fn into_u64<E: SerdeError>(self) -> Result<u64, E> {
        match self {
            StringOrNumber::Number(n) => Ok(n),
            StringOrNumber::String(s) => s
                .trim()
                .parse()
                .map_err(|e| E::custom(format!("Invalid integer '{s}': {e}"))),
        }
    }
}

// The node quotes NQT amounts, base target and height in some responses.
pub fn u64_from_str_or_num<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer)?.into_u64()
}

pub fn opt_u64_from_str_or_num<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<StringOrNumber>::deserialize(deserializer)?
        .map(StringOrNumber::into_u64)
        .transpose()
}
