use std::time::Instant;
use time::{format_description::FormatItem, macros::format_description, OffsetDateTime};

const TIMESTAMP_FORMAT_LOCAL: &[FormatItem] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]");
const TIMESTAMP_FORMAT_OFFSET: &[FormatItem] = format_description!(
    "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3][offset_hour sign:mandatory]:[offset_minute]"
);
const TIMESTAMP_FORMAT_UTC: &[FormatItem] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]Z");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampFormat {
    Local,
    Offset,
    UTC,
    /// Elapsed time since the logger was built.
    Relative,
}
impl TimestampFormat {
    #[must_use]
    pub fn uses_local_offset(&self) -> bool {
        matches!(self, TimestampFormat::Local | TimestampFormat::Offset)
    }
    #[must_use]
    pub fn format(&self, timestamp: OffsetDateTime, start: Instant) -> String {
        let formatted = match self {
            TimestampFormat::Local => timestamp.format(&TIMESTAMP_FORMAT_LOCAL),
            TimestampFormat::Offset => timestamp.format(&TIMESTAMP_FORMAT_OFFSET),
            TimestampFormat::UTC => timestamp.format(&TIMESTAMP_FORMAT_UTC),
            TimestampFormat::Relative => return relative(start),
        };
        formatted.unwrap_or_else(|_| timestamp.unix_timestamp().to_string())
    }
}

fn relative(start: Instant) -> String {
    let duration = Instant::now().duration_since(start);
    let total_seconds = duration.as_secs();
    format!(
        "{:02}:{:02}:{:02}.{:03}",
        total_seconds / 3600,
        (total_seconds % 3600) / 60,
        total_seconds % 60,
        duration.subsec_millis()
    )
}
