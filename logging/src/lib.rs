pub mod event;
pub mod format;

pub use event::{parse_level, LogEvent};
pub use format::TimestampFormat;

#[cfg(feature = "color")]
use colored::Colorize;
use log::{Level, Log, Metadata, Record, SetLoggerError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use time::OffsetDateTime;
use tokio::sync::broadcast::{Receiver, Sender};

const EVENT_CHANNEL_SIZE: usize = 1024;

/// `log` backend printing to stdout and broadcasting every record it accepts.
pub struct FaucetLogger {
    use_colors: bool,
    show_timestamp: bool,
    show_target: bool,
    current_level: Level,
    timestamp_format: TimestampFormat,
    target_levels: Vec<(String, Level)>,
    start_instant: Instant,
    printed_offset_error: AtomicBool,
    channel: Sender<LogEvent>,
}

pub struct FaucetLoggerBuilder {
    use_colors: bool,
    show_timestamp: bool,
    show_target: bool,
    current_level: Level,
    timestamp_format: TimestampFormat,
    target_levels: Vec<(String, Level)>,
}

impl Default for FaucetLoggerBuilder {
    fn default() -> Self {
        Self {
            use_colors: true,
            show_timestamp: true,
            show_target: true,
            current_level: Level::Info,
            timestamp_format: TimestampFormat::Local,
            target_levels: vec![],
        }
    }
}

impl FaucetLoggerBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn use_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }
    pub fn show_timestamp(mut self, show_timestamp: bool) -> Self {
        self.show_timestamp = show_timestamp;
        self
    }
    pub fn show_target(mut self, show_target: bool) -> Self {
        self.show_target = show_target;
        self
    }
    pub fn timestamp_format(mut self, timestamp_format: TimestampFormat) -> Self {
        self.timestamp_format = timestamp_format;
        self
    }
    pub fn current_level(mut self, current_level: Level) -> Self {
        self.current_level = current_level;
        self
    }
    /// Overrides the level for targets starting with `target`; the longest prefix wins.
    pub fn with_target_level(mut self, target: &str, level: Level) -> Self {
        self.target_levels.push((target.to_string(), level));
        self
    }
    pub fn build(mut self) -> FaucetLogger {
        self.target_levels.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        let (channel, _) = tokio::sync::broadcast::channel(EVENT_CHANNEL_SIZE);
        FaucetLogger {
            use_colors: self.use_colors,
            show_timestamp: self.show_timestamp,
            show_target: self.show_target,
            current_level: self.current_level,
            timestamp_format: self.timestamp_format,
            target_levels: self.target_levels,
            start_instant: Instant::now(),
            printed_offset_error: AtomicBool::new(false),
            channel,
        }
    }
    pub fn init(self) -> Result<&'static FaucetLogger, SetLoggerError> {
        self.build().init()
    }
}

impl FaucetLogger {
    pub fn builder() -> FaucetLoggerBuilder {
        FaucetLoggerBuilder::new()
    }
    /// Installs the logger process wide. The logger lives until exit.
    pub fn init(self) -> Result<&'static Self, SetLoggerError> {
        let max_level = self
            .target_levels
            .iter()
            .map(|(_, level)| *level)
            .chain(std::iter::once(self.current_level))
            .max()
            .unwrap_or(self.current_level);
        let logger: &'static Self = Box::leak(Box::new(self));
        log::set_logger(logger).map(|()| {
            log::set_max_level(max_level.to_level_filter());
            logger
        })
    }
    pub fn subscribe(&self) -> Receiver<LogEvent> {
        self.channel.subscribe()
    }
    #[must_use]
    pub fn level_for(&self, target: &str) -> Level {
        self.target_levels
            .iter()
            .find(|(prefix, _)| target.starts_with(prefix.as_str()))
            .map_or(self.current_level, |(_, level)| *level)
    }
    fn now(&self) -> OffsetDateTime {
        if self.timestamp_format.uses_local_offset() {
            OffsetDateTime::now_local().unwrap_or_else(|_| {
                if !self.printed_offset_error.swap(true, Ordering::SeqCst) {
                    eprintln!("Failed to detect Local Offset, Defaulting to UTC");
                }
                OffsetDateTime::now_utc()
            })
        } else {
            OffsetDateTime::now_utc()
        }
    }
    fn level_prefix(&self, level: Level) -> String {
        let level_str = format!("{:<5}", level.to_string());
        #[cfg(feature = "color")]
        if self.use_colors {
            return match level {
                Level::Error => level_str.red().to_string(),
                Level::Warn => level_str.yellow().to_string(),
                Level::Info => level_str.cyan().to_string(),
                Level::Debug => level_str.purple().to_string(),
                Level::Trace => level_str.magenta().to_string(),
            };
        }
        level_str
    }
    #[must_use]
    pub fn render(&self, event: &LogEvent) -> String {
        let mut line = String::new();
        if self.show_timestamp {
            line.push_str(
                &self
                    .timestamp_format
                    .format(event.timestamp, self.start_instant),
            );
            line.push(' ');
        }
        line.push_str(&self.level_prefix(event.level));
        if self.show_target {
            line.push_str(&format!(" [{}]", event.target));
        }
        line.push(' ');
        line.push_str(&event.message);
        line
    }
}

impl Log for FaucetLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level_for(metadata.target())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let event = LogEvent {
            level: record.level(),
            target: if record.target().is_empty() {
                record.module_path().unwrap_or_default()
            } else {
                record.target()
            }
            .to_string(),
            message: record.args().to_string(),
            timestamp: self.now(),
        };
        println!("{}", self.render(&event));
        //No subscribers is not an error
        let _ = self.channel.send(event);
    }

    fn flush(&self) {}
}
