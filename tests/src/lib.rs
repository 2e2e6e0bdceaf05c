

use burst_faucet_logger::{FaucetLogger, LogEvent};
use log::Level;
use std::sync::OnceLock;
use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::broadcast::Receiver;

static TEST_LOGGER: OnceLock<Option<&'static FaucetLogger>> = OnceLock::new();

/// Installs a trace level logger once per test binary.
pub fn test_logger() -> Option<&'static FaucetLogger> {
    *TEST_LOGGER.get_or_init(|| {
        FaucetLogger::builder()
            .use_colors(false)
            .current_level(Level::Trace)
            .init()
            .ok()
    })
}

/// Everything broadcast since the last drain.
pub fn drain_events(receiver: &mut Receiver<LogEvent>) -> Vec<LogEvent> {
    let mut events = vec![];
    loop {
        match receiver.try_recv() {
            Ok(event) => events.push(event),
            Err(TryRecvError::Lagged(_)) => continue,
            Err(_) => break,
        }
    }
    events
}
