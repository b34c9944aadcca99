use std::time::Duration;

/// Sink for pipeline stage events. The engine reports each stage boundary
/// here; implementations decide where the events go.
pub trait StageObserver {
    fn stage(&self, name: &str, elapsed: Duration, records: usize);
}

/// Forwards stage events to the log facade.
pub struct LogObserver;

impl StageObserver for LogObserver {
    fn stage(&self, name: &str, elapsed: Duration, records: usize) {
        log::info!("{}: {} records in {:?}", name, records, elapsed);
    }
}

/// Discards stage events.
pub struct NoopObserver;

impl StageObserver for NoopObserver {
    fn stage(&self, _name: &str, _elapsed: Duration, _records: usize) {}
}
