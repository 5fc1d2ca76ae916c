use sitegrab_core::ProgressReport;

/// Sink for incremental progress updates.
///
/// Implementations must tolerate delivery from whatever execution context
/// the run mode uses; the parallel modes report from worker threads.
pub trait ProgressSink: Send + Sync {
    fn report(&self, report: ProgressReport);
}

/// Forwards progress reports into an mpsc channel, for shells that consume
/// events on their own thread.
pub struct ChannelProgressSink {
    tx: std::sync::mpsc::Sender<ProgressReport>,
}

impl ChannelProgressSink {
    pub fn new(tx: std::sync::mpsc::Sender<ProgressReport>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn report(&self, report: ProgressReport) {
        let _ = self.tx.send(report);
    }
}
