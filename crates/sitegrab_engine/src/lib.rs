//! Sitegrab engine: the four-strategy fetch orchestrator.
mod fetch;
mod progress;
mod runner;
mod types;

pub use fetch::{FetchSettings, SiteFetcher};
pub use progress::{ChannelProgressSink, ProgressSink};
pub use runner::Downloader;
pub use types::{FailureKind, FetchError, RunError};

pub use tokio_util::sync::CancellationToken;
