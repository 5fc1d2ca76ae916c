use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::thread;

use futures_util::future::try_join_all;
use grab_logging::{grab_debug, grab_error, grab_info, grab_warn};
use sitegrab_core::{ProgressReport, SiteData};
use tokio_util::sync::CancellationToken;

use crate::fetch::{FetchSettings, SiteFetcher};
use crate::progress::ProgressSink;
use crate::types::{FetchError, RunError};

/// Runs the single-fetch operation over an ordered target list under one of
/// four concurrency strategies.
///
/// Every mode is all-or-nothing: the first fetch failure aborts the run and
/// surfaces as `RunError::Fetch`. Cancellation is supported only by
/// [`Downloader::run_with_progress`]; the other modes run to completion once
/// started.
pub struct Downloader {
    targets: Vec<String>,
    fetcher: SiteFetcher,
}

impl Downloader {
    pub fn new(targets: Vec<String>, settings: FetchSettings) -> Self {
        Self {
            targets,
            fetcher: SiteFetcher::new(settings),
        }
    }

    /// Convenience constructor over the built-in demo target list.
    pub fn with_default_targets(settings: FetchSettings) -> Self {
        Self::new(sitegrab_core::default_targets(), settings)
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// Sequential blocking run. Fetches targets one at a time, in order;
    /// total wall time is the sum of the individual fetch latencies.
    pub fn run_blocking(&self) -> Result<Vec<SiteData>, RunError> {
        grab_info!("sequential run over {} targets", self.targets.len());
        let mut results = Vec::with_capacity(self.targets.len());
        for url in &self.targets {
            results.push(self.fetcher.fetch_blocking(url)?);
        }
        Ok(results)
    }

    /// Parallel blocking run on a worker pool sized to the machine.
    ///
    /// Result order follows completion order, not input order.
    pub fn run_parallel_blocking(&self) -> Result<Vec<SiteData>, RunError> {
        self.pooled_run(None)
    }

    /// Sequential suspendable run with progress and cancellation.
    ///
    /// After each completed fetch the cumulative results are reported through
    /// `sink`, then the token is polled; if cancellation was requested the
    /// run ends with [`RunError::Cancelled`]. Results gathered before the
    /// cancellation remain visible only through the snapshots already
    /// delivered, never through the return value.
    pub async fn run_with_progress(
        &self,
        sink: &dyn ProgressSink,
        cancel: &CancellationToken,
    ) -> Result<Vec<SiteData>, RunError> {
        let total = self.targets.len();
        grab_info!("sequential async run over {total} targets");
        let mut results = Vec::with_capacity(total);
        for url in &self.targets {
            let data = self.fetcher.fetch(url).await?;
            results.push(data);
            sink.report(ProgressReport::new(results.clone(), total));
            if cancel.is_cancelled() {
                grab_warn!("run cancelled after {} of {total} targets", results.len());
                return Err(RunError::Cancelled);
            }
        }
        Ok(results)
    }

    /// Concurrent suspendable run: all fetches in flight at once, joined into
    /// a list that matches input order. The first failure aborts the join.
    /// No progress reporting and no cancellation hook.
    pub async fn run_concurrent(&self) -> Result<Vec<SiteData>, RunError> {
        grab_info!("concurrent async run over {} targets", self.targets.len());
        let fetches = self.targets.iter().map(|url| self.fetcher.fetch(url));
        Ok(try_join_all(fetches).await?)
    }

    /// Parallel blocking run that also reports progress after every
    /// completion. Same pool and ordering behavior as
    /// [`Downloader::run_parallel_blocking`]; no cancellation hook.
    pub fn run_parallel_with_progress(
        &self,
        sink: &dyn ProgressSink,
    ) -> Result<Vec<SiteData>, RunError> {
        self.pooled_run(Some(sink))
    }

    /// Shared worker-pool loop for the two parallel blocking modes.
    ///
    /// Workers pull target indices from a shared cursor until the list is
    /// exhausted or a failure has been recorded. Appends go through one
    /// mutex; the snapshot for `sink` is built and delivered under that same
    /// lock so successive reports carry non-decreasing percentages.
    fn pooled_run(&self, sink: Option<&dyn ProgressSink>) -> Result<Vec<SiteData>, RunError> {
        let total = self.targets.len();
        let workers = thread::available_parallelism()
            .map(NonZeroUsize::get)
            .unwrap_or(4)
            .min(total.max(1));
        grab_info!("parallel run over {total} targets on {workers} workers");

        let cursor = AtomicUsize::new(0);
        let results = Mutex::new(Vec::with_capacity(total));
        let failure = Mutex::new(None::<FetchError>);

        thread::scope(|scope| {
            for _ in 0..workers {
                scope.spawn(|| loop {
                    if failure.lock().unwrap().is_some() {
                        break;
                    }
                    let index = cursor.fetch_add(1, Ordering::Relaxed);
                    let Some(url) = self.targets.get(index) else {
                        break;
                    };
                    grab_debug!("worker fetching {url}");
                    match self.fetcher.fetch_blocking(url) {
                        Ok(data) => {
                            let mut completed = results.lock().unwrap();
                            completed.push(data);
                            if let Some(sink) = sink {
                                sink.report(ProgressReport::new(completed.clone(), total));
                            }
                        }
                        Err(err) => {
                            // First failure wins; in-flight fetches finish
                            // but no new work is taken.
                            failure.lock().unwrap().get_or_insert(err);
                        }
                    }
                });
            }
        });

        let failure = failure.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(err) = failure {
            grab_error!("parallel run failed: {err}");
            return Err(err.into());
        }
        Ok(results.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner()))
    }
}
