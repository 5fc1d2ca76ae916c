//! Presentation shell: selects one orchestrator mode, runs it, and prints
//! each result plus the total wall time.
mod cli;
mod render;

use std::sync::mpsc;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use grab_logging::grab_info;
use log::LevelFilter;
use sitegrab_core::SiteData;
use sitegrab_engine::{
    CancellationToken, ChannelProgressSink, Downloader, FetchSettings, RunError,
};

use crate::cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    grab_logging::initialize_terminal(level);

    let downloader = Downloader::with_default_targets(FetchSettings::default());
    let watch = Instant::now();
    let outcome = match cli.command {
        Commands::Sync => downloader.run_blocking(),
        Commands::ParallelSync => downloader.run_parallel_blocking(),
        Commands::Async => run_cancellable(&downloader)?,
        Commands::ParallelAsync { no_progress: true } => run_concurrent(&downloader)?,
        Commands::ParallelAsync { no_progress: false } => run_parallel_with_progress(&downloader),
    };

    match outcome {
        Ok(results) => {
            render::print_results(&results);
            println!("Total execution time: {}ms", watch.elapsed().as_millis());
            Ok(())
        }
        Err(RunError::Cancelled) => {
            // Partial results were already visible through the progress
            // lines; the run itself ends as cancelled, not failed.
            println!("The download was cancelled.");
            println!("Total execution time: {}ms", watch.elapsed().as_millis());
            Ok(())
        }
        Err(RunError::Fetch(err)) => Err(err.into()),
    }
}

/// Sequential suspendable run with progress, Ctrl-C wired to the
/// cancellation handle.
fn run_cancellable(downloader: &Downloader) -> anyhow::Result<Result<Vec<SiteData>, RunError>> {
    let runtime = tokio::runtime::Runtime::new().context("start tokio runtime")?;
    let token = CancellationToken::new();
    let cancel = token.clone();
    runtime.spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            grab_info!("cancellation requested");
            cancel.cancel();
        }
    });

    let (tx, rx) = mpsc::channel();
    let printer = render::spawn_progress_printer(rx);
    let sink = ChannelProgressSink::new(tx);
    let result = runtime.block_on(downloader.run_with_progress(&sink, &token));
    drop(sink);
    let _ = printer.join();
    Ok(result)
}

/// Every fetch in flight at once, joined in input order.
fn run_concurrent(downloader: &Downloader) -> anyhow::Result<Result<Vec<SiteData>, RunError>> {
    let runtime = tokio::runtime::Runtime::new().context("start tokio runtime")?;
    Ok(runtime.block_on(downloader.run_concurrent()))
}

/// Worker-pool run with progress lines printed as the workers complete.
fn run_parallel_with_progress(downloader: &Downloader) -> Result<Vec<SiteData>, RunError> {
    let (tx, rx) = mpsc::channel();
    let printer = render::spawn_progress_printer(rx);
    let sink = ChannelProgressSink::new(tx);
    let result = downloader.run_parallel_with_progress(&sink);
    drop(sink);
    let _ = printer.join();
    result
}
