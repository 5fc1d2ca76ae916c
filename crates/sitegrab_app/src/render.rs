//! Terminal output for results and progress.

use std::sync::mpsc;
use std::thread;

use sitegrab_core::{ProgressReport, SiteData};

pub fn print_results(results: &[SiteData]) {
    for data in results {
        println!(
            "{} downloaded: {} characters",
            data.url,
            data.body.chars().count()
        );
    }
}

/// Consumes progress reports on a dedicated thread until the channel closes.
pub fn spawn_progress_printer(rx: mpsc::Receiver<ProgressReport>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        for report in rx {
            println!(
                "downloaded {}% ({} sites)",
                report.percent(),
                report.completed().len()
            );
        }
    })
}
