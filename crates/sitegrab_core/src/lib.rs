//! Sitegrab core: pure data model for fetch results and progress.
mod model;
mod targets;

pub use model::{ProgressReport, SiteData};
pub use targets::default_targets;
