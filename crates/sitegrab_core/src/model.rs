/// One downloaded page: the target url and the response body as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteData {
    pub url: String,
    pub body: String,
}

impl SiteData {
    pub fn new(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            body: body.into(),
        }
    }

    /// Body size in bytes, always derived from the payload itself.
    pub fn byte_len(&self) -> usize {
        self.body.len()
    }
}

/// A self-consistent view of cumulative run progress.
///
/// The percentage is computed from the completed list at construction time,
/// never accumulated separately, so the two fields cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressReport {
    completed: Vec<SiteData>,
    percent: u8,
}

impl ProgressReport {
    /// Builds a report for `completed` results out of `total` targets.
    ///
    /// `total` must be non-zero and at least `completed.len()`.
    pub fn new(completed: Vec<SiteData>, total: usize) -> Self {
        debug_assert!(total > 0);
        debug_assert!(completed.len() <= total);
        let percent = (completed.len() * 100 / total) as u8;
        Self { completed, percent }
    }

    /// Results gathered so far, in the order they were collected.
    pub fn completed(&self) -> &[SiteData] {
        &self.completed
    }

    /// Whole-number percentage in `[0, 100]`, floor of completed/total.
    pub fn percent(&self) -> u8 {
        self.percent
    }
}
