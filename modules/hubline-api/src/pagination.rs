use hubline_common::QueryConfig;

/// Resolved pagination window. 1-based pages over an already-filtered,
/// ordered result set; never changes which records match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    page: u32,
    per_page: u32,
}

impl Page {
    /// Resolve caller-supplied pagination against the configured bounds.
    ///
    /// Policy: absent or invalid input (`page < 1`, `per_page <= 0`) clamps
    /// to the defaults rather than producing a negative skip or an empty
    /// window; `per_page` above the configured maximum clamps to the max.
    pub fn from_args(page: Option<i32>, per_page: Option<i32>, config: &QueryConfig) -> Self {
        let page = match page {
            Some(p) if p >= 1 => p as u32,
            _ => 1,
        };
        let per_page = match per_page {
            Some(n) if n >= 1 => (n as u32).min(config.max_per_page),
            _ => config.default_per_page,
        };
        Self { page, per_page }
    }

    pub fn skip(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.per_page)
    }
}
