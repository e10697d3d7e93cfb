use crate::{FilterField, Job, RefreshOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed {
        reason: String,
    },
}

/// "Showing `first` to `last` of `total`", 1-based and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultRange {
    pub first: u64,
    pub last: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page { number: u32, current: bool },
    Gap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveFilter {
    pub field: FilterField,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RefreshView {
    pub triggering: bool,
    pub last_outcome: Option<RefreshOutcome>,
}

/// Snapshot of a fully committed dashboard state, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardViewModel {
    pub status: QueryStatus,
    pub jobs: Vec<Job>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub page_count: u32,
    pub can_prev: bool,
    pub can_next: bool,
    pub range: Option<ResultRange>,
    pub page_links: Vec<PageLink>,
    pub active_filters: Vec<ActiveFilter>,
    pub is_filtered: bool,
    pub refresh: RefreshView,
}
