use std::fmt;

use crate::FilterCriteria;

/// Token identifying one submitted list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSeq(u64);

impl RequestSeq {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for RequestSeq {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for RequestSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

/// Everything needed to issue one `GET /jobs` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobQuery {
    pub filters: FilterCriteria,
    pub page: PageRequest,
}

impl JobQuery {
    /// Query parameters in wire order. Unset filters are left out entirely.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.page.to_string()),
            ("limit", self.page.limit.to_string()),
        ];
        if let Some(title) = self.filters.title() {
            pairs.push(("title", title.to_string()));
        }
        if let Some(platform) = self.filters.platform() {
            pairs.push(("platform", platform.to_string()));
        }
        pairs
    }
}

/// A job posting. The core only relies on `url` as its identity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Job {
    pub url: String,
    pub title: String,
    pub company: String,
    pub platform: String,
    pub description: String,
    pub date_posted: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryResult {
    pub jobs: Vec<Job>,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFailure {
    pub reason: String,
}

impl QueryFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryState {
    #[default]
    Idle,
    Loading,
    Success(QueryResult),
    Failed(QueryFailure),
}

impl QueryState {
    /// Jobs of the committed result; empty for every state but `Success`.
    pub fn jobs(&self) -> &[Job] {
        match self {
            QueryState::Success(result) => &result.jobs,
            _ => &[],
        }
    }

    /// Reported total; 0 for every state but `Success`.
    pub fn total(&self) -> u64 {
        match self {
            QueryState::Success(result) => result.total,
            _ => 0,
        }
    }
}

/// Owns the single authoritative [`QueryState`].
///
/// Every submit issues a fresh [`RequestSeq`] and replaces the awaited one, so
/// only the most recently submitted request can ever commit. Completions for
/// any other token are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryCoordinator {
    last_issued: u64,
    awaiting: Option<RequestSeq>,
    state: QueryState,
}

impl QueryCoordinator {
    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub(crate) fn submit(&mut self) -> RequestSeq {
        self.last_issued += 1;
        let seq = RequestSeq(self.last_issued);
        self.awaiting = Some(seq);
        self.state = QueryState::Loading;
        seq
    }

    /// Commits `outcome` if `seq` is the awaited request. Returns whether the
    /// state changed.
    pub(crate) fn commit(
        &mut self,
        seq: RequestSeq,
        outcome: Result<QueryResult, QueryFailure>,
    ) -> bool {
        if self.awaiting != Some(seq) {
            return false;
        }
        self.awaiting = None;
        self.state = match outcome {
            Ok(result) => QueryState::Success(result),
            Err(failure) => QueryState::Failed(failure),
        };
        true
    }

    /// Commits `failure` without a list response. Whatever request was in
    /// flight is abandoned, so its late response cannot replace the failure.
    pub(crate) fn fail(&mut self, failure: QueryFailure) {
        self.awaiting = None;
        self.state = QueryState::Failed(failure);
    }
}
