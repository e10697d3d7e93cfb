use crate::view_model::{
    ActiveFilter, DashboardViewModel, PageLink, QueryStatus, RefreshView, ResultRange,
};
use crate::{
    Effect, FilterCriteria, JobQuery, PageRequest, Pagination, QueryCoordinator, QueryFailure,
    QueryResult, QueryState, RefreshOutcome, RefreshPhase, RefreshTrigger, RequestSeq,
};

/// Number of leading page links shown before the gap and the last page.
const LEADING_PAGE_LINKS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardState {
    filters: FilterCriteria,
    pagination: Pagination,
    query: QueryCoordinator,
    refresh: RefreshTrigger,
    dirty: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dashboard with a fixed page size for the whole session.
    pub fn with_page_size(limit: u32) -> Self {
        Self {
            pagination: Pagination::new(limit),
            ..Self::default()
        }
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn query_state(&self) -> &QueryState {
        self.query.state()
    }

    pub fn refresh_phase(&self) -> RefreshPhase {
        self.refresh.phase()
    }

    /// Returns whether anything visible changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> DashboardViewModel {
        let state = self.query.state();
        let page = self.pagination.page();
        let limit = self.pagination.limit();
        let page_count = self.pagination.page_count();
        let jobs = state.jobs().to_vec();
        let total = state.total();

        let status = match state {
            QueryState::Idle => QueryStatus::Idle,
            QueryState::Loading => QueryStatus::Loading,
            QueryState::Success(_) => QueryStatus::Ready,
            QueryState::Failed(failure) => QueryStatus::Failed {
                reason: failure.reason.clone(),
            },
        };

        let range = (!jobs.is_empty()).then(|| {
            let first = u64::from(page - 1) * u64::from(limit) + 1;
            let last = (u64::from(page) * u64::from(limit)).min(total);
            ResultRange { first, last, total }
        });

        DashboardViewModel {
            status,
            jobs,
            total,
            page,
            limit,
            page_count,
            can_prev: page > 1,
            can_next: page < page_count,
            range,
            page_links: page_links(page, page_count),
            active_filters: self
                .filters
                .active()
                .into_iter()
                .map(|(field, value)| ActiveFilter { field, value })
                .collect(),
            is_filtered: !self.filters.is_unset(),
            refresh: RefreshView {
                triggering: self.refresh.phase() == RefreshPhase::Triggering,
                last_outcome: self.refresh.last_outcome().cloned(),
            },
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Replaces the filters and loads their first page.
    pub(crate) fn apply_filters(&mut self, filters: FilterCriteria) -> Effect {
        self.filters = filters;
        self.pagination.reset();
        self.submit_current()
    }

    /// Moves to `page` and loads it; `None` if the page is out of range.
    pub(crate) fn navigate(&mut self, page: u32) -> Option<Effect> {
        if !self.pagination.go_to(page) {
            return None;
        }
        Some(self.submit_current())
    }

    pub(crate) fn next_page_target(&self) -> Option<u32> {
        self.pagination.next_target()
    }

    pub(crate) fn prev_page_target(&self) -> Option<u32> {
        self.pagination.prev_target()
    }

    /// Issues one list request for the current filters and page.
    pub(crate) fn submit_current(&mut self) -> Effect {
        let seq = self.query.submit();
        self.mark_dirty();
        Effect::FetchJobs {
            seq,
            query: JobQuery {
                filters: self.filters.clone(),
                page: PageRequest {
                    page: self.pagination.page(),
                    limit: self.pagination.limit(),
                },
            },
        }
    }

    pub(crate) fn commit_jobs(
        &mut self,
        seq: RequestSeq,
        outcome: Result<QueryResult, QueryFailure>,
    ) {
        let total = outcome.as_ref().ok().map(|result| result.total);
        if !self.query.commit(seq, outcome) {
            return;
        }
        if let Some(total) = total {
            self.pagination.apply_total(total);
        }
        self.mark_dirty();
    }

    pub(crate) fn begin_refresh(&mut self) -> bool {
        let started = self.refresh.begin();
        if started {
            self.mark_dirty();
        }
        started
    }

    /// Records a failed scrape on the refresh control and as the committed query state.
    pub(crate) fn fail_refresh(&mut self, reason: String) {
        if self.finish_refresh(RefreshOutcome::Failed(reason.clone())) {
            self.query.fail(QueryFailure::new(reason));
        }
    }

    pub(crate) fn finish_refresh(&mut self, outcome: RefreshOutcome) -> bool {
        let finished = self.refresh.finish(outcome);
        if finished {
            self.mark_dirty();
        }
        finished
    }
}

fn page_links(current: u32, page_count: u32) -> Vec<PageLink> {
    let leading = page_count.min(LEADING_PAGE_LINKS);
    let mut links: Vec<PageLink> = (1..=leading)
        .map(|number| PageLink::Page {
            number,
            current: number == current,
        })
        .collect();
    if page_count > LEADING_PAGE_LINKS {
        links.push(PageLink::Gap);
        links.push(PageLink::Page {
            number: page_count,
            current: page_count == current,
        });
    }
    links
}
