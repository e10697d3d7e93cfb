#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Dashboard opened; load the first page with no filters.
    Started,
    /// User applied a new set of filters.
    FiltersSubmitted(crate::FilterCriteria),
    /// User cleared all filters.
    FiltersCleared,
    /// User removed a single active filter.
    FilterFieldCleared(crate::FilterField),
    /// User asked for a specific page.
    PageRequested(u32),
    NextPage,
    PrevPage,
    /// User asked to reload the current page.
    RetryRequested,
    /// A list request completed.
    JobsLoaded {
        seq: crate::RequestSeq,
        outcome: Result<crate::QueryResult, crate::QueryFailure>,
    },
    /// User clicked the refresh (scrape) control.
    RefreshClicked,
    /// The scrape request completed: acknowledgement message or failure reason.
    ScrapeFinished(Result<String, String>),
    /// Fallback for placeholder wiring.
    NoOp,
}
