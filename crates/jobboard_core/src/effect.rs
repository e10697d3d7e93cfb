#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue `GET /jobs` for `query`; report back with the same `seq`.
    FetchJobs {
        seq: crate::RequestSeq,
        query: crate::JobQuery,
    },
    /// Issue `POST /scrape`.
    TriggerScrape,
}
