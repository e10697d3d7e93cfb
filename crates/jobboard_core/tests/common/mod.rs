#![allow(dead_code)]

use jobboard_core::{
    update, DashboardState, Effect, Job, JobQuery, Msg, QueryFailure, QueryResult, RequestSeq,
};

pub fn init_logging() {
    jobboard_logging::initialize_for_tests();
}

pub fn job(n: u64) -> Job {
    Job {
        url: format!("https://jobs.example.com/{n}"),
        title: format!("Engineer {n}"),
        company: "Acme".to_string(),
        platform: "LinkedIn".to_string(),
        description: String::new(),
        date_posted: None,
    }
}

/// Jobs `first..=last`, as the backend would return them for one page.
pub fn jobs(first: u64, last: u64) -> Vec<Job> {
    (first..=last).map(job).collect()
}

/// The single list request among `effects`.
pub fn fetch(effects: &[Effect]) -> (RequestSeq, JobQuery) {
    let fetches: Vec<_> = effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::FetchJobs { seq, query } => Some((*seq, query.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(fetches.len(), 1, "expected exactly one fetch in {effects:?}");
    fetches[0].clone()
}

pub fn succeed(
    state: DashboardState,
    seq: RequestSeq,
    jobs: Vec<Job>,
    total: u64,
) -> (DashboardState, Vec<Effect>) {
    update(
        state,
        Msg::JobsLoaded {
            seq,
            outcome: Ok(QueryResult { jobs, total }),
        },
    )
}

pub fn fail(state: DashboardState, seq: RequestSeq, reason: &str) -> (DashboardState, Vec<Effect>) {
    update(
        state,
        Msg::JobsLoaded {
            seq,
            outcome: Err(QueryFailure::new(reason)),
        },
    )
}

/// Dashboard that has loaded page 1 of `total` results.
pub fn loaded(total: u64) -> DashboardState {
    let (state, effects) = update(DashboardState::new(), Msg::Started);
    let (seq, _) = fetch(&effects);
    let (mut state, _) = succeed(state, seq, jobs(1, total.min(10)), total);
    state.consume_dirty();
    state
}
