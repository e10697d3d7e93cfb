use crate::{DashboardState, Effect, FilterCriteria, Msg, RefreshOutcome};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: DashboardState, msg: Msg) -> (DashboardState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started | Msg::RetryRequested => vec![state.submit_current()],
        Msg::FiltersSubmitted(filters) => {
            // Identical filters still reset to page 1 and reload.
            vec![state.apply_filters(filters)]
        }
        Msg::FiltersCleared => vec![state.apply_filters(FilterCriteria::unset())],
        Msg::FilterFieldCleared(field) => {
            if state.filters().get(field).is_none() {
                return (state, Vec::new());
            }
            let filters = state.filters().without(field);
            vec![state.apply_filters(filters)]
        }
        Msg::PageRequested(page) => state.navigate(page).into_iter().collect(),
        Msg::NextPage => state
            .next_page_target()
            .and_then(|page| state.navigate(page))
            .into_iter()
            .collect(),
        Msg::PrevPage => state
            .prev_page_target()
            .and_then(|page| state.navigate(page))
            .into_iter()
            .collect(),
        Msg::JobsLoaded { seq, outcome } => {
            state.commit_jobs(seq, outcome);
            Vec::new()
        }
        Msg::RefreshClicked => {
            if state.begin_refresh() {
                vec![Effect::TriggerScrape]
            } else {
                Vec::new()
            }
        }
        Msg::ScrapeFinished(Ok(message)) => {
            if !state.finish_refresh(RefreshOutcome::Acknowledged(message)) {
                return (state, Vec::new());
            }
            // The scrape may have changed both totals and ordering.
            let filters = state.filters().clone();
            vec![state.apply_filters(filters)]
        }
        Msg::ScrapeFinished(Err(reason)) => {
            state.fail_refresh(reason);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
