//! Jobboard core: pure query, pagination and refresh state machine plus view-model helpers.
mod effect;
mod filters;
mod msg;
mod pagination;
mod query;
mod refresh;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use filters::{canonical_platform, FilterCriteria, FilterField, KNOWN_PLATFORMS};
pub use msg::Msg;
pub use pagination::{page_count_for, Pagination, DEFAULT_PAGE_SIZE};
pub use query::{
    Job, JobQuery, PageRequest, QueryCoordinator, QueryFailure, QueryResult, QueryState,
    RequestSeq,
};
pub use refresh::{RefreshOutcome, RefreshPhase, RefreshTrigger};
pub use state::DashboardState;
pub use update::update;
pub use view_model::{
    ActiveFilter, DashboardViewModel, PageLink, QueryStatus, RefreshView, ResultRange,
};
