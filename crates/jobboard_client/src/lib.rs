//! Jobboard client: HTTP access to the job backend and a channel-driven runner for it.
mod api;
mod error;
mod handle;
mod types;

pub use api::{FetchSettings, JobApi, ReqwestJobApi};
pub use error::{ApiError, ShapeError};
pub use handle::{ApiEvent, ApiHandle};
pub use types::{JobPage, JobRecord, ListParams, ScrapeAck};
