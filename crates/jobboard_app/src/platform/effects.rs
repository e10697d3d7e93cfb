use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use jobboard_client::{ApiEvent, ApiHandle, JobApi, JobPage, JobRecord, ListParams};
use jobboard_core::{Effect, Job, JobQuery, Msg, QueryFailure, QueryResult, RequestSeq};
use jobboard_logging::{board_debug, board_info, board_warn};

use super::app::AppEvent;

/// Executes core effects against the job API and feeds completions back as messages.
pub struct EffectRunner {
    api: Arc<ApiHandle>,
}

impl EffectRunner {
    pub fn new(api: Arc<dyn JobApi>, event_tx: mpsc::Sender<AppEvent>) -> std::io::Result<Self> {
        let runner = Self {
            api: Arc::new(ApiHandle::new(api)?),
        };
        runner.spawn_event_loop(event_tx);
        Ok(runner)
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchJobs { seq, query } => {
                    board_info!(
                        "FetchJobs seq={} page={} limit={} title={:?} platform={:?}",
                        seq,
                        query.page.page,
                        query.page.limit,
                        query.filters.title(),
                        query.filters.platform()
                    );
                    self.api.list_jobs(seq.value(), list_params(&query));
                }
                Effect::TriggerScrape => {
                    board_info!("TriggerScrape");
                    self.api.trigger_scrape();
                }
            }
        }
    }

    fn spawn_event_loop(&self, event_tx: mpsc::Sender<AppEvent>) {
        let api = self.api.clone();
        thread::spawn(move || {
            forward_events(|timeout| api.recv_timeout(timeout), &event_tx);
        });
    }
}

/// Pumps API events into the dashboard until either side goes away.
fn forward_events(
    mut recv: impl FnMut(Duration) -> Result<ApiEvent, mpsc::RecvTimeoutError>,
    event_tx: &mpsc::Sender<AppEvent>,
) {
    loop {
        let event = match recv(Duration::from_millis(100)) {
            Ok(event) => event,
            Err(mpsc::RecvTimeoutError::Timeout) => continue,
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                board_warn!("API worker stopped; no further results will arrive");
                break;
            }
        };
        if event_tx.send(AppEvent::Msg(map_event(event))).is_err() {
            board_debug!("Dashboard closed; stopping API event loop");
            break;
        }
    }
}

fn list_params(query: &JobQuery) -> ListParams {
    ListParams {
        page: query.page.page,
        limit: query.page.limit,
        title: query.filters.title().map(str::to_string),
        platform: query.filters.platform().map(str::to_string),
    }
}

fn map_event(event: ApiEvent) -> Msg {
    match event {
        ApiEvent::JobsListed { seq, result } => Msg::JobsLoaded {
            seq: RequestSeq::from(seq),
            outcome: result
                .map(map_page)
                .map_err(|err| QueryFailure::new(err.to_string())),
        },
        ApiEvent::ScrapeFinished { result } => Msg::ScrapeFinished(
            result
                .map(|ack| ack.message)
                .map_err(|err| err.to_string()),
        ),
    }
}

fn map_page(page: JobPage) -> QueryResult {
    QueryResult {
        jobs: page.jobs.into_iter().map(map_job).collect(),
        total: page.total,
    }
}

fn map_job(record: JobRecord) -> Job {
    Job {
        url: record.url,
        title: record.title,
        company: record.company,
        platform: record.platform,
        description: record.description,
        date_posted: record.date_posted,
    }
}
