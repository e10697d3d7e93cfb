use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use jobboard_logging::{board_debug, board_info, board_warn};
use tokio_util::sync::CancellationToken;

use crate::{ApiError, JobApi, JobPage, ListParams, ScrapeAck};

enum ApiCommand {
    ListJobs { seq: u64, params: ListParams },
    TriggerScrape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiEvent {
    JobsListed {
        seq: u64,
        result: Result<JobPage, ApiError>,
    },
    ScrapeFinished {
        result: Result<ScrapeAck, ApiError>,
    },
}

/// Runs [`JobApi`] calls on a background tokio runtime.
///
/// Commands go in through [`ApiHandle::list_jobs`] and
/// [`ApiHandle::trigger_scrape`]; completions come back as [`ApiEvent`]s.
/// Starting a list request cancels the previous one, which then reports
/// nothing.
pub struct ApiHandle {
    cmd_tx: mpsc::Sender<ApiCommand>,
    event_rx: Mutex<mpsc::Receiver<ApiEvent>>,
}

impl ApiHandle {
    pub fn new(api: Arc<dyn JobApi>) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let mut in_flight: Option<CancellationToken> = None;
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    ApiCommand::ListJobs { seq, params } => {
                        if let Some(previous) = in_flight.take() {
                            previous.cancel();
                        }
                        let token = CancellationToken::new();
                        in_flight = Some(token.clone());
                        runtime.spawn(list_jobs(api.clone(), seq, params, token, event_tx.clone()));
                    }
                    ApiCommand::TriggerScrape => {
                        runtime.spawn(trigger_scrape(api.clone(), event_tx.clone()));
                    }
                }
            }
            board_debug!("API command channel closed; shutting down runtime");
        });

        Ok(Self {
            cmd_tx,
            event_rx: Mutex::new(event_rx),
        })
    }

    pub fn list_jobs(&self, seq: u64, params: ListParams) {
        let _ = self.cmd_tx.send(ApiCommand::ListJobs { seq, params });
    }

    pub fn trigger_scrape(&self) {
        let _ = self.cmd_tx.send(ApiCommand::TriggerScrape);
    }

    pub fn try_recv(&self) -> Option<ApiEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    /// Waits up to `timeout` for the next event. `Disconnected` means the
    /// background thread is gone and no further events will arrive.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<ApiEvent, mpsc::RecvTimeoutError> {
        let event_rx = self
            .event_rx
            .lock()
            .map_err(|_| mpsc::RecvTimeoutError::Disconnected)?;
        event_rx.recv_timeout(timeout)
    }
}

async fn list_jobs(
    api: Arc<dyn JobApi>,
    seq: u64,
    params: ListParams,
    token: CancellationToken,
    event_tx: mpsc::Sender<ApiEvent>,
) {
    let result = tokio::select! {
        _ = token.cancelled() => {
            board_debug!("List request {} superseded; dropped", seq);
            return;
        }
        result = api.list_jobs(&params) => result,
    };
    match &result {
        Ok(page) => board_info!(
            "List request {} returned {} jobs (total {})",
            seq,
            page.jobs.len(),
            page.total
        ),
        Err(err) => board_warn!("List request {} failed: {}", seq, err),
    }
    let _ = event_tx.send(ApiEvent::JobsListed { seq, result });
}

async fn trigger_scrape(api: Arc<dyn JobApi>, event_tx: mpsc::Sender<ApiEvent>) {
    let result = api.trigger_scrape().await;
    match &result {
        Ok(ack) => board_info!("Scrape acknowledged: {}", ack.message),
        Err(err) => board_warn!("{}", err),
    }
    let _ = event_tx.send(ApiEvent::ScrapeFinished { result });
}
