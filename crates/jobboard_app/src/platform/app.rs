use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::{Context, Result};
use jobboard_client::ReqwestJobApi;
use jobboard_core::{update, DashboardState, Msg};
use jobboard_logging::{board_info, board_warn};

use super::config::DashboardConfig;
use super::effects::EffectRunner;
use super::ui;

/// Everything the dashboard loop reacts to: core messages plus front-end-only commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Msg(Msg),
    Help,
    Platforms,
    Invalid(String),
    Quit,
}

pub fn run_app(config: DashboardConfig) -> Result<()> {
    let api = ReqwestJobApi::new(&config.api_url, config.fetch_settings())
        .with_context(|| format!("cannot use API url {}", config.api_url))?;
    board_info!(
        "Dashboard starting against {} with page size {}",
        api.base_url(),
        config.page_size
    );

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner =
        EffectRunner::new(Arc::new(api), event_tx.clone()).context("failed to start API runtime")?;
    spawn_input_reader(event_tx);

    let mut dashboard = Dashboard::new(
        DashboardState::with_page_size(config.page_size),
        runner,
        io::stdout(),
    );
    dashboard.write_lines(ui::commands::HELP.iter().map(|line| line.to_string()))?;
    dashboard.dispatch_msg(Msg::Started)?;

    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Msg(msg) => dashboard.dispatch_msg(msg)?,
            AppEvent::Help => {
                dashboard.write_lines(ui::commands::HELP.iter().map(|line| line.to_string()))?
            }
            AppEvent::Platforms => dashboard.write_lines(ui::render::render_platforms())?,
            AppEvent::Invalid(problem) => dashboard.write_lines([problem])?,
            AppEvent::Quit => break,
        }
    }

    board_info!("Dashboard closed");
    Ok(())
}

/// Reads commands from stdin; end of input quits.
fn spawn_input_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let event = match line {
                Ok(line) => ui::commands::parse(&line),
                Err(err) => {
                    board_warn!("Failed to read input: {}", err);
                    AppEvent::Quit
                }
            };
            let quit = event == AppEvent::Quit;
            if event_tx.send(event).is_err() || quit {
                return;
            }
        }
        let _ = event_tx.send(AppEvent::Quit);
    });
}

struct Dashboard<W: Write> {
    state: DashboardState,
    runner: EffectRunner,
    out: W,
}

impl<W: Write> Dashboard<W> {
    fn new(state: DashboardState, runner: EffectRunner, out: W) -> Self {
        Self { state, runner, out }
    }

    fn dispatch_msg(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;

        self.runner.enqueue(effects);
        if was_dirty {
            self.write_lines(ui::render::render(&view))?;
        }
        Ok(())
    }

    fn write_lines(&mut self, lines: impl IntoIterator<Item = String>) -> io::Result<()> {
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}
