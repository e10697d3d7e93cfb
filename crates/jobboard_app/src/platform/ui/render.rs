use chrono::{DateTime, NaiveDate, NaiveDateTime};
use jobboard_core::{
    DashboardViewModel, Job, PageLink, QueryStatus, RefreshOutcome, KNOWN_PLATFORMS,
};

const DESCRIPTION_PREVIEW_CHARS: usize = 160;

/// Renders a committed view as plain text lines.
pub fn render(view: &DashboardViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    let heading = if view.is_filtered {
        "Filtered results"
    } else {
        "Latest opportunities"
    };
    lines.push(format!("== {heading} | {} jobs found ==", view.total));

    if view.active_filters.is_empty() {
        lines.push("Filters: none".to_string());
    } else {
        let active: Vec<String> = view
            .active_filters
            .iter()
            .map(|filter| format!("{}={}", filter.field.label(), filter.value))
            .collect();
        lines.push(format!("Filters: {}", active.join(", ")));
    }

    if view.refresh.triggering {
        lines.push("Refresh: fetching new postings...".to_string());
    } else {
        match &view.refresh.last_outcome {
            Some(RefreshOutcome::Acknowledged(message)) if !message.is_empty() => {
                lines.push(format!("Refresh: {message}"));
            }
            Some(RefreshOutcome::Acknowledged(_)) => {
                lines.push("Refresh: triggered".to_string());
            }
            Some(RefreshOutcome::Failed(reason)) => {
                lines.push(format!("Refresh failed: {reason}"));
            }
            None => {}
        }
    }

    match &view.status {
        QueryStatus::Idle => lines.push("Type `help` for commands.".to_string()),
        QueryStatus::Loading => lines.push("Loading jobs...".to_string()),
        QueryStatus::Failed { reason } => {
            lines.push(format!("Error: {reason}"));
            lines.push("Change filters or pages, or type `retry`.".to_string());
        }
        QueryStatus::Ready if view.jobs.is_empty() => {
            lines.push(
                "No jobs found. Try adjusting your filters or `scrape` for fresh postings."
                    .to_string(),
            );
        }
        QueryStatus::Ready => {
            let first = view.range.map_or(1, |range| range.first);
            for (offset, job) in view.jobs.iter().enumerate() {
                render_job(&mut lines, first + offset as u64, job);
            }
            if let Some(range) = view.range {
                lines.push(format!(
                    "Showing {} to {} of {} results",
                    range.first, range.last, range.total
                ));
            }
            lines.push(render_page_links(view));
        }
    }

    lines
}

pub fn render_platforms() -> Vec<String> {
    vec![format!("Platforms: {}", KNOWN_PLATFORMS.join(", "))]
}

fn render_job(lines: &mut Vec<String>, number: u64, job: &Job) {
    let mut header = format!("{number:>3}. {}", job.title);
    if !job.company.is_empty() {
        header.push_str(&format!(" @ {}", job.company));
    }
    if !job.platform.is_empty() {
        header.push_str(&format!(" [{}]", job.platform));
    }
    if let Some(posted) = job.date_posted.as_deref() {
        header.push_str(&format!(" ({})", format_date(posted)));
    }
    lines.push(header);

    let description = job.description.trim();
    if !description.is_empty() {
        lines.push(format!("     {}", preview(description)));
    }
    lines.push(format!("     {}", job.url));
}

fn render_page_links(view: &DashboardViewModel) -> String {
    let links: Vec<String> = view
        .page_links
        .iter()
        .map(|link| match link {
            PageLink::Page {
                number,
                current: true,
            } => format!("[{number}]"),
            PageLink::Page { number, .. } => number.to_string(),
            PageLink::Gap => "...".to_string(),
        })
        .collect();
    let mut line = format!("Page {} of {}: {}", view.page, view.page_count, links.join(" "));
    if view.can_prev {
        line.push_str("  (prev)");
    }
    if view.can_next {
        line.push_str("  (next)");
    }
    line
}

/// `Mon D, YYYY`, or the raw value when it is not a recognizable date.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match date {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(DESCRIPTION_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use jobboard_core::{
        update, DashboardState, Effect, FilterCriteria, Msg, QueryFailure, QueryResult,
    };

    use super::*;

    fn job(n: u64) -> Job {
        Job {
            url: format!("https://jobs.example.com/{n}"),
            title: format!("Engineer {n}"),
            company: "Acme".to_string(),
            platform: "Dice".to_string(),
            description: String::new(),
            date_posted: Some("2024-03-09T08:00:00Z".to_string()),
        }
    }

    fn seq_of(effects: &[Effect]) -> jobboard_core::RequestSeq {
        match effects {
            [Effect::FetchJobs { seq, .. }] => *seq,
            other => panic!("expected one fetch, got {other:?}"),
        }
    }

    #[test]
    fn dates_are_formatted_or_passed_through() {
        assert_eq!(format_date("2024-03-09T08:00:00Z"), "Mar 9, 2024");
        assert_eq!(format_date("2024-12-25"), "Dec 25, 2024");
        assert_eq!(format_date("2024-01-02T03:04:05.123"), "Jan 2, 2024");
        assert_eq!(format_date("3 days ago"), "3 days ago");
    }

    #[test]
    fn ready_view_lists_numbered_jobs_and_range() {
        let (state, effects) = update(DashboardState::new(), Msg::Started);
        let seq = seq_of(&effects);
        let (state, _) = update(
            state,
            Msg::JobsLoaded {
                seq,
                outcome: Ok(QueryResult {
                    jobs: vec![job(1), job(2)],
                    total: 12,
                }),
            },
        );

        let lines = render(&state.view());
        assert_eq!(lines[0], "== Latest opportunities | 12 jobs found ==");
        assert!(lines
            .iter()
            .any(|line| line == "  1. Engineer 1 @ Acme [Dice] (Mar 9, 2024)"));
        assert!(lines.iter().any(|line| line == "Showing 1 to 10 of 12 results"));
        assert_eq!(lines.last().unwrap(), "Page 1 of 2: [1] 2  (next)");
    }

    #[test]
    fn failed_view_shows_reason_and_no_jobs() {
        let (state, effects) = update(
            DashboardState::new(),
            Msg::FiltersSubmitted(FilterCriteria::new("rust", "")),
        );
        assert_eq!(state.view().status, QueryStatus::Loading);
        let (state, _) = update(
            state,
            Msg::JobsLoaded {
                seq: seq_of(&effects),
                outcome: Err(QueryFailure::new("timeout")),
            },
        );

        let lines = render(&state.view());
        assert_eq!(lines[0], "== Filtered results | 0 jobs found ==");
        assert_eq!(lines[1], "Filters: title=rust");
        assert!(lines.contains(&"Error: timeout".to_string()));
        assert!(!lines.iter().any(|line| line.starts_with("Showing")));
    }

    #[test]
    fn long_descriptions_are_truncated() {
        let text = "x".repeat(DESCRIPTION_PREVIEW_CHARS + 10);
        let shown = preview(&text);
        assert!(shown.ends_with("..."));
        assert_eq!(shown.chars().count(), DESCRIPTION_PREVIEW_CHARS + 3);
        assert_eq!(preview("short"), "short");
    }
}
