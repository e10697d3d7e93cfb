use jobboard_core::{canonical_platform, FilterCriteria, FilterField, Msg};

use crate::platform::app::AppEvent;

pub const HELP: &[&str] = &[
    "Commands:",
    "  filter [title=<text>] [platform=<name>]  replace the filters and load page 1",
    "  clear                                    remove all filters",
    "  unset title|platform                     remove one filter",
    "  page <n> | next | prev                   navigate",
    "  retry                                    reload the current page",
    "  scrape                                   fetch fresh postings, then reload page 1",
    "  platforms                                list known platforms",
    "  help | quit",
];

/// Parses one input line into an event for the dashboard loop.
pub fn parse(line: &str) -> AppEvent {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command.to_ascii_lowercase().as_str() {
        "" => AppEvent::Msg(Msg::NoOp),
        "filter" | "f" => parse_filter(rest),
        "clear" => AppEvent::Msg(Msg::FiltersCleared),
        "unset" => match rest.to_ascii_lowercase().as_str() {
            "title" => AppEvent::Msg(Msg::FilterFieldCleared(FilterField::Title)),
            "platform" => AppEvent::Msg(Msg::FilterFieldCleared(FilterField::Platform)),
            _ => AppEvent::Invalid("usage: unset title|platform".to_string()),
        },
        "page" => match rest.parse::<u32>() {
            Ok(page) => AppEvent::Msg(Msg::PageRequested(page)),
            Err(_) => AppEvent::Invalid(format!("not a page number: '{rest}'")),
        },
        "next" | "n" => AppEvent::Msg(Msg::NextPage),
        "prev" | "p" => AppEvent::Msg(Msg::PrevPage),
        "retry" | "r" => AppEvent::Msg(Msg::RetryRequested),
        "scrape" | "refresh" => AppEvent::Msg(Msg::RefreshClicked),
        "platforms" => AppEvent::Platforms,
        "help" | "?" => AppEvent::Help,
        "quit" | "q" | "exit" => AppEvent::Quit,
        other => AppEvent::Invalid(format!("unknown command '{other}'; type `help`")),
    }
}

/// `title=` and `platform=` may appear in any order; values run until the next key.
fn parse_filter(args: &str) -> AppEvent {
    let mut title = String::new();
    let mut platform = String::new();
    let mut current: Option<FilterField> = None;

    for token in args.split_whitespace() {
        let (field, value) = if let Some(value) = strip_key(token, "title=") {
            (FilterField::Title, value)
        } else if let Some(value) = strip_key(token, "platform=") {
            (FilterField::Platform, value)
        } else {
            let Some(field) = current else {
                return AppEvent::Invalid(format!(
                    "expected title=<text> or platform=<name>, got '{token}'"
                ));
            };
            append_word(target(field, &mut title, &mut platform), token);
            continue;
        };
        current = Some(field);
        let slot = target(field, &mut title, &mut platform);
        slot.clear();
        append_word(slot, value);
    }

    let platform = if platform.trim().is_empty() {
        ""
    } else {
        match canonical_platform(&platform) {
            Some(name) => name,
            None => {
                return AppEvent::Invalid(format!(
                    "unknown platform '{platform}'; type `platforms` to list them"
                ))
            }
        }
    };

    AppEvent::Msg(Msg::FiltersSubmitted(FilterCriteria::new(&title, platform)))
}

fn strip_key<'a>(token: &'a str, key: &str) -> Option<&'a str> {
    let head = token.get(..key.len())?;
    head.eq_ignore_ascii_case(key).then(|| &token[key.len()..])
}

fn target<'a>(field: FilterField, title: &'a mut String, platform: &'a mut String) -> &'a mut String {
    match field {
        FilterField::Title => title,
        FilterField::Platform => platform,
    }
}

fn append_word(slot: &mut String, word: &str) {
    if word.is_empty() {
        return;
    }
    if !slot.is_empty() {
        slot.push(' ');
    }
    slot.push_str(word);
}
