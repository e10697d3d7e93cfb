mod common;

use common::{fetch, init_logging, jobs, loaded, succeed};
use jobboard_core::{
    canonical_platform, update, ActiveFilter, FilterCriteria, FilterField, Msg, QueryStatus,
};

#[test]
fn set_filters_resets_to_first_page() {
    init_logging();
    let state = loaded(25);
    let (state, effects) = update(state, Msg::PageRequested(3));
    let (seq, _) = fetch(&effects);
    let (state, _) = succeed(state, seq, jobs(21, 25), 25);

    let criteria = FilterCriteria::new("rust", "LinkedIn");
    let (state, effects) = update(state, Msg::FiltersSubmitted(criteria.clone()));
    let (_, query) = fetch(&effects);

    assert_eq!(query.page.page, 1);
    assert_eq!(query.filters, criteria);
    assert_eq!(state.pagination().page(), 1);
    assert_eq!(state.view().status, QueryStatus::Loading);
}

#[test]
fn identical_filters_still_reset_and_reload() {
    init_logging();
    let criteria = FilterCriteria::new("rust", "");
    let state = loaded(25);
    let (state, effects) = update(state, Msg::FiltersSubmitted(criteria.clone()));
    let (seq, _) = fetch(&effects);
    let (state, _) = succeed(state, seq, jobs(1, 10), 25);
    let (state, effects) = update(state, Msg::PageRequested(2));
    let (seq, _) = fetch(&effects);
    let (state, _) = succeed(state, seq, jobs(11, 20), 25);

    let (mut state, effects) = update(state, Msg::FiltersSubmitted(criteria.clone()));

    let (_, query) = fetch(&effects);
    assert_eq!(query.page.page, 1);
    assert_eq!(query.filters, criteria);
    assert!(state.consume_dirty());
}

#[test]
fn unset_fields_are_not_sent() {
    init_logging();
    let state = loaded(25);
    let (state, effects) = update(state, Msg::FiltersSubmitted(FilterCriteria::new("", "")));
    let (_, query) = fetch(&effects);
    assert_eq!(
        query.query_pairs(),
        vec![("page", "1".to_string()), ("limit", "10".to_string())]
    );

    let (state, effects) = update(
        state,
        Msg::FiltersSubmitted(FilterCriteria::new("  ", "Indeed")),
    );
    let (_, query) = fetch(&effects);
    assert_eq!(
        query.query_pairs(),
        vec![
            ("page", "1".to_string()),
            ("limit", "10".to_string()),
            ("platform", "Indeed".to_string()),
        ]
    );

    let (_state, effects) = update(state, Msg::FiltersSubmitted(FilterCriteria::new("data", "")));
    let (_, query) = fetch(&effects);
    assert_eq!(
        query.query_pairs(),
        vec![
            ("page", "1".to_string()),
            ("limit", "10".to_string()),
            ("title", "data".to_string()),
        ]
    );
}

#[test]
fn clear_is_setting_empty_filters() {
    init_logging();
    let state = loaded(25);
    let (state, _) = update(
        state,
        Msg::FiltersSubmitted(FilterCriteria::new("rust", "Dice")),
    );
    assert!(state.view().is_filtered);

    let (state, effects) = update(state, Msg::FiltersCleared);
    let (_, query) = fetch(&effects);
    assert!(query.filters.is_unset());
    assert_eq!(query.page.page, 1);
    assert!(!state.view().is_filtered);
    assert!(state.view().active_filters.is_empty());
}

#[test]
fn removing_one_filter_keeps_the_other() {
    init_logging();
    let state = loaded(25);
    let (state, _) = update(
        state,
        Msg::FiltersSubmitted(FilterCriteria::new("rust", "Dice")),
    );
    assert_eq!(
        state.view().active_filters,
        vec![
            ActiveFilter {
                field: FilterField::Title,
                value: "rust".to_string()
            },
            ActiveFilter {
                field: FilterField::Platform,
                value: "Dice".to_string()
            },
        ]
    );

    let (state, effects) = update(state, Msg::FilterFieldCleared(FilterField::Title));
    let (_, query) = fetch(&effects);
    assert_eq!(query.filters.title(), None);
    assert_eq!(query.filters.platform(), Some("Dice"));

    // Removing a field that is already unset changes nothing.
    let before = state.clone();
    let (state, effects) = update(state, Msg::FilterFieldCleared(FilterField::Title));
    assert!(effects.is_empty());
    assert_eq!(state, before);
}

#[test]
fn filter_values_are_trimmed() {
    let criteria = FilterCriteria::new("  backend engineer ", "\tWellfound");
    assert_eq!(criteria.title(), Some("backend engineer"));
    assert_eq!(criteria.platform(), Some("Wellfound"));
    assert!(FilterCriteria::new(" ", "").is_unset());
}

#[test]
fn platforms_are_matched_case_insensitively() {
    assert_eq!(canonical_platform("linkedin"), Some("LinkedIn"));
    assert_eq!(canonical_platform(" ZIPRECRUITER "), Some("ZipRecruiter"));
    assert_eq!(canonical_platform("Craigslist"), None);
}
