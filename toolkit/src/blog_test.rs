use time::macros::datetime;

use super::*;
use crate::catalog::{DataProvider, DemoData};

const NOW: OffsetDateTime = datetime!(2025-03-05 14:30:00 UTC);

fn demo() -> BlogState {
    BlogState::new(DemoData.feed_sources(), DemoData.content_templates(), NOW)
}

#[test]
fn starts_on_dashboard_with_seed_drafts() {
    let state = demo();
    assert_eq!(state.view(), BlogView::Dashboard);
    assert_eq!(state.feeds().len(), 5);
    assert_eq!(state.drafts().len(), 2);
    assert_eq!(state.drafts()[0].generated_at, datetime!(2025-03-05 12:30:00 UTC));
    assert_eq!(state.drafts()[0].meta(), "EN · 1,245 words");
    assert_ne!(state.drafts()[0].id, state.drafts()[1].id);
}

#[test]
fn views_parse_with_dashboard_fallback() {
    assert_eq!(BlogView::parse("drafts"), BlogView::Drafts);
    assert_eq!(BlogView::parse("analytics"), BlogView::Dashboard);
    assert_eq!(BlogView::Feeds.label(), "RSS Feeds");
}

#[test]
fn templates_by_key() {
    let state = demo();
    let guide = state.template("buying_guide").unwrap();
    assert_eq!(guide.tone, "helpful");
    assert_eq!(guide.length, "1200-1800");
    assert!(state.template("listicle").is_none());
}

#[test]
fn generation_walks_progress_and_appends_draft() {
    let mut state = demo();
    assert!(state.start_generation());
    assert!(!state.start_generation());
    for _ in 0..10 {
        state.advance_progress();
    }
    assert_eq!(state.generation(), Generation::Running { step: PROGRESS_STEPS.len() - 1 });

    let later = NOW + Duration::seconds(3);
    let draft = state.finish_generation(later).unwrap().clone();
    assert_eq!(draft.title, "New E-Bike Safety Standards in Switzerland");
    assert_eq!(draft.word_count, 1234);
    assert_eq!(draft.generated_at, later);
    assert_eq!(state.view(), BlogView::Drafts);
    assert_eq!(state.drafts().len(), 3);
    assert!(!state.is_generating());
    assert!(state.finish_generation(later).is_none());
}

#[test]
fn scan_reports_once_per_run() {
    let mut state = demo();
    assert_eq!(state.finish_scan(), None);
    assert_eq!(state.start_scan(), Some(SCAN_STARTED));
    assert_eq!(state.start_scan(), None);
    assert_eq!(state.finish_scan(), Some(SCAN_FINISHED));
    assert!(!state.is_scanning());
}

#[test]
fn drafts_filter_by_language_and_delete() {
    let mut state = demo();
    let german: Vec<&str> = state.drafts_in(Some("de")).map(|draft| draft.title.as_str()).collect();
    assert_eq!(german, vec!["Winter E-Bike Maintenance Guide"]);
    assert_eq!(state.drafts_in(None).count(), 2);

    let id = state.drafts()[0].id;
    assert!(state.delete_draft(id));
    assert!(!state.delete_draft(id));
    assert_eq!(state.drafts().len(), 1);
}

#[test]
fn weekly_schedule_slots() {
    let state = demo();
    let monday: Vec<String> = state.scheduled_on(Weekday::Monday).map(|post| format!("{} - {}", post.time, post.title)).collect();
    assert_eq!(monday, vec!["10:00 - Industry News"]);
    assert_eq!(state.scheduled_on(Weekday::Sunday).count(), 0);
    assert_eq!(state.schedule().len(), 3);
}

#[test]
fn settings_fill_meta_description() {
    let mut state = demo();
    let draft = state.drafts()[1].clone();
    let meta = state.settings.meta_description(&draft);
    assert!(meta.starts_with("Winter E-Bike Maintenance Guide - Expert advice from Godspeed"));
    assert!(meta.ends_with("essential maintenance tips..."));

    state.settings.set_keywords(" e-bike zürich, , cargo bike ");
    assert_eq!(state.settings.focus_keywords, vec!["e-bike zürich", "cargo bike"]);
}
