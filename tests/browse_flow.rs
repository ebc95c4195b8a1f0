mod common;

use std::collections::HashSet;

use common::Harness;
use jobfinder::app::forms::PostingPhase;
use jobfinder::app::panels::location_states;
use jobfinder::app::PanelId;
use jobfinder::domain::{JobType, Selector, VacancyStatus};
use jobfinder::{Event, KeyContext, Region, Screen, ThemePreference};

#[test]
fn start_loads_the_board_from_the_backend() {
    let mut harness = Harness::new(Region::Malaysia);
    assert!(!harness.state.connected);

    harness.send(Event::Start);
    assert!(harness.state.connected);
    assert!(harness.state.last_error.is_none());
    assert_eq!(harness.state.filtered_jobs.len(), harness.state.catalog.published().len());
}

#[test]
fn search_and_filters_narrow_then_clear() {
    let mut harness = Harness::new(Region::Malaysia);
    harness.send(Event::Start);
    let total = harness.state.filtered_jobs.len();

    harness.send(Event::SearchMode);
    harness.type_text("  ENGINEER ");
    assert!(!harness.state.filtered_jobs.is_empty());
    assert!(harness
        .state
        .filtered_jobs
        .iter()
        .all(|job| job.title.to_lowercase().contains("engineer")));

    harness.send(Event::Select);
    assert_eq!(harness.state.key_context(), KeyContext::SearchNavigating);

    harness.send(Event::ExitSearch);
    harness.send(Event::CycleState);
    let Selector::Only(state_name) = harness.state.filters.state.clone() else {
        panic!("state filter should be set");
    };
    assert!(harness.state.filtered_jobs.iter().all(|job| job.state == state_name));

    harness.send(Event::ClearFilters);
    assert_eq!(harness.state.filtered_jobs.len(), total);
}

#[test]
fn posted_vacancy_appears_on_the_board_with_a_unique_id() {
    let mut harness = Harness::new(Region::Malaysia);
    harness.send(Event::Start);
    harness.send(Event::OpenPanel(PanelId::NewVacancy));
    assert_eq!(harness.state.key_context(), KeyContext::Form);

    harness.type_text("Night Baker");
    harness.send(Event::NextField);
    harness.type_text("Roti Co");
    harness.send(Event::NextField); // country, prefilled
    harness.send(Event::NextField);
    harness.type_text("Melak"); // state is a choice, typing is ignored
    while harness.state.vacancy_form.state != "Melaka" {
        harness.send(Event::CycleRight);
    }
    harness.send(Event::NextField);
    harness.type_text("Melaka City");
    harness.send(Event::NextField); // district, left blank
    harness.send(Event::NextField);
    harness.send(Event::CycleRight);
    harness.send(Event::NextField); // status stays New
    harness.send(Event::NextField);
    harness.type_text("3000");
    harness.send(Event::NextField);
    harness.type_text("4500");
    harness.send(Event::NextField);
    harness.type_text("Bake bread before dawn.");
    harness.send(Event::Select);

    assert_eq!(harness.state.vacancy_form.phase, PostingPhase::Posted);
    assert!(harness.state.vacancy_form.title.is_empty());

    let posted = &harness.state.filtered_jobs[0];
    assert_eq!(posted.title, "Night Baker");
    assert_eq!(posted.state, "Melaka");
    assert_eq!(posted.district, "Melaka City");
    assert_eq!(posted.job_type, JobType::PartTime);
    assert!(posted.job_id.starts_with("user-"));

    let ids: HashSet<&str> = harness.state.catalog.jobs().iter().map(|job| job.job_id.as_str()).collect();
    assert_eq!(ids.len(), harness.state.catalog.jobs().len());

    assert!(harness.state.status_jobs.iter().any(|job| job.title == "Night Baker"));
    assert!(harness
        .state
        .status_jobs
        .iter()
        .all(|job| job.effective_status() == VacancyStatus::New));
}

#[test]
fn locations_panel_filters_by_state() {
    let mut harness = Harness::new(Region::India);
    harness.send(Event::Start);
    harness.send(Event::OpenMenu);
    harness.send(Event::Select);
    assert_eq!(harness.state.screen, Screen::Panel(PanelId::Locations));

    harness.send(Event::KeyDown);
    let chosen = location_states(&harness.state)[1].clone();
    harness.send(Event::Select);

    assert_eq!(harness.state.screen, Screen::Browse);
    assert!(!harness.state.filtered_jobs.is_empty());
    assert!(harness.state.filtered_jobs.iter().all(|job| job.state == chosen));
}

#[test]
fn theme_preference_persists_across_restart() {
    let mut harness = Harness::new(Region::Malaysia);
    harness.send(Event::Start);
    harness.send(Event::OpenPanel(PanelId::Themes));
    harness.send(Event::KeyDown);
    harness.send(Event::Select);
    assert_eq!(harness.state.theme_preference, ThemePreference::Dark);

    harness.restart();
    assert_eq!(harness.state.theme_preference, ThemePreference::System);
    harness.send(Event::Start);
    assert_eq!(harness.state.theme_preference, ThemePreference::Dark);
    assert_eq!(harness.state.theme.name, "jobfinder-dark");
}
