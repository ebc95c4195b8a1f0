//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place [`AppState`] changes. It receives user
//! input already translated by the plugin runtime (see `main.rs`), system
//! events, and worker responses, mutates the state, and returns whether to
//! re-render plus the side effects to run.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `Select`, `Escape`
//! - **Input**: `Char`, `Backspace`, `NextField`, `PrevField`, `CycleLeft`, `CycleRight`
//! - **Filters**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`,
//!   `CycleJobType`, `CycleState`, `CycleDistrict`, `ClearFilters`
//! - **Screens**: `OpenApply`, `OpenMenu`, `OpenPanel`
//! - **System**: `Start`, `WorkerResponse`
//!
//! # Example
//!
//! ```
//! use jobfinder::app::{handle_event, Action, AppState, Event};
//! use jobfinder::domain::Region;
//!
//! let mut state = AppState::new(Region::Malaysia, Default::default(), None);
//! let (render, actions) = handle_event(&mut state, &Event::Start)?;
//! assert!(!render);
//! assert!(actions.iter().all(|action| matches!(action, Action::PostToWorker(_))));
//! # Ok::<(), jobfinder::domain::JobFinderError>(())
//! ```

use super::forms::SubmissionStatus;
use super::modes::{InputMode, Screen, SearchFocus};
use super::panels::{location_states, PanelId};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::filter::Selector;
use crate::ui::theme::ThemePreference;
use crate::worker::{WorkerMessage, WorkerOperation, WorkerResponse};

/// Events triggered by user input, the runtime, or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Permissions granted; connect the worker and load preferences.
    Start,

    /// Moves the cursor down on the current screen (wraps).
    KeyDown,
    /// Moves the cursor up on the current screen (wraps).
    KeyUp,
    /// Activates whatever is under the cursor.
    Select,
    /// Backs out one level: search, form, panel, menu.
    Escape,
    /// Hides the plugin pane.
    CloseFocus,

    /// Enters search mode with typing focus and an empty query.
    SearchMode,
    /// Returns focus to the query (from navigating results).
    FocusSearchBar,
    /// Moves focus from the query to the results.
    FocusResults,
    /// Leaves search mode and clears the query.
    ExitSearch,

    /// Appends to the search query or the focused form field.
    Char(char),
    Backspace,
    NextField,
    PrevField,
    /// Steps a choice field of the vacancy form.
    CycleLeft,
    CycleRight,

    CycleJobType,
    CycleState,
    CycleDistrict,
    ClearFilters,

    /// Opens the apply form for the selected job.
    OpenApply,
    OpenMenu,
    OpenPanel(PanelId),

    /// Wraps a response from the background worker.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. Actions run in order after the state change.
///
/// # Errors
///
/// Currently every transition is infallible; the `Result` lets the runtime
/// treat failures uniformly.
///
/// # Tracing
///
/// Each call runs inside a debug span carrying the event.
#[allow(clippy::cognitive_complexity, clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Start => {
            tracing::debug!(region = state.region.key(), "connecting worker");
            Ok((
                false,
                vec![
                    Action::PostToWorker(WorkerMessage::connect(state.region)),
                    Action::PostToWorker(WorkerMessage::load_preferences()),
                ],
            ))
        }
        Event::KeyDown => Ok((move_cursor(state, true), vec![])),
        Event::KeyUp => Ok((move_cursor(state, false), vec![])),
        Event::Select => select(state),
        Event::Escape => Ok((escape(state), vec![])),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),

        Event::SearchMode => {
            if state.screen != Screen::Browse {
                return Ok((false, vec![]));
            }
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.filters.search = String::new();
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.filters.search.is_empty() {
                state.input_mode = InputMode::Normal;
                return Ok((true, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            exit_search(state);
            Ok((true, vec![]))
        }

        Event::Char(c) => Ok((push_char(state, *c), vec![])),
        Event::Backspace => Ok((backspace(state), vec![])),
        Event::NextField | Event::PrevField => {
            let forward = *event == Event::NextField;
            Ok((step_field(state, forward), vec![]))
        }
        Event::CycleLeft | Event::CycleRight => {
            if state.screen != Screen::Panel(PanelId::NewVacancy) {
                return Ok((false, vec![]));
            }
            Ok((state.vacancy_form.cycle(*event == Event::CycleRight), vec![]))
        }

        Event::CycleJobType => {
            state.cycle_job_type();
            tracing::debug!(job_type = ?state.filters.job_type, "job type filter changed");
            Ok((true, vec![]))
        }
        Event::CycleState => {
            state.cycle_state();
            tracing::debug!(state_filter = ?state.filters.state, "state filter changed");
            Ok((true, vec![]))
        }
        Event::CycleDistrict => {
            state.cycle_district();
            Ok((true, vec![]))
        }
        Event::ClearFilters => {
            state.clear_filters();
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }

        Event::OpenApply => Ok((open_apply(state), vec![])),
        Event::OpenMenu => {
            state.screen = Screen::Menu;
            Ok((true, vec![]))
        }
        Event::OpenPanel(id) => {
            if *id == PanelId::Applications {
                state.applications_job = state.selected_job().map(|job| job.job_id.clone());
            }
            Ok((true, open_panel(state, *id)))
        }

        Event::WorkerResponse(response) => handle_worker_response(state, response),
    }
}

fn move_cursor(state: &mut AppState, down: bool) -> bool {
    match state.screen {
        Screen::Browse => {
            if down {
                state.move_selection_down();
            } else {
                state.move_selection_up();
            }
        }
        Screen::Menu => state.menu_index = wrap(state.menu_index, PanelId::MENU.len(), down),
        Screen::Panel(id) if id.hosts_form() => return step_field(state, down),
        Screen::Panel(id) => {
            let count = id.build_view(state).selectable_count();
            state.panel_index = wrap(state.panel_index, count, down);
        }
        Screen::Apply => return step_field(state, down),
    }
    true
}

const fn wrap(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        0
    } else if forward {
        (index + 1) % len
    } else if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

fn select(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    match state.screen {
        Screen::Browse => match state.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                handle_event(state, &Event::FocusResults)
            }
            InputMode::Normal | InputMode::Search(SearchFocus::Navigating) => Ok((open_apply(state), vec![])),
        },
        Screen::Menu => {
            let Some(id) = PanelId::MENU.get(state.menu_index).copied() else {
                return Ok((false, vec![]));
            };
            handle_event(state, &Event::OpenPanel(id))
        }
        Screen::Panel(id) => Ok(select_in_panel(state, id)),
        Screen::Apply => {
            let Some(form) = state.apply_form.as_mut() else {
                return Ok((false, vec![]));
            };
            let Some(request) = form.begin_submit() else {
                return Ok((true, vec![]));
            };
            tracing::debug!(job_id = %request.job_id, "submitting application");
            Ok((
                true,
                vec![Action::PostToWorker(WorkerMessage::submit_application(request))],
            ))
        }
    }
}

fn select_in_panel(state: &mut AppState, id: PanelId) -> (bool, Vec<Action>) {
    match id {
        PanelId::Themes => {
            let Some(preference) = ThemePreference::ALL.get(state.panel_index).copied() else {
                return (false, vec![]);
            };
            tracing::debug!(theme = preference.key(), "theme preference changed");
            state.set_theme_preference(preference);
            (
                true,
                vec![Action::PostToWorker(WorkerMessage::save_theme_preference(preference))],
            )
        }
        PanelId::Locations => {
            let Some(selected) = location_states(state).into_iter().nth(state.panel_index) else {
                return (false, vec![]);
            };
            state.filters.state = Selector::Only(selected);
            state.filters.district = Selector::All;
            state.selected_index = 0;
            state.apply_filters();
            state.input_mode = InputMode::Normal;
            state.screen = Screen::Browse;
            (true, vec![])
        }
        PanelId::NewVacancy => match state.vacancy_form.begin_post() {
            Some(vacancy) => {
                tracing::debug!(title = %vacancy.title, "posting vacancy");
                (true, vec![Action::PostToWorker(WorkerMessage::post_vacancy(vacancy))])
            }
            None => (true, vec![]),
        },
        PanelId::OldVacancy | PanelId::DraftVacancy => {
            let Some(job) = state.status_jobs.get(state.panel_index) else {
                return (false, vec![]);
            };
            state.applications_job = Some(job.job_id.clone());
            (true, open_panel(state, PanelId::Applications))
        }
        PanelId::Overview | PanelId::Applications => (false, vec![]),
    }
}

/// Shows a panel, prefilling what the catalog already knows while the worker
/// fetches the rest.
fn open_panel(state: &mut AppState, id: PanelId) -> Vec<Action> {
    tracing::debug!(panel = ?id, "opening panel");
    state.screen = Screen::Panel(id);
    state.panel_index = 0;

    if let Some(status) = id.vacancy_status() {
        state.status_jobs = state.catalog.by_status(status);
    }
    if id == PanelId::Applications {
        state.applications.clear();
    }

    id.load_actions(state)
}

fn open_apply(state: &mut AppState) -> bool {
    let Some(job) = state.selected_job() else {
        tracing::debug!("no job selected");
        return false;
    };
    tracing::debug!(job_id = %job.job_id, "opening application form");
    state.apply_form = Some(super::forms::ApplyForm::new(job));
    state.screen = Screen::Apply;
    true
}

fn exit_search(state: &mut AppState) {
    tracing::debug!(query = %state.filters.search, "exiting search mode");
    state.input_mode = InputMode::Normal;
    state.filters.search = String::new();
    state.apply_filters();
}

fn escape(state: &mut AppState) -> bool {
    match state.screen {
        Screen::Browse => {
            if matches!(state.input_mode, InputMode::Search(_)) || !state.filters.search.is_empty() {
                exit_search(state);
                return true;
            }
            false
        }
        Screen::Menu => {
            state.screen = Screen::Browse;
            true
        }
        Screen::Panel(_) => {
            state.screen = Screen::Menu;
            true
        }
        Screen::Apply => {
            if state.apply_form.as_ref().is_some_and(|form| !form.can_close()) {
                tracing::debug!("close refused while submitting");
                return false;
            }
            state.apply_form = None;
            state.screen = Screen::Browse;
            true
        }
    }
}

fn push_char(state: &mut AppState, c: char) -> bool {
    match state.screen {
        Screen::Browse if matches!(state.input_mode, InputMode::Search(_)) => {
            state.filters.search.push(c);
            tracing::trace!(query = %state.filters.search, char = %c, "search query updated");
            state.apply_filters();
            true
        }
        Screen::Apply => state.apply_form.as_mut().is_some_and(|form| form.push_char(c)),
        Screen::Panel(PanelId::NewVacancy) => state.vacancy_form.push_char(c),
        _ => false,
    }
}

fn backspace(state: &mut AppState) -> bool {
    match state.screen {
        Screen::Browse if matches!(state.input_mode, InputMode::Search(_)) => {
            state.filters.search.pop();
            state.apply_filters();
            true
        }
        Screen::Apply => state.apply_form.as_mut().is_some_and(super::forms::ApplyForm::backspace),
        Screen::Panel(PanelId::NewVacancy) => state.vacancy_form.backspace(),
        _ => false,
    }
}

fn step_field(state: &mut AppState, forward: bool) -> bool {
    match state.screen {
        Screen::Apply => {
            let Some(form) = state.apply_form.as_mut() else {
                return false;
            };
            if forward {
                form.focus_next();
            } else {
                form.focus_prev();
            }
            true
        }
        Screen::Panel(PanelId::NewVacancy) => {
            if forward {
                state.vacancy_form.focus_next();
            } else {
                state.vacancy_form.focus_prev();
            }
            true
        }
        _ => false,
    }
}

#[allow(clippy::too_many_lines)]
fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> Result<(bool, Vec<Action>)> {
    match response {
        WorkerResponse::JobsLoaded { jobs } => {
            tracing::debug!(job_count = jobs.len(), "jobs loaded");
            state.replace_jobs(jobs.clone());
            state.connected = true;
            state.last_error = None;
            Ok((true, vec![]))
        }
        WorkerResponse::ApplicationSubmitted { job_id, result } => {
            let Some(form) = state.apply_form.as_mut().filter(|form| &form.job_id == job_id) else {
                tracing::debug!(job_id = %job_id, "submission result for a closed form");
                return Ok((false, vec![]));
            };
            form.complete(result);
            tracing::debug!(job_id = %job_id, accepted = result.is_accepted(), "application processed");
            Ok((true, vec![]))
        }
        WorkerResponse::VacancyPosted { job } => {
            tracing::debug!(job_id = %job.job_id, "vacancy posted");
            state.vacancy_form.complete_post();

            let mut actions = Vec::new();
            if state.catalog.insert_posted(job.clone()) {
                state.apply_filters();
            } else {
                tracing::debug!(job_id = %job.job_id, "posted id already known, reloading board");
                actions.push(Action::PostToWorker(WorkerMessage::load_jobs()));
            }

            if state.screen == Screen::Panel(PanelId::NewVacancy) {
                actions.push(Action::PostToWorker(WorkerMessage::load_vacancies(job.effective_status())));
            }
            Ok((true, actions))
        }
        WorkerResponse::VacanciesLoaded { status, jobs } => {
            let showing = match state.screen {
                Screen::Panel(id) => id.vacancy_status() == Some(*status),
                _ => false,
            };
            if !showing {
                return Ok((false, vec![]));
            }
            state.status_jobs.clone_from(jobs);
            state.panel_index = state.panel_index.min(jobs.len().saturating_sub(1));
            Ok((true, vec![]))
        }
        WorkerResponse::ApplicationsLoaded { job_id, applications } => {
            if state.applications_job.as_ref() != Some(job_id) {
                return Ok((false, vec![]));
            }
            state.applications.clone_from(applications);
            Ok((true, vec![]))
        }
        WorkerResponse::SummaryLoaded { summary } => {
            state.summary = Some(summary.clone());
            Ok((state.screen == Screen::Panel(PanelId::Overview), vec![]))
        }
        WorkerResponse::PreferencesLoaded { theme } => {
            let Some(preference) = theme else {
                return Ok((false, vec![]));
            };
            tracing::debug!(theme = preference.key(), "stored theme preference applied");
            state.set_theme_preference(*preference);
            Ok((true, vec![]))
        }
        WorkerResponse::PreferenceSaved { theme } => {
            tracing::debug!(theme = theme.key(), "theme preference saved");
            Ok((false, vec![]))
        }
        WorkerResponse::Error { operation, message } => {
            tracing::warn!(operation = ?operation, error = %message, "worker reported error");
            match operation {
                WorkerOperation::SubmitApplication => {
                    let Some(form) = state.apply_form.as_mut() else {
                        return Ok((false, vec![]));
                    };
                    if form.status != SubmissionStatus::Loading {
                        return Ok((false, vec![]));
                    }
                    form.fail_transport();
                }
                WorkerOperation::PostVacancy => state.vacancy_form.fail_post(message),
                _ => state.last_error = Some(message.clone()),
            }
            Ok((true, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::forms::{PostingPhase, VacancyField, NETWORK_FAILURE};
    use crate::app::KeyContext;
    use crate::backend::models::ApplicationResult;
    use crate::domain::region::Region;

    fn state() -> AppState {
        AppState::new(Region::Malaysia, ThemePreference::System, None)
    }

    fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            send(state, Event::Char(c));
        }
    }

    fn fill_application(state: &mut AppState) {
        type_text(state, "Aisha Rahman");
        send(state, Event::NextField);
        type_text(state, "aisha@example.com");
        send(state, Event::NextField);
        type_text(state, "+60 12-345 6789");
        send(state, Event::NextField);
        type_text(state, "I would love to join.");
    }

    #[test]
    fn start_connects_then_loads_preferences() {
        let mut state = state();
        let (render, actions) = send(&mut state, Event::Start);
        assert!(!render);
        assert_eq!(
            actions,
            vec![
                Action::PostToWorker(WorkerMessage::connect(Region::Malaysia)),
                Action::PostToWorker(WorkerMessage::load_preferences()),
            ]
        );
    }

    #[test]
    fn search_typing_filters_and_escape_restores() {
        let mut state = state();
        let total = state.filtered_jobs.len();

        send(&mut state, Event::SearchMode);
        assert_eq!(state.key_context(), KeyContext::SearchTyping);
        type_text(&mut state, "zzzz");
        assert!(state.filtered_jobs.is_empty());

        send(&mut state, Event::Escape);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.filtered_jobs.len(), total);
    }

    #[test]
    fn enter_while_typing_focuses_results() {
        let mut state = state();
        send(&mut state, Event::SearchMode);
        type_text(&mut state, "a");
        send(&mut state, Event::Select);
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));

        send(&mut state, Event::Select);
        assert_eq!(state.screen, Screen::Apply);
    }

    #[test]
    fn invalid_application_posts_nothing() {
        let mut state = state();
        send(&mut state, Event::OpenApply);
        type_text(&mut state, "Aisha");

        let (render, actions) = send(&mut state, Event::Select);
        assert!(render);
        assert!(actions.is_empty());
        let form = state.apply_form.as_ref().unwrap();
        assert_eq!(form.status, SubmissionStatus::Idle);
        assert!(!form.errors.is_empty());
    }

    #[test]
    fn application_success_locks_form() {
        let mut state = state();
        send(&mut state, Event::OpenApply);
        fill_application(&mut state);

        let (_, actions) = send(&mut state, Event::Select);
        assert_eq!(actions.len(), 1);
        assert_eq!(state.key_context(), KeyContext::Form);

        // Closing is refused while the request is in flight.
        assert!(!send(&mut state, Event::Escape).0);
        assert_eq!(state.screen, Screen::Apply);

        let job_id = state.apply_form.as_ref().unwrap().job_id.clone();
        send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::ApplicationSubmitted {
                job_id,
                result: ApplicationResult::Accepted {
                    application_id: "app-1".to_string(),
                },
            }),
        );
        assert_eq!(
            state.apply_form.as_ref().unwrap().status,
            SubmissionStatus::Success {
                application_id: "app-1".to_string()
            }
        );

        let (_, resubmit) = send(&mut state, Event::Select);
        assert!(resubmit.is_empty());

        send(&mut state, Event::Escape);
        assert!(state.apply_form.is_none());
        assert_eq!(state.screen, Screen::Browse);
    }

    #[test]
    fn transport_failure_unlocks_form() {
        let mut state = state();
        send(&mut state, Event::OpenApply);
        fill_application(&mut state);
        send(&mut state, Event::Select);

        send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::Error {
                operation: WorkerOperation::SubmitApplication,
                message: "disk full".to_string(),
            }),
        );
        let form = state.apply_form.as_ref().unwrap();
        assert_eq!(form.status, SubmissionStatus::Error(NETWORK_FAILURE.to_string()));
        assert!(form.is_editable());
        assert!(state.last_error.is_none());
    }

    #[test]
    fn menu_opens_panels_with_load_requests() {
        let mut state = state();
        send(&mut state, Event::OpenMenu);
        send(&mut state, Event::KeyDown);
        send(&mut state, Event::KeyDown);
        assert_eq!(PanelId::MENU[state.menu_index], PanelId::OldVacancy);

        let (_, actions) = send(&mut state, Event::Select);
        assert_eq!(state.screen, Screen::Panel(PanelId::OldVacancy));
        assert_eq!(actions.len(), 1);
        assert_eq!(state.status_jobs.len(), 1);

        send(&mut state, Event::Escape);
        assert_eq!(state.screen, Screen::Menu);
        send(&mut state, Event::Escape);
        assert_eq!(state.screen, Screen::Browse);
    }

    #[test]
    fn old_vacancy_select_opens_its_applications() {
        let mut state = state();
        send(&mut state, Event::OpenPanel(PanelId::OldVacancy));
        let job_id = state.status_jobs[0].job_id.clone();

        let (_, actions) = send(&mut state, Event::Select);
        assert_eq!(state.screen, Screen::Panel(PanelId::Applications));
        assert_eq!(state.applications_job.as_ref(), Some(&job_id));
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::load_applications(job_id))]
        );
    }

    #[test]
    fn location_select_filters_board() {
        let mut state = state();
        send(&mut state, Event::OpenPanel(PanelId::Locations));
        let first = location_states(&state)[0].clone();

        send(&mut state, Event::Select);
        assert_eq!(state.screen, Screen::Browse);
        assert_eq!(state.filters.state, Selector::Only(first.clone()));
        assert!(state.filtered_jobs.iter().all(|job| job.state == first));
    }

    #[test]
    fn theme_select_saves_preference() {
        let mut state = state();
        send(&mut state, Event::OpenPanel(PanelId::Themes));
        let (_, actions) = send(&mut state, Event::Select);
        assert_eq!(state.theme_preference, ThemePreference::Light);
        assert_eq!(state.theme.name, "jobfinder-light");
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::save_theme_preference(ThemePreference::Light))]
        );
    }

    #[test]
    fn stored_preference_applies_on_load() {
        let mut state = state();
        let (render, _) = send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::PreferencesLoaded { theme: None }),
        );
        assert!(!render);

        send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::PreferencesLoaded {
                theme: Some(ThemePreference::Light),
            }),
        );
        assert_eq!(state.theme_preference, ThemePreference::Light);
    }

    #[test]
    fn vacancy_form_edits_and_reports_backend_failure() {
        let mut state = state();
        send(&mut state, Event::OpenPanel(PanelId::NewVacancy));
        assert_eq!(state.key_context(), KeyContext::Form);

        let (_, actions) = send(&mut state, Event::Select);
        assert!(actions.is_empty());
        assert!(state.vacancy_form.errors.contains_key(&VacancyField::Title));

        type_text(&mut state, "Barista");
        assert_eq!(state.vacancy_form.title, "Barista");

        send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::Error {
                operation: WorkerOperation::PostVacancy,
                message: "storage unavailable".to_string(),
            }),
        );
        assert_eq!(state.vacancy_form.failure.as_deref(), Some("storage unavailable"));
        assert_eq!(state.vacancy_form.phase, PostingPhase::Editing);
    }

    #[test]
    fn posted_vacancy_joins_board_and_refreshes_panel() {
        let mut state = state();
        send(&mut state, Event::OpenPanel(PanelId::NewVacancy));
        let before = state.filtered_jobs.len();

        let mut job = state.catalog.jobs()[0].clone();
        job.job_id = "user-1".to_string();
        job.title = "Night Baker".to_string();

        let (_, actions) = send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::VacancyPosted { job }),
        );
        assert_eq!(state.filtered_jobs.len(), before + 1);
        assert_eq!(state.filtered_jobs[0].title, "Night Baker");
        assert_eq!(state.vacancy_form.phase, PostingPhase::Posted);
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn colliding_posted_id_reloads_board() {
        let mut state = state();
        let before = state.catalog.jobs().to_vec();

        let mut job = before[0].clone();
        job.title = "Night Baker".to_string();

        let (render, actions) = send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::VacancyPosted { job }),
        );
        assert!(render);
        assert_eq!(state.catalog.jobs(), before.as_slice());
        assert_eq!(state.vacancy_form.phase, PostingPhase::Posted);
        assert!(matches!(
            actions.as_slice(),
            [Action::PostToWorker(WorkerMessage::LoadJobs { .. })]
        ));
    }

    #[test]
    fn stale_vacancy_lists_are_ignored() {
        let mut state = state();
        send(&mut state, Event::OpenPanel(PanelId::DraftVacancy));
        let (render, _) = send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::VacanciesLoaded {
                status: crate::domain::job::VacancyStatus::Old,
                jobs: vec![],
            }),
        );
        assert!(!render);
        assert_eq!(state.status_jobs.len(), 1);
    }

    #[test]
    fn connect_failure_shows_banner() {
        let mut state = state();
        send(
            &mut state,
            Event::WorkerResponse(WorkerResponse::Error {
                operation: WorkerOperation::Connect,
                message: "Storage error: unreadable".to_string(),
            }),
        );
        let vm = state.compute_viewmodel(30, 120);
        assert_eq!(vm.error_banner.as_deref(), Some("Storage error: unreadable"));
    }
}
