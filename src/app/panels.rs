//! Side panels and their registry.
//!
//! Each [`PanelId`] maps to static metadata (menu title and hint), a view
//! builder that turns [`AppState`] into a [`PanelView`], and the worker
//! requests needed to populate it when it opens. Adding a panel means adding a
//! variant and one arm in each of those three places; the handler and the
//! renderer stay untouched.

use crate::app::forms::{PostingPhase, VacancyField};
use crate::app::{Action, AppState};
use crate::domain::format::{format_salary, time_ago};
use crate::domain::job::{JobListing, JobType, VacancyStatus};
use crate::infrastructure::paths::{board_file, strip_host_prefix};
use crate::ui::theme::ThemePreference;
use crate::ui::viewmodel::{NoticeKind, PanelRow, PanelView};
use crate::worker::WorkerMessage;

/// Identifies a side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelId {
    Themes,
    Locations,
    Overview,
    NewVacancy,
    OldVacancy,
    DraftVacancy,
    Applications,
}

/// Menu entry text for a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelMeta {
    pub title: &'static str,
    pub hint: &'static str,
}

/// Builds a panel's view from the current state.
pub type ViewBuilder = fn(&AppState) -> PanelView;

impl PanelId {
    /// Side menu order.
    pub const MENU: [Self; 7] = [
        Self::Locations,
        Self::NewVacancy,
        Self::OldVacancy,
        Self::DraftVacancy,
        Self::Applications,
        Self::Overview,
        Self::Themes,
    ];

    #[must_use]
    pub const fn meta(self) -> PanelMeta {
        match self {
            Self::Themes => PanelMeta { title: "Themes", hint: "Light, dark or follow the system" },
            Self::Locations => PanelMeta { title: "Locations", hint: "Browse jobs by state" },
            Self::Overview => PanelMeta { title: "Overview", hint: "Board totals by job type" },
            Self::NewVacancy => PanelMeta { title: "New vacancy", hint: "Post a job and see active listings" },
            Self::OldVacancy => PanelMeta { title: "Old vacancies", hint: "Listings closed to applications" },
            Self::DraftVacancy => PanelMeta { title: "Draft vacancies", hint: "Saved but not yet published" },
            Self::Applications => PanelMeta { title: "Applications", hint: "Applicants for the selected job" },
        }
    }

    /// The view builder registered for this panel.
    #[must_use]
    pub fn view_builder(self) -> ViewBuilder {
        match self {
            Self::Themes => themes_view,
            Self::Locations => locations_view,
            Self::Overview => overview_view,
            Self::NewVacancy => new_vacancy_view,
            Self::OldVacancy => old_vacancy_view,
            Self::DraftVacancy => draft_vacancy_view,
            Self::Applications => applications_view,
        }
    }

    /// Status listed by the vacancy panels.
    #[must_use]
    pub const fn vacancy_status(self) -> Option<VacancyStatus> {
        match self {
            Self::NewVacancy => Some(VacancyStatus::New),
            Self::OldVacancy => Some(VacancyStatus::Old),
            Self::DraftVacancy => Some(VacancyStatus::Draft),
            _ => None,
        }
    }

    /// `true` for panels whose keys edit a form rather than move a cursor.
    #[must_use]
    pub const fn hosts_form(self) -> bool {
        matches!(self, Self::NewVacancy)
    }

    /// Worker requests that populate the panel when it opens.
    #[must_use]
    pub fn load_actions(self, state: &AppState) -> Vec<Action> {
        let message = match self {
            Self::Overview => Some(WorkerMessage::load_summary()),
            Self::NewVacancy | Self::OldVacancy | Self::DraftVacancy => {
                self.vacancy_status().map(WorkerMessage::load_vacancies)
            }
            Self::Applications => state
                .applications_job
                .as_ref()
                .map(|job_id| WorkerMessage::load_applications(job_id.clone())),
            Self::Themes | Self::Locations => None,
        };
        message.map(Action::PostToWorker).into_iter().collect()
    }

    /// Builds the panel's view.
    #[must_use]
    pub fn build_view(self, state: &AppState) -> PanelView {
        (self.view_builder())(state)
    }
}

/// Accumulates rows while tracking which selectable item is under the cursor.
struct RowBuilder {
    rows: Vec<PanelRow>,
    cursor: Option<usize>,
    selectable_seen: usize,
}

impl RowBuilder {
    const fn new(cursor: Option<usize>) -> Self {
        Self {
            rows: Vec::new(),
            cursor,
            selectable_seen: 0,
        }
    }

    fn heading(&mut self, text: impl Into<String>) {
        self.rows.push(PanelRow::Heading(text.into()));
    }

    fn muted(&mut self, text: impl Into<String>) {
        self.rows.push(PanelRow::Muted(text.into()));
    }

    fn notice(&mut self, text: impl Into<String>, kind: NoticeKind) {
        self.rows.push(PanelRow::Notice { text: text.into(), kind });
    }

    fn field(&mut self, label: &'static str, value: impl Into<String>) {
        self.rows.push(PanelRow::Field {
            label,
            value: value.into(),
            focused: false,
            error: None,
        });
    }

    fn item(&mut self, text: impl Into<String>, detail: impl Into<String>) {
        self.rows.push(PanelRow::Item {
            text: text.into(),
            detail: detail.into(),
            selectable: false,
            is_selected: false,
        });
    }

    fn selectable(&mut self, text: impl Into<String>, detail: impl Into<String>) {
        let is_selected = self.cursor == Some(self.selectable_seen);
        self.selectable_seen += 1;
        self.rows.push(PanelRow::Item {
            text: text.into(),
            detail: detail.into(),
            selectable: true,
            is_selected,
        });
    }

    fn finish(self, title: impl Into<String>) -> PanelView {
        PanelView {
            title: title.into(),
            rows: self.rows,
        }
    }
}

fn salary_text(state: &AppState, job: &JobListing) -> String {
    format_salary(
        job.salary_min,
        job.salary_max,
        &job.salary_currency,
        state.region.salary_notation(),
    )
}

fn themes_view(state: &AppState) -> PanelView {
    let mut rows = RowBuilder::new(Some(state.panel_index));
    rows.heading("Appearance");
    for preference in ThemePreference::ALL {
        let detail = if preference == state.theme_preference { "current" } else { "" };
        rows.selectable(preference.label(), detail);
    }
    rows.muted("System uses the dark palette.");
    if state.custom_theme {
        rows.notice("A custom theme file is configured and takes precedence.", NoticeKind::Info);
    }
    rows.finish(PanelId::Themes.meta().title)
}

/// States in the order the locations panel lists them.
#[must_use]
pub fn location_states(state: &AppState) -> Vec<String> {
    state
        .catalog
        .group_by_region()
        .into_iter()
        .flat_map(|group| group.states.into_iter().map(|entry| entry.state))
        .collect()
}

fn locations_view(state: &AppState) -> PanelView {
    let mut rows = RowBuilder::new(Some(state.panel_index));
    for group in state.catalog.group_by_region() {
        rows.heading(group.name);
        for entry in group.states {
            let noun = if entry.count == 1 { "job" } else { "jobs" };
            rows.selectable(entry.state, format!("{} {noun}", entry.count));
        }
    }
    if rows.selectable_seen == 0 {
        rows.muted("No published jobs yet.");
    }
    rows.finish(format!("Jobs across {}", state.region.country()))
}

fn overview_view(state: &AppState) -> PanelView {
    let mut rows = RowBuilder::new(None);
    let stats = state.catalog.stats();

    rows.heading(state.region.tagline());
    rows.field("Open jobs", stats.jobs.to_string());
    rows.field("States", stats.states.to_string());
    rows.field("Companies", stats.companies.to_string());

    match &state.summary {
        Some(summary) => {
            rows.heading("Board");
            rows.field("All listings", summary.job_count.to_string());
            rows.field("Applications", summary.application_count.to_string());
            rows.heading("By job type");
            for job_type in JobType::ALL {
                rows.field(job_type.label(), summary.job_types.get(job_type).to_string());
            }
        }
        None => rows.muted("Loading board totals..."),
    }

    let board = board_file(state.region);
    rows.muted(format!("Data: {}", strip_host_prefix(&board.to_string_lossy())));
    rows.finish(PanelId::Overview.meta().title)
}

fn new_vacancy_view(state: &AppState) -> PanelView {
    let mut rows = RowBuilder::new(None);
    let form = &state.vacancy_form;

    rows.heading("Post a vacancy");
    for field in VacancyField::ALL {
        let value = if field.is_choice() {
            format!("< {} >", form.value(field))
        } else {
            form.value(field).to_string()
        };
        rows.rows.push(PanelRow::Field {
            label: field.label(),
            value,
            focused: form.focus == field,
            error: form.errors.get(&field).cloned(),
        });
    }

    match (&form.phase, &form.failure) {
        (_, Some(failure)) => rows.notice(failure.clone(), NoticeKind::Error),
        (PostingPhase::Posting, None) => rows.notice("Posting...", NoticeKind::Info),
        (PostingPhase::Posted, None) => rows.notice(crate::app::forms::VACANCY_POSTED, NoticeKind::Success),
        (PostingPhase::Editing, None) => {}
    }

    rows.heading("Active listings");
    vacancy_items(&mut rows, state, false, "No active listings.");
    rows.finish(PanelId::NewVacancy.meta().title)
}

fn old_vacancy_view(state: &AppState) -> PanelView {
    let mut rows = RowBuilder::new(Some(state.panel_index));
    vacancy_items(&mut rows, state, true, "No closed vacancies.");
    rows.finish(PanelId::OldVacancy.meta().title)
}

fn draft_vacancy_view(state: &AppState) -> PanelView {
    let mut rows = RowBuilder::new(Some(state.panel_index));
    vacancy_items(&mut rows, state, true, "No drafts.");
    rows.finish(PanelId::DraftVacancy.meta().title)
}

fn vacancy_items(rows: &mut RowBuilder, state: &AppState, selectable: bool, empty: &str) {
    if state.status_jobs.is_empty() {
        rows.muted(empty);
        return;
    }
    for job in &state.status_jobs {
        let text = format!("{}  {}", job.title, job.company);
        let detail = format!(
            "{}  {}  {}",
            job.location_label(),
            salary_text(state, job),
            time_ago(job.date_posted)
        );
        if selectable {
            rows.selectable(text, detail);
        } else {
            rows.item(text, detail);
        }
    }
}

fn applications_view(state: &AppState) -> PanelView {
    let mut rows = RowBuilder::new(Some(state.panel_index));

    let Some(job_id) = &state.applications_job else {
        rows.muted("Select a job on the board first.");
        return rows.finish(PanelId::Applications.meta().title);
    };

    let title = state
        .catalog
        .get(job_id)
        .map_or_else(|| job_id.clone(), |job| format!("{} at {}", job.title, job.company));
    rows.heading(title);

    if state.applications.is_empty() {
        rows.muted("No applications yet.");
    }
    for application in &state.applications {
        rows.selectable(
            format!("{} <{}>", application.applicant_name, application.email),
            format!("{}  {}", application.phone, time_ago(application.submitted_at)),
        );
    }

    rows.finish(PanelId::Applications.meta().title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::region::Region;

    #[test]
    fn every_menu_panel_builds() {
        let state = AppState::new(Region::Malaysia, ThemePreference::Dark, None);
        for id in PanelId::MENU {
            let view = id.build_view(&state);
            assert!(!view.title.is_empty(), "{id:?} has no title");
            assert!(!view.rows.is_empty(), "{id:?} has no rows");
        }
    }

    #[test]
    fn themes_mark_current_and_cursor() {
        let mut state = AppState::new(Region::Malaysia, ThemePreference::Light, None);
        state.panel_index = 1;
        let view = PanelId::Themes.build_view(&state);
        assert_eq!(view.selectable_count(), 3);
        assert!(view.rows.contains(&PanelRow::Item {
            text: "Light".to_string(),
            detail: "current".to_string(),
            selectable: true,
            is_selected: false,
        }));
        assert!(view.rows.contains(&PanelRow::Item {
            text: "Dark".to_string(),
            detail: String::new(),
            selectable: true,
            is_selected: true,
        }));
    }

    #[test]
    fn locations_follow_region_grouping() {
        let state = AppState::new(Region::India, ThemePreference::System, None);
        let states = location_states(&state);
        assert_eq!(states.len(), PanelId::Locations.build_view(&state).selectable_count());
        assert_eq!(states.last().map(String::as_str), Some("Kerala"));
    }

    #[test]
    fn load_actions_per_panel() {
        let mut state = AppState::new(Region::Malaysia, ThemePreference::System, None);
        assert!(PanelId::Themes.load_actions(&state).is_empty());
        assert_eq!(
            PanelId::DraftVacancy.load_actions(&state),
            vec![Action::PostToWorker(WorkerMessage::load_vacancies(VacancyStatus::Draft))]
        );
        assert!(PanelId::Applications.load_actions(&state).is_empty());
        state.applications_job = Some("job-3".to_string());
        assert_eq!(
            PanelId::Applications.load_actions(&state),
            vec![Action::PostToWorker(WorkerMessage::load_applications("job-3".to_string()))]
        );
    }
}
