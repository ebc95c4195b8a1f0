//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for everything the plugin
//! shows: the job catalog mirrored from the backend, the active filters and
//! the derived visible list, which screen is open, and the state of both
//! forms. It is mutated only by [`handle_event`](crate::app::handle_event).
//!
//! Core data (the catalog, filters) is kept apart from derived data
//! (`filtered_jobs`, `selected_index`). Every mutation of the former is
//! followed by [`AppState::apply_filters`].
//!
//! # Example
//!
//! ```
//! use jobfinder::app::AppState;
//! use jobfinder::domain::{Region, Selector};
//! use jobfinder::ui::theme::ThemePreference;
//!
//! let mut state = AppState::new(Region::Malaysia, ThemePreference::System, None);
//! state.filters.state = Selector::Only("Selangor".to_string());
//! state.apply_filters();
//! assert!(state.filtered_jobs.iter().all(|job| job.state == "Selangor"));
//! ```

use super::forms::{ApplyField, ApplyForm, SubmissionStatus, VacancyForm};
use super::modes::{InputMode, KeyContext, Screen, SearchFocus};
use super::panels::PanelId;
use crate::backend::models::BoardSummary;
use crate::catalog::JobCatalog;
use crate::domain::filter::{filter_jobs, Filters, Selector};
use crate::domain::format::{format_salary, time_ago};
use crate::domain::job::{JobApplication, JobListing, JobType};
use crate::domain::region::Region;
use crate::ui::components::WIDE_LAYOUT_COLS;
use crate::ui::helpers::substring_ranges;
use crate::ui::theme::{Theme, ThemePreference};
use crate::ui::viewmodel::{
    ApplyView, Body, EmptyState, FilterBarInfo, FilterChip, FooterInfo, HeaderInfo, JobRow,
    MenuItem, NoticeKind, PanelRow, SearchBarInfo, UIViewModel,
};

/// Rows taken by everything except the job table in normal mode: top
/// margin, header, border, filter bar, column headings, border, footer.
const LISTING_CHROME_ROWS: usize = 7;

/// Extra rows taken by the search box.
const SEARCH_BOX_ROWS: usize = 3;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    pub region: Region,

    /// Every listing known to the plugin, posted vacancies first.
    ///
    /// Seeded from the region fixtures so the board renders before the
    /// worker answers, then replaced by the backend's list.
    pub catalog: JobCatalog,

    pub filters: Filters,

    /// Published listings matching `filters`, in catalog order.
    pub filtered_jobs: Vec<JobListing>,

    /// Index into `filtered_jobs`. Clamped by `apply_filters`.
    pub selected_index: usize,

    pub input_mode: InputMode,
    pub screen: Screen,

    /// Cursor in the side menu.
    pub menu_index: usize,
    /// Cursor among the selectable rows of the open panel.
    pub panel_index: usize,

    /// Present while the apply screen is open.
    pub apply_form: Option<ApplyForm>,
    pub vacancy_form: VacancyForm,

    /// Listings shown by the open vacancy panel.
    pub status_jobs: Vec<JobListing>,

    /// Job whose applications the applications panel shows.
    pub applications_job: Option<String>,
    pub applications: Vec<JobApplication>,

    /// Latest backend totals for the overview panel.
    pub summary: Option<BoardSummary>,

    pub theme_preference: ThemePreference,
    pub theme: Theme,
    /// `true` when a `theme_file` palette overrides the preference palettes.
    pub custom_theme: bool,

    /// Set once the worker has answered `Connect`.
    pub connected: bool,

    /// Latest worker failure not tied to an open form.
    pub last_error: Option<String>,
}

impl AppState {
    /// Creates the initial state for `region`.
    ///
    /// # Parameters
    ///
    /// * `region` - Regional variant; selects fixtures, currency and salary notation
    /// * `theme_preference` - Preference to render with until the stored one loads
    /// * `custom_theme` - Palette from `theme_file`, which wins over any preference
    #[must_use]
    pub fn new(region: Region, theme_preference: ThemePreference, custom_theme: Option<Theme>) -> Self {
        let custom = custom_theme.is_some();
        let theme = custom_theme.unwrap_or_else(|| Theme::for_preference(theme_preference));

        let mut state = Self {
            region,
            catalog: JobCatalog::seeded(region),
            filters: Filters::default(),
            filtered_jobs: Vec::new(),
            selected_index: 0,
            input_mode: InputMode::Normal,
            screen: Screen::Browse,
            menu_index: 0,
            panel_index: 0,
            apply_form: None,
            vacancy_form: VacancyForm::new(region),
            status_jobs: Vec::new(),
            applications_job: None,
            applications: Vec::new(),
            summary: None,
            theme_preference,
            theme,
            custom_theme: custom,
            connected: false,
            last_error: None,
        };
        state.apply_filters();
        state
    }

    /// Recomputes `filtered_jobs` from the published catalog and clamps the
    /// selection.
    pub fn apply_filters(&mut self) {
        self.filtered_jobs = filter_jobs(&self.catalog.published(), &self.filters);

        if self.filtered_jobs.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered_jobs.len() - 1);
        }
    }

    /// Replaces the catalog with the backend's job list.
    pub fn replace_jobs(&mut self, jobs: Vec<JobListing>) {
        self.catalog.replace_all(jobs);
        self.apply_filters();
    }

    /// Moves the selection down, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.filtered_jobs.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered_jobs.len();
    }

    /// Moves the selection up, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.filtered_jobs.is_empty() {
            return;
        }
        self.selected_index = self
            .selected_index
            .checked_sub(1)
            .unwrap_or(self.filtered_jobs.len() - 1);
    }

    #[must_use]
    pub fn selected_job(&self) -> Option<&JobListing> {
        self.filtered_jobs.get(self.selected_index)
    }

    /// Cycles the job-type filter: All, then each type, then All again.
    pub fn cycle_job_type(&mut self) {
        self.filters.job_type = cycle_selector(&self.filters.job_type, &JobType::ALL);
        self.apply_filters();
    }

    /// Cycles the state filter through the states present. Resets the district.
    pub fn cycle_state(&mut self) {
        self.filters.state = cycle_selector(&self.filters.state, &self.catalog.states());
        self.filters.district = Selector::All;
        self.apply_filters();
    }

    /// Cycles the district filter within the selected state. No-op while the
    /// state filter is `All`.
    pub fn cycle_district(&mut self) {
        let Some(state) = self.filters.state.value() else {
            return;
        };
        let districts = self.catalog.districts_for_state(state);
        self.filters.district = cycle_selector(&self.filters.district, &districts);
        self.apply_filters();
    }

    /// Resets every filter, the query included.
    pub fn clear_filters(&mut self) {
        self.filters = Filters::default();
        self.apply_filters();
    }

    /// Switches preference and, unless a custom palette is configured, the
    /// rendered theme.
    pub fn set_theme_preference(&mut self, preference: ThemePreference) {
        self.theme_preference = preference;
        if !self.custom_theme {
            self.theme = Theme::for_preference(preference);
        }
    }

    /// How the plugin should interpret the next key.
    #[must_use]
    pub const fn key_context(&self) -> KeyContext {
        match self.screen {
            Screen::Browse => match self.input_mode {
                InputMode::Normal => KeyContext::Browse,
                InputMode::Search(SearchFocus::Typing) => KeyContext::SearchTyping,
                InputMode::Search(SearchFocus::Navigating) => KeyContext::SearchNavigating,
            },
            Screen::Menu => KeyContext::Menu,
            Screen::Panel(id) if id.hosts_form() => KeyContext::Form,
            Screen::Panel(_) => KeyContext::Panel,
            Screen::Apply => KeyContext::Form,
        }
    }

    /// Computes the view model for a `rows` x `cols` pane.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let body = match self.screen {
            Screen::Browse => self.compute_listing(rows, cols),
            Screen::Menu => Body::Menu {
                items: PanelId::MENU
                    .iter()
                    .enumerate()
                    .map(|(idx, id)| MenuItem {
                        title: id.meta().title,
                        hint: id.meta().hint,
                        is_selected: idx == self.menu_index,
                    })
                    .collect(),
            },
            Screen::Panel(id) => Body::Panel(id.build_view(self)),
            Screen::Apply => self
                .apply_form
                .as_ref()
                .map_or_else(|| self.compute_listing(rows, cols), |form| Body::Apply(compute_apply(form))),
        };

        UIViewModel {
            header: self.compute_header(),
            body,
            footer: self.compute_footer(),
            error_banner: self.last_error.clone(),
        }
    }

    fn compute_listing(&self, rows: usize, cols: usize) -> Body {
        let search_bar = self.compute_search_bar();
        let filter_bar = self.compute_filter_bar();

        if self.filtered_jobs.is_empty() {
            return Body::Listing {
                filter_bar,
                search_bar,
                rows: Vec::new(),
                selected_index: 0,
                empty_state: Some(EmptyState {
                    message: "No jobs found".to_string(),
                    subtitle: "Try adjusting your filters or search terms to discover more opportunities."
                        .to_string(),
                }),
            };
        }

        let chrome = LISTING_CHROME_ROWS
            + if search_bar.is_some() { SEARCH_BOX_ROWS } else { 0 }
            + usize::from(self.last_error.is_some());
        let available_rows = rows.saturating_sub(chrome).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.filtered_jobs.len());
        if visible_end - visible_start < available_rows && self.filtered_jobs.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let query = self.filters.query();
        let job_rows = self.filtered_jobs[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, job)| {
                self.compute_job_row(job, visible_start + relative_idx == self.selected_index, &query, cols)
            })
            .collect();

        Body::Listing {
            filter_bar,
            search_bar,
            rows: job_rows,
            selected_index: self.selected_index.saturating_sub(visible_start),
            empty_state: None,
        }
    }

    fn compute_job_row(&self, job: &JobListing, is_selected: bool, query: &str, cols: usize) -> JobRow {
        let location = if cols < WIDE_LAYOUT_COLS { String::new() } else { job.location_label() };

        JobRow {
            title: job.title.clone(),
            company: job.company.clone(),
            location,
            job_type: job.job_type.label().to_string(),
            salary: format_salary(
                job.salary_min,
                job.salary_max,
                &job.salary_currency,
                self.region.salary_notation(),
            ),
            posted: time_ago(job.date_posted),
            is_selected,
            highlight_ranges: substring_ranges(&job.title, query),
        }
    }

    fn compute_filter_bar(&self) -> FilterBarInfo {
        fn chip<T>(key: &'static str, label: &'static str, selector: &Selector<T>, show: impl Fn(&T) -> String) -> FilterChip {
            FilterChip {
                key,
                label,
                value: selector.value().map_or_else(|| "All".to_string(), show),
                active: !selector.is_all(),
            }
        }

        FilterBarInfo {
            chips: vec![
                chip("t", "Type", &self.filters.job_type, |t| t.label().to_string()),
                chip("s", "State", &self.filters.state, Clone::clone),
                chip("d", "District", &self.filters.district, Clone::clone),
            ],
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        let editing = matches!(self.input_mode, InputMode::Search(SearchFocus::Typing));
        if matches!(self.input_mode, InputMode::Search(_)) || !self.filters.search.is_empty() {
            Some(SearchBarInfo {
                query: self.filters.search.clone(),
                editing,
            })
        } else {
            None
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let subtitle = match self.screen {
            Screen::Browse => format!(
                "{} of {} jobs",
                self.filtered_jobs.len(),
                self.catalog.stats().jobs
            ),
            Screen::Menu => "Menu".to_string(),
            Screen::Panel(id) => id.meta().title.to_string(),
            Screen::Apply => "Apply".to_string(),
        };

        HeaderInfo {
            title: format!("JobFinder  {}", self.region.tagline()),
            subtitle,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.key_context() {
            KeyContext::Browse => {
                "j/k: navigate  /: search  t/s/d: type/state/district  c: clear  Enter: apply  m: menu  q: quit"
            }
            KeyContext::SearchTyping => "ESC: exit search  Enter: results  Ctrl+n/p: navigate  Type to filter",
            KeyContext::SearchNavigating => "ESC: exit search  /: edit query  j/k: navigate  Enter: apply",
            KeyContext::Menu => "j/k: navigate  Enter: open  ESC: back",
            KeyContext::Panel => "j/k: navigate  Enter: select  ESC: back",
            KeyContext::Form => match self.screen {
                Screen::Apply => "Tab/Shift+Tab: field  Enter: submit  ESC: close",
                _ => "Tab/Shift+Tab: field  Left/Right: change  Enter: post  ESC: back",
            },
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

fn compute_apply(form: &ApplyForm) -> ApplyView {
    let fields = ApplyField::ALL
        .iter()
        .map(|field| PanelRow::Field {
            label: field.label(),
            value: form.value(*field).to_string(),
            focused: form.focus == *field && form.is_editable(),
            error: form.errors.get(field).cloned(),
        })
        .collect();

    let notice = match &form.status {
        SubmissionStatus::Idle => None,
        SubmissionStatus::Loading => Some(("Submitting...".to_string(), NoticeKind::Info)),
        SubmissionStatus::Success { application_id } => Some((
            format!("Application submitted ({application_id}). Good luck!"),
            NoticeKind::Success,
        )),
        SubmissionStatus::Error(message) => Some((message.clone(), NoticeKind::Error)),
    };

    ApplyView {
        job_title: form.job_title.clone(),
        company: form.company.clone(),
        fields,
        notice,
    }
}

/// Advances `current` through `All`, each option in order, then `All` again.
///
/// A current value no longer among `options` restarts from the first option.
fn cycle_selector<T: Clone + PartialEq>(current: &Selector<T>, options: &[T]) -> Selector<T> {
    let next_index = match current {
        Selector::All => 0,
        Selector::Only(value) => options
            .iter()
            .position(|option| option == value)
            .map_or(0, |idx| idx + 1),
    };

    options
        .get(next_index)
        .cloned()
        .map_or(Selector::All, Selector::Only)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(Region::Malaysia, ThemePreference::Dark, None)
    }

    #[test]
    fn starts_with_published_jobs() {
        let state = state();
        assert_eq!(state.filtered_jobs.len(), state.catalog.published().len());
        assert_eq!(state.key_context(), KeyContext::Browse);
    }

    #[test]
    fn selection_wraps() {
        let mut state = state();
        state.move_selection_up();
        assert_eq!(state.selected_index, state.filtered_jobs.len() - 1);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn state_cycle_resets_district_and_returns_to_all() {
        let mut state = state();
        let states = state.catalog.states();

        state.cycle_state();
        assert_eq!(state.filters.state, Selector::Only(states[0].clone()));
        state.cycle_district();
        assert!(!state.filters.district.is_all());

        state.cycle_state();
        assert!(state.filters.district.is_all());

        for _ in 1..states.len() {
            state.cycle_state();
        }
        assert!(state.filters.state.is_all());
    }

    #[test]
    fn district_cycle_needs_a_state() {
        let mut state = state();
        state.cycle_district();
        assert!(state.filters.district.is_all());
    }

    #[test]
    fn job_type_cycle_visits_every_type() {
        let mut state = state();
        for expected in JobType::ALL {
            state.cycle_job_type();
            assert_eq!(state.filters.job_type, Selector::Only(expected));
            assert!(state.filtered_jobs.iter().all(|job| job.job_type == expected));
        }
        state.cycle_job_type();
        assert!(state.filters.job_type.is_all());
    }

    #[test]
    fn empty_result_shows_empty_state() {
        let mut state = state();
        state.filters.search = "zzz-no-such-job".to_string();
        state.apply_filters();
        let vm = state.compute_viewmodel(30, 120);
        let Body::Listing { empty_state, rows, .. } = vm.body else {
            panic!("expected listing");
        };
        assert!(rows.is_empty());
        assert_eq!(empty_state.map(|e| e.message), Some("No jobs found".to_string()));
    }

    #[test]
    fn listing_window_keeps_selection_visible() {
        let mut state = state();
        state.selected_index = state.filtered_jobs.len() - 1;
        let vm = state.compute_viewmodel(12, 120);
        let Body::Listing { rows, selected_index, .. } = vm.body else {
            panic!("expected listing");
        };
        assert_eq!(rows.len(), 12 - LISTING_CHROME_ROWS);
        assert!(rows[selected_index].is_selected);
    }

    #[test]
    fn search_highlights_title_matches() {
        let mut state = state();
        state.input_mode = InputMode::Search(SearchFocus::Typing);
        state.filters.search = "ENGINEER".to_string();
        state.apply_filters();
        let vm = state.compute_viewmodel(40, 120);
        let Body::Listing { rows, search_bar, .. } = vm.body else {
            panic!("expected listing");
        };
        assert!(search_bar.is_some_and(|bar| bar.editing));
        assert!(rows
            .iter()
            .filter(|row| row.title.to_lowercase().contains("engineer"))
            .all(|row| !row.highlight_ranges.is_empty()));
    }

    #[test]
    fn filter_bar_shows_active_selectors() {
        let mut state = state();
        state.cycle_job_type();
        let vm = state.compute_viewmodel(30, 120);
        let Body::Listing { filter_bar, .. } = vm.body else {
            panic!("expected listing");
        };
        let chips: Vec<(&str, String, bool)> = filter_bar
            .chips
            .iter()
            .map(|chip| (chip.key, chip.value.clone(), chip.active))
            .collect();
        assert_eq!(
            chips,
            vec![
                ("t", JobType::ALL[0].label().to_string(), true),
                ("s", "All".to_string(), false),
                ("d", "All".to_string(), false),
            ]
        );
    }

    #[test]
    fn custom_theme_survives_preference_change() {
        let mut custom = Theme::default();
        custom.name = "mine".to_string();
        let mut state = AppState::new(Region::India, ThemePreference::Light, Some(custom));
        state.set_theme_preference(ThemePreference::Dark);
        assert_eq!(state.theme.name, "mine");
        assert_eq!(state.theme_preference, ThemePreference::Dark);
    }

    #[test]
    fn cycle_selector_restarts_on_stale_value() {
        let options = vec!["a".to_string(), "b".to_string()];
        let stale = Selector::Only("z".to_string());
        assert_eq!(cycle_selector(&stale, &options), Selector::Only("a".to_string()));
        assert_eq!(cycle_selector::<String>(&Selector::All, &[]), Selector::All);
    }
}
