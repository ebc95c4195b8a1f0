//! View model types representing renderable UI state.
//!
//! View models are computed by [`AppState::compute_viewmodel`](crate::app::AppState::compute_viewmodel)
//! and consumed by the renderer. They hold display-ready strings only: salary
//! text is already formatted, dates are already relative, highlight ranges are
//! already computed.
//!
//! # Example
//!
//! ```
//! use jobfinder::app::AppState;
//! use jobfinder::domain::Region;
//! use jobfinder::ui::viewmodel::Body;
//!
//! let state = AppState::new(Region::Malaysia, Default::default(), None);
//! let vm = state.compute_viewmodel(30, 100);
//! assert!(matches!(vm.body, Body::Listing { .. }));
//! ```

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub body: Body,
    pub footer: FooterInfo,
    /// Worker failure unrelated to any open form.
    pub error_banner: Option<String>,
}

/// What fills the space between header and footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// The job board.
    Listing {
        filter_bar: FilterBarInfo,
        search_bar: Option<SearchBarInfo>,
        rows: Vec<JobRow>,
        /// Index into `rows`.
        selected_index: usize,
        /// Set when no job matches; `rows` is then empty.
        empty_state: Option<EmptyState>,
    },

    /// The side menu.
    Menu { items: Vec<MenuItem> },

    /// A side panel.
    Panel(PanelView),

    /// The application form.
    Apply(ApplyView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// Right-aligned `"<n> jobs"` style summary.
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Current filter selections as chips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBarInfo {
    pub chips: Vec<FilterChip>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    /// Key that cycles this filter, e.g. `"t"`.
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
    /// `false` when the selector is `All`.
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    /// `true` while keys edit the query.
    pub editing: bool,
}

/// One job in the board table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRow {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub salary: String,
    pub posted: String,
    pub is_selected: bool,
    /// Search matches within `title`, as `(start, end)` char indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub title: &'static str,
    pub hint: &'static str,
    pub is_selected: bool,
}

/// A panel rendered as a vertical list of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub title: String,
    pub rows: Vec<PanelRow>,
}

impl PanelView {
    /// Number of rows the cursor can land on.
    #[must_use]
    pub fn selectable_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| matches!(row, PanelRow::Item { selectable: true, .. }))
            .count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelRow {
    Heading(String),
    Item {
        text: String,
        detail: String,
        selectable: bool,
        is_selected: bool,
    },
    /// A labelled value; editable when the panel hosts a form.
    Field {
        label: &'static str,
        value: String,
        focused: bool,
        error: Option<String>,
    },
    Notice { text: String, kind: NoticeKind },
    Muted(String),
}

/// The apply form as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyView {
    pub job_title: String,
    pub company: String,
    pub fields: Vec<PanelRow>,
    pub notice: Option<(String, NoticeKind)>,
}
