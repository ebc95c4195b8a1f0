//! Interaction state machine types.
//!
//! Two axes decide how a key is interpreted: the [`Screen`] currently shown
//! and, on the board itself, the [`InputMode`]. [`KeyContext`] folds both
//! into the single value the plugin's key mapper switches on.

use crate::app::panels::PanelId;

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Keys edit the query.
    Typing,

    /// Keys move through the filtered results; Enter opens the apply form.
    Navigating,
}

/// How keys are handled on the job board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigation, filter cycling and screen switching.
    Normal,

    /// Active search with typing or result navigation focus.
    Search(SearchFocus),
}

/// The screen currently occupying the plugin pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Filter bar and job table.
    Browse,

    /// Side menu listing the panels.
    Menu,

    /// One side panel.
    Panel(PanelId),

    /// Application form for the selected job.
    Apply,
}

/// Key interpretation context derived from [`Screen`] and [`InputMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    Browse,
    SearchTyping,
    SearchNavigating,
    Menu,
    /// A read-only or selectable panel list.
    Panel,
    /// A text form (the apply form or the vacancy form).
    Form,
}
