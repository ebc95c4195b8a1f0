//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the JobFinder library
//! and the Zellij plugin system. It implements `ZellijPlugin` for the UI
//! thread and registers the worker that owns the backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling
//! │  └──────────────────┘   │
//! │          │              │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │ JobFinderWorker  │   │  ← JSON backend
//! │  │ (worker thread)  │   │  ← Submissions, posts
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, `CustomMessage` and permission events
//! 3. **Start**: Once permissions are granted, connect the worker and load
//!    the stored theme preference
//! 4. **Update**: Translate Zellij events, delegate to the library
//! 5. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! Board:
//! - `j`/`k`/`Down`/`Up`, `Ctrl+n`/`Ctrl+p`: Move
//! - `Enter`: Apply to the selected job
//! - `/`: Search by title
//! - `t`/`s`/`d`: Cycle job type, state, district
//! - `c`: Clear filters
//! - `m`: Open the menu
//! - `q`: Close plugin
//!
//! Search (typing): characters edit the query, `Enter` moves to the results,
//! `Esc` leaves search. Menu and panels: `j`/`k` move, `Enter` selects, `Esc`
//! backs out. Forms: `Tab`/`Shift+Tab` or arrows move between fields,
//! `Left`/`Right` change choice fields, `Enter` submits, `Esc` closes.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use jobfinder::worker::{JobFinderWorker, WorkerMessage, WorkerResponse};
use jobfinder::{handle_event, Action, Config, Event, KeyContext};

// Register plugin and worker with Zellij
register_plugin!(State);
register_worker!(JobFinderWorker, jobfinder_worker, JOBFINDER_WORKER);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns like worker
/// communication.
struct State {
    /// Core application state from library layer.
    app: jobfinder::app::AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: jobfinder::initialize(&default_config),
            worker_name: "jobfinder".to_string(),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// Requests:
    /// - `ReadApplicationState`: Read pane state
    /// - `ChangeApplicationState`: Hide the plugin pane
    /// - `FullHdAccess`: Let the worker read and write the board file
    ///
    /// # Subscriptions
    ///
    /// - `Key`: Keyboard input
    /// - `CustomMessage`: Worker responses
    /// - `PermissionRequestResult`: Start once permissions are granted
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        jobfinder::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(region = config.region.key(), theme = ?config.theme, "parsed configuration");
        self.app = jobfinder::initialize(&config);
        tracing::debug!("app state initialized");

        request_permission(&[
            PermissionType::ReadApplicationState,
            PermissionType::ChangeApplicationState,
            PermissionType::FullHdAccess,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                match permissions {
                    PermissionStatus::Granted => {
                        tracing::debug!("permissions granted - starting");
                        Event::Start
                    }
                    PermissionStatus::Denied => {
                        tracing::warn!("permissions denied - showing bundled listings only");
                        return false;
                    }
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        jobfinder::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the current context.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        let context = self.app.key_context();
        let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);

        if ctrl && key.bare_key == BareKey::Char('n') {
            return Some(Event::KeyDown);
        }
        if ctrl && key.bare_key == BareKey::Char('p') {
            return Some(Event::KeyUp);
        }
        if ctrl && key.bare_key == BareKey::Char('c') && context == KeyContext::Browse {
            return Some(Event::CloseFocus);
        }

        match context {
            KeyContext::Browse => Self::map_browse_key(&key.bare_key),
            KeyContext::SearchTyping => Some(match key.bare_key {
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Esc => Event::ExitSearch,
                BareKey::Enter => Event::Select,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) if !ctrl => Event::Char(c),
                _ => return None,
            }),
            KeyContext::SearchNavigating => Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Esc => Event::ExitSearch,
                BareKey::Enter => Event::Select,
                BareKey::Char('/') => Event::FocusSearchBar,
                _ => return None,
            }),
            KeyContext::Menu | KeyContext::Panel => Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Enter => Event::Select,
                BareKey::Esc => Event::Escape,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            }),
            KeyContext::Form => Some(match key.bare_key {
                BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PrevField,
                BareKey::Tab | BareKey::Down => Event::NextField,
                BareKey::Up => Event::PrevField,
                BareKey::Left => Event::CycleLeft,
                BareKey::Right => Event::CycleRight,
                BareKey::Enter => Event::Select,
                BareKey::Esc => Event::Escape,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) if !ctrl => Event::Char(c),
                _ => return None,
            }),
        }
    }

    fn map_browse_key(bare_key: &BareKey) -> Option<Event> {
        Some(match bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Enter => Event::Select,
            BareKey::Esc => Event::Escape,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('t') => Event::CycleJobType,
            BareKey::Char('s') => Event::CycleState,
            BareKey::Char('d') => Event::CycleDistrict,
            BareKey::Char('c') => Event::ClearFilters,
            BareKey::Char('m') => Event::OpenMenu,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Maps custom message events to application events.
    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message == self.worker_name {
            match serde_json::from_str::<WorkerResponse>(payload) {
                Ok(response) => {
                    tracing::debug!(response = ?response, "worker response received");
                    Some(Event::WorkerResponse(response))
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to deserialize worker response");
                    None
                }
            }
        } else {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            None
        }
    }

    /// Posts a message to the worker thread as JSON.
    ///
    /// Serialization errors are logged, not propagated.
    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(&message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), operation = ?message.operation(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::PostToWorker(ref message) => {
                self.post_worker_message(message);
            }
        }
    }
}
