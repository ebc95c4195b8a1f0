//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin runtime (`main.rs`) and the
//! domain/catalog/worker layers.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`forms`]: Apply and post-a-vacancy form state and validation
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Screen and input mode types
//! - [`panels`]: Side panel registry and panel views
//! - [`state`]: Central application state and view model computation
//!
//! # Example
//!
//! ```
//! use jobfinder::app::{handle_event, AppState, Event};
//! use jobfinder::domain::Region;
//!
//! let mut state = AppState::new(Region::India, Default::default(), None);
//! let (render, _) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(render);
//! assert_eq!(state.selected_index, 1);
//! # Ok::<(), jobfinder::domain::JobFinderError>(())
//! ```

pub mod actions;
pub mod forms;
pub mod handler;
pub mod modes;
pub mod panels;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, KeyContext, Screen, SearchFocus};
pub use panels::PanelId;
pub use state::AppState;
