//! Infrastructure layer for filesystem and environment interactions.
//!
//! The Zellij sandbox mounts the host filesystem under `/host`; everything in
//! here translates between host paths and sandbox paths.

pub mod paths;

pub use paths::{board_file, expand_tilde, get_data_dir, strip_host_prefix};
