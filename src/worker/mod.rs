//! Background worker that owns the job board backend.
//!
//! Every backend call (job loads, submissions, vacancy posts, preference
//! writes) runs here so the plugin thread only ever renders and reacts to
//! responses. Requests and responses cross the thread boundary as JSON and
//! carry an optional trace context so both halves land in one trace.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::JobFinderWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerOperation, WorkerResponse};
