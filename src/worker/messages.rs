//! Worker thread message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the plugin
//! thread and the background worker that owns the job board backend. It also
//! implements distributed tracing context propagation across the thread
//! boundary.

use crate::backend::models::{ApplicationRequest, ApplicationResult, BoardSummary, NewVacancy};
use crate::domain::job::{JobApplication, JobListing, VacancyStatus};
use crate::domain::region::Region;
use crate::ui::theme::ThemePreference;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry so spans
/// opened in the worker link back to the plugin-side span that sent the
/// request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` if the current span context is invalid (for example when
    /// no OpenTelemetry layer is installed).
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            Some(Self {
                trace_id: format!("{:032x}", span_context.trace_id()),
                parent_span_id: format!("{:016x}", span_context.span_id()),
            })
        } else {
            tracing::trace!("span context is not valid");
            None
        }
    }
}

/// Generates builder methods for `WorkerMessage` variants.
///
/// Each constructor attaches the current trace context automatically.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    connect(Connect { region: Region }),
    load_jobs(LoadJobs {}),
    submit_application(SubmitApplication { request: ApplicationRequest }),
    post_vacancy(PostVacancy { vacancy: NewVacancy }),
    load_vacancies(LoadVacancies { status: VacancyStatus }),
    load_applications(LoadApplications { job_id: String }),
    load_summary(LoadSummary {}),
    load_preferences(LoadPreferences {}),
    save_theme_preference(SaveThemePreference { theme: ThemePreference }),
}

/// Requests sent from the plugin thread to the worker.
///
/// Every variant carries an optional trace context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Opens the backend for a region and replies with its job list.
    ///
    /// Must be the first message; anything sent earlier is answered with an
    /// error response.
    Connect {
        region: Region,
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Reloads the full job list.
    LoadJobs {
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Submits one application.
    SubmitApplication {
        request: ApplicationRequest,
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Posts a vacancy; the reply carries the stored listing.
    PostVacancy {
        vacancy: NewVacancy,
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Lists vacancies with one status.
    LoadVacancies {
        status: VacancyStatus,
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Lists applications received for one job.
    LoadApplications {
        job_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Collects job, application and job-type counts.
    LoadSummary {
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Reads stored user preferences.
    LoadPreferences {
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Persists the theme choice.
    SaveThemePreference {
        theme: ThemePreference,
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// The operation this request performs, echoed back on failure.
    #[must_use]
    pub const fn operation(&self) -> WorkerOperation {
        match self {
            Self::Connect { .. } => WorkerOperation::Connect,
            Self::LoadJobs { .. } => WorkerOperation::LoadJobs,
            Self::SubmitApplication { .. } => WorkerOperation::SubmitApplication,
            Self::PostVacancy { .. } => WorkerOperation::PostVacancy,
            Self::LoadVacancies { .. } => WorkerOperation::LoadVacancies,
            Self::LoadApplications { .. } => WorkerOperation::LoadApplications,
            Self::LoadSummary { .. } => WorkerOperation::LoadSummary,
            Self::LoadPreferences { .. } => WorkerOperation::LoadPreferences,
            Self::SaveThemePreference { .. } => WorkerOperation::SavePreference,
        }
    }

    /// The trace context attached when the message was built.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::Connect { trace_context, .. }
            | Self::LoadJobs { trace_context }
            | Self::SubmitApplication { trace_context, .. }
            | Self::PostVacancy { trace_context, .. }
            | Self::LoadVacancies { trace_context, .. }
            | Self::LoadApplications { trace_context, .. }
            | Self::LoadSummary { trace_context }
            | Self::LoadPreferences { trace_context }
            | Self::SaveThemePreference { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Identifies which request a [`WorkerResponse::Error`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerOperation {
    Connect,
    LoadJobs,
    SubmitApplication,
    PostVacancy,
    LoadVacancies,
    LoadApplications,
    LoadSummary,
    LoadPreferences,
    SavePreference,
}

/// Responses sent from the worker back to the plugin thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The backend's full job list, posted vacancies first.
    JobsLoaded { jobs: Vec<JobListing> },

    /// The backend processed a submission (accepted or rejected).
    ApplicationSubmitted {
        job_id: String,
        result: ApplicationResult,
    },

    /// A vacancy was stored; `job` is the listing as the backend keeps it.
    VacancyPosted { job: JobListing },

    VacanciesLoaded {
        status: VacancyStatus,
        jobs: Vec<JobListing>,
    },

    ApplicationsLoaded {
        job_id: String,
        applications: Vec<JobApplication>,
    },

    SummaryLoaded { summary: BoardSummary },

    /// Stored preferences. `theme` is `None` when nothing has been saved yet.
    PreferencesLoaded { theme: Option<ThemePreference> },

    PreferenceSaved { theme: ThemePreference },

    /// The request could not be serviced at all.
    Error {
        operation: WorkerOperation,
        /// Human-readable error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_leave_trace_context_empty_without_otel() {
        let message = WorkerMessage::load_summary();
        assert_eq!(message.trace_context(), None);
        assert_eq!(message.operation(), WorkerOperation::LoadSummary);
    }

    #[test]
    fn messages_survive_json_transport() {
        let message = WorkerMessage::load_vacancies(VacancyStatus::Draft);
        let payload = serde_json::to_string(&message).unwrap();
        assert!(!payload.contains("trace_context"));
        let decoded: WorkerMessage = serde_json::from_str(&payload).unwrap();
        assert_eq!(decoded, message);
    }
}
