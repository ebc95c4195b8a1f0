//! Worker thread implementation for backend operations.
//!
//! Implements the Zellij worker interface. The worker owns the [`JobBackend`]
//! and services every request the plugin thread sends, so no backend I/O ever
//! runs on the render loop.

use crate::backend::models::BoardSummary;
use crate::backend::{JobBackend, JsonBackend, THEME_PREFERENCE_KEY};
use crate::catalog::JobCatalog;
use crate::domain::error::{JobFinderError, Result};
use crate::domain::region::Region;
use crate::infrastructure::paths;
use crate::ui::theme::ThemePreference;
use crate::worker::messages::{WorkerMessage, WorkerOperation, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state.
///
/// The backend is opened when the first [`WorkerMessage::Connect`] arrives,
/// because the region (and therefore the board file) is only known then.
#[derive(Serialize, Deserialize, Default)]
pub struct JobFinderWorker {
    #[serde(skip)]
    backend: Option<Box<dyn JobBackend>>,

    #[serde(skip)]
    region: Option<Region>,
}

impl JobFinderWorker {
    /// Creates a worker around an already opened backend.
    #[must_use]
    pub fn with_backend(region: Region, backend: Box<dyn JobBackend>) -> Self {
        Self {
            backend: Some(backend),
            region: Some(region),
        }
    }

    /// Opens the JSON backend for `region` under the plugin data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the board file cannot be created or parsed.
    fn open_backend(region: Region) -> Result<Box<dyn JobBackend>> {
        let path = paths::board_file(region);
        let seed = JobCatalog::seeded(region).jobs().to_vec();
        Ok(Box::new(JsonBackend::new(path, seed)?))
    }

    fn backend(&self) -> Result<&dyn JobBackend> {
        self.backend
            .as_deref()
            .ok_or_else(|| JobFinderError::Worker("backend not connected".to_string()))
    }

    fn backend_mut(&mut self) -> Result<&mut Box<dyn JobBackend>> {
        self.backend
            .as_mut()
            .ok_or_else(|| JobFinderError::Worker("backend not connected".to_string()))
    }

    /// Converts a backend result into a response, logging either outcome.
    fn respond<T, F>(operation: WorkerOperation, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = ?operation, "backend operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(operation = ?operation, error = %e, "backend operation failed");
                WorkerResponse::Error {
                    operation,
                    message: e.to_string(),
                }
            }
        }
    }

    /// Opens the board for `region` unless it is already open.
    fn connect(&mut self, region: Region) -> Result<()> {
        if self.region == Some(region) && self.backend.is_some() {
            return Ok(());
        }

        tracing::info!(region = region.key(), "connecting backend");
        self.backend = Some(Self::open_backend(region)?);
        self.region = Some(region);
        Ok(())
    }

    fn handle_connect(&mut self, region: Region) -> WorkerResponse {
        let result = self
            .connect(region)
            .and_then(|()| self.backend()?.get_all_jobs());

        Self::respond(WorkerOperation::Connect, result, |jobs| {
            WorkerResponse::JobsLoaded { jobs }
        })
    }

    fn handle_post_vacancy(&mut self, vacancy: &crate::backend::NewVacancy) -> WorkerResponse {
        let result = self.backend_mut().and_then(|backend| {
            let job_id = backend.post_vacancy(vacancy)?;
            backend.get_job_by_id(&job_id)?.ok_or_else(|| {
                JobFinderError::Backend(format!("posted vacancy {job_id} not found"))
            })
        });

        Self::respond(WorkerOperation::PostVacancy, result, |job| {
            WorkerResponse::VacancyPosted { job }
        })
    }

    fn handle_load_summary(&self) -> WorkerResponse {
        let result = self.backend().and_then(|backend| {
            Ok(BoardSummary {
                job_count: backend.get_job_count()?,
                application_count: backend.get_application_count()?,
                job_types: backend.count_job_types()?,
            })
        });

        Self::respond(WorkerOperation::LoadSummary, result, |summary| {
            WorkerResponse::SummaryLoaded { summary }
        })
    }

    /// Attaches the parent trace context from a message to the current thread.
    ///
    /// Returns a guard that must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes one request and returns its response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message", operation = ?message.operation());
        let _guard = span.entered();

        match message {
            WorkerMessage::Connect { region, .. } => self.handle_connect(region),

            WorkerMessage::LoadJobs { .. } => Self::respond(
                WorkerOperation::LoadJobs,
                self.backend().and_then(|b| b.get_all_jobs()),
                |jobs| WorkerResponse::JobsLoaded { jobs },
            ),

            WorkerMessage::SubmitApplication { request, .. } => {
                let job_id = request.job_id.clone();
                Self::respond(
                    WorkerOperation::SubmitApplication,
                    self.backend_mut().and_then(|b| b.submit_application(&request)),
                    |result| WorkerResponse::ApplicationSubmitted { job_id, result },
                )
            }

            WorkerMessage::PostVacancy { vacancy, .. } => self.handle_post_vacancy(&vacancy),

            WorkerMessage::LoadVacancies { status, .. } => Self::respond(
                WorkerOperation::LoadVacancies,
                self.backend().and_then(|b| b.get_vacancies_by_status(status)),
                |jobs| WorkerResponse::VacanciesLoaded { status, jobs },
            ),

            WorkerMessage::LoadApplications { job_id, .. } => Self::respond(
                WorkerOperation::LoadApplications,
                self.backend().and_then(|b| b.get_applications_for_job(&job_id)),
                |applications| WorkerResponse::ApplicationsLoaded { job_id, applications },
            ),

            WorkerMessage::LoadSummary { .. } => self.handle_load_summary(),

            WorkerMessage::LoadPreferences { .. } => Self::respond(
                WorkerOperation::LoadPreferences,
                self.backend().and_then(|b| b.get_preference(THEME_PREFERENCE_KEY)),
                |stored| WorkerResponse::PreferencesLoaded {
                    theme: stored.as_deref().map(ThemePreference::parse),
                },
            ),

            WorkerMessage::SaveThemePreference { theme, .. } => Self::respond(
                WorkerOperation::SavePreference,
                self.backend_mut()
                    .and_then(|b| b.set_preference(THEME_PREFERENCE_KEY, theme.key())),
                |()| WorkerResponse::PreferenceSaved { theme },
            ),
        }
    }
}

/// Initializes tracing for the worker thread with the default configuration.
fn init_worker_tracing() {
    crate::observability::init_tracing(&crate::Config::default());
}

/// Ensures worker tracing is set up once per worker lifetime.
static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for JobFinderWorker {
    /// Handles a message from the plugin thread.
    ///
    /// 1. Initializes tracing on first message
    /// 2. Deserializes the `WorkerMessage` payload
    /// 3. Processes it via `handle_message`
    /// 4. Serializes the response and posts it back under the same name
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.swap(true, std::sync::atomic::Ordering::Relaxed) {
            init_worker_tracing();
        }

        let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                return;
            }
        };

        let response = self.handle_message(worker_message);

        match serde_json::to_string(&response) {
            Ok(payload) => {
                post_message_to_plugin(PluginMessage {
                    name: message,
                    payload,
                    worker_name: None,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker response");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{ApplicationRequest, ApplicationResult, NewVacancy};
    use crate::domain::job::{JobType, VacancyStatus};
    use tempfile::TempDir;

    fn connected(dir: &TempDir) -> JobFinderWorker {
        let seed = JobCatalog::seeded(Region::Malaysia).jobs().to_vec();
        let backend = JsonBackend::new(dir.path().join("jobs.json"), seed).unwrap();
        JobFinderWorker::with_backend(Region::Malaysia, Box::new(backend))
    }

    #[test]
    fn requests_before_connect_are_errors() {
        let mut worker = JobFinderWorker::default();
        let response = worker.handle_message(WorkerMessage::load_jobs());
        assert_eq!(
            response,
            WorkerResponse::Error {
                operation: WorkerOperation::LoadJobs,
                message: "Worker communication error: backend not connected".to_string(),
            }
        );
    }

    #[test]
    fn submit_echoes_job_id_with_backend_verdict() {
        let dir = TempDir::new().unwrap();
        let mut worker = connected(&dir);
        let request = ApplicationRequest {
            job_id: "job-2".to_string(),
            applicant_name: "Arjun".to_string(),
            email: "arjun@example.com".to_string(),
            phone: "0123456789".to_string(),
            cover_letter: "Hello".to_string(),
        };

        let response = worker.handle_message(WorkerMessage::submit_application(request));
        assert_eq!(
            response,
            WorkerResponse::ApplicationSubmitted {
                job_id: "job-2".to_string(),
                result: ApplicationResult::Accepted { application_id: "app-1".to_string() },
            }
        );
    }

    #[test]
    fn post_vacancy_returns_stored_listing() {
        let dir = TempDir::new().unwrap();
        let mut worker = connected(&dir);
        let vacancy = NewVacancy {
            title: "Barista".to_string(),
            company: "Kopi Co".to_string(),
            country: "Malaysia".to_string(),
            state: "Melaka".to_string(),
            city: "Melaka City".to_string(),
            district: String::new(),
            job_type: JobType::PartTime,
            salary_min: 0,
            salary_max: 0,
            salary_currency: "MYR".to_string(),
            description: "Pull shots.".to_string(),
            status: VacancyStatus::New,
        };

        let WorkerResponse::VacancyPosted { job } = worker.handle_message(WorkerMessage::post_vacancy(vacancy)) else {
            panic!("expected VacancyPosted");
        };
        assert!(job.job_id.starts_with("user-"));
        assert_eq!(job.district, "Melaka City");
    }

    #[test]
    fn invalid_vacancy_maps_to_error_response() {
        let dir = TempDir::new().unwrap();
        let mut worker = connected(&dir);
        let vacancy = NewVacancy {
            title: String::new(),
            company: "Kopi Co".to_string(),
            country: String::new(),
            state: String::new(),
            city: String::new(),
            district: String::new(),
            job_type: JobType::FullTime,
            salary_min: 0,
            salary_max: 0,
            salary_currency: "MYR".to_string(),
            description: "x".to_string(),
            status: VacancyStatus::Draft,
        };
        let response = worker.handle_message(WorkerMessage::post_vacancy(vacancy));
        assert!(matches!(
            response,
            WorkerResponse::Error { operation: WorkerOperation::PostVacancy, .. }
        ));
    }

    #[test]
    fn theme_preference_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut worker = connected(&dir);

        assert_eq!(
            worker.handle_message(WorkerMessage::load_preferences()),
            WorkerResponse::PreferencesLoaded { theme: None }
        );
        worker.handle_message(WorkerMessage::save_theme_preference(ThemePreference::Light));
        assert_eq!(
            worker.handle_message(WorkerMessage::load_preferences()),
            WorkerResponse::PreferencesLoaded { theme: Some(ThemePreference::Light) }
        );
    }

    #[test]
    fn summary_counts_seed_and_applications() {
        let dir = TempDir::new().unwrap();
        let mut worker = connected(&dir);
        let WorkerResponse::SummaryLoaded { summary } = worker.handle_message(WorkerMessage::load_summary()) else {
            panic!("expected SummaryLoaded");
        };
        assert_eq!(summary.job_count, 22);
        assert_eq!(summary.application_count, 0);
        assert_eq!(summary.job_types.get(JobType::Remote), 3);
    }
}
