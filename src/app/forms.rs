//! Form state for applying to a job and posting a vacancy.
//!
//! Both forms validate locally before anything is sent to the worker. A form
//! that fails validation keeps per-field messages and produces no request.
//!
//! The apply form moves through [`SubmissionStatus`]:
//!
//! ```text
//! Idle ──submit(valid)──▶ Loading ──Accepted──▶ Success
//!   ▲                        │
//!   └──── edit ◀── Error ◀───┘ Rejected / transport failure
//! ```

use crate::backend::models::{ApplicationRequest, ApplicationResult, NewVacancy};
use crate::domain::job::{JobListing, JobType, VacancyStatus};
use crate::domain::region::Region;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Shown when the backend rejects a submission without saying why.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Shown when the submission never got a verdict from the backend.
pub const NETWORK_FAILURE: &str = "Network error. Please check your connection and try again.";

/// Shown after a vacancy is stored.
pub const VACANCY_POSTED: &str = "Vacancy posted";

const EMAIL_REGEX: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_PATTERN: OnceLock<Option<Regex>> = OnceLock::new();

/// The compiled email pattern, or `None` if it failed to compile.
///
/// A compile failure is logged once; every address is then treated as
/// invalid.
fn compiled_email_pattern() -> Option<&'static Regex> {
    EMAIL_PATTERN
        .get_or_init(|| {
            Regex::new(EMAIL_REGEX)
                .map_err(|e| tracing::error!(error = %e, "email pattern failed to compile"))
                .ok()
        })
        .as_ref()
}

/// Returns `true` if `email` looks like `local@domain.tld`.
///
/// The raw value is checked, so surrounding whitespace fails.
///
/// # Example
///
/// ```
/// use jobfinder::app::forms::is_valid_email;
///
/// assert!(is_valid_email("aina@example.my"));
/// assert!(!is_valid_email("aina@example"));
/// assert!(!is_valid_email(" aina@example.my"));
/// ```
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    compiled_email_pattern().is_some_and(|pattern| pattern.is_match(email))
}

/// Fields of the apply form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ApplyField {
    FullName,
    Email,
    Phone,
    CoverLetter,
}

impl ApplyField {
    pub const ALL: [Self; 4] = [Self::FullName, Self::Email, Self::Phone, Self::CoverLetter];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::CoverLetter => "Cover letter",
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::FullName => Self::Email,
            Self::Email => Self::Phone,
            Self::Phone => Self::CoverLetter,
            Self::CoverLetter => Self::FullName,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::FullName => Self::CoverLetter,
            Self::Email => Self::FullName,
            Self::Phone => Self::Email,
            Self::CoverLetter => Self::Phone,
        }
    }
}

/// Field-level validation messages, keyed by field.
pub type FieldErrors<F> = BTreeMap<F, String>;

/// Validates the four applicant fields.
///
/// Returns an empty map when the form may be submitted.
///
/// # Example
///
/// ```
/// use jobfinder::app::forms::{validate_application, ApplyField};
///
/// let errors = validate_application("Aina", "", "0123", "Hello");
/// assert_eq!(errors.get(&ApplyField::Email).map(String::as_str), Some("Email is required"));
/// assert_eq!(errors.len(), 1);
/// ```
#[must_use]
pub fn validate_application(
    full_name: &str,
    email: &str,
    phone: &str,
    cover_letter: &str,
) -> FieldErrors<ApplyField> {
    let mut errors = FieldErrors::new();

    if full_name.trim().is_empty() {
        errors.insert(ApplyField::FullName, "Full name is required".to_string());
    }

    if email.trim().is_empty() {
        errors.insert(ApplyField::Email, "Email is required".to_string());
    } else if !is_valid_email(email) {
        errors.insert(ApplyField::Email, "Enter a valid email address".to_string());
    }

    if phone.trim().is_empty() {
        errors.insert(ApplyField::Phone, "Phone number is required".to_string());
    }

    if cover_letter.trim().is_empty() {
        errors.insert(ApplyField::CoverLetter, "Cover letter is required".to_string());
    }

    errors
}

/// Lifecycle of one application submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    /// A request is in flight. Further submits and closing are refused.
    Loading,
    /// Terminal until the form is closed.
    Success { application_id: String },
    /// Editable; the message is shown above the submit hint.
    Error(String),
}

/// The apply form for one listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyForm {
    pub job_id: String,
    pub job_title: String,
    pub company: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub cover_letter: String,
    pub focus: ApplyField,
    pub errors: FieldErrors<ApplyField>,
    pub status: SubmissionStatus,
}

impl ApplyForm {
    #[must_use]
    pub fn new(job: &JobListing) -> Self {
        Self {
            job_id: job.job_id.clone(),
            job_title: job.title.clone(),
            company: job.company.clone(),
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            cover_letter: String::new(),
            focus: ApplyField::FullName,
            errors: FieldErrors::new(),
            status: SubmissionStatus::Idle,
        }
    }

    #[must_use]
    pub fn value(&self, field: ApplyField) -> &str {
        match field {
            ApplyField::FullName => &self.full_name,
            ApplyField::Email => &self.email,
            ApplyField::Phone => &self.phone,
            ApplyField::CoverLetter => &self.cover_letter,
        }
    }

    fn value_mut(&mut self, field: ApplyField) -> &mut String {
        match field {
            ApplyField::FullName => &mut self.full_name,
            ApplyField::Email => &mut self.email,
            ApplyField::Phone => &mut self.phone,
            ApplyField::CoverLetter => &mut self.cover_letter,
        }
    }

    /// `false` while a submission is in flight or after it succeeded.
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        !matches!(
            self.status,
            SubmissionStatus::Loading | SubmissionStatus::Success { .. }
        )
    }

    /// Closing is refused only while a submission is in flight.
    #[must_use]
    pub const fn can_close(&self) -> bool {
        !matches!(self.status, SubmissionStatus::Loading)
    }

    /// Appends to the focused field. Returns `false` if the form is locked.
    pub fn push_char(&mut self, c: char) -> bool {
        if !self.is_editable() {
            return false;
        }
        let field = self.focus;
        self.value_mut(field).push(c);
        self.errors.remove(&field);
        true
    }

    pub fn backspace(&mut self) -> bool {
        if !self.is_editable() {
            return false;
        }
        let field = self.focus;
        self.value_mut(field).pop();
        self.errors.remove(&field);
        true
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Validates and, if valid, moves to `Loading` and returns the request.
    ///
    /// Returns `None` (and sends nothing) when the form is locked or invalid.
    /// Invalid fields get their messages and the first one takes focus.
    pub fn begin_submit(&mut self) -> Option<ApplicationRequest> {
        if !self.is_editable() {
            tracing::debug!(status = ?self.status, "submit ignored, form locked");
            return None;
        }

        self.errors = validate_application(&self.full_name, &self.email, &self.phone, &self.cover_letter);
        if let Some(first) = self.errors.keys().next() {
            tracing::debug!(invalid_fields = self.errors.len(), "application failed validation");
            self.focus = *first;
            return None;
        }

        self.status = SubmissionStatus::Loading;
        Some(ApplicationRequest {
            job_id: self.job_id.clone(),
            applicant_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            cover_letter: self.cover_letter.trim().to_string(),
        })
    }

    /// Applies the backend's verdict. Ignored unless a submission is in flight.
    pub fn complete(&mut self, result: &ApplicationResult) {
        if self.status != SubmissionStatus::Loading {
            return;
        }

        self.status = match result {
            ApplicationResult::Accepted { application_id } => SubmissionStatus::Success {
                application_id: application_id.clone(),
            },
            ApplicationResult::Rejected { message } if message.trim().is_empty() => {
                SubmissionStatus::Error(GENERIC_FAILURE.to_string())
            }
            ApplicationResult::Rejected { message } => SubmissionStatus::Error(message.clone()),
        };
    }

    /// The request never reached a verdict.
    pub fn fail_transport(&mut self) {
        if self.status == SubmissionStatus::Loading {
            self.status = SubmissionStatus::Error(NETWORK_FAILURE.to_string());
        }
    }
}

/// Fields of the vacancy form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VacancyField {
    Title,
    Company,
    Country,
    State,
    City,
    District,
    JobType,
    Status,
    SalaryMin,
    SalaryMax,
    Description,
}

impl VacancyField {
    pub const ALL: [Self; 11] = [
        Self::Title,
        Self::Company,
        Self::Country,
        Self::State,
        Self::City,
        Self::District,
        Self::JobType,
        Self::Status,
        Self::SalaryMin,
        Self::SalaryMax,
        Self::Description,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Job title",
            Self::Company => "Company",
            Self::Country => "Country",
            Self::State => "State",
            Self::City => "City",
            Self::District => "District",
            Self::JobType => "Job type",
            Self::Status => "Status",
            Self::SalaryMin => "Salary min",
            Self::SalaryMax => "Salary max",
            Self::Description => "Description",
        }
    }

    /// Choice fields cycle with left/right instead of taking text.
    #[must_use]
    pub const fn is_choice(self) -> bool {
        matches!(self, Self::State | Self::JobType | Self::Status)
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Where the vacancy form is in its post cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PostingPhase {
    #[default]
    Editing,
    Posting,
    /// The last post succeeded; the form has been reset.
    Posted,
}

/// The post-a-vacancy form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacancyForm {
    region: Region,
    pub title: String,
    pub company: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub district: String,
    pub job_type: JobType,
    pub status: VacancyStatus,
    pub salary_min: String,
    pub salary_max: String,
    pub description: String,
    pub focus: VacancyField,
    pub errors: FieldErrors<VacancyField>,
    pub phase: PostingPhase,
    /// Backend failure from the last attempt.
    pub failure: Option<String>,
}

impl VacancyForm {
    /// An empty form with the region's country and first state prefilled.
    #[must_use]
    pub fn new(region: Region) -> Self {
        Self {
            region,
            title: String::new(),
            company: String::new(),
            country: region.country().to_string(),
            state: region.states().first().map_or_else(String::new, ToString::to_string),
            city: String::new(),
            district: String::new(),
            job_type: JobType::FullTime,
            status: VacancyStatus::New,
            salary_min: String::new(),
            salary_max: String::new(),
            description: String::new(),
            focus: VacancyField::Title,
            errors: FieldErrors::new(),
            phase: PostingPhase::Editing,
            failure: None,
        }
    }

    /// Display value of a field, choice fields included.
    #[must_use]
    pub fn value(&self, field: VacancyField) -> &str {
        match field {
            VacancyField::Title => &self.title,
            VacancyField::Company => &self.company,
            VacancyField::Country => &self.country,
            VacancyField::State => &self.state,
            VacancyField::City => &self.city,
            VacancyField::District => &self.district,
            VacancyField::JobType => self.job_type.label(),
            VacancyField::Status => self.status.label(),
            VacancyField::SalaryMin => &self.salary_min,
            VacancyField::SalaryMax => &self.salary_max,
            VacancyField::Description => &self.description,
        }
    }

    fn text_mut(&mut self, field: VacancyField) -> Option<&mut String> {
        match field {
            VacancyField::Title => Some(&mut self.title),
            VacancyField::Company => Some(&mut self.company),
            VacancyField::Country => Some(&mut self.country),
            VacancyField::City => Some(&mut self.city),
            VacancyField::District => Some(&mut self.district),
            VacancyField::SalaryMin => Some(&mut self.salary_min),
            VacancyField::SalaryMax => Some(&mut self.salary_max),
            VacancyField::Description => Some(&mut self.description),
            VacancyField::State | VacancyField::JobType | VacancyField::Status => None,
        }
    }

    /// Starts a new edit, leaving the `Posted` notice behind.
    fn touch(&mut self, field: VacancyField) {
        self.errors.remove(&field);
        self.failure = None;
        if self.phase == PostingPhase::Posted {
            self.phase = PostingPhase::Editing;
        }
    }

    pub fn push_char(&mut self, c: char) -> bool {
        if self.phase == PostingPhase::Posting {
            return false;
        }
        let field = self.focus;
        let Some(text) = self.text_mut(field) else {
            return false;
        };
        text.push(c);
        self.touch(field);
        true
    }

    pub fn backspace(&mut self) -> bool {
        if self.phase == PostingPhase::Posting {
            return false;
        }
        let field = self.focus;
        let Some(text) = self.text_mut(field) else {
            return false;
        };
        text.pop();
        self.touch(field);
        true
    }

    /// Cycles a choice field. Returns `false` on text fields.
    pub fn cycle(&mut self, forward: bool) -> bool {
        if self.phase == PostingPhase::Posting {
            return false;
        }
        match self.focus {
            VacancyField::State => self.cycle_state(forward),
            VacancyField::JobType => {
                self.job_type = if forward { self.job_type.next() } else { self.job_type.prev() };
            }
            VacancyField::Status => {
                self.status = if forward { self.status.next() } else { self.status.prev() };
            }
            _ => return false,
        }
        self.touch(self.focus);
        true
    }

    /// Steps through the region's states, wrapping at either end.
    fn cycle_state(&mut self, forward: bool) {
        let states = self.region.states();
        if states.is_empty() {
            return;
        }
        let next = match states.iter().position(|state| *state == self.state) {
            Some(idx) if forward => (idx + 1) % states.len(),
            Some(idx) => (idx + states.len() - 1) % states.len(),
            None => 0,
        };
        self.state = states[next].to_string();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Validates the form into a payload.
    ///
    /// # Errors
    ///
    /// Returns the per-field messages when any field is invalid.
    pub fn validate(&self) -> Result<NewVacancy, FieldErrors<VacancyField>> {
        let mut errors = FieldErrors::new();

        for (field, message) in [
            (VacancyField::Title, "Job title is required"),
            (VacancyField::Company, "Company is required"),
            (VacancyField::Description, "Description is required"),
        ] {
            if self.value(field).trim().is_empty() {
                errors.insert(field, message.to_string());
            }
        }

        let salary_min = parse_salary(&self.salary_min);
        let salary_max = parse_salary(&self.salary_max);
        match (salary_min, salary_max) {
            (Some(min), Some(max)) if min > max => {
                errors.insert(
                    VacancyField::SalaryMin,
                    "Minimum salary cannot exceed maximum".to_string(),
                );
            }
            (min, max) => {
                if min.is_none() {
                    errors.insert(VacancyField::SalaryMin, "Enter a whole number".to_string());
                }
                if max.is_none() {
                    errors.insert(VacancyField::SalaryMax, "Enter a whole number".to_string());
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewVacancy {
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            country: self.country.trim().to_string(),
            state: self.state.trim().to_string(),
            city: self.city.trim().to_string(),
            district: self.district.trim().to_string(),
            job_type: self.job_type,
            salary_min: salary_min.unwrap_or_default(),
            salary_max: salary_max.unwrap_or_default(),
            salary_currency: self.region.currency().to_string(),
            description: self.description.trim().to_string(),
            status: self.status,
        })
    }

    /// Validates and, if valid, moves to `Posting` and returns the payload.
    pub fn begin_post(&mut self) -> Option<NewVacancy> {
        if self.phase == PostingPhase::Posting {
            return None;
        }

        match self.validate() {
            Ok(vacancy) => {
                self.errors.clear();
                self.failure = None;
                self.phase = PostingPhase::Posting;
                Some(vacancy)
            }
            Err(errors) => {
                if let Some(first) = errors.keys().next() {
                    self.focus = *first;
                }
                self.errors = errors;
                self.phase = PostingPhase::Editing;
                None
            }
        }
    }

    /// The backend stored the vacancy: reset to a blank form.
    pub fn complete_post(&mut self) {
        *self = Self {
            phase: PostingPhase::Posted,
            ..Self::new(self.region)
        };
    }

    pub fn fail_post(&mut self, message: &str) {
        self.phase = PostingPhase::Editing;
        self.failure = Some(message.to_string());
    }
}

/// Empty means zero; anything but ASCII digits is rejected.
fn parse_salary(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::JobCatalog;

    #[test]
    fn email_pattern_compiles() {
        let pattern = compiled_email_pattern().expect("email pattern should compile");
        assert!(pattern.is_match("ravi@example.in"));
        assert!(!pattern.is_match("ravi@@example.in"));
    }

    fn form() -> ApplyForm {
        let catalog = JobCatalog::seeded(Region::Malaysia);
        ApplyForm::new(catalog.get("job-1").unwrap())
    }

    fn fill(form: &mut ApplyForm, name: &str, email: &str, phone: &str, cover: &str) {
        form.full_name = name.to_string();
        form.email = email.to_string();
        form.phone = phone.to_string();
        form.cover_letter = cover.to_string();
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("plain"));
    }

    #[test]
    fn whitespace_only_fields_are_missing() {
        let errors = validate_application("  ", "  ", "\t", " ");
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[&ApplyField::FullName], "Full name is required");
        assert_eq!(errors[&ApplyField::Email], "Email is required");
        assert_eq!(errors[&ApplyField::Phone], "Phone number is required");
        assert_eq!(errors[&ApplyField::CoverLetter], "Cover letter is required");
    }

    #[test]
    fn malformed_email_message() {
        let errors = validate_application("Aina", "aina@", "012", "Hi");
        assert_eq!(errors[&ApplyField::Email], "Enter a valid email address");
    }

    #[test]
    fn invalid_submit_sends_nothing_and_focuses_first_error() {
        let mut form = form();
        fill(&mut form, "Aina", "", "", "Hi");
        form.focus = ApplyField::CoverLetter;
        assert!(form.begin_submit().is_none());
        assert_eq!(form.status, SubmissionStatus::Idle);
        assert_eq!(form.focus, ApplyField::Email);
    }

    #[test]
    fn loading_blocks_resubmit_and_close() {
        let mut form = form();
        fill(&mut form, "Aina", "aina@example.my", "012", "Hi");
        let request = form.begin_submit().unwrap();
        assert_eq!(request.job_id, "job-1");
        assert_eq!(form.status, SubmissionStatus::Loading);
        assert!(form.begin_submit().is_none());
        assert!(!form.can_close());
        assert!(!form.push_char('x'));
    }

    #[test]
    fn verdicts_map_to_status() {
        let mut form = form();
        fill(&mut form, "Aina", "aina@example.my", "012", "Hi");

        form.begin_submit();
        form.complete(&ApplicationResult::rejected(""));
        assert_eq!(form.status, SubmissionStatus::Error(GENERIC_FAILURE.to_string()));

        form.begin_submit();
        form.complete(&ApplicationResult::rejected("You have already applied for this job"));
        assert_eq!(
            form.status,
            SubmissionStatus::Error("You have already applied for this job".to_string())
        );

        form.begin_submit();
        form.fail_transport();
        assert_eq!(form.status, SubmissionStatus::Error(NETWORK_FAILURE.to_string()));

        form.begin_submit();
        form.complete(&ApplicationResult::Accepted { application_id: "app-3".to_string() });
        assert_eq!(form.status, SubmissionStatus::Success { application_id: "app-3".to_string() });
        assert!(form.begin_submit().is_none());
        assert!(form.can_close());
    }

    #[test]
    fn late_verdict_is_ignored_when_idle() {
        let mut form = form();
        form.complete(&ApplicationResult::Accepted { application_id: "app-1".to_string() });
        assert_eq!(form.status, SubmissionStatus::Idle);
    }

    #[test]
    fn vacancy_required_fields_and_numbers() {
        let mut form = VacancyForm::new(Region::India);
        form.salary_min = "12k".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors[&VacancyField::Title], "Job title is required");
        assert_eq!(errors[&VacancyField::Company], "Company is required");
        assert_eq!(errors[&VacancyField::Description], "Description is required");
        assert_eq!(errors[&VacancyField::SalaryMin], "Enter a whole number");
        assert!(!errors.contains_key(&VacancyField::SalaryMax));
    }

    #[test]
    fn vacancy_salary_order() {
        let mut form = VacancyForm::new(Region::Malaysia);
        form.title = "Barista".to_string();
        form.company = "Kopi Co".to_string();
        form.description = "Pull shots".to_string();
        form.salary_min = "5000".to_string();
        form.salary_max = "3000".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors[&VacancyField::SalaryMin], "Minimum salary cannot exceed maximum");

        form.salary_max = String::new();
        form.salary_min = String::new();
        let vacancy = form.validate().unwrap();
        assert_eq!((vacancy.salary_min, vacancy.salary_max), (0, 0));
        assert_eq!(vacancy.salary_currency, "MYR");
        assert_eq!(vacancy.country, "Malaysia");
    }

    #[test]
    fn choice_fields_cycle_and_reject_text() {
        let mut form = VacancyForm::new(Region::Malaysia);
        form.focus = VacancyField::JobType;
        assert!(!form.push_char('x'));
        assert!(form.cycle(true));
        assert_eq!(form.job_type, JobType::PartTime);
        form.focus = VacancyField::Status;
        assert!(form.cycle(false));
        assert_eq!(form.status, VacancyStatus::Draft);
    }

    #[test]
    fn state_cycles_through_known_states_only() {
        let mut form = VacancyForm::new(Region::India);
        assert_eq!(form.state, "Andhra Pradesh");

        form.focus = VacancyField::State;
        assert!(!form.push_char('x'));
        assert!(!form.backspace());
        assert_eq!(form.state, "Andhra Pradesh");

        assert!(form.cycle(false));
        assert_eq!(form.state, "West Bengal");
        assert!(form.cycle(true));
        assert!(form.cycle(true));
        assert_eq!(form.state, "Arunachal Pradesh");
        assert!(Region::India.states().contains(&form.state.as_str()));
    }

    #[test]
    fn posted_resets_form() {
        let mut form = VacancyForm::new(Region::Malaysia);
        form.title = "Barista".to_string();
        form.company = "Kopi Co".to_string();
        form.description = "Pull shots".to_string();
        assert!(form.begin_post().is_some());
        assert!(form.begin_post().is_none());
        form.complete_post();
        assert_eq!(form.phase, PostingPhase::Posted);
        assert!(form.title.is_empty());
        form.push_char('C');
        assert_eq!(form.phase, PostingPhase::Editing);
    }
}
