//! The quote request wizard.
//!
//! Four steps gated by per-step validation. `Next` only advances when the
//! active step is clean, `Previous` always goes back and keeps whatever was
//! typed. Submitting re-checks every earlier step so edits made after going
//! back cannot slip through unvalidated.

use std::fmt;

use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use super::forms::{check_email, require, require_selection, trace_submission, FieldErrors, FormField};

#[cfg(test)]
#[path = "quote_test.rs"]
mod quote_test;

pub const HEAR_ABOUT_OPTIONS: &[&str] =
    &["Search Engine", "Social Media", "Referral", "Advertisement", "Other"];

pub const PROJECT_TYPES: &[&str] = &[
    "Residential Construction",
    "Commercial Construction",
    "Renovation",
    "Interior Design",
    "Other",
];

pub const PROJECT_SIZES: &[&str] = &[
    "Small (< 1,000 sq ft)",
    "Medium (1,000 - 5,000 sq ft)",
    "Large (5,000 - 10,000 sq ft)",
    "Very Large (> 10,000 sq ft)",
];

pub const BUDGETS: &[&str] = &[
    "$10,000 - $50,000",
    "$50,000 - $100,000",
    "$100,000 - $250,000",
    "$250,000 - $500,000",
    "$500,000+",
];

pub const TIMELINES: &[&str] =
    &["Immediately", "1-3 months", "3-6 months", "6-12 months", "More than 12 months"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    #[default]
    PersonalInfo,
    Location,
    ProjectDetails,
    Review,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::PersonalInfo, Step::Location, Step::ProjectDetails, Step::Review];

    pub fn number(self) -> u8 {
        match self {
            Step::PersonalInfo => 1,
            Step::Location => 2,
            Step::ProjectDetails => 3,
            Step::Review => 4,
        }
    }

    /// Short name used by the progress indicator.
    pub fn title(self) -> &'static str {
        match self {
            Step::PersonalInfo => "Personal Info",
            Step::Location => "Location",
            Step::ProjectDetails => "Project Details",
            Step::Review => "Review & Submit",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Step::PersonalInfo => "Personal Information",
            Step::Location => "Project Location",
            Step::ProjectDetails => "Project Details",
            Step::Review => "Review Your Information",
        }
    }

    pub fn next(self) -> Option<Step> {
        match self {
            Step::PersonalInfo => Some(Step::Location),
            Step::Location => Some(Step::ProjectDetails),
            Step::ProjectDetails => Some(Step::Review),
            Step::Review => None,
        }
    }

    pub fn previous(self) -> Option<Step> {
        match self {
            Step::PersonalInfo => None,
            Step::Location => Some(Step::PersonalInfo),
            Step::ProjectDetails => Some(Step::Location),
            Step::Review => Some(Step::ProjectDetails),
        }
    }

    pub fn fields(self) -> &'static [QuoteField] {
        use QuoteField::*;
        match self {
            Step::PersonalInfo => &[Name, Email, Phone, HearAbout],
            Step::Location => &[Address, City, State, Zip],
            Step::ProjectDetails => &[ProjectType, ProjectSize, Budget, Timeline, Description],
            Step::Review => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuoteField {
    Name,
    Email,
    Phone,
    HearAbout,
    Address,
    City,
    State,
    Zip,
    ProjectType,
    ProjectSize,
    Budget,
    Timeline,
    Description,
}

impl FormField for QuoteField {
    fn name(self) -> &'static str {
        match self {
            QuoteField::Name => "name",
            QuoteField::Email => "email",
            QuoteField::Phone => "phone",
            QuoteField::HearAbout => "hearAbout",
            QuoteField::Address => "address",
            QuoteField::City => "city",
            QuoteField::State => "state",
            QuoteField::Zip => "zip",
            QuoteField::ProjectType => "projectType",
            QuoteField::ProjectSize => "projectSize",
            QuoteField::Budget => "budget",
            QuoteField::Timeline => "timeline",
            QuoteField::Description => "description",
        }
    }

    fn label(self) -> &'static str {
        match self {
            QuoteField::Name => "Full Name",
            QuoteField::Email => "Email Address",
            QuoteField::Phone => "Phone Number",
            QuoteField::HearAbout => "How did you hear about us?",
            QuoteField::Address => "Street Address",
            QuoteField::City => "City",
            QuoteField::State => "State/Province",
            QuoteField::Zip => "ZIP/Postal Code",
            QuoteField::ProjectType => "Project Type",
            QuoteField::ProjectSize => "Project Size",
            QuoteField::Budget => "Budget Range",
            QuoteField::Timeline => "Timeline",
            QuoteField::Description => "Project Description",
        }
    }

    fn is_required(self) -> bool {
        !matches!(self, QuoteField::HearAbout | QuoteField::Description)
    }
}

impl QuoteField {
    /// Choices for fields rendered as a select.
    pub fn options(self) -> Option<&'static [&'static str]> {
        match self {
            QuoteField::HearAbout => Some(HEAR_ABOUT_OPTIONS),
            QuoteField::ProjectType => Some(PROJECT_TYPES),
            QuoteField::ProjectSize => Some(PROJECT_SIZES),
            QuoteField::Budget => Some(BUDGETS),
            QuoteField::Timeline => Some(TIMELINES),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub hear_about: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub project_type: String,
    pub project_size: String,
    pub budget: String,
    pub timeline: String,
    pub description: String,
}

impl QuoteForm {
    pub fn value(&self, field: QuoteField) -> &str {
        match field {
            QuoteField::Name => &self.name,
            QuoteField::Email => &self.email,
            QuoteField::Phone => &self.phone,
            QuoteField::HearAbout => &self.hear_about,
            QuoteField::Address => &self.address,
            QuoteField::City => &self.city,
            QuoteField::State => &self.state,
            QuoteField::Zip => &self.zip,
            QuoteField::ProjectType => &self.project_type,
            QuoteField::ProjectSize => &self.project_size,
            QuoteField::Budget => &self.budget,
            QuoteField::Timeline => &self.timeline,
            QuoteField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: QuoteField, value: String) {
        let slot = match field {
            QuoteField::Name => &mut self.name,
            QuoteField::Email => &mut self.email,
            QuoteField::Phone => &mut self.phone,
            QuoteField::HearAbout => &mut self.hear_about,
            QuoteField::Address => &mut self.address,
            QuoteField::City => &mut self.city,
            QuoteField::State => &mut self.state,
            QuoteField::Zip => &mut self.zip,
            QuoteField::ProjectType => &mut self.project_type,
            QuoteField::ProjectSize => &mut self.project_size,
            QuoteField::Budget => &mut self.budget,
            QuoteField::Timeline => &mut self.timeline,
            QuoteField::Description => &mut self.description,
        };
        *slot = value;
    }
}

pub fn validate_step(step: Step, form: &QuoteForm) -> FieldErrors<QuoteField> {
    let mut errors = FieldErrors::new();
    match step {
        Step::PersonalInfo => {
            errors.check(QuoteField::Name, require(&form.name, "Name"));
            errors.check(QuoteField::Email, check_email(&form.email));
            errors.check(QuoteField::Phone, require(&form.phone, "Phone number"));
        }
        Step::Location => {
            errors.check(QuoteField::Address, require(&form.address, "Address"));
            errors.check(QuoteField::City, require(&form.city, "City"));
            errors.check(QuoteField::State, require(&form.state, "State"));
            errors.check(QuoteField::Zip, require(&form.zip, "ZIP code"));
        }
        Step::ProjectDetails => {
            errors.check(QuoteField::ProjectType, require_selection(&form.project_type, "Project type"));
            errors.check(QuoteField::ProjectSize, require_selection(&form.project_size, "Project size"));
            errors.check(QuoteField::Budget, require_selection(&form.budget, "Budget range"));
            errors.check(QuoteField::Timeline, require_selection(&form.timeline, "Timeline"));
        }
        Step::Review => {}
    }
    errors
}

/// Display-only reference handed to the visitor after submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceCode(u16);

impl ReferenceCode {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(0..10_000))
    }
}

impl fmt::Display for ReferenceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BM{:04}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub reference: ReferenceCode,
    pub request: QuoteForm,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("quote request was already submitted")]
    AlreadySubmitted,
    #[error("quote requests are submitted from the review step")]
    NotOnReview,
    #[error("step {} has {} invalid field(s)", .step.number(), .errors.len())]
    Invalid { step: Step, errors: FieldErrors<QuoteField> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepProgress {
    pub step: Step,
    pub active: bool,
    pub reached: bool,
}

pub enum QuoteMsg {
    Edit(QuoteField, String),
    Next,
    Previous,
    Submit,
    StartOver,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteWizard {
    pub step: Step,
    pub form: QuoteForm,
    pub errors: FieldErrors<QuoteField>,
    pub submission: Option<Submission>,
}

impl QuoteWizard {
    pub fn update(&mut self, msg: QuoteMsg) {
        match msg {
            QuoteMsg::Edit(field, value) => self.edit(field, value),
            QuoteMsg::Next => {
                self.next();
            }
            QuoteMsg::Previous => self.previous(),
            QuoteMsg::Submit => {
                if let Err(e) = self.submit_with(&mut rand::thread_rng()) {
                    log::debug!("Quote request not submitted: {}", e);
                }
            }
            QuoteMsg::StartOver => *self = Self::default(),
        }
    }

    pub fn edit(&mut self, field: QuoteField, value: String) {
        self.form.set(field, value);
        self.errors.clear(field);
    }

    /// Advances when the active step validates. Returns whether it moved.
    pub fn next(&mut self) -> bool {
        let errors = validate_step(self.step, &self.form);
        if !errors.is_empty() {
            log::debug!("step {} blocked on {:?}", self.step.number(), errors.fields().collect::<Vec<_>>());
            self.errors = errors;
            return false;
        }
        self.errors = FieldErrors::new();
        match self.step.next() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    pub fn previous(&mut self) {
        if let Some(step) = self.step.previous() {
            self.step = step;
            self.errors = FieldErrors::new();
        }
    }

    /// A wizard that already holds a submission rejects further submits
    /// until `StartOver`.
    pub fn submit_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&Submission, SubmitError> {
        if self.is_submitted() {
            return Err(SubmitError::AlreadySubmitted);
        }
        if self.step != Step::Review {
            return Err(SubmitError::NotOnReview);
        }

        for step in Step::ALL {
            let errors = validate_step(step, &self.form);
            if !errors.is_empty() {
                self.step = step;
                self.errors = errors.clone();
                return Err(SubmitError::Invalid { step, errors });
            }
        }

        let request = std::mem::take(&mut self.form);
        trace_submission("quote", &request);
        self.errors = FieldErrors::new();
        let submission = self.submission.insert(Submission {
            reference: ReferenceCode::generate(rng),
            request,
        });
        Ok(&*submission)
    }

    pub fn is_submitted(&self) -> bool {
        self.submission.is_some()
    }

    pub fn progress(&self) -> [StepProgress; 4] {
        Step::ALL.map(|step| StepProgress {
            step,
            active: step == self.step,
            reached: self.step >= step,
        })
    }
}
