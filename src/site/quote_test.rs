use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;

fn personal(wizard: &mut QuoteWizard) {
    wizard.edit(QuoteField::Name, "Jordan Mason".into());
    wizard.edit(QuoteField::Email, "jordan@example.com".into());
    wizard.edit(QuoteField::Phone, "(555) 010-2020".into());
}

fn location(wizard: &mut QuoteWizard) {
    wizard.edit(QuoteField::Address, "9 Quarry Lane".into());
    wizard.edit(QuoteField::City, "Cityville".into());
    wizard.edit(QuoteField::State, "BC".into());
    wizard.edit(QuoteField::Zip, "10001".into());
}

fn details(wizard: &mut QuoteWizard) {
    wizard.edit(QuoteField::ProjectType, PROJECT_TYPES[2].into());
    wizard.edit(QuoteField::ProjectSize, PROJECT_SIZES[1].into());
    wizard.edit(QuoteField::Budget, BUDGETS[0].into());
    wizard.edit(QuoteField::Timeline, TIMELINES[3].into());
}

fn at_review() -> QuoteWizard {
    let mut wizard = QuoteWizard::default();
    personal(&mut wizard);
    assert!(wizard.next());
    location(&mut wizard);
    assert!(wizard.next());
    details(&mut wizard);
    assert!(wizard.next());
    assert_eq!(wizard.step, Step::Review);
    wizard
}

// =============================================================
// Step ordering
// =============================================================

#[test]
fn steps_are_numbered_in_order() {
    let numbers: Vec<u8> = Step::ALL.iter().map(|s| s.number()).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
    assert_eq!(Step::PersonalInfo.previous(), None);
    assert_eq!(Step::Review.next(), None);
}

#[test]
fn every_field_belongs_to_exactly_one_step() {
    let mut seen = Vec::new();
    for step in Step::ALL {
        seen.extend_from_slice(step.fields());
    }
    seen.sort();
    let before = seen.len();
    seen.dedup();
    assert_eq!(before, seen.len());
    assert_eq!(seen.len(), 13);
}

// =============================================================
// Next / Previous
// =============================================================

#[test]
fn valid_personal_info_moves_to_location() {
    let mut wizard = QuoteWizard::default();
    personal(&mut wizard);
    assert!(wizard.next());
    assert_eq!(wizard.step, Step::Location);
    assert!(wizard.errors.is_empty());
}

#[test]
fn blank_step_one_reports_each_required_field() {
    let mut wizard = QuoteWizard::default();
    assert!(!wizard.next());
    assert_eq!(wizard.step, Step::PersonalInfo);
    assert_eq!(wizard.errors.message(QuoteField::Name).as_deref(), Some("Name is required"));
    assert_eq!(wizard.errors.message(QuoteField::Email).as_deref(), Some("Email is required"));
    assert_eq!(wizard.errors.message(QuoteField::Phone).as_deref(), Some("Phone number is required"));
    assert!(!wizard.errors.contains(QuoteField::HearAbout));
}

#[test]
fn missing_city_keeps_wizard_on_location() {
    let mut wizard = QuoteWizard::default();
    personal(&mut wizard);
    wizard.next();
    location(&mut wizard);
    wizard.edit(QuoteField::City, String::new());

    assert!(!wizard.next());
    assert_eq!(wizard.step, Step::Location);
    assert_eq!(wizard.errors.len(), 1);
    assert_eq!(wizard.errors.message(QuoteField::City).as_deref(), Some("City is required"));
}

#[test]
fn project_details_need_selections() {
    let mut wizard = QuoteWizard::default();
    personal(&mut wizard);
    wizard.next();
    location(&mut wizard);
    wizard.next();

    assert!(!wizard.next());
    let fields: Vec<QuoteField> = wizard.errors.fields().collect();
    assert_eq!(
        fields,
        vec![QuoteField::ProjectType, QuoteField::ProjectSize, QuoteField::Budget, QuoteField::Timeline]
    );
    assert_eq!(wizard.errors.message(QuoteField::Budget).as_deref(), Some("Budget range is required"));
}

#[test]
fn previous_keeps_entered_data() {
    let mut wizard = QuoteWizard::default();
    personal(&mut wizard);
    wizard.next();
    location(&mut wizard);
    wizard.next();
    wizard.edit(QuoteField::ProjectType, "Renovation".into());
    wizard.edit(QuoteField::Description, "Kitchen and two baths".into());

    wizard.previous();
    assert_eq!(wizard.step, Step::Location);
    assert_eq!(wizard.form.project_type, "Renovation");
    assert_eq!(wizard.form.description, "Kitchen and two baths");
    assert_eq!(wizard.form.city, "Cityville");
}

#[test]
fn previous_on_first_step_is_a_no_op() {
    let mut wizard = QuoteWizard::default();
    wizard.update(QuoteMsg::Previous);
    assert_eq!(wizard.step, Step::PersonalInfo);
}

#[test]
fn editing_clears_only_that_error() {
    let mut wizard = QuoteWizard::default();
    wizard.next();
    wizard.update(QuoteMsg::Edit(QuoteField::Email, "x".into()));
    assert!(!wizard.errors.contains(QuoteField::Email));
    assert!(wizard.errors.contains(QuoteField::Name));
    assert!(wizard.errors.contains(QuoteField::Phone));
}

// =============================================================
// Submission
// =============================================================

#[test]
fn submit_outside_review_is_rejected() {
    let mut wizard = QuoteWizard::default();
    personal(&mut wizard);
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(wizard.submit_with(&mut rng).unwrap_err(), SubmitError::NotOnReview);
    assert!(!wizard.is_submitted());
}

#[test]
fn submit_produces_bm_reference() {
    let pattern = Regex::new(r"^BM\d{4}$").unwrap();
    for seed in 0..50 {
        let mut wizard = at_review();
        let mut rng = StdRng::seed_from_u64(seed);
        let submission = wizard.submit_with(&mut rng).unwrap();
        assert!(pattern.is_match(&submission.reference.to_string()));
    }
}

#[test]
fn submit_resets_form_and_keeps_request() {
    let mut wizard = at_review();
    let mut rng = StdRng::seed_from_u64(7);
    let request = wizard.submit_with(&mut rng).unwrap().request.clone();

    assert_eq!(request.city, "Cityville");
    assert!(wizard.is_submitted());
    assert_eq!(wizard.form, QuoteForm::default());
}

#[test]
fn submit_revalidates_earlier_steps() {
    let mut wizard = at_review();
    wizard.edit(QuoteField::Email, "jordan@".into());

    let mut rng = StdRng::seed_from_u64(3);
    let err = wizard.submit_with(&mut rng).unwrap_err();
    match err {
        SubmitError::Invalid { step, errors } => {
            assert_eq!(step, Step::PersonalInfo);
            assert!(errors.contains(QuoteField::Email));
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(wizard.step, Step::PersonalInfo);
    assert!(!wizard.is_submitted());
    assert_eq!(wizard.form.city, "Cityville");
}

#[test]
fn second_submit_keeps_the_first_submission() {
    let mut wizard = at_review();
    wizard.update(QuoteMsg::Submit);
    let first = wizard.submission.clone();
    assert!(first.is_some());

    wizard.update(QuoteMsg::Submit);
    assert_eq!(wizard.step, Step::Review);
    assert!(wizard.errors.is_empty());
    assert_eq!(wizard.submission, first);

    let mut rng = StdRng::seed_from_u64(11);
    assert_eq!(wizard.submit_with(&mut rng).unwrap_err(), SubmitError::AlreadySubmitted);
}

#[test]
fn reference_is_zero_padded() {
    assert_eq!(ReferenceCode(7).to_string(), "BM0007");
    assert_eq!(ReferenceCode(9999).to_string(), "BM9999");
}

#[test]
fn start_over_returns_to_blank_first_step() {
    let mut wizard = at_review();
    wizard.update(QuoteMsg::Submit);
    assert!(wizard.is_submitted());

    wizard.update(QuoteMsg::StartOver);
    assert_eq!(wizard, QuoteWizard::default());
}

// =============================================================
// Progress indicator
// =============================================================

#[test]
fn progress_marks_reached_and_active_steps() {
    let mut wizard = QuoteWizard::default();
    personal(&mut wizard);
    wizard.next();

    let progress = wizard.progress();
    assert!(progress[0].reached && !progress[0].active);
    assert!(progress[1].reached && progress[1].active);
    assert!(!progress[2].reached && !progress[3].reached);
}

#[test]
fn payload_serializes_with_form_field_names() {
    let mut form = QuoteForm::default();
    form.set(QuoteField::HearAbout, "Referral".into());
    let json = serde_json::to_value(&form).unwrap();
    assert_eq!(json["hearAbout"], "Referral");
    assert_eq!(json["projectType"], "");
}
