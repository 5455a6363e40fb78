use super::*;
use crate::site::forms::FieldError;

fn filled() -> ContactState {
    let mut state = ContactState::default();
    state.edit(ContactField::Name, "Dana Builder".into());
    state.edit(ContactField::Email, "dana@example.com".into());
    state.edit(ContactField::Message, "Need a garage extension.".into());
    state
}

// =============================================================
// Validation
// =============================================================

#[test]
fn blank_form_reports_every_required_field() {
    let mut state = ContactState::default();
    let errors = state.submit().unwrap_err();

    assert_eq!(errors.len(), 3);
    assert!(errors.contains(ContactField::Name));
    assert!(errors.contains(ContactField::Email));
    assert!(errors.contains(ContactField::Message));
    assert!(!errors.contains(ContactField::Phone));
    assert!(!errors.contains(ContactField::Subject));
    assert!(!state.submitted);
}

#[test]
fn whitespace_only_counts_as_blank() {
    let mut state = filled();
    state.edit(ContactField::Name, "   ".into());
    let errors = state.submit().unwrap_err();
    assert_eq!(errors.get(ContactField::Name), Some(&FieldError::Required { label: "Name" }));
}

#[test]
fn malformed_email_blocks_submission() {
    let mut state = filled();
    state.edit(ContactField::Email, "dana@@example.com".into());
    assert!(state.submit().is_err());
    assert_eq!(
        state.errors.message(ContactField::Email).as_deref(),
        Some("Please enter a valid email address")
    );
    assert!(!state.submitted);
    assert_eq!(state.form.name, "Dana Builder");
}

// =============================================================
// Editing
// =============================================================

#[test]
fn editing_clears_only_that_fields_error() {
    let mut state = ContactState::default();
    let _ = state.submit();

    state.edit(ContactField::Name, "D".into());
    assert!(!state.errors.contains(ContactField::Name));
    assert!(state.errors.contains(ContactField::Email));
    assert!(state.errors.contains(ContactField::Message));
}

// =============================================================
// Submission
// =============================================================

#[test]
fn valid_submit_resets_form_and_shows_success() {
    let mut state = filled();
    state.edit(ContactField::Subject, "Garage".into());
    let sent = state.submit().unwrap();

    assert_eq!(sent.subject, "Garage");
    assert!(state.submitted);
    assert_eq!(state.form, ContactForm::default());
    assert!(state.errors.is_empty());
}

#[test]
fn send_another_hides_success_panel() {
    let mut state = filled();
    state.update(ContactMsg::Submit);
    assert!(state.submitted);

    state.update(ContactMsg::SendAnother);
    assert!(!state.submitted);
}
