// Host-side tests for the simulated contact submission.
// Futures are driven with pollster; the delay is injected so no real timer runs.

use site_core::constants::SUBMIT_LATENCY_MS;
use site_core::{
    submit, ContactForm, ContactFormData, SubmissionState, SubmitError, ValidationError,
};
use std::cell::{Cell, RefCell};
use std::future::ready;
use std::time::Duration;

fn valid() -> ContactFormData {
    ContactFormData {
        name: "Jane Doe".into(),
        email: "jane@studio.com".into(),
        brief: "A new brand system for our launch.".into(),
    }
}

#[test]
fn validation_mirrors_required_fields() {
    assert_eq!(valid().validate(), Ok(()));

    let mut d = valid();
    d.name.clear();
    assert_eq!(d.validate(), Err(ValidationError::MissingName));

    let mut d = valid();
    d.email.clear();
    assert_eq!(d.validate(), Err(ValidationError::MissingEmail));

    let mut d = valid();
    d.brief.clear();
    assert_eq!(d.validate(), Err(ValidationError::MissingBrief));
}

#[test]
fn whitespace_and_email_shape_are_left_to_the_browser() {
    // `required` accepts whitespace-only text, so the form must too.
    let d = ContactFormData {
        name: "   ".into(),
        email: "jane@studio.com".into(),
        brief: "hi".into(),
    };
    assert_eq!(d.validate(), Ok(()));

    let mut form = ContactForm::new();
    assert_eq!(form.begin(d), Ok(()));
    assert_eq!(form.state(), SubmissionState::Pending);
    assert_eq!(form.button_label(), "Sending…");

    let mut d = valid();
    d.email = "jane".into();
    assert_eq!(d.validate(), Ok(()));
}

#[test]
fn invalid_data_never_enters_pending() {
    let mut form = ContactForm::new();
    let mut d = valid();
    d.name.clear();
    assert_eq!(
        form.begin(d),
        Err(SubmitError::Invalid(ValidationError::MissingName))
    );
    assert_eq!(form.state(), SubmissionState::Idle);
    assert!(!form.is_locked());
}

#[test]
fn state_only_moves_forward() {
    let mut form = ContactForm::new();
    assert_eq!(form.button_label(), "Send message");

    // Completing from idle does nothing.
    form.complete();
    assert_eq!(form.state(), SubmissionState::Idle);

    form.begin(valid()).unwrap();
    assert_eq!(form.state(), SubmissionState::Pending);
    assert_eq!(form.button_label(), "Sending…");
    assert_eq!(form.begin(valid()), Err(SubmitError::AlreadyPending));

    form.complete();
    assert_eq!(form.state(), SubmissionState::Sent);
    assert!(form.is_locked());
    assert_eq!(form.begin(valid()), Err(SubmitError::AlreadySent));
    form.complete();
    assert_eq!(form.state(), SubmissionState::Sent);
    assert_eq!(form.submitted(), Some(&valid()));
}

#[test]
fn submit_waits_the_fixed_latency_then_sends() {
    let form = RefCell::new(ContactForm::new());
    let waited = Cell::new(None);
    let result = pollster::block_on(submit(&form, valid(), |d| {
        assert_eq!(form.borrow().state(), SubmissionState::Pending);
        waited.set(Some(d));
        ready(())
    }));
    assert_eq!(result, Ok(()));
    assert_eq!(waited.get(), Some(Duration::from_millis(SUBMIT_LATENCY_MS as u64)));
    assert_eq!(form.borrow().state(), SubmissionState::Sent);
}

#[test]
fn resubmitting_after_sent_has_no_effect_and_no_delay() {
    let form = RefCell::new(ContactForm::new());
    let delays = Cell::new(0);
    let delay = |_: Duration| {
        delays.set(delays.get() + 1);
        ready(())
    };

    pollster::block_on(submit(&form, valid(), delay)).unwrap();
    let again = pollster::block_on(submit(&form, valid(), delay));
    assert_eq!(again, Err(SubmitError::AlreadySent));
    assert_eq!(delays.get(), 1);
    assert_eq!(form.borrow().state(), SubmissionState::Sent);
}

#[test]
fn rapid_double_submit_yields_one_pending_and_one_sent() {
    let form = RefCell::new(ContactForm::new());
    let delays = Cell::new(0);
    let second = RefCell::new(None);

    // The second click lands while the first submission is still waiting.
    let result = pollster::block_on(submit(&form, valid(), |_| {
        delays.set(delays.get() + 1);
        let inner = pollster::block_on(submit(&form, valid(), |_| {
            delays.set(delays.get() + 1);
            ready(())
        }));
        *second.borrow_mut() = Some(inner);
        ready(())
    }));

    assert_eq!(result, Ok(()));
    assert_eq!(*second.borrow(), Some(Err(SubmitError::AlreadyPending)));
    assert_eq!(delays.get(), 1);
    assert_eq!(form.borrow().state(), SubmissionState::Sent);
}
