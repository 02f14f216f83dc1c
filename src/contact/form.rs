use std::cell::Cell;
use std::rc::Rc;

use serde::Serialize;
use yew::Reducible;

use crate::contact::relay::RelayError;

/// Shown for every failed submission, whatever the underlying cause was.
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again or email us directly.";

/// Field values as sent to the relay. Flat, exactly four keys.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl SubmissionForm {
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.company.is_empty() && self.message.is_empty()
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::Message => self.message = value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Company,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Sent,
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

pub enum ContactAction {
    Edit(Field, String),
    Begin,
    Finish(Result<(), RelayError>),
}

/// One contact section's form values plus where its submission stands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactSubmission {
    form: SubmissionForm,
    state: SubmissionState,
}

impl ContactSubmission {
    pub fn form(&self) -> &SubmissionForm {
        &self.form
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// The trigger stays disabled for as long as a request is in flight.
    pub fn submit_enabled(&self) -> bool {
        !self.state.is_submitting()
    }

    fn apply(&mut self, action: ContactAction) {
        match action {
            ContactAction::Edit(field, value) => {
                self.form.set(field, value);
                if self.state == SubmissionState::Sent {
                    self.state = SubmissionState::Idle;
                }
            }
            ContactAction::Begin => {
                if !self.state.is_submitting() {
                    self.state = SubmissionState::Submitting;
                }
            }
            ContactAction::Finish(outcome) => {
                if !self.state.is_submitting() {
                    log::warn!("Ignoring contact submission result with no request in flight");
                    return;
                }
                self.state = match outcome {
                    Ok(()) => {
                        self.form = SubmissionForm::default();
                        SubmissionState::Sent
                    }
                    Err(_) => SubmissionState::Failed(FAILURE_MESSAGE.to_string()),
                };
            }
        }
    }
}

impl Reducible for ContactSubmission {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Synchronous send gate shared by a form's submit handler.
///
/// Rendered state lags behind events queued in the same task, so the
/// handler takes this before sending and the guard releases it when the
/// send completes.
#[derive(Debug, Default)]
pub struct InFlight(Cell<bool>);

impl InFlight {
    pub fn acquire(flag: &Rc<Self>) -> Option<InFlightGuard> {
        if flag.0.replace(true) {
            None
        } else {
            Some(InFlightGuard(Rc::clone(flag)))
        }
    }

    pub fn is_held(&self) -> bool {
        self.0.get()
    }
}

#[derive(Debug)]
pub struct InFlightGuard(Rc<InFlight>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0 .0.set(false);
    }
}
