use crate::authenticator::SimulatedAuthenticator;
use crate::constant::LOGIN_SUCCESS_MESSAGE;
use crate::form::field::{self, Field, FormValues, ValidationError};
use crate::notification::Notifier;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Where a form is in its submit lifecycle.
///
/// `Idle -> Validating -> Idle` when validation fails,
/// `Idle -> Validating -> Submitting -> Idle` otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The simulated call completed and the success notification was sent.
    Succeeded,
    /// At least one field failed; nothing was sent.
    Invalid(Vec<ValidationError>),
    /// A submit was already running, the request had no effect.
    Ignored,
}

#[derive(Debug, Default)]
struct FormState {
    values: FormValues,
    errors: BTreeMap<Field, String>,
    // Fields validated at least once are re-validated on every change.
    validated: BTreeSet<Field>,
    phase: SubmitPhase,
}

impl FormState {
    fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }
}

/// Read-only copy of the form state, what a renderer needs to draw the page.
#[derive(Debug, Clone, Default)]
pub struct FormSnapshot {
    pub values: FormValues,
    pub errors: BTreeMap<Field, String>,
    pub is_submitting: bool,
}

impl FormSnapshot {
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

/// Puts the form back to `Idle` when dropped, also when the submit future is
/// dropped during the delay.
struct SubmittingGuard<'a> {
    form: &'a LoginForm,
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.form.lock().phase = SubmitPhase::Idle;
    }
}

/// State of one login form instance.
///
/// Cloning gives another handle to the same form, so the page and a running
/// submit see the same values, errors and `is_submitting` flag.
/// The lock is never held across an `.await`.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    state: Arc<Mutex<FormState>>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// A form whose fields were already typed in, e.g. from a posted request.
    pub fn with_values(email: impl Into<String>, password: impl Into<String>) -> Self {
        let form = Self::new();
        form.on_field_change(Field::Email, email);
        form.on_field_change(Field::Password, password);
        form
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        // The state stays consistent between statements, a poisoned lock is still usable.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn value(&self, field: Field) -> String {
        self.lock().values.get(field).to_string()
    }

    pub fn error(&self, field: Field) -> Option<String> {
        self.lock().errors.get(&field).cloned()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.lock().phase
    }

    pub fn is_submitting(&self) -> bool {
        self.lock().is_submitting()
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let state = self.lock();
        FormSnapshot {
            values: state.values.clone(),
            errors: state.errors.clone(),
            is_submitting: state.is_submitting(),
        }
    }

    /// Store a keystroke. Inputs are disabled while submitting, so changes are
    /// dropped then. A field validated before gets its own rule re-run; the
    /// other field's message is left as it is.
    pub fn on_field_change(&self, field: Field, value: impl Into<String>) {
        let mut state = self.lock();
        if state.is_submitting() {
            tracing::debug!(field = field.name(), "Ignore change of a disabled field");
            return;
        }

        state.values.set(field, value.into());
        if !state.validated.contains(&field) {
            return;
        }

        match field::validate(field, state.values.get(field)) {
            Ok(()) => {
                state.errors.remove(&field);
            }
            Err(e) => {
                state.errors.insert(field, e.message);
            }
        }
    }

    /// Validate the form and, when it is valid, run the simulated
    /// authentication call and notify success.
    #[tracing::instrument(
        name = "Submit login form",
        skip(self, authenticator, notifier),
        fields(email = tracing::field::Empty)
    )]
    pub async fn on_submit(
        &self,
        authenticator: &SimulatedAuthenticator,
        notifier: &dyn Notifier,
    ) -> SubmitOutcome {
        let credentials = {
            let mut state = self.lock();
            if state.phase != SubmitPhase::Idle {
                tracing::debug!("A submit is already running");
                return SubmitOutcome::Ignored;
            }

            state.phase = SubmitPhase::Validating;
            state.validated.extend(Field::ALL);
            match field::validate_form(&state.values) {
                Ok(credentials) => {
                    state.errors.clear();
                    state.phase = SubmitPhase::Submitting;
                    credentials
                }
                Err(errors) => {
                    state.errors = errors
                        .iter()
                        .map(|e| (e.field, e.message.clone()))
                        .collect();
                    state.phase = SubmitPhase::Idle;
                    tracing::info!(invalid_fields = errors.len(), "Login form is invalid");
                    return SubmitOutcome::Invalid(errors);
                }
            }
        };
        let submitting = SubmittingGuard { form: self };
        tracing::Span::current().record("email", tracing::field::display(&credentials.email));

        authenticator.authenticate(credentials).await;

        notifier.notify_success(LOGIN_SUCCESS_MESSAGE);
        drop(submitting);
        SubmitOutcome::Succeeded
    }
}
