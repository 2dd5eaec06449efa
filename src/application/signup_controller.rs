//! SignupController - lifecycle of the registration form.

use std::sync::Arc;

use tracing::{info, warn, Instrument};

use crate::domain::foundation::StatusKind;
use crate::domain::lifecycle::{FormState, RequestStatus, Resolution};
use crate::domain::signup::{validate_signup, EMAIL_FIELD, NAME_FIELD, PASSWORD_FIELD};
use crate::ports::{AuthApi, Navigator, RegisterRequest};

use super::lifecycle_cell::{Admission, LifecycleCell, SubmitOutcome};
use super::ControllerError;

/// Key of the server-supplied message in `/auth/register` error bodies.
pub const SIGNUP_ERROR_KEY: &str = "msg";

pub const SIGNUP_FALLBACK_MESSAGE: &str = "Registration failed. Please try again.";

/// Tunables for the signup flow.
#[derive(Debug, Clone)]
pub struct SignupControllerConfig {
    /// Route to move to once the account exists.
    pub login_route: String,
}

impl Default for SignupControllerConfig {
    fn default() -> Self {
        Self {
            login_route: "/login".to_string(),
        }
    }
}

struct Inner {
    api: Arc<dyn AuthApi>,
    navigator: Arc<dyn Navigator>,
    login_route: String,
    lifecycle: LifecycleCell<()>,
}

/// Controller for the signup form. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct SignupController {
    inner: Arc<Inner>,
}

impl SignupController {
    pub fn new(
        api: Arc<dyn AuthApi>,
        navigator: Arc<dyn Navigator>,
        config: SignupControllerConfig,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                api,
                navigator,
                login_route: config.login_route,
                lifecycle: LifecycleCell::new(FormState::with_fields([
                    NAME_FIELD,
                    EMAIL_FIELD,
                    PASSWORD_FIELD,
                ])),
            }),
        }
    }

    pub fn form(&self) -> FormState {
        self.inner.lifecycle.form()
    }

    pub fn status(&self) -> RequestStatus<()> {
        self.inner.lifecycle.status()
    }

    pub fn kind(&self) -> StatusKind {
        self.inner.lifecycle.kind()
    }

    pub fn error(&self) -> Option<String> {
        self.status().error().map(str::to_string)
    }

    /// True while registration is in flight (submit control disabled).
    pub fn is_loading(&self) -> bool {
        self.kind().is_pending()
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.inner.lifecycle.edit(NAME_FIELD, name);
    }

    pub fn set_email(&self, email: impl Into<String>) {
        self.inner.lifecycle.edit(EMAIL_FIELD, email);
    }

    pub fn set_password(&self, password: impl Into<String>) {
        self.inner.lifecycle.edit(PASSWORD_FIELD, password);
    }

    /// Validates and registers. On success navigates to the login route.
    pub async fn submit(&self) -> Result<SubmitOutcome, ControllerError> {
        self.run(None).await
    }

    /// Registers again after a failure with the fields as they are now.
    pub async fn retry(&self) -> Result<SubmitOutcome, ControllerError> {
        self.run(Some(StatusKind::Failed)).await
    }

    /// Empties the form and supersedes any in-flight registration.
    pub fn clear(&self) {
        self.inner.lifecycle.clear();
    }

    async fn run(&self, require: Option<StatusKind>) -> Result<SubmitOutcome, ControllerError> {
        let (ticket, fields) = match self.inner.lifecycle.admit(require, validate_signup)? {
            Admission::Accepted(ticket, fields) => (ticket, fields),
            Admission::Finished(outcome) => return Ok(outcome),
        };

        let span = tracing::info_span!(
            "register",
            request_id = %ticket.request_id,
            generation = %ticket.generation,
        );
        let result = self
            .inner
            .api
            .register(RegisterRequest::from(fields))
            .instrument(span)
            .await;
        let outcome = result.map_err(|err| {
            warn!(error = %err, status = ?err.status(), "Registration request failed");
            err.surface(SIGNUP_ERROR_KEY, SIGNUP_FALLBACK_MESSAGE)
        });

        let applied = match self.inner.lifecycle.settle(ticket.generation, outcome.clone()) {
            Resolution::Stale { current, offered } => {
                warn!(%current, %offered, "Discarding result of superseded registration");
                return Ok(SubmitOutcome::Superseded);
            }
            Resolution::Applied(()) => outcome,
        };

        match applied {
            Ok(()) => {
                info!(route = %self.inner.login_route, "Registration succeeded");
                self.inner.navigator.navigate(&self.inner.login_route);
                Ok(SubmitOutcome::Succeeded)
            }
            Err(message) => Ok(SubmitOutcome::Failed(message)),
        }
    }
}
