//! LogInHandler - signs a patient in and persists the session.

use std::sync::Arc;

use crate::domain::validation::{verify_email, verify_password};
use crate::domain::{DomainError, Session};
use crate::ports::{DataGateway, SessionStore};

/// Raw credentials plus the "stay logged in" preference.
#[derive(Debug, Clone)]
pub struct LogInCommand {
    pub email: String,
    pub password: String,
    pub stay_logged_in: bool,
}

/// Progress of one login attempt. `Rejected`, `Failed`, and
/// `Authenticated` are terminal.
#[derive(Debug, Clone, Copy)]
enum LoginState {
    Unauthenticated,
    Validating,
    Rejected,
    Authenticating,
    Failed,
    Authenticated,
}

/// Handler for the login use case.
pub struct LogInHandler {
    gateway: Arc<dyn DataGateway>,
    session_store: Arc<dyn SessionStore>,
}

impl LogInHandler {
    pub fn new(gateway: Arc<dyn DataGateway>, session_store: Arc<dyn SessionStore>) -> Self {
        Self {
            gateway,
            session_store,
        }
    }

    /// Validates both credential formats, authenticates against the store,
    /// and persists the resulting session.
    ///
    /// Both format checks always run, so a rejection carries the complete
    /// set of failing codes. The rendered error stays generic about which
    /// field failed. Format rejection never touches the store.
    pub async fn handle(&self, cmd: LogInCommand) -> Result<Session, DomainError> {
        tracing::trace!(state = ?LoginState::Unauthenticated, "login attempt started");

        tracing::trace!(state = ?LoginState::Validating, "checking credential formats");
        let errors: Vec<_> = [verify_email(&cmd.email), verify_password(&cmd.password)]
            .into_iter()
            .filter_map(Result::err)
            .collect();
        if !errors.is_empty() {
            tracing::debug!(state = ?LoginState::Rejected, "login rejected on credential format");
            return Err(DomainError::InvalidCredentials { errors });
        }

        tracing::trace!(state = ?LoginState::Authenticating, "querying the store");
        let patient = match self.gateway.find_patient(&cmd.email, &cmd.password).await {
            Ok(patient) => patient,
            Err(e) => {
                tracing::debug!(state = ?LoginState::Failed, "login failed against the store");
                return Err(e);
            }
        };

        tracing::info!(state = ?LoginState::Authenticated, patient_id = ?patient.id, "patient logged in");

        let session = Session::logged_in(patient, cmd.stay_logged_in);
        self.session_store.save(&session).await?;
        Ok(session)
    }
}
