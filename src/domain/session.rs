//! In-memory record of the authenticated patient.

use serde::{Deserialize, Serialize};

use super::patient::Patient;

/// The current authentication state plus the "stay logged in" preference.
///
/// `patient` is `None` only in the logged-out state. The session store
/// adapter persists this value verbatim; the core never touches the
/// storage mechanics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    patient: Option<Patient>,
    keep_logged_in: bool,
}

impl Session {
    /// Session for a freshly authenticated patient.
    pub fn logged_in(patient: Patient, keep_logged_in: bool) -> Self {
        Self {
            patient: Some(patient),
            keep_logged_in,
        }
    }

    /// The logged-out state.
    pub fn logged_out() -> Self {
        Self {
            patient: None,
            keep_logged_in: false,
        }
    }

    pub fn patient(&self) -> Option<&Patient> {
        self.patient.as_ref()
    }

    pub fn keep_logged_in(&self) -> bool {
        self.keep_logged_in
    }

    pub fn is_logged_in(&self) -> bool {
        self.patient.is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::logged_out()
    }
}
