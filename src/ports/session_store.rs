//! Session store port.
//!
//! Persistence seam for the [`Session`] value. The core produces and
//! consumes sessions; where they live between runs is the adapter's
//! concern.

use async_trait::async_trait;

use crate::domain::{DomainError, Session};

/// Persists the current session at a well-known location.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Write the session, replacing any previous one.
    async fn save(&self, session: &Session) -> Result<(), DomainError>;

    /// Read the persisted session. `None` when nothing was saved; absence
    /// is not an error.
    async fn load(&self) -> Result<Option<Session>, DomainError>;

    /// Remove the persisted session. Absence is tolerated.
    async fn clear(&self) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn session_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn SessionStore) {}
    }
}
