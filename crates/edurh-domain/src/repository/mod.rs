//! Repository trait definitions for data persistence

use edurh_types::{Error, Result};

use crate::model::Session;

/// Storage for the current session
pub trait SessionRepository {
    /// Load the stored session, if any
    fn load(&self) -> Result<Option<Session>>;

    /// Store a session, replacing any previous one
    fn save(&self, session: &Session) -> Result<()>;

    /// Remove the stored session. Returns whether one existed.
    fn clear(&self) -> Result<bool>;

    /// Load the stored session or fail with `Error::NotLoggedIn`
    fn require(&self) -> Result<Session> {
        self.load()?.ok_or(Error::NotLoggedIn)
    }
}
