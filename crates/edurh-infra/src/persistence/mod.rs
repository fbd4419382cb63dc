//! Persistence implementations
//!
//! File-based implementations of the domain repository traits.

mod file_session_repo;

pub use file_session_repo::FileSessionRepository;
