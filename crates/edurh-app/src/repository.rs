//! Repository adapters for persistence layer

use std::path::PathBuf;

use edurh_infra::persistence::FileSessionRepository;
use edurh_types::Result;

use crate::config::Config;

/// Open the file-based session repository in the configured data dir
pub fn open_session_repo(config: &Config) -> Result<FileSessionRepository> {
    let data_dir = config.data_dir()?;
    FileSessionRepository::open(data_dir)
}

/// Open the session repository at a custom directory
pub fn open_session_repo_at(data_dir: PathBuf) -> Result<FileSessionRepository> {
    FileSessionRepository::open(data_dir)
}
