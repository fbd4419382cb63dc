//! File-based implementation of SessionRepository

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use edurh_domain::model::Session;
use edurh_domain::repository::SessionRepository;
use edurh_types::Result;

/// Stores the current session as JSON on disk
pub struct FileSessionRepository {
    session_path: PathBuf,
}

impl FileSessionRepository {
    /// Open the repository inside `data_dir`, creating the directory
    pub fn open(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self {
            session_path: data_dir.join("session.json"),
        })
    }

    pub fn session_path(&self) -> &PathBuf {
        &self.session_path
    }
}

impl SessionRepository for FileSessionRepository {
    fn load(&self) -> Result<Option<Session>> {
        if !self.session_path.exists() {
            return Ok(None);
        }
        let file = File::open(&self.session_path)?;
        let reader = BufReader::new(file);
        match serde_json::from_reader(reader) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                log::warn!(
                    "Ignoring unreadable session file {}: {}",
                    self.session_path.display(),
                    e
                );
                Ok(None)
            }
        }
    }

    fn save(&self, session: &Session) -> Result<()> {
        let file = File::create(&self.session_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, session)?;
        log::debug!("Session saved to {}", self.session_path.display());
        Ok(())
    }

    fn clear(&self) -> Result<bool> {
        if self.session_path.exists() {
            fs::remove_file(&self.session_path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edurh_types::Error;

    #[test]
    fn test_session_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSessionRepository::open(dir.path().join("edurh")).unwrap();

        assert!(repo.load().unwrap().is_none());
        assert!(matches!(repo.require(), Err(Error::NotLoggedIn)));

        let session = Session::new("token-123", Some("Ana".to_string()), None);
        repo.save(&session).unwrap();
        assert_eq!(repo.load().unwrap(), Some(session.clone()));
        assert_eq!(repo.require().unwrap().token, "token-123");

        assert!(repo.clear().unwrap());
        assert!(repo.load().unwrap().is_none());
        assert!(!repo.clear().unwrap());
    }

    #[test]
    fn test_corrupted_session_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSessionRepository::open(dir.path().to_path_buf()).unwrap();
        fs::write(repo.session_path(), "{not json").unwrap();
        assert!(repo.load().unwrap().is_none());
    }
}
