use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("{0}")]
    Connection(String),
    #[error("{0}")]
    Query(String),
    #[error("{0}")]
    Script(String),
    #[error("{} file not found...", path.display())]
    ScriptNotFound { path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    ScriptRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DatabaseError {
    pub(crate) fn from_script_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            DatabaseError::ScriptNotFound { path }
        } else {
            DatabaseError::ScriptRead { path, source }
        }
    }
}

impl From<diesel::result::Error> for DatabaseError {
    fn from(value: diesel::result::Error) -> Self {
        DatabaseError::Query(value.to_string())
    }
}
