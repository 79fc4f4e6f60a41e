use std::{
    fs, io,
    path::{Path, PathBuf},
};

use super::{ChatSession, Part};

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("Failed to read chat history at {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse chat history at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write chat history at {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Loads a JSON array of chat sessions.
pub fn load_history<P: AsRef<Path>>(path: P) -> Result<Vec<ChatSession>, HistoryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| HistoryError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let sessions: Vec<ChatSession> =
        serde_json::from_str(&content).map_err(|source| HistoryError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    log::info!("Loaded {} chat sessions from {}", sessions.len(), path.display());
    Ok(sessions)
}

/// Saves sessions as pretty JSON, creating parent directories.
///
/// Attachment contents are not persisted; only file names and types are.
pub fn save_history<P: AsRef<Path>>(path: P, sessions: &[ChatSession]) -> Result<(), HistoryError> {
    let path = path.as_ref();
    let write_err = |source| HistoryError::Write {
        path: path.to_path_buf(),
        source,
    };

    let stripped: Vec<ChatSession> = sessions.iter().map(strip_attachment_data).collect();
    let content = serde_json::to_string_pretty(&stripped)
        .map_err(|e| write_err(io::Error::new(io::ErrorKind::InvalidData, e)))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, content).map_err(write_err)
}

fn strip_attachment_data(session: &ChatSession) -> ChatSession {
    let mut session = session.clone();
    for part in session.messages.iter_mut().flat_map(|m| m.parts.iter_mut()) {
        if let Part::File { file } = part {
            file.data = None;
        }
    }
    session
}
