use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::models::Question;

/// Errors raised while reading a question file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{} must contain at least one question", .path.display())]
    Empty { path: PathBuf },
}

/// Load the question list from a JSON file.
///
/// Records that parse but look malformed are kept and reported at `warn`
/// level; they are scored as incorrect rather than rejected.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let questions: Vec<Question> =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if questions.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    for (index, question) in questions.iter().enumerate() {
        for finding in question.lint() {
            warn!(index, kind = question.kind(), "{finding}");
        }
    }

    info!(path = %path.display(), count = questions.len(), "loaded questions");
    Ok(questions)
}
