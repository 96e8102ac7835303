//! Log setup. The terminal belongs to the quiz UI, so logs only ever go to
//! a file; without one, logging stays off.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::QuizError;

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// File to append log lines to.
    pub file: Option<PathBuf>,
    /// Filter directive, e.g. `debug` or `quiz_engine::engine=trace`.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `config.level`.
pub fn init_logging(config: &LogConfig) -> Result<(), QuizError> {
    let Some(path) = &config.file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|err| QuizError::Logging(err.to_string()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .map_err(|err| QuizError::Logging(err.to_string()))?;

    tracing::debug!(path = %path.display(), "logging initialised");
    Ok(())
}
