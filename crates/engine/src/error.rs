// crates/engine/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A source could not be opened or a read failed outright. Not locally
    /// recoverable; aborts the whole run.
    #[error("Failed to read '{name}': {source}")]
    SourceUnreadable {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
