//! Engine error taxonomy.

/// Errors surfaced by the scheduling engine.
///
/// `InvalidArgument` is a caller contract violation, rejected at the call
/// boundary. `Calendar` wraps an external calendar-store failure; the engine
/// treats it as opaque and never retries.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("calendar store error: {0}")]
    Calendar(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
