use crate::error::ConfigError;

/// Common Result type alias for engine operations
pub type EngineResult<T> = Result<T, ConfigError>;
