use latbridge_core::ConfigError;

/// Errors that can occur while setting up or running a SITL session.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("Synthesizer configuration failed: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
