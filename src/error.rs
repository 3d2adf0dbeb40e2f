use thiserror::Error;

/// Errors raised while configuring a color flicker.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlickerError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid color '{0}', expected a hex code like #RRGGBB")]
    InvalidColor(String),
}
