use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `LEXSITE_*` variable could not be merged or extracted.
    #[error("invalid lexsite configuration: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("[{section}] is incomplete")]
    NotConfigured { section: String },

    #[error("{field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        Self::Figment(Box::new(error))
    }
}
