use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("no schema registered as '{0}'")]
    Unknown(String),

    /// The instance broke one or more schema rules; one message per rule.
    #[error("{}", errors.join("; "))]
    Invalid { errors: Vec<String> },

    #[error("schema '{name}' does not compile: {reason}")]
    Compile { name: String, reason: String },
}
