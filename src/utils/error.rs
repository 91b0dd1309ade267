use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// A base-form factory was invoked directly. This is a programming
    /// contract violation, not a recoverable condition; it propagates
    /// unchanged to the caller.
    #[error("Factory not implemented: no concrete {factory} bound")]
    NotImplemented { factory: &'static str },

    #[error("Missing attribute: {name}")]
    MissingAttribute { name: String },

    #[error("Invalid change descriptor: {reason}")]
    InvalidChange { reason: String },
}

pub type Result<T> = std::result::Result<T, BindError>;
