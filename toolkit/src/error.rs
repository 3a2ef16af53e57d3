//! Toolkit error taxonomy.
//!
//! Validation errors carry the user-facing message verbatim; widgets surface
//! them as transient notifications. Every other variant is logged and
//! confined to the module or instance that raised it.

use crate::module::ToolKind;

#[derive(Debug, thiserror::Error)]
pub enum ToolkitError {
    /// Missing or invalid user input. The message is shown to the user.
    #[error("{0}")]
    Validation(String),
    /// A container named a tool that no module implements.
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    /// A container named a tool whose module is disabled or failed to load.
    #[error("module not loaded: {0}")]
    ModuleNotLoaded(ToolKind),
    /// A module failed during initialization.
    #[error("module {module} failed to initialize: {reason}")]
    ModuleInit { module: ToolKind, reason: String },
    /// The key/value store rejected a read or write.
    #[error("storage error: {0}")]
    Storage(String),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    /// A booking submission was rejected by the backend. The message is shown to the user.
    #[error("{0}")]
    Submission(String),
}

impl ToolkitError {
    /// Shorthand for a [`ToolkitError::Validation`] with a static message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether this error should be shown to the shopper rather than only logged.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Submission(_))
    }
}
