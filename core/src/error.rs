//! Common error types for property access.

use thiserror::Error;

/// Errors that can occur while reading or writing host properties.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
    /// The name is neither a declared field nor an alias.
    #[error("property or alias ({0}) does not exist")]
    UnknownProperty(String),

    /// A raw slot write targeted a name the host never declared.
    #[error("no slot declared for: {0}")]
    UndeclaredSlot(String),

    /// A custom setter declined the value.
    #[error("value rejected for {name}: {reason}")]
    Rejected { name: String, reason: String },
}

impl PropertyError {
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownProperty(name.into())
    }

    pub fn rejected(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Rejected {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Returns true for unknown-property failures.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::UnknownProperty(_))
    }

    /// The property name the error refers to.
    pub fn name(&self) -> &str {
        match self {
            Self::UnknownProperty(name) | Self::UndeclaredSlot(name) => name,
            Self::Rejected { name, .. } => name,
        }
    }
}

/// Result type for property operations.
pub type PropertyResult<T> = Result<T, PropertyError>;
