//! Error types for callmap.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`CallmapError`] - Top-level error type for all callmap operations
//! - [`DispatchError`] - Errors while resolving or invoking actions
//! - [`BuildError`] - Errors while constructing a registry

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all callmap operations.
#[derive(Error, Debug)]
pub enum CallmapError {
    /// An error occurred while dispatching.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// An error occurred while building a registry.
    #[error("build error: {0}")]
    Build(#[from] BuildError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors that can occur while resolving or invoking actions.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// No action is registered under the requested name.
    #[error("unknown command '{0}'")]
    NotFound(String),

    /// The action was found but reported a failure.
    #[error("action '{name}' failed: {source}")]
    ActionFailed {
        /// Name the action was dispatched under.
        name: String,
        /// The error reported by the action.
        #[source]
        source: BoxError,
    },

    /// Some actions of a bulk invocation failed.
    #[error("{failed} of {total} actions failed")]
    Incomplete {
        /// Number of failed invocations.
        failed: usize,
        /// Number of attempted invocations.
        total: usize,
    },
}

impl DispatchError {
    /// Returns true if this error is a failed lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DispatchError::NotFound(_))
    }
}

/// Errors that can occur while building a registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// An action was registered under an empty name.
    #[error("action names must not be empty")]
    EmptyName,

    /// An action was registered under a reserved name.
    #[error("name is reserved: {0}")]
    ReservedName(String),

    /// A name was registered twice while duplicates are rejected.
    #[error("duplicate name: {0}")]
    DuplicateName(String),

    /// An alias points at a name that has not been registered.
    #[error("alias '{alias}' refers to unknown name '{target}'")]
    UnknownAliasTarget {
        /// The alias being registered.
        alias: String,
        /// The missing target.
        target: String,
    },
}

impl From<BoxError> for CallmapError {
    fn from(err: BoxError) -> Self {
        CallmapError::Custom(err)
    }
}
