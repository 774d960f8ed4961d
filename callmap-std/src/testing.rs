//! Testing utilities for callmap.
//!
//! This module provides actions that make registry behavior observable.
//!
//! # Features
//!
//! - [`Journal`] / [`RecordingAction`]: record which actions ran, in order
//! - [`CountingAction`]: count invocations
//! - [`FailingAction`]: always fail with a fixed message

use callmap_core::{Action, BoxError};
use std::sync::{
    Arc, Mutex, MutexGuard, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording
// ============================================================================

/// A shared, ordered log of action labels.
///
/// # Example
///
/// ```rust,ignore
/// let journal = Journal::new();
/// let registry = RegistryBuilder::new()
///     .register("foo", journal.recorder("foo"))
///     .register("bar", journal.recorder("bar"))
///     .build()?;
///
/// registry.invoke_all();
/// assert_eq!(journal.entries(), vec!["foo", "bar"]);
/// ```
#[derive(Clone, Default)]
pub struct Journal {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an action that appends `label` to this journal when invoked.
    pub fn recorder(&self, label: impl Into<String>) -> RecordingAction {
        RecordingAction {
            label: label.into(),
            journal: self.clone(),
        }
    }

    /// Get a copy of the recorded labels.
    pub fn entries(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Get the number of recorded labels.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Clear all recorded labels.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        // Poisoned journals still hold valid entries
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// An action that records its label in a [`Journal`].
#[derive(Clone)]
pub struct RecordingAction {
    label: String,
    journal: Journal,
}

impl RecordingAction {
    /// The label this action records.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Action for RecordingAction {
    fn invoke(&self) -> Result<(), BoxError> {
        self.journal.lock().push(self.label.clone());
        Ok(())
    }
}

// ============================================================================
// Counting
// ============================================================================

/// An action that counts invocations.
///
/// Clones share the same counter.
#[derive(Clone, Default)]
pub struct CountingAction {
    count: Arc<AtomicUsize>,
}

impl CountingAction {
    /// Create a new counting action.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Action for CountingAction {
    fn invoke(&self) -> Result<(), BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Failing
// ============================================================================

/// An action that always fails.
#[derive(Clone, Debug)]
pub struct FailingAction {
    message: String,
}

impl FailingAction {
    /// Create an action failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Action for FailingAction {
    fn invoke(&self) -> Result<(), BoxError> {
        Err(self.message.clone().into())
    }
}
