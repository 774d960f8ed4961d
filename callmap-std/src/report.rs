//! Results of bulk invocation.

use callmap_core::{BoxError, DispatchError};
use std::sync::Arc;

/// The result of invoking a single slot.
#[derive(Debug)]
pub struct Outcome {
    name: Arc<str>,
    result: Result<(), BoxError>,
}

impl Outcome {
    pub(crate) fn new(name: Arc<str>, result: Result<(), BoxError>) -> Self {
        Self { name, result }
    }

    /// The name the invoked slot was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the action completed successfully.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// The error reported by the action, if it failed.
    pub fn error(&self) -> Option<&BoxError> {
        self.result.as_ref().err()
    }

    /// Convert into a dispatch result for this slot alone.
    pub fn into_result(self) -> Result<(), DispatchError> {
        self.result.map_err(|source| DispatchError::ActionFailed {
            name: self.name.to_string(),
            source,
        })
    }
}

/// Per-slot outcomes of [`Registry::invoke_all`](crate::registry::Registry::invoke_all),
/// in invocation order.
#[derive(Debug, Default)]
pub struct InvokeReport {
    outcomes: Vec<Outcome>,
}

impl InvokeReport {
    pub(crate) fn new(outcomes: Vec<Outcome>) -> Self {
        Self { outcomes }
    }

    /// Iterate over outcomes in invocation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Outcome> {
        self.outcomes.iter()
    }

    /// Iterate over failed outcomes only.
    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| !o.is_ok())
    }

    /// Number of invoked slots.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Check if nothing was invoked.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Number of slots that completed successfully.
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    /// Number of slots that failed.
    pub fn failed(&self) -> usize {
        self.len() - self.succeeded()
    }

    /// Returns true if every invoked slot succeeded.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(Outcome::is_ok)
    }

    /// Collapse the report into the number of invoked slots, or an
    /// [`DispatchError::Incomplete`] error if any of them failed.
    pub fn into_result(self) -> Result<usize, DispatchError> {
        match self.failed() {
            0 => Ok(self.len()),
            failed => Err(DispatchError::Incomplete {
                failed,
                total: self.len(),
            }),
        }
    }
}

impl IntoIterator for InvokeReport {
    type Item = Outcome;
    type IntoIter = std::vec::IntoIter<Outcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.into_iter()
    }
}

impl<'a> IntoIterator for &'a InvokeReport {
    type Item = &'a Outcome;
    type IntoIter = std::slice::Iter<'a, Outcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}
