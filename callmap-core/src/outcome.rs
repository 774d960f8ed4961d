//! Outcome conversion traits.

use crate::error::BoxError;

/// Trait for converting an action's return value into an outcome.
///
/// # Default Implementations
///
/// - `()` → Success
/// - `Result<T, E>` → Delegates to inner `T` or reports the error
/// - `Option<T>` → Delegates to inner `T`; `None` is a success
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as an action outcome",
    label = "missing `IntoOutcome` implementation",
    note = "Actions must return `()`, `Result<(), E>` or another `IntoOutcome` type."
)]
pub trait IntoOutcome {
    /// Convert the value into success or a boxed error.
    fn into_outcome(self) -> Result<(), BoxError>;
}

impl IntoOutcome for () {
    fn into_outcome(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<T, E> IntoOutcome for Result<T, E>
where
    T: IntoOutcome,
    E: Into<BoxError>,
{
    fn into_outcome(self) -> Result<(), BoxError> {
        match self {
            Ok(t) => t.into_outcome(),
            Err(e) => Err(e.into()),
        }
    }
}

impl<T: IntoOutcome> IntoOutcome for Option<T> {
    fn into_outcome(self) -> Result<(), BoxError> {
        match self {
            Some(t) => t.into_outcome(),
            None => Ok(()),
        }
    }
}
