//! # Actions
//!
//! An action is the unit of behavior a registry dispatches to: it takes no
//! arguments and reports only success or failure. Side effects (writing to an
//! output sink, touching shared state) are the whole point of running one.
//!
//! # Usage Patterns
//!
//! 1. **Plain function**: `fn foo() { ... }`
//! 2. **Closure**: `move || writeln!(out.lock()?, "hello")`
//! 3. **Struct implementation**: `impl Action for MyAction`

use crate::{error::BoxError, outcome::IntoOutcome};

/// A zero-argument, side-effecting unit of behavior.
///
/// The trait is object safe; registries store actions as `Arc<dyn Action>` so
/// several names can share one action.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a callmap action",
    label = "missing `Action` implementation",
    note = "Implement `Action`, or pass a function or closure taking no arguments."
)]
pub trait Action: Send + Sync + 'static {
    /// Runs the action once.
    fn invoke(&self) -> Result<(), BoxError>;
}

// Blanket impl for functions and closures
impl<F, R> Action for F
where
    F: Fn() -> R + Send + Sync + 'static,
    R: IntoOutcome,
{
    fn invoke(&self) -> Result<(), BoxError> {
        (self)().into_outcome()
    }
}
