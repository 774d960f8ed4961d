//! # callmap - Named Action Dispatch
//!
//! `callmap` maps command names to zero-argument actions. A registry is built
//! once, sealed, and then used read-only: look an action up by name, dispatch
//! it, or invoke every registration in order.
//!
//! ## Quick Start
//!
//! ```rust
//! use callmap::prelude::*;
//!
//! fn foo() {}
//! fn bar() {}
//!
//! let registry = RegistryBuilder::new()
//!     .register("foo", foo)
//!     .register("bar", bar)
//!     .alias("index", "bar")
//!     .build()
//!     .unwrap();
//!
//! registry.dispatch("foo").unwrap();
//! assert!(registry.dispatch("baz").unwrap_err().is_not_found());
//! assert!(registry.invoke_all().is_success());
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use callmap_core::{
    // Action
    Action,
    // Error types
    BoxError,
    BuildError,
    CallmapError,
    DispatchError,
    // Outcome
    IntoOutcome,
    // Router
    RouteResult,
    Router,
};

pub use callmap_std::{
    registry,
    registry::{DuplicatePolicy, Registry, RegistryBuilder, Slot},
    report::{InvokeReport, Outcome},
};

/// Testing utilities.
pub mod testing {
    pub use callmap_std::testing::{CountingAction, FailingAction, Journal, RecordingAction};
}

/// Prelude module - common imports for callmap.
///
/// # Usage
///
/// ```rust,ignore
/// use callmap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Action, BoxError, BuildError, DispatchError, InvokeReport, IntoOutcome, Registry,
        RegistryBuilder, Router,
    };
}
