//! # callmap-core
//!
//! Core traits for the callmap command dispatch registry.
//!
//! This crate has minimal dependencies and is meant to be imported by code that
//! only defines actions, without pulling in the registry implementation from
//! `callmap-std`.
//!
//! # Building Blocks
//!
//! ## [`Action`]
//!
//! A zero-argument unit of behavior. Plain functions and closures are actions
//! as long as their return type implements [`IntoOutcome`], so `fn foo()` and
//! `|| -> io::Result<()> { ... }` can both be registered directly.
//!
//! ## [`Router`]
//!
//! Name resolution. A router maps a key to a value and reports
//! [`RouteResult::NotFound`] instead of failing, leaving the caller to decide
//! how a miss is surfaced.
//!
//! # Error Types
//!
//! - [`CallmapError`] - Top-level error type
//! - [`DispatchError`] - Lookup and invocation errors
//! - [`BuildError`] - Registry construction errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod action;
mod error;
mod outcome;
mod router;

// Re-exports
pub use action::Action;
pub use error::{BoxError, BuildError, CallmapError, DispatchError};
pub use outcome::IntoOutcome;
pub use router::{RouteResult, Router};
