//! # callmap-std
//!
//! Standard implementations for the callmap command dispatcher.
//!
//! This crate provides:
//! - **Registry construction**: [`RegistryBuilder`](registry::RegistryBuilder)
//!   and the [`registry!`] macro
//! - **Sealed registry**: [`Registry`](registry::Registry) with lookup,
//!   dispatch and bulk invocation
//! - **Bulk results**: [`InvokeReport`](report::InvokeReport)
//! - **Testing utilities**: recording, counting and failing actions

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use callmap_core;

// Modules
mod macros;
pub mod registry;
pub mod report;
pub mod testing;
