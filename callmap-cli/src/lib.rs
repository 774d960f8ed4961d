//! Command-line front end for callmap.
//!
//! The binary takes a single positional argument: the name of a registered
//! command, or `all` to run every command in registration order. Outcomes map
//! to exit codes through [`Exit`].

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod app;
pub mod cli;
pub mod commands;
pub mod exit;
pub mod logging;
pub mod output;

pub use app::{run, start};
pub use cli::{ALL, Args, Invocation};
pub use exit::Exit;
pub use output::{Captured, Output};
