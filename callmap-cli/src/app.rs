//! Argument handling and dispatch.
//!
//! [`run`] parses arguments, dispatches against a registry, writes to the
//! given sinks and returns the [`Exit`] to report. [`start`] wraps it with
//! process setup: logging first, then the built-in command table.
//!
//! Only operands count towards the single-argument rule. `-v`/`--verbose` and
//! `-l`/`--list` are options; any other token, including an unknown
//! `-x`, is an operand and is dispatched as a command name.

use crate::{
    cli::{ALL, Args, Invocation},
    commands::build_registry,
    exit::Exit,
    output::Output,
};
use callmap::{CallmapError, Registry};
use clap::{Parser, error::ErrorKind};
use std::ffi::OsString;

/// Parse `args`, install logging through `init_logging`, build the built-in
/// command table and run.
pub fn start<I, T>(args: I, out: &Output, err: &Output, init_logging: impl FnOnce(u8)) -> Exit
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let parsed = Args::try_parse_from(&argv);
    init_logging(parsed.as_ref().map_or(0, |args| args.verbose));

    let registry = match build_registry(out) {
        Ok(registry) => registry,
        Err(error) => return fail(err, error.into()),
    };
    tracing::debug!(commands = registry.len(), "command table ready");

    resolve(parsed, &argv, &registry, out, err)
}

/// Parse `args` (including the program name) and run them against `registry`.
pub fn run<I, T>(args: I, registry: &Registry, out: &Output, err: &Output) -> Exit
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let parsed = Args::try_parse_from(&argv);
    resolve(parsed, &argv, registry, out, err)
}

/// Act on a parse result for `argv`.
pub fn resolve(
    parsed: Result<Args, clap::Error>,
    argv: &[OsString],
    registry: &Registry,
    out: &Output,
    err: &Output,
) -> Exit {
    match parsed {
        Ok(args) => execute(&args, registry, out, err),
        Err(error) => parse_failure(&error, &operands(argv), registry, out, err),
    }
}

/// Report an argument parsing failure.
///
/// Help and version requests print to `out`. A lone operand the parser
/// refused (such as `-x`) is dispatched as a command name. Anything else is
/// a usage error.
pub fn parse_failure(
    error: &clap::Error,
    operands: &[String],
    registry: &Registry,
    out: &Output,
    err: &Output,
) -> Exit {
    match (error.kind(), operands) {
        (ErrorKind::DisplayHelp | ErrorKind::DisplayVersion, _) => {
            emit(out.write(format_args!("{}", error.render())));
            Exit::Success
        }
        (kind, [name]) if kind != ErrorKind::ArgumentConflict => {
            tracing::debug!(?kind, name = %name, "dispatching operand refused by the parser");
            dispatch_one(name, registry, err)
        }
        (kind, _) => {
            tracing::debug!(?kind, operands = operands.len(), "invalid arguments");
            emit(err.line(format_args!("{}", usage(registry))));
            Exit::Usage
        }
    }
}

/// Tokens after the program name that are not option flags.
pub fn operands(argv: &[OsString]) -> Vec<String> {
    argv.iter()
        .skip(1)
        .map(|token| token.to_string_lossy().into_owned())
        .filter(|token| !is_option(token))
        .collect()
}

fn is_option(token: &str) -> bool {
    match token {
        "--verbose" | "--list" | "-l" => true,
        _ => token
            .strip_prefix('-')
            .is_some_and(|flags| !flags.is_empty() && flags.chars().all(|c| c == 'v')),
    }
}

/// Carry out parsed arguments.
pub fn execute(args: &Args, registry: &Registry, out: &Output, err: &Output) -> Exit {
    match args.invocation() {
        Invocation::List => {
            for name in registry.distinct_names() {
                emit(out.line(format_args!("{name}")));
            }
            Exit::Success
        }
        Invocation::All => {
            emit(out.line(format_args!("dispatching all commands:")));

            let report = registry.invoke_all();
            for failure in report.failures() {
                if let Some(error) = failure.error() {
                    emit(err.line(format_args!("action '{}' failed: {error}", failure.name())));
                }
            }

            match report.into_result() {
                Ok(count) => {
                    tracing::info!(count, "all commands completed");
                    Exit::Success
                }
                Err(error) => fail(err, error.into()),
            }
        }
        Invocation::Single(name) => dispatch_one(&name, registry, err),
    }
}

/// Write `error` to `err` and pick its exit code.
pub fn fail(err: &Output, error: CallmapError) -> Exit {
    emit(err.line(format_args!("{error}")));
    Exit::from(&error)
}

fn dispatch_one(name: &str, registry: &Registry, err: &Output) -> Exit {
    match registry.dispatch(name) {
        Ok(()) => Exit::Success,
        Err(error) => fail(err, error.into()),
    }
}

/// `usage: callmap [foo|bar|index|all]`, built from the registered names.
pub fn usage(registry: &Registry) -> String {
    let choices: Vec<&str> = registry
        .distinct_names()
        .into_iter()
        .chain(std::iter::once(ALL))
        .collect();
    format!("usage: callmap [{}]", choices.join("|"))
}

fn emit(written: std::io::Result<()>) {
    if let Err(error) = written {
        tracing::warn!(%error, "failed to write output");
    }
}
