//! callmap - run a registered command by name

use callmap_cli::{Output, app, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let out = Output::stdout();
    let err = Output::stderr();
    app::start(std::env::args_os(), &out, &err, logging::init).into()
}
