//! Process startup: logging is installed before the command table is built.
//!
//! Kept in its own test binary because it installs the global subscriber.

use callmap_cli::{Captured, Exit, Output, logging, start};

#[test]
fn test_registration_events_are_logged() {
    let logs = Captured::default();
    let sink = logs.clone();
    let (out, stdout) = Output::capture();
    let (err, stderr) = Output::capture();

    let exit = start(["callmap", "-vv", "index"], &out, &err, |verbosity| {
        logging::init_with_writer(verbosity, move || sink.clone())
    });

    assert_eq!(exit, Exit::Success);
    assert_eq!(stdout.lines(), vec!["in 'bar'"]);
    assert!(stderr.contents().is_empty());

    let logs = logs.contents();
    assert!(logs.contains("registered action"), "missing registration events:\n{logs}");
    assert!(logs.contains("registry sealed"), "missing seal event:\n{logs}");
    assert!(logs.contains("command table ready"), "missing startup event:\n{logs}");
}
