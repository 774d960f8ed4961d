//! Process exit codes.

use callmap::{CallmapError, DispatchError};
use std::process::ExitCode;

/// How a run ended, and the exit code reported for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The command (or every command) ran. Exit code 0.
    Success,
    /// Wrong number of arguments. Exit code 1.
    Usage,
    /// No command is registered under the given name. Exit code 2.
    UnknownCommand,
    /// A command failed, or the command table could not be built. Exit code 3.
    Failure,
}

impl Exit {
    /// The numeric process exit code.
    pub const fn code(self) -> u8 {
        match self {
            Exit::Success => 0,
            Exit::Usage => 1,
            Exit::UnknownCommand => 2,
            Exit::Failure => 3,
        }
    }
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit.code())
    }
}

impl From<&DispatchError> for Exit {
    fn from(err: &DispatchError) -> Self {
        match err {
            DispatchError::NotFound(_) => Exit::UnknownCommand,
            DispatchError::ActionFailed { .. } | DispatchError::Incomplete { .. } => Exit::Failure,
        }
    }
}

impl From<&CallmapError> for Exit {
    fn from(err: &CallmapError) -> Self {
        match err {
            CallmapError::Dispatch(dispatch) => Exit::from(dispatch),
            CallmapError::Build(_) | CallmapError::Custom(_) => Exit::Failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Exit;
    use callmap::{BuildError, CallmapError, DispatchError};

    #[test]
    fn test_codes() {
        assert_eq!(Exit::Success.code(), 0);
        assert_eq!(Exit::Usage.code(), 1);
        assert_eq!(Exit::UnknownCommand.code(), 2);
        assert_eq!(Exit::Failure.code(), 3);
    }

    #[test]
    fn test_dispatch_errors_map_to_exits() {
        let not_found = DispatchError::NotFound("baz".to_string());
        assert_eq!(Exit::from(&not_found), Exit::UnknownCommand);

        let failed = DispatchError::ActionFailed {
            name: "foo".to_string(),
            source: "boom".into(),
        };
        assert_eq!(Exit::from(&failed), Exit::Failure);
    }

    #[test]
    fn test_top_level_errors_map_to_exits() {
        let not_found = CallmapError::from(DispatchError::NotFound("-x".to_string()));
        assert_eq!(Exit::from(&not_found), Exit::UnknownCommand);

        let build = CallmapError::from(BuildError::ReservedName("all".to_string()));
        assert_eq!(Exit::from(&build), Exit::Failure);
        assert_eq!(build.to_string(), "build error: name is reserved: all");
    }
}
