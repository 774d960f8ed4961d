//! Argument definitions.

use clap::{ArgAction, Parser};

/// The token that runs every registered command.
pub const ALL: &str = "all";

/// callmap - run a registered command by name
#[derive(Parser, Debug)]
#[command(name = "callmap")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Command to run, or `all` to run every command in registration order
    #[arg(value_name = "COMMAND", required_unless_present = "list")]
    pub command: Option<String>,

    /// List registered commands and exit
    #[arg(short, long, conflicts_with = "command")]
    pub list: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// What the parsed arguments ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Run every registered command.
    All,
    /// Run the command registered under this name.
    Single(String),
    /// Print the registered names.
    List,
}

impl Args {
    /// Classify the parsed arguments.
    pub fn invocation(&self) -> Invocation {
        match self.command.as_deref() {
            _ if self.list => Invocation::List,
            Some(ALL) => Invocation::All,
            Some(name) => Invocation::Single(name.to_string()),
            None => Invocation::List,
        }
    }
}
