//! The built-in command table.

use crate::{cli::ALL, output::Output};
use callmap::{Action, BuildError, Registry, RegistryBuilder};

/// Build the command table: `foo`, `bar`, and `index` as an alias of `bar`.
///
/// Every command writes to `out`. `all` is reserved for bulk invocation.
pub fn build_registry(out: &Output) -> Result<Registry, BuildError> {
    RegistryBuilder::new()
        .reserve(ALL)
        .register("foo", announce(out.clone(), "foo"))
        .register("bar", announce(out.clone(), "bar"))
        .alias("index", "bar")
        .build()
}

fn announce(out: Output, name: &'static str) -> impl Action {
    move || out.line(format_args!("in '{name}'"))
}
