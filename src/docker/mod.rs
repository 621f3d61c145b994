//! External process invocation.
//!
//! All subprocess construction lives here: compose invocations go through
//! [`ComposeClient`], lifecycle shell scripts through [`run_script`]. Every
//! command is built as an argument vector with an explicit working
//! directory — nothing is interpolated into a shell command line.

mod compose;
mod process;

pub use compose::ComposeClient;
pub use process::{run_script, QUIET_STDERR_FILE, QUIET_STDOUT_FILE};
