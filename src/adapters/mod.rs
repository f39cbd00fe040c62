//! Command adapters.
//!
//! Each adapter owns a fixed parameter schema and maps it onto the command
//! line of one wrapped binary (`butane`, `openshift-install`).

use std::ffi::OsString;

mod args;
pub mod butane;
pub mod install;

pub use args::CommandArgsBuilder;
pub use butane::ButaneParams;
pub use install::{InstallCommand, InstallLogLevel, InstallParams};

/// Trait for command adapters.
///
/// Argument construction is a pure function of the parameters: the same
/// parameters always produce the same token sequence.
pub trait Adapter {
    /// Returns the binary to execute (e.g., "butane", "openshift-install").
    fn command_name(&self) -> &str;

    /// Builds the arguments passed to the binary, excluding the binary itself.
    ///
    /// Returns `None` when the parameters name no recognized action; the
    /// caller then reports an unchanged result without running anything.
    fn build_args(&self) -> Option<Vec<OsString>>;

    /// Checks constraints the parameter types cannot express on their own.
    fn validate(&self) -> Result<(), crate::error::ModuleError> {
        Ok(())
    }

    /// Logs the complete command line at debug level.
    fn log_command_args(&self, args: &[OsString]) {
        tracing::debug!(
            "{} args: {}",
            self.command_name(),
            crate::executor::format_command_args(args)
        );
    }
}
