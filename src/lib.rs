pub mod adapters;
pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod module;
pub mod result;
pub mod serde_helpers;

pub use error::ModuleError;

use std::io::Write;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing_subscriber::{FmtSubscriber, filter::LevelFilter};

use crate::adapters::{Adapter, ButaneParams, InstallParams};
use crate::executor::CommandExecutor;
use crate::result::{FailureResult, ModuleResult};

/// Installs the global tracing subscriber.
///
/// Diagnostics go to stderr so stdout carries nothing but the JSON result.
pub fn init_logging(log_level: cli::LogLevel) -> Result<()> {
    let filter = match log_level {
        cli::LogLevel::Trace => LevelFilter::TRACE,
        cli::LogLevel::Debug => LevelFilter::DEBUG,
        cli::LogLevel::Info => LevelFilter::INFO,
        cli::LogLevel::Warn => LevelFilter::WARN,
        cli::LogLevel::Error => LevelFilter::ERROR,
    };

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_max_level(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .context("failed to set global default tracing subscriber")
}

/// Loads the args file named by `opts` and runs adapter `P` against it.
///
/// The `--check` flag and the `_ansible_check_mode` key both enable check mode.
pub fn run_module_command<P>(
    opts: &cli::ModuleArgs,
    executor: &dyn CommandExecutor,
) -> Result<ModuleResult>
where
    P: DeserializeOwned + Adapter,
{
    let mut invocation = config::load_invocation::<P>(&opts.args_file)
        .with_context(|| format!("invalid module arguments in {}", opts.args_file))?;
    invocation.check_mode |= opts.check;

    tracing::debug!(check_mode = invocation.check_mode, "loaded module arguments");

    module::run_invocation(&invocation, executor)
}

pub fn run_butane(opts: &cli::ModuleArgs, executor: &dyn CommandExecutor) -> Result<ModuleResult> {
    run_module_command::<ButaneParams>(opts, executor)
}

pub fn run_openshift_install(
    opts: &cli::ModuleArgs,
    executor: &dyn CommandExecutor,
) -> Result<ModuleResult> {
    run_module_command::<InstallParams>(opts, executor)
}

/// Writes a module outcome as a single JSON line.
///
/// Returns true when the outcome was a success, so the caller can pick the
/// process exit status.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &Result<ModuleResult>) -> Result<bool> {
    let (json, ok) = match outcome {
        Ok(result) => (result.to_json()?, true),
        Err(err) => (FailureResult::from_error(err).to_json()?, false),
    };
    writeln!(out, "{}", json).context("failed to write module result")?;
    Ok(ok)
}
