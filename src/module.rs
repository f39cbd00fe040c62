//! Module invocation pipeline.
//!
//! validate → short-circuit on check mode → build arguments → execute →
//! assemble result. Validation happens while loading the invocation (see
//! [`crate::config`]); everything after it lives here.

use anyhow::{Context, Result};
use tracing::info;

use crate::adapters::Adapter;
use crate::config::Invocation;
use crate::executor::{CommandExecutor, CommandSpec};
use crate::result::ModuleResult;

/// Runs one adapter invocation.
///
/// In check mode the builder is never consulted and the executor is never
/// called. A recognized action always reports `changed = true`, even when
/// the wrapped binary exits non-zero.
pub fn run_module<A>(
    adapter: &A,
    check_mode: bool,
    executor: &dyn CommandExecutor,
) -> Result<ModuleResult>
where
    A: Adapter + ?Sized,
{
    let command_name = adapter.command_name();

    if check_mode {
        info!("check mode: skipping {}", command_name);
        return Ok(ModuleResult::unchanged());
    }

    let Some(args) = adapter.build_args() else {
        return Ok(ModuleResult::unchanged());
    };

    let spec = CommandSpec::new(command_name, args);
    let execution = executor
        .execute(&spec)
        .with_context(|| format!("failed to execute {}", command_name))?;

    if !execution.success() {
        info!("{} exited with {}", command_name, execution.status);
    }

    Ok(ModuleResult::from_execution(execution))
}

/// Runs a loaded invocation.
pub fn run_invocation<A>(
    invocation: &Invocation<A>,
    executor: &dyn CommandExecutor,
) -> Result<ModuleResult>
where
    A: Adapter,
{
    run_module(&invocation.params, invocation.check_mode, executor)
}
