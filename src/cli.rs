use std::ffi::OsString;
use std::path::Path;

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Program names that imply a subcommand when the binary is installed as
/// an Ansible module under `library/`.
const MODULE_ALIASES: &[(&str, &str)] = &[
    ("butane", "butane"),
    ("openshift_install", "openshift-install"),
];

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Transpile a Butane config to Ignition with `butane`
    Butane(ModuleArgs),

    /// Create or destroy a cluster with `openshift-install`
    OpenshiftInstall(ModuleArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct ModuleArgs {
    /// Path to the JSON or YAML file holding the module parameters
    pub args_file: Utf8PathBuf,

    /// Report what would happen without running anything
    #[arg(long)]
    pub check: bool,

    /// Set the log level
    #[arg(short, long, default_value = "warn")]
    pub log_level: LogLevel,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

/// Represents log levels for controlling the verbosity of diagnostics.
///
/// Diagnostics are written to stderr; stdout is reserved for the module
/// result. These levels map onto `tracing` levels and are unrelated to the
/// `log_level` parameter forwarded to `openshift-install`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Rewrites a multi-call invocation into the subcommand form.
///
/// `library/openshift_install /tmp/args.json` becomes
/// `openshift-modules openshift-install /tmp/args.json`. Any other program
/// name is passed through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let program = args
        .first()
        .and_then(|arg0| Path::new(arg0).file_stem())
        .and_then(|stem| stem.to_str())
        .map(str::to_owned);

    if let Some(program) = program
        && let Some((_, subcommand)) = MODULE_ALIASES.iter().find(|(alias, _)| *alias == program)
    {
        args[0] = env!("CARGO_PKG_NAME").into();
        args.insert(1, (*subcommand).into());
    }

    args
}

/// Parses the process arguments without exiting on error.
///
/// A module must always answer with a JSON document, so the caller decides
/// how to report a usage error instead of clap printing it and exiting.
pub fn try_parse_args() -> Result<Cli, clap::Error> {
    Cli::try_parse_from(normalize_args(std::env::args_os()))
}
