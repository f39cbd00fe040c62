//! openshift-install adapter implementation.
//!
//! Invocation shape:
//! `openshift-install --log-level LEVEL [--dir PATH] {create|destroy} cluster`

use std::ffi::OsString;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use strum::{Display, EnumString, VariantNames};

use super::{Adapter, CommandArgsBuilder};
use crate::error::ModuleError;
use crate::serde_helpers::null_as_default;

/// Cluster lifecycle action selected by the `command` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub enum InstallCommand {
    CreateCluster,
    DestroyCluster,
}

impl InstallCommand {
    /// Returns the `openshift-install` subcommand tokens for this action.
    pub fn subcommand(&self) -> [&'static str; 2] {
        match self {
            Self::CreateCluster => ["create", "cluster"],
            Self::DestroyCluster => ["destroy", "cluster"],
        }
    }
}

/// Verbosity passed through to `openshift-install --log-level`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize, Display, VariantNames)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InstallLogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

fn default_dir() -> String {
    ".".to_string()
}

/// An explicit `null` selects the default directory, same as leaving `dir` out.
fn dir_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_else(default_dir))
}

/// Marks `command` as present whenever the key exists, even when its value
/// is `null`; only an absent key leaves it `None`.
fn present_command<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(Some(value.unwrap_or_default()))
}

/// Parameters accepted by the openshift_install module.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallParams {
    /// Raw action selector; see [`InstallParams::action`]. `None` only when
    /// the key is missing from the args file.
    #[serde(default, deserialize_with = "present_command")]
    pub command: Option<String>,
    /// Assets directory
    #[serde(default = "default_dir", deserialize_with = "dir_or_default")]
    pub dir: String,
    /// Installer log verbosity
    #[serde(default, deserialize_with = "null_as_default")]
    pub log_level: InstallLogLevel,
}

impl InstallParams {
    /// Creates parameters for `command` with the default directory and log level.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: Some(command.into()),
            dir: default_dir(),
            log_level: InstallLogLevel::default(),
        }
    }

    /// Parses the action selector.
    ///
    /// Unrecognized values, the empty string included, are not an error:
    /// they select the no-op path.
    pub fn action(&self) -> Option<InstallCommand> {
        self.command
            .as_deref()
            .and_then(|command| InstallCommand::from_str(command).ok())
    }
}

impl Adapter for InstallParams {
    fn command_name(&self) -> &str {
        "openshift-install"
    }

    fn validate(&self) -> Result<(), ModuleError> {
        if self.command.is_none() {
            return Err(ModuleError::Validation(
                "missing required arguments: command".to_string(),
            ));
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    fn build_args(&self) -> Option<Vec<OsString>> {
        let Some(action) = self.action() else {
            tracing::warn!(
                "openshift-install: unrecognized command {:?} (expected one of {}), nothing to do",
                self.command.as_deref().unwrap_or_default(),
                InstallCommand::VARIANTS.join(", ")
            );
            return None;
        };

        let mut builder = CommandArgsBuilder::new();
        builder.push_flag_value("--log-level", &self.log_level.to_string());
        builder.push_flag_value("--dir", &self.dir);
        for token in action.subcommand() {
            builder.push_arg(token);
        }

        let cmd_args = builder.into_args();
        self.log_command_args(&cmd_args);
        Some(cmd_args)
    }
}
