//! butane adapter implementation.
//!
//! Invocation shape:
//! `butane [--output PATH] [--pretty] [--raw] [--strict] [--version] SRC`

use std::ffi::OsString;

use serde::Deserialize;

use super::{Adapter, CommandArgsBuilder};
use crate::error::ModuleError;
use crate::serde_helpers::{lenient_bool, null_as_default};

/// Parameters accepted by the butane module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ButaneParams {
    /// Butane config to transpile
    #[serde(default, deserialize_with = "null_as_default")]
    pub src: String,
    /// Ignition output path; empty writes to stdout
    #[serde(default, deserialize_with = "null_as_default")]
    pub dest: String,
    /// Accepted for compatibility; has no effect on the command line
    #[serde(default, deserialize_with = "lenient_bool")]
    pub check: bool,
    /// Pretty-print the Ignition JSON
    #[serde(default, deserialize_with = "lenient_bool")]
    pub pretty: bool,
    /// Emit the raw config instead of wrapping it in an Ignition config
    #[serde(default, deserialize_with = "lenient_bool")]
    pub raw: bool,
    /// Fail on any warning
    #[serde(default, deserialize_with = "lenient_bool")]
    pub strict: bool,
    /// Print butane's version instead of transpiling
    #[serde(default, deserialize_with = "lenient_bool")]
    pub version: bool,
}

impl ButaneParams {
    /// Creates parameters for transpiling `src` with every option off.
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Default::default()
        }
    }
}

impl Adapter for ButaneParams {
    fn command_name(&self) -> &str {
        "butane"
    }

    fn validate(&self) -> Result<(), ModuleError> {
        if self.src.trim().is_empty() {
            return Err(ModuleError::Validation(
                "missing required arguments: src".to_string(),
            ));
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    fn build_args(&self) -> Option<Vec<OsString>> {
        if self.check {
            tracing::warn!("butane: `check` is accepted but has no effect on the invocation");
        }

        let mut builder = CommandArgsBuilder::new();
        builder.push_flag_value("--output", &self.dest);
        builder.push_flag_if("--pretty", self.pretty);
        builder.push_flag_if("--raw", self.raw);
        builder.push_flag_if("--strict", self.strict);
        builder.push_flag_if("--version", self.version);
        builder.push_arg(self.src.as_str());

        let cmd_args = builder.into_args();
        self.log_command_args(&cmd_args);
        Some(cmd_args)
    }
}
