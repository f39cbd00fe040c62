//! Shared command argument builder for adapters.

use std::ffi::OsString;

/// Builder for assembling command arguments in a fixed order.
#[derive(Debug, Default)]
pub struct CommandArgsBuilder {
    args: Vec<OsString>,
}

impl CommandArgsBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Append a positional argument.
    pub fn push_arg<S: Into<OsString>>(&mut self, arg: S) {
        self.args.push(arg.into());
    }

    /// Append a flag with no value.
    pub fn push_flag(&mut self, flag: &str) {
        self.args.push(flag.into());
    }

    /// Append a flag only when `enabled` is true.
    pub fn push_flag_if(&mut self, flag: &str, enabled: bool) {
        if enabled {
            self.push_flag(flag);
        }
    }

    /// Append `flag value` as two arguments if the value is not empty.
    pub fn push_flag_value(&mut self, flag: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        self.args.push(flag.into());
        self.args.push(value.into());
    }

    /// Return the collected arguments.
    pub fn into_args(self) -> Vec<OsString> {
        self.args
    }
}
