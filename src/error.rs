//! Domain-specific error types for openshift-modules.
//!
//! This module defines `ModuleError`, a `thiserror`-based enum that
//! provides typed error variants for the failure modes a module invocation
//! can hit before or while launching the wrapped binary. Public API
//! functions return `Result<T, ModuleError>` for programmatic error
//! handling, while trait boundaries continue to use `anyhow::Result`.
//!
//! A wrapped binary that runs and exits non-zero is *not* an error: its exit
//! code is reported verbatim in the module result.

use std::io;

/// Formats an IO error kind into a human-readable message.
///
/// Provides consistent, user-friendly messages for common IO error kinds
/// (e.g., "I/O error: not found") instead of the OS-level messages
/// (e.g., "No such file or directory (os error 2)"). For unrecognized
/// error kinds, falls back to including the OS-level error message
/// directly (e.g., "I/O error: connection refused").
pub(crate) fn io_error_kind_message(err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => "I/O error: not found".to_string(),
        io::ErrorKind::PermissionDenied => "I/O error: permission denied".to_string(),
        io::ErrorKind::IsADirectory => "I/O error: is a directory".to_string(),
        _ => format!("I/O error: {}", err),
    }
}

/// Domain-specific error type for openshift-modules.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ModuleError {
    /// A module parameter failed schema validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// The args file could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The wrapped binary could not be resolved on `PATH`.
    #[error("command not found in PATH: {command}")]
    CommandNotFound {
        /// The binary name that was looked up.
        command: String,
    },

    /// The wrapped binary was found but the process could not be started.
    #[error("failed to launch {command}: {message}")]
    Launch {
        /// The command line that failed to start.
        command: String,
        /// Human-readable description derived from the `source`.
        message: String,
        #[source]
        source: io::Error,
    },

    /// The process started but could not be driven to completion
    /// (wait failure, reader thread failure).
    #[error("command execution failed: {command}: {status}")]
    Execution {
        /// The command that was executed.
        command: String,
        /// Description of the internal failure.
        status: String,
    },

    /// An I/O operation failed with contextual information.
    #[error("{context}: {message}")]
    Io {
        /// A file path or operation description.
        context: String,
        message: String,
        #[source]
        source: io::Error,
    },
}

impl ModuleError {
    /// Creates an `Io` variant with the `message` field derived from `source`.
    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            message: io_error_kind_message(&source),
            source,
        }
    }

    /// Creates a `Launch` variant with the `message` field derived from `source`.
    pub(crate) fn launch(command: impl Into<String>, source: io::Error) -> Self {
        Self::Launch {
            command: command.into(),
            message: io_error_kind_message(&source),
            source,
        }
    }

    /// Returns true if the wrapped binary never started.
    ///
    /// Callers use this to tell a launch failure apart from a run that
    /// merely returned a non-zero exit code.
    pub fn is_launch_failure(&self) -> bool {
        matches!(self, Self::CommandNotFound { .. } | Self::Launch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = ModuleError::Validation("src is required".to_string());
        assert_eq!(err.to_string(), "validation error: src is required");
    }

    #[test]
    fn test_command_not_found_display() {
        let err = ModuleError::CommandNotFound {
            command: "butane".to_string(),
        };
        assert_eq!(err.to_string(), "command not found in PATH: butane");
        assert!(err.is_launch_failure());
    }

    #[test]
    fn test_launch_display() {
        let source = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = ModuleError::launch("openshift-install", source);
        assert_eq!(
            err.to_string(),
            "failed to launch openshift-install: I/O error: permission denied"
        );
        assert!(err.is_launch_failure());
    }

    #[test]
    fn test_execution_is_not_launch_failure() {
        let err = ModuleError::Execution {
            command: "butane".to_string(),
            status: "failed to wait for command: interrupted".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "command execution failed: butane: failed to wait for command: interrupted"
        );
        assert!(!err.is_launch_failure());
    }

    #[test]
    fn test_config_display() {
        let err = ModuleError::Config("args file must be a mapping".to_string());
        assert_eq!(err.to_string(), "configuration error: args file must be a mapping");
    }

    #[test]
    fn test_io_display() {
        let source = io::Error::new(io::ErrorKind::NotFound, "entity not found");
        let err = ModuleError::io("/tmp/args.json", source);
        assert_eq!(err.to_string(), "/tmp/args.json: I/O error: not found");
        match &err {
            ModuleError::Io { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_io_error_kind_message_other() {
        let err = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
        let msg = io_error_kind_message(&err);
        assert!(msg.starts_with("I/O error: "));
    }

    #[test]
    fn test_into_anyhow_error() {
        let err = ModuleError::Validation("test".to_string());
        let anyhow_err: anyhow::Error = err.into();
        let downcast = anyhow_err.downcast_ref::<ModuleError>();
        assert!(downcast.is_some());
        assert!(matches!(downcast.unwrap(), ModuleError::Validation(_)));
    }
}
