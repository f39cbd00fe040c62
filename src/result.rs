//! Result records returned to the calling orchestrator.
//!
//! Both records serialize to the JSON object Ansible expects on a module's
//! stdout.

use serde::{Serialize, Serializer};

use crate::executor::ExecutionResult;

/// Outcome of a module invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleResult {
    /// Whether the invocation is reported as having changed the target.
    pub changed: bool,
    /// Exit code of the wrapped binary; `None` when nothing was run.
    #[serde(serialize_with = "serialize_rc")]
    pub rc: Option<i32>,
    /// Captured standard output.
    #[serde(serialize_with = "serialize_bytes_lossy")]
    pub stdout: Vec<u8>,
    /// Captured standard error.
    #[serde(serialize_with = "serialize_bytes_lossy")]
    pub stderr: Vec<u8>,
}

impl ModuleResult {
    /// The zero-valued result: nothing ran, nothing changed.
    pub fn unchanged() -> Self {
        Self::default()
    }

    /// Builds the result for a command that ran to completion.
    ///
    /// `changed` is always true here, whatever the exit code.
    pub fn from_execution(execution: ExecutionResult) -> Self {
        Self {
            changed: true,
            rc: execution.code(),
            stdout: execution.stdout,
            stderr: execution.stderr,
        }
    }

    /// Returns the JSON document written to stdout.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Failure reported when a module could not do its job at all
/// (bad parameters, binary missing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureResult {
    pub failed: bool,
    pub changed: bool,
    pub msg: String,
}

impl FailureResult {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            failed: true,
            changed: false,
            msg: msg.into(),
        }
    }

    /// Builds a failure from an error chain, joining causes with `: `.
    pub fn from_error(err: &anyhow::Error) -> Self {
        Self::new(format!("{:#}", err))
    }

    /// Returns the JSON document written to stdout.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// `None` is rendered as `""`, the placeholder the host module always used.
fn serialize_rc<S>(rc: &Option<i32>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match rc {
        Some(code) => serializer.serialize_i32(*code),
        None => serializer.serialize_str(""),
    }
}

fn serialize_bytes_lossy<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&String::from_utf8_lossy(bytes))
}
