use std::ffi::OsString;
use std::io::Write;
use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;
use std::sync::{Arc, Mutex};

use openshift_modules::executor::{CommandExecutor, CommandSpec, ExecutionResult};
use tempfile::NamedTempFile;

pub type CommandCalls = Arc<Mutex<Vec<(String, Vec<OsString>)>>>;

/// Executor double that records every call and returns a canned result.
#[allow(dead_code)]
pub struct RecordingExecutor {
    pub calls: CommandCalls,
    pub exit_code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

#[allow(dead_code)]
impl RecordingExecutor {
    pub fn new() -> Self {
        Self::with_output(0, b"", b"")
    }

    pub fn with_output(exit_code: i32, stdout: &[u8], stderr: &[u8]) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            exit_code,
            stdout: stdout.to_vec(),
            stderr: stderr.to_vec(),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns the argument vector of the single recorded call, command first.
    pub fn only_argv(&self) -> Vec<String> {
        let calls = self.calls.lock().unwrap();
        assert_eq!(calls.len(), 1, "expected exactly one call, got {:?}", calls);
        let (command, args) = &calls[0];
        std::iter::once(command.clone())
            .chain(args.iter().map(|a| a.to_string_lossy().into_owned()))
            .collect()
    }
}

impl CommandExecutor for RecordingExecutor {
    fn execute(&self, spec: &CommandSpec) -> anyhow::Result<ExecutionResult> {
        self.calls
            .lock()
            .unwrap()
            .push((spec.command.clone(), spec.args.clone()));
        Ok(ExecutionResult {
            status: ExitStatus::from_raw(self.exit_code << 8),
            stdout: self.stdout.clone(),
            stderr: self.stderr.clone(),
        })
    }
}

/// Writes module arguments to a temporary file that lives as long as the handle.
#[allow(dead_code)]
pub fn write_args_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("failed to write args file");
    file
}
