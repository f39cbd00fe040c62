mod helpers;

use helpers::RecordingExecutor;
use openshift_modules::ModuleError;
use openshift_modules::adapters::{ButaneParams, InstallLogLevel, InstallParams};
use openshift_modules::executor::{CommandExecutor, CommandSpec, ExecutionResult};
use openshift_modules::module::run_module;
use openshift_modules::result::ModuleResult;

#[test]
fn butane_minimal_argv() {
    let executor = RecordingExecutor::new();
    let params = ButaneParams::new("config.bu");

    run_module(&params, false, &executor).expect("run_module should succeed");

    assert_eq!(executor.only_argv(), vec!["butane", "config.bu"]);
}

#[test]
fn butane_output_pretty_strict_argv() {
    let executor = RecordingExecutor::new();
    let params = ButaneParams {
        dest: "out.ign".to_string(),
        pretty: true,
        strict: true,
        ..ButaneParams::new("config.bu")
    };

    run_module(&params, false, &executor).expect("run_module should succeed");

    assert_eq!(
        executor.only_argv(),
        vec!["butane", "--output", "out.ign", "--pretty", "--strict", "config.bu"]
    );
}

#[test]
fn install_create_cluster_argv() {
    let executor = RecordingExecutor::new();
    let params = InstallParams {
        dir: "/assets".to_string(),
        log_level: InstallLogLevel::Debug,
        ..InstallParams::new("create_cluster")
    };

    run_module(&params, false, &executor).expect("run_module should succeed");

    assert_eq!(
        executor.only_argv(),
        vec!["openshift-install", "--log-level", "debug", "--dir", "/assets", "create", "cluster"]
    );
}

#[test]
fn argv_is_deterministic() {
    let params = ButaneParams {
        dest: "out.ign".to_string(),
        raw: true,
        version: true,
        ..ButaneParams::new("config.bu")
    };
    let first = RecordingExecutor::new();
    let second = RecordingExecutor::new();

    run_module(&params, false, &first).unwrap();
    run_module(&params, false, &second).unwrap();

    assert_eq!(first.only_argv(), second.only_argv());
}

#[test]
fn unrecognized_install_command_is_a_no_op() {
    let executor = RecordingExecutor::new();
    let params = InstallParams::new("upgrade_cluster");

    let result = run_module(&params, false, &executor).expect("no-op should succeed");

    assert_eq!(result, ModuleResult::unchanged());
    assert_eq!(executor.call_count(), 0);
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"changed": false, "rc": "", "stdout": "", "stderr": ""})
    );
}

#[test]
fn check_mode_runs_nothing() {
    let butane = RecordingExecutor::new();
    let result = run_module(&ButaneParams::new("config.bu"), true, &butane).unwrap();
    assert_eq!(result, ModuleResult::unchanged());
    assert_eq!(butane.call_count(), 0);

    let install = RecordingExecutor::new();
    let result = run_module(&InstallParams::new("destroy_cluster"), true, &install).unwrap();
    assert_eq!(result, ModuleResult::unchanged());
    assert_eq!(install.call_count(), 0);
}

#[test]
fn successful_run_reports_changed_and_output() {
    let executor = RecordingExecutor::with_output(0, b"{\"ignition\":{}}", b"");

    let result = run_module(&ButaneParams::new("config.bu"), false, &executor).unwrap();

    assert!(result.changed);
    assert_eq!(result.rc, Some(0));
    assert_eq!(result.stdout, b"{\"ignition\":{}}");
    assert!(result.stderr.is_empty());
}

#[test]
fn non_zero_exit_is_passed_through_and_still_changed() {
    let executor = RecordingExecutor::with_output(1, b"", b"Error: no such file");

    let result = run_module(&InstallParams::new("create_cluster"), false, &executor)
        .expect("non-zero exit must not be an error");

    assert!(result.changed);
    assert_eq!(result.rc, Some(1));
    assert_eq!(result.stderr, b"Error: no such file");
}

#[test]
fn version_flag_still_reports_changed() {
    let executor = RecordingExecutor::with_output(0, b"Butane 0.20.0\n", b"");
    let params = ButaneParams {
        version: true,
        ..ButaneParams::new("config.bu")
    };

    let result = run_module(&params, false, &executor).unwrap();

    assert!(result.changed);
}

struct MissingBinaryExecutor;

impl CommandExecutor for MissingBinaryExecutor {
    fn execute(&self, spec: &CommandSpec) -> anyhow::Result<ExecutionResult> {
        Err(ModuleError::CommandNotFound {
            command: spec.command.clone(),
        }
        .into())
    }
}

#[test]
fn launch_failure_is_an_error() {
    let err = run_module(&ButaneParams::new("config.bu"), false, &MissingBinaryExecutor)
        .expect_err("missing binary should fail");

    let typed = err
        .downcast_ref::<ModuleError>()
        .expect("error should carry a ModuleError");
    assert!(typed.is_launch_failure());
    assert!(format!("{:#}", err).contains("failed to execute butane"));
}
