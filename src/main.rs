use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::generate;
use openshift_modules::cli::{self, Cli, Commands};
use openshift_modules::executor::RealCommandExecutor;
use openshift_modules::result::ModuleResult;
use openshift_modules::{init_logging, run_butane, run_openshift_install, write_outcome};
use tracing::error;

/// Writes the outcome to stdout and maps it to the process exit status.
fn finish(outcome: Result<ModuleResult>) -> ExitCode {
    match write_outcome(&mut io::stdout().lock(), &outcome) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let args = match cli::try_parse_args() {
        Ok(args) => args,
        // --help and --version are not failures
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let message = e.to_string();
            return finish(Err(anyhow::anyhow!(message.trim_end().to_string())
                .context("invalid command line")));
        }
    };

    let outcome = match &args.command {
        Commands::Completions(opts) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opts.shell, &mut cmd, name, &mut io::stdout());
            return ExitCode::SUCCESS;
        }
        Commands::Butane(opts) => init_logging(opts.log_level)
            .context("failed to initialize logging")
            .and_then(|()| run_butane(opts, &RealCommandExecutor)),
        Commands::OpenshiftInstall(opts) => init_logging(opts.log_level)
            .context("failed to initialize logging")
            .and_then(|()| run_openshift_install(opts, &RealCommandExecutor)),
    };

    if let Err(e) = &outcome {
        error!("{:#}", e);
    }

    finish(outcome)
}
