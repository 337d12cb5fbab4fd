use crate::cli::{EXIT_CONFIG_ERROR, EXIT_SCAN_ERROR, ScanArgs, print_config_error};
use crate::pipeline::run_pass;
use crate::report::render;
use anyhow::Context;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

/// Runs one pass and prints its report on stdout.
///
/// A pass cut short by a read error still prints what it gathered, then
/// reports the error and exits with [`EXIT_SCAN_ERROR`].
pub fn scan(args: &ScanArgs) -> anyhow::Result<ExitCode> {
    let plain = !io::stderr().is_terminal();
    let plan = match args.resolve().and_then(|cfg| cfg.validate()) {
        Ok(plan) => plan,
        Err(err) => {
            print_config_error(&err, plain);
            return Ok(ExitCode::from(EXIT_CONFIG_ERROR));
        }
    };

    let outcome = match run_pass(&plan) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("error: {err}");
            return Ok(ExitCode::from(EXIT_SCAN_ERROR));
        }
    };

    let report = render(&outcome, plan.format, plan.page).context("rendering report")?;
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(report.as_bytes())
        .and_then(|()| stdout.flush())
        .context("writing report")?;

    if outcome.dropped > 0 {
        tracing::warn!(
            dropped = outcome.dropped,
            "matching records beyond the bucket limit were not counted"
        );
    }

    match &outcome.interrupted {
        Some(err) => {
            eprintln!("error: {err}; the report above covers the input read so far");
            Ok(ExitCode::from(EXIT_SCAN_ERROR))
        }
        None => Ok(ExitCode::SUCCESS),
    }
}
