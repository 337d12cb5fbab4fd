use clap::{Parser, Subcommand};
use logtally_core::cli::{ScanArgs, check, scan};
use logtally_core::logging::{LogMode, default_log_mode, init_logging};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "logtally",
    version,
    about = "Count matching log records per time bucket"
)]
struct Cli {
    /// Diagnostics format on stderr (defaults to pretty on a terminal)
    #[arg(long, value_enum, global = true)]
    log_format: Option<LogMode>,

    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    scan: ScanArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan a log and print the bucketed report (default)
    Scan(ScanArgs),

    /// Validate settings and print the resolved window without scanning
    Check {
        #[command(flatten)]
        args: ScanArgs,

        /// No colours or symbols
        #[arg(long)]
        plain: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_mode));

    let result = match cli.command {
        Some(Command::Check { args, plain }) => Ok(check(&args, plain)),
        Some(Command::Scan(args)) => scan(&args),
        None => scan(&cli.scan),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
