use crate::cli::{EXIT_CONFIG_ERROR, ScanArgs};
use crate::conf::{ConfigError, RunPlan};
use crate::time::Timestamp;
use owo_colors::OwoColorize;
use std::process::ExitCode;

/// Resolves and validates the configuration, prints the plan, and exits
/// without reading the log.
pub fn check(args: &ScanArgs, plain: bool) -> ExitCode {
    match args.resolve().and_then(|cfg| cfg.validate()) {
        Ok(plan) => {
            print_plan(&plan, plain);
            ExitCode::SUCCESS
        }
        Err(err) => {
            print_config_error(&err, plain);
            ExitCode::from(EXIT_CONFIG_ERROR)
        }
    }
}

fn print_plan(plan: &RunPlan, plain: bool) {
    let window = &plan.window;
    let tz = window.tz_offset();
    let bound = |ts: Option<Timestamp>| match ts {
        Some(ts) => tz.format_local(tz.to_local(ts)),
        None => "open".to_string(),
    };
    let buckets = match window.bucket_count() {
        Some(n) => n.to_string(),
        None => "grows with input".to_string(),
    };

    let lines = [
        format!("source       {}", plan.source.display()),
        format!("pattern      {:?}", plan.pattern.as_str()),
        format!("start        {}", bound(window.start())),
        format!("stop         {}", bound(window.stop())),
        format!("until        {}", bound(window.until())),
        format!("tz offset    {tz}"),
        format!("interval     {}s", window.bucket_width()),
        format!("buckets      {buckets}"),
        format!("buffer       {} bytes", plan.buffer_size),
    ];

    if plain {
        println!("config ok");
        for line in lines {
            println!("{line}");
        }
    } else {
        println!("{} Config loaded successfully", "✔".green());
        for line in lines {
            println!("{} {line}", "✔".green());
        }
    }
}

pub fn print_config_error(err: &ConfigError, plain: bool) {
    if plain {
        eprintln!("error: {err}");
    } else {
        eprintln!("{} {err}", "error:".red().bold());
    }
    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        if plain {
            eprintln!("{hint}");
        } else {
            eprintln!("{}", hint.cyan());
        }
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        //---------------------------------------------------------------------
        // Missing / malformed values
        //---------------------------------------------------------------------
        ConfigError::MissingSource => Some(
            "Give the log file as the last argument, or `-` to read stdin.\n\
             \n\
             Example:\n\
             \n\
             logtally -p ERROR /var/log/app.log.gz",
        ),

        ConfigError::InvalidTime { .. } => Some(
            "Times use the log timestamp layout, a bare date, or @<epoch seconds>.\n\
             \n\
             Examples:\n\
             \n\
             2021-06-01 13:00:00\n\
             2021-06-01\n\
             @1622552400",
        ),

        ConfigError::InvalidTzOffset { .. } => Some(
            "Offsets are written Z, +HH, +HHMM or +HH:MM (or with a minus sign),\n\
             at most 18 hours either side of UTC.",
        ),

        ConfigError::InvalidBufferSize { .. } => Some(
            "Buffer sizes are bytes, optionally with a K suffix, and at least 64.\n\
             \n\
             Example:\n\
             \n\
             buffer_size = \"64K\"",
        ),

        ConfigError::InvalidInterval { .. } | ConfigError::NonPositiveBucketWidth { .. } => Some(
            "Intervals are hourly, daily, or a positive count with a unit.\n\
             \n\
             Examples: 30s, 15m, 6h, 2d",
        ),

        ConfigError::Pattern(_) => Some(
            "Patterns support ^ (line start), $ (line end), . (any byte) and\n\
             x* (zero or more of the preceding byte or `.`). Everything else is literal.",
        ),

        //---------------------------------------------------------------------
        // Window shape
        //---------------------------------------------------------------------
        ConfigError::StopBeforeStart { .. } | ConfigError::UntilNotAfterStart { .. } => Some(
            "The window must move forward: start <= stop and start < until.",
        ),

        ConfigError::WindowTooLarge { .. } => Some(
            "Narrow the window or use a wider interval, e.g. `-i daily`.",
        ),

        //---------------------------------------------------------------------
        // Everything else: no hint
        //---------------------------------------------------------------------
        _ => None,
    }
}
