mod cli;
mod report;

use batch_rename::{Operation, fs, template};
use clap::Parser;
use cli::Args;
use eyre::{Result, WrapErr};
use regex::Regex;

/// Most filesystems cap a single file name at this many bytes.
const NAME_MAX: usize = 255;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_default_env()
    } else {
        let level = match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        tracing_subscriber::EnvFilter::new(level)
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let re = Regex::new(&args.regex)
        .wrap_err_with(|| format!("invalid input regex {:?}", args.regex))?;

    // Out-of-range placeholders render literally; point that out before touching files.
    for p in template::placeholders(&args.template) {
        if p.index >= re.captures_len() {
            tracing::warn!(
                index = p.index,
                groups = re.captures_len() - 1,
                "template references a group the regex does not have; it will be kept as text"
            );
        }
        for op in &p.ops {
            if let Operation::ZeroPad(width) = op
                && *width > NAME_MAX
            {
                tracing::warn!(op = %op, "pad width exceeds the usual file name limit of {NAME_MAX} bytes");
            }
        }
    }

    let plans = fs::plan(&args.path, &re, &args.template)?;
    let outcomes = fs::execute(&args.path, &plans, args.dry_run);

    if args.json {
        report::print_json(&outcomes)?;
    } else {
        report::print_lines(&outcomes, args.dry_run);
    }

    Ok(())
}
