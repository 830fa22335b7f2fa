use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "brn", version, about)]
pub struct Args {
    /// Directory whose files are renamed (not recursive)
    pub path: PathBuf,

    /// Regular expression matched against each file name
    pub regex: String,

    /// Output template, e.g. `holidays_:1,04i:.jpg`
    pub template: String,

    /// Only report what would be renamed
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print outcomes as JSON instead of status lines
    #[arg(long)]
    pub json: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
