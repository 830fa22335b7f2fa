use batch_rename::{RenameOutcome, RenameStatus};
use eyre::Result;

/// One `[>]`/`[=]`/`[!]` line for an outcome.
pub fn status_line(o: &RenameOutcome) -> String {
    match &o.status {
        RenameStatus::Renamed | RenameStatus::Simulated => {
            format!("[>] {} -> {}", o.original, o.target)
        }
        RenameStatus::Unchanged => format!("[=] {}", o.original),
        RenameStatus::Failed { reason } => {
            format!("[!] {} -> {}: {reason}", o.original, o.target)
        }
    }
}

/// Print status lines followed by the matched-file summary.
pub fn print_lines(outcomes: &[RenameOutcome], dry_run: bool) {
    if dry_run {
        println!("--- dry run ---");
    }
    for o in outcomes {
        println!("{}", status_line(o));
    }
    match outcomes.len() {
        0 => println!("no files matched the pattern"),
        1 => println!("1 file matched"),
        n => println!("{n} files matched"),
    }
}

/// Print all outcomes as a pretty JSON array.
pub fn print_json(outcomes: &[RenameOutcome]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(outcomes)?);
    Ok(())
}
