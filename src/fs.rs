use crate::template::render;
use eyre::{Result, WrapErr};
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// A file selected for renaming together with the name its template rendered to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub original: String,
    pub target: String,
}

/// What happened to one planned rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RenameStatus {
    /// The file was renamed on disk.
    Renamed,
    /// Dry run: the file would have been renamed.
    Simulated,
    /// The rendered name equals the original; nothing to do.
    Unchanged,
    /// `std::fs::rename` failed; the run continued with the next file.
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameOutcome {
    pub original: String,
    pub target: String,
    #[serde(flatten)]
    pub status: RenameStatus,
}

/// List the regular files directly inside `dir`, sorted by name.
/// Directories are skipped and names that are not valid UTF-8 are skipped with a warning.
pub fn list_files(dir: &Path) -> Result<Vec<String>> {
    let entries =
        fs::read_dir(dir).wrap_err_with(|| format!("failed to read directory {}", dir.display()))?;
    let mut names = Vec::new();
    for entry in entries {
        let e = entry?;
        if e.file_type()?.is_dir() {
            tracing::trace!(entry = ?e.file_name(), "skipping directory");
            continue;
        }
        match e.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => tracing::warn!(name = ?raw, "skipping file with non UTF-8 name"),
        }
    }
    names.sort();
    tracing::debug!(dir = %dir.display(), count = names.len(), "listed files");
    Ok(names)
}

/// Match `re` anywhere in `name` and collect its groups: index 0 is the whole match,
/// optional groups that did not participate come back as empty strings.
pub fn captured_groups(re: &Regex, name: &str) -> Option<Vec<String>> {
    re.captures(name).map(|caps| {
        caps.iter()
            .map(|m| m.map(|m| m.as_str().to_string()).unwrap_or_default())
            .collect()
    })
}

/// Render a target name for every file in `dir` that `re` matches.
/// Non-matching files are left out of the plan.
pub fn plan(dir: &Path, re: &Regex, template: &str) -> Result<Vec<RenamePlan>> {
    let mut plans = Vec::new();
    for name in list_files(dir)? {
        let Some(groups) = captured_groups(re, &name) else {
            tracing::trace!(file = %name, "no match");
            continue;
        };
        let target = render(template, &groups);
        tracing::debug!(file = %name, target = %target, "planned");
        plans.push(RenamePlan {
            original: name,
            target,
        });
    }
    Ok(plans)
}

/// Carry out `plans` inside `dir`. In dry-run mode nothing touches the disk.
///
/// Each plan yields exactly one outcome; a failed rename does not stop the rest.
pub fn execute(dir: &Path, plans: &[RenamePlan], dry_run: bool) -> Vec<RenameOutcome> {
    plans
        .iter()
        .map(|p| {
            let status = if p.original == p.target {
                RenameStatus::Unchanged
            } else if dry_run {
                RenameStatus::Simulated
            } else {
                match fs::rename(dir.join(&p.original), dir.join(&p.target)) {
                    Ok(()) => RenameStatus::Renamed,
                    Err(e) => {
                        tracing::warn!(file = %p.original, target = %p.target, error = %e, "rename failed");
                        RenameStatus::Failed {
                            reason: e.to_string(),
                        }
                    }
                }
            };
            RenameOutcome {
                original: p.original.clone(),
                target: p.target.clone(),
                status,
            }
        })
        .collect()
}
