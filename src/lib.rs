//! Batch file renaming driven by a regex and an output template.
//!
//! The [`template`] engine turns one match's captured groups into a new file name;
//! [`fs`] lists a directory, plans the renames and carries them out.

pub mod consts;
pub mod fs;
pub mod template;
pub mod transform;

pub use fs::{RenameOutcome, RenamePlan, RenameStatus};
pub use template::{Placeholder, render};
pub use transform::{Operation, apply_operation};
