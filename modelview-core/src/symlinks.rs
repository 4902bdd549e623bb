//! src/symlinks.rs
//! ============================================================================
//! # Symlink Command Generator
//!
//! Maps the currently visible record subset to shell commands that link each
//! model file into the working directory. Pure transformation: the caller
//! joins the commands and hands them to the clipboard sink.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::store::record::ModelRecord;

/// Subdirectory of the data root where model files live.
const MODELS_SUBDIR: &str = "models";

/// Generation failures, both surfaced as status warnings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SymlinkError {
    /// The visible set is empty; nothing to link.
    #[error("No models to generate symlinks for")]
    NoTargets,

    /// Every visible record has a blank storage path.
    #[error("No valid model paths found")]
    NoValidPaths,
}

/// Emit one `ln -s` command per record with a usable path, in input order.
///
/// Records with blank or whitespace-only paths are skipped. `NoTargets` and
/// `NoValidPaths` are distinct so the status line can say why nothing was
/// produced.
pub fn generate(records: &[ModelRecord], base_path: &Path) -> Result<Vec<String>, SymlinkError> {
    if records.is_empty() {
        return Err(SymlinkError::NoTargets);
    }

    let commands: Vec<String> = records
        .iter()
        .filter(|r| !r.has_blank_path())
        .map(|r| {
            let full_path: PathBuf = base_path.join(MODELS_SUBDIR).join(&r.storage_path);
            format!("ln -s \"{}\" .", full_path.display())
        })
        .collect();

    if commands.is_empty() {
        return Err(SymlinkError::NoValidPaths);
    }

    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, path: Option<&str>) -> ModelRecord {
        ModelRecord::from_raw(
            Some(name.to_string()),
            None,
            None,
            None,
            path.map(str::to_string),
        )
    }

    #[test]
    fn commands_preserve_order_and_skip_blank_paths() {
        let records = vec![
            rec("a", Some("x/a.pt")),
            rec("b", None),
            rec("c", Some("y/c.pt")),
        ];

        let commands = generate(&records, Path::new("/data")).unwrap();
        assert_eq!(
            commands,
            [
                "ln -s \"/data/models/x/a.pt\" .",
                "ln -s \"/data/models/y/c.pt\" .",
            ]
        );
    }

    #[test]
    fn empty_input_is_no_targets() {
        assert_eq!(generate(&[], Path::new("/data")), Err(SymlinkError::NoTargets));
    }

    #[test]
    fn all_blank_paths_is_a_distinct_failure() {
        let records = vec![rec("a", None), rec("b", Some("   "))];
        assert_eq!(
            generate(&records, Path::new("/data")),
            Err(SymlinkError::NoValidPaths)
        );
    }
}
