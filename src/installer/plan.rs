//! Install plan types
//!
//! A plan is computed for every file before anything is written; applying
//! it is then a straight walk over the list.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::hash;
use crate::registry::EntryKind;

use super::confirm::ConfirmOverwrite;

/// What to do when a target file already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwritePolicy {
    /// Keep existing files
    #[default]
    Never,
    /// Replace existing files
    Always,
    /// Ask for each existing file
    Prompt,
}

/// Action for one planned file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallAction {
    /// Target does not exist yet
    Write,
    /// Target exists and is kept
    SkipExists,
    /// Target exists and is replaced
    Overwrite,
    /// Target already claimed by an earlier entry of the same install
    SkipDuplicate,
}

impl InstallAction {
    pub fn writes(self) -> bool {
        matches!(self, Self::Write | Self::Overwrite)
    }
}

/// One file to install
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    /// Registry entry the file belongs to
    pub entry: String,

    pub kind: EntryKind,

    /// Absolute destination path
    pub target_path: PathBuf,

    pub action: InstallAction,

    /// Resolved file content
    pub content: String,
}

/// Pick the action for a single target
///
/// Under the prompt policy a file that already holds `content` is skipped
/// without asking.
pub fn decide_action(
    target: &Path,
    content: &str,
    policy: OverwritePolicy,
    confirm: &mut dyn ConfirmOverwrite,
) -> Result<InstallAction> {
    if !target.exists() {
        return Ok(InstallAction::Write);
    }

    let action = match policy {
        OverwritePolicy::Never => InstallAction::SkipExists,
        OverwritePolicy::Always => InstallAction::Overwrite,
        OverwritePolicy::Prompt => {
            if hash::file_matches(target, content) {
                tracing::debug!(path = %target.display(), "existing file is identical");
                InstallAction::SkipExists
            } else if confirm.confirm_overwrite(target)? {
                InstallAction::Overwrite
            } else {
                InstallAction::SkipExists
            }
        }
    };

    Ok(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::installer::confirm::DeclineAll;
    use tempfile::TempDir;

    fn existing(content: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new_in(crate::temp::temp_dir_base()).unwrap();
        let path = temp.path().join("button.tsx");
        std::fs::write(&path, content).unwrap();
        (temp, path)
    }

    #[test]
    fn test_missing_target_is_written() {
        let temp = TempDir::new_in(crate::temp::temp_dir_base()).unwrap();
        let action = decide_action(
            &temp.path().join("new.tsx"),
            "x",
            OverwritePolicy::Never,
            &mut DeclineAll,
        )
        .unwrap();
        assert_eq!(action, InstallAction::Write);
    }

    #[test]
    fn test_policies_on_existing_target() {
        let (_temp, path) = existing("old");

        assert_eq!(
            decide_action(&path, "new", OverwritePolicy::Never, &mut DeclineAll).unwrap(),
            InstallAction::SkipExists
        );
        assert_eq!(
            decide_action(&path, "new", OverwritePolicy::Always, &mut DeclineAll).unwrap(),
            InstallAction::Overwrite
        );
        assert_eq!(
            decide_action(&path, "new", OverwritePolicy::Prompt, &mut DeclineAll).unwrap(),
            InstallAction::SkipExists
        );

        let mut yes = |_: &Path| -> Result<bool> { Ok(true) };
        assert_eq!(
            decide_action(&path, "new", OverwritePolicy::Prompt, &mut yes).unwrap(),
            InstallAction::Overwrite
        );
    }

    #[test]
    fn test_prompt_skips_identical_without_asking() {
        let (_temp, path) = existing("same");
        let mut asked = 0;
        let mut confirm = |_: &Path| -> Result<bool> {
            asked += 1;
            Ok(true)
        };

        let action = decide_action(&path, "same", OverwritePolicy::Prompt, &mut confirm).unwrap();
        assert_eq!(action, InstallAction::SkipExists);
        assert_eq!(asked, 0);
    }

    #[test]
    fn test_prompt_error_propagates() {
        let (_temp, path) = existing("old");
        let mut failing =
            |_: &Path| -> Result<bool> { Err(crate::error::prompt::failed("interrupted")) };

        assert!(decide_action(&path, "new", OverwritePolicy::Prompt, &mut failing).is_err());
    }

    #[test]
    fn test_action_writes() {
        assert!(InstallAction::Write.writes());
        assert!(InstallAction::Overwrite.writes());
        assert!(!InstallAction::SkipExists.writes());
    }
}
