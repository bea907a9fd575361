//! Overwrite confirmation
//!
//! Planning asks a [`ConfirmOverwrite`] before replacing an existing file
//! under the prompt policy. The CLI wires in [`InquireConfirm`]; tests pass
//! closures.

use std::path::{Path, PathBuf};

use inquire::Confirm;

use crate::error::{self, Result};

/// Decides whether an existing file may be replaced
pub trait ConfirmOverwrite {
    fn confirm_overwrite(&mut self, path: &Path) -> Result<bool>;
}

impl<F> ConfirmOverwrite for F
where
    F: FnMut(&Path) -> Result<bool>,
{
    fn confirm_overwrite(&mut self, path: &Path) -> Result<bool> {
        self(path)
    }
}

/// Never replaces anything
#[derive(Debug, Default, Clone, Copy)]
pub struct DeclineAll;

impl ConfirmOverwrite for DeclineAll {
    fn confirm_overwrite(&mut self, _path: &Path) -> Result<bool> {
        Ok(false)
    }
}

/// Asks on the terminal, showing paths relative to the project root
#[derive(Debug, Clone)]
pub struct InquireConfirm {
    project_root: PathBuf,
}

impl InquireConfirm {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }
}

impl ConfirmOverwrite for InquireConfirm {
    fn confirm_overwrite(&mut self, path: &Path) -> Result<bool> {
        let shown = path.strip_prefix(&self.project_root).unwrap_or(path);

        Confirm::new(&format!("{} already exists. Overwrite?", shown.display()))
            .with_default(false)
            .with_help_message("Press 'y' to overwrite, or Enter to keep the existing file")
            .prompt()
            .map_err(|e| error::prompt::failed(format!("Failed to read confirmation: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_confirm() {
        let mut asked = Vec::new();
        let mut confirm = |path: &Path| -> Result<bool> {
            asked.push(path.to_path_buf());
            Ok(true)
        };

        assert!(confirm.confirm_overwrite(Path::new("components/ui/button.tsx")).unwrap());
        drop(confirm);
        assert_eq!(asked, vec![PathBuf::from("components/ui/button.tsx")]);
    }

    #[test]
    fn test_decline_all() {
        assert!(!DeclineAll.confirm_overwrite(Path::new("a.tsx")).unwrap());
    }
}
