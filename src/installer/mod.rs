//! Component installation
//!
//! This module handles:
//! - Mapping registry files to target paths in the project
//! - Planning what happens to each file under an overwrite policy
//! - Applying a plan in order, stopping at the first failure
//!
//! Planning never writes. Applying never prompts. Files written before a
//! failure are kept and listed in the report.

pub mod confirm;
pub mod file_ops;
pub mod plan;
pub mod report;


use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;
use crate::config::project::is_relative_inside;
use crate::error::{self, Result};
use crate::registry::{EntryKind, RegistryFile};
use crate::resolver::ResolutionResult;
use crate::ui::ProgressReporter;

pub use confirm::{ConfirmOverwrite, DeclineAll, InquireConfirm};
pub use plan::{InstallAction, InstallPlan, OverwritePolicy};
pub use report::InstallReport;

/// Installs resolved components into a project
pub struct Installer<'a> {
    project_root: &'a Path,
    config: &'a ProjectConfig,
    policy: OverwritePolicy,
    path_override: Option<PathBuf>,
    dry_run: bool,
}

impl<'a> Installer<'a> {
    pub fn new(project_root: &'a Path, config: &'a ProjectConfig) -> Self {
        Self {
            project_root,
            config,
            policy: OverwritePolicy::default(),
            path_override: None,
            dry_run: false,
        }
    }

    pub fn with_policy(mut self, policy: OverwritePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Install every file under `path` instead of the configured alias
    ///
    /// Absolute paths inside the project root are accepted and made relative.
    pub fn with_path_override(mut self, path: Option<PathBuf>) -> Result<Self> {
        self.path_override = match path {
            None => None,
            Some(path) => {
                let relative = if path.is_absolute() {
                    path.strip_prefix(self.project_root)
                        .map(Path::to_path_buf)
                        .map_err(|_| error::fs::invalid_target(path.display().to_string()))?
                } else {
                    path
                };
                if !is_relative_inside(&relative) {
                    return Err(error::fs::invalid_target(relative.display().to_string()));
                }
                Some(relative)
            }
        };
        Ok(self)
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Base directory, relative to the project root, for an entry kind
    pub fn base_dir(&self, kind: EntryKind) -> PathBuf {
        self.path_override
            .clone()
            .unwrap_or_else(|| self.config.base_dir(kind))
    }

    /// Absolute destination of a registry file
    ///
    /// # Errors
    ///
    /// `InvalidTargetPath` if the file's target is absolute, empty or
    /// climbs out of its base directory.
    pub fn target_path(&self, kind: EntryKind, file: &RegistryFile) -> Result<PathBuf> {
        if file.target.as_os_str().is_empty() || !is_relative_inside(&file.target) {
            return Err(error::fs::invalid_target(file.target.display().to_string()));
        }
        Ok(self
            .project_root
            .join(self.base_dir(kind))
            .join(&file.target))
    }

    /// Compute the action for every file of the resolution
    ///
    /// All targets are validated and all contents loaded before the first
    /// confirmation is asked.
    pub fn plan(
        &self,
        resolution: &ResolutionResult<'_>,
        confirm: &mut dyn ConfirmOverwrite,
    ) -> Result<Vec<InstallPlan>> {
        let mut pending = Vec::with_capacity(resolution.file_count());
        let mut seen = HashSet::new();

        for entry in &resolution.install_order {
            for file in &entry.files {
                let target_path = self.target_path(entry.kind, file)?;
                if seen.insert(target_path.clone()) {
                    let content = file.content.load()?;
                    pending.push((entry, target_path, Some(content)));
                } else {
                    tracing::warn!(
                        entry = %entry.name,
                        path = %target_path.display(),
                        "target already planned by an earlier component, skipping"
                    );
                    pending.push((entry, target_path, None));
                }
            }
        }

        let mut plans = Vec::with_capacity(pending.len());
        for (entry, target_path, content) in pending {
            let (action, content) = match content {
                Some(content) => (
                    plan::decide_action(&target_path, &content, self.policy, confirm)?,
                    content,
                ),
                None => (InstallAction::SkipDuplicate, String::new()),
            };
            tracing::debug!(
                entry = %entry.name,
                path = %target_path.display(),
                ?action,
                "planned file"
            );
            plans.push(InstallPlan {
                entry: entry.name.clone(),
                kind: entry.kind,
                target_path,
                action,
                content,
            });
        }

        Ok(plans)
    }

    /// Execute plans in order
    ///
    /// Stops at the first failed write. The failure is recorded in the
    /// report; earlier writes stay on disk.
    pub fn apply(
        &self,
        plans: &[InstallPlan],
        resolution: &ResolutionResult<'_>,
        progress: &mut dyn ProgressReporter,
    ) -> InstallReport {
        let mut report = InstallReport {
            package_dependencies_to_install: resolution.package_dependencies.clone(),
            dev_dependencies_to_install: resolution.dev_dependencies.clone(),
            dry_run: self.dry_run,
            ..InstallReport::default()
        };

        progress.init_file_progress(plans.len() as u64);
        let entry_total = resolution.install_order.len();
        let mut current_entry: Option<&str> = None;
        let mut entry_index = 0;

        for plan in plans {
            if current_entry != Some(plan.entry.as_str()) {
                entry_index += 1;
                current_entry = Some(plan.entry.as_str());
                progress.update_entry(&plan.entry, entry_index, entry_total);
            }

            if !plan.action.writes() {
                report.files_skipped.push(plan.target_path.clone());
                progress.update_file(&self.display_path(&plan.target_path));
                continue;
            }

            tracing::trace!(
                entry = %plan.entry,
                kind = %plan.kind,
                path = %plan.target_path.display(),
                dry_run = self.dry_run,
                "writing file"
            );
            if !self.dry_run {
                if let Err(err) = file_ops::write_atomic(&plan.target_path, &plan.content) {
                    tracing::debug!(path = %plan.target_path.display(), "write failed, stopping");
                    progress.abandon();
                    report.error = Some(err);
                    return report;
                }
            }

            report.files_written.push(plan.target_path.clone());
            progress.update_file(&self.display_path(&plan.target_path));
        }

        progress.finish_files();
        report
    }

    /// Plan and apply in one step
    pub fn install(
        &self,
        resolution: &ResolutionResult<'_>,
        confirm: &mut dyn ConfirmOverwrite,
        progress: &mut dyn ProgressReporter,
    ) -> Result<InstallReport> {
        let plans = self.plan(resolution, confirm)?;
        Ok(self.apply(&plans, resolution, progress))
    }

    fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(self.project_root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
