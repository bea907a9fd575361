//! Project configuration (components.json) data structures
//!
//! Records the style and the directories components are copied into.
//! Alias paths are relative to the project root.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{self, Result};
use crate::registry::EntryKind;

/// Project configuration filename
pub const CONFIG_FILE: &str = "components.json";

/// Schema URL written into new configuration files
pub const SCHEMA_URL: &str = "https://ui.shadcn.com/schema.json";

/// Styles accepted by `init --style`
pub const STYLES: &[&str] = &["default", "new-york"];

const TAILWIND_CONFIG_CANDIDATES: &[&str] = &[
    "tailwind.config.ts",
    "tailwind.config.js",
    "tailwind.config.mjs",
    "tailwind.config.cjs",
];

/// Project configuration (components.json)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Component style (e.g. "default", "new-york")
    pub style: String,

    /// Whether the project uses TypeScript
    #[serde(default = "default_true")]
    pub tsx: bool,

    pub tailwind: TailwindConfig,

    pub aliases: Aliases,
}

/// Tailwind settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailwindConfig {
    /// Path to tailwind.config.*
    pub config: String,

    /// Path to the global stylesheet
    pub css: String,

    #[serde(default = "default_base_color")]
    pub base_color: String,

    #[serde(default = "default_true")]
    pub css_variables: bool,
}

/// Directories components are installed into
///
/// `ui`, `extension` and `hooks` default to locations derived from
/// `components` and `lib` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aliases {
    pub components: String,

    pub lib: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hooks: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_base_color() -> String {
    "slate".to_string()
}

impl ProjectConfig {
    /// Defaults for a project, following its layout
    ///
    /// A `src/` directory prefixes every alias; an existing tailwind config
    /// file is picked up.
    pub fn detect(root: &Path) -> Self {
        let prefix = if root.join("src").is_dir() { "src/" } else { "" };

        let tailwind_config = TAILWIND_CONFIG_CANDIDATES
            .iter()
            .find(|name| root.join(name).is_file())
            .map_or("tailwind.config.ts", |name| *name)
            .to_string();

        let css = if root.join(format!("{prefix}app")).is_dir() {
            format!("{prefix}app/globals.css")
        } else {
            format!("{prefix}styles/globals.css")
        };

        Self {
            schema: Some(SCHEMA_URL.to_string()),
            style: STYLES[0].to_string(),
            tsx: true,
            tailwind: TailwindConfig {
                config: tailwind_config,
                css,
                base_color: default_base_color(),
                css_variables: true,
            },
            aliases: Aliases {
                components: format!("{prefix}components"),
                lib: format!("{prefix}lib"),
                ui: None,
                extension: None,
                hooks: None,
            },
        }
    }

    /// Path of the configuration file in a project
    pub fn path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE)
    }

    pub fn exists(root: &Path) -> bool {
        Self::path(root).is_file()
    }

    /// Load and validate the configuration of a project
    pub fn load(root: &Path) -> Result<Self> {
        let path = Self::path(root);
        let content = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                error::config::missing(path.display().to_string())
            } else {
                error::fs::read_failed(&path, e)
            }
        })?;

        let config = Self::from_json(&content, &path.display().to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration into a project
    pub fn save(&self, root: &Path) -> Result<PathBuf> {
        self.validate()?;
        let path = Self::path(root);
        let json = self
            .to_json()
            .map_err(|e| error::fs::write_failed(&path, e))?;
        std::fs::write(&path, json).map_err(|e| error::fs::write_failed(&path, e))?;
        Ok(path)
    }

    /// Parse a configuration document; `source` names it in errors
    pub fn from_json(json: &str, source: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| error::config::parse_failed(source, e.to_string()))
    }

    /// Pretty JSON with a trailing newline
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    pub fn ui_dir(&self) -> String {
        self.aliases
            .ui
            .clone()
            .unwrap_or_else(|| format!("{}/ui", self.aliases.components))
    }

    pub fn extension_dir(&self) -> String {
        self.aliases
            .extension
            .clone()
            .unwrap_or_else(|| format!("{}/extension", self.aliases.components))
    }

    pub fn hooks_dir(&self) -> String {
        self.aliases.hooks.clone().unwrap_or_else(|| {
            let lib = Path::new(&self.aliases.lib);
            lib.parent()
                .map_or_else(|| PathBuf::from("hooks"), |p| p.join("hooks"))
                .to_string_lossy()
                .replace('\\', "/")
        })
    }

    /// Base directory (relative to the project root) for an entry kind
    pub fn base_dir(&self, kind: EntryKind) -> PathBuf {
        match kind {
            EntryKind::Ui => PathBuf::from(self.ui_dir()),
            EntryKind::Extension => PathBuf::from(self.extension_dir()),
            EntryKind::Lib => PathBuf::from(&self.aliases.lib),
            EntryKind::Hook => PathBuf::from(self.hooks_dir()),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.style.trim().is_empty() {
            return Err(error::config::invalid("style cannot be empty"));
        }

        let aliases = [
            ("components", self.aliases.components.clone()),
            ("lib", self.aliases.lib.clone()),
            ("ui", self.ui_dir()),
            ("extension", self.extension_dir()),
            ("hooks", self.hooks_dir()),
        ];

        for (name, value) in aliases {
            if value.trim().is_empty() {
                return Err(error::config::invalid(format!("alias '{name}' is empty")));
            }
            if !is_relative_inside(Path::new(&value)) {
                return Err(error::config::invalid(format!(
                    "alias '{name}' must be a relative path inside the project, got '{value}'"
                )));
            }
        }

        Ok(())
    }
}

/// Whether a path is relative and never climbs out of its base
pub fn is_relative_inside(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_project() -> TempDir {
        TempDir::new_in(crate::temp::temp_dir_base()).unwrap()
    }

    #[test]
    fn test_detect_plain_layout() {
        let temp = temp_project();
        let config = ProjectConfig::detect(temp.path());

        assert_eq!(config.aliases.components, "components");
        assert_eq!(config.aliases.lib, "lib");
        assert_eq!(config.tailwind.config, "tailwind.config.ts");
        assert_eq!(config.tailwind.css, "styles/globals.css");
        assert_eq!(config.base_dir(EntryKind::Ui), PathBuf::from("components/ui"));
        assert_eq!(
            config.base_dir(EntryKind::Extension),
            PathBuf::from("components/extension")
        );
        assert_eq!(config.base_dir(EntryKind::Lib), PathBuf::from("lib"));
        assert_eq!(config.base_dir(EntryKind::Hook), PathBuf::from("hooks"));
    }

    #[test]
    fn test_detect_src_layout() {
        let temp = temp_project();
        std::fs::create_dir_all(temp.path().join("src/app")).unwrap();
        std::fs::write(temp.path().join("tailwind.config.js"), "module.exports = {}").unwrap();

        let config = ProjectConfig::detect(temp.path());

        assert_eq!(config.aliases.components, "src/components");
        assert_eq!(config.tailwind.config, "tailwind.config.js");
        assert_eq!(config.tailwind.css, "src/app/globals.css");
        assert_eq!(config.base_dir(EntryKind::Hook), PathBuf::from("src/hooks"));
    }

    #[test]
    fn test_save_and_load() {
        let temp = temp_project();
        let mut config = ProjectConfig::detect(temp.path());
        config.style = "new-york".to_string();
        config.aliases.extension = Some("components/ext".to_string());

        let path = config.save(temp.path()).unwrap();
        assert!(path.ends_with(CONFIG_FILE));

        let loaded = ProjectConfig::load(temp.path()).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.base_dir(EntryKind::Extension),
            PathBuf::from("components/ext")
        );
    }

    #[test]
    fn test_load_missing() {
        let temp = temp_project();
        assert!(matches!(
            ProjectConfig::load(temp.path()),
            Err(crate::error::ShadcnError::ConfigMissing { .. })
        ));
    }

    #[test]
    fn test_load_invalid_json() {
        let temp = temp_project();
        std::fs::write(temp.path().join(CONFIG_FILE), "{ not json").unwrap();
        match ProjectConfig::load(temp.path()) {
            Err(crate::error::ShadcnError::ConfigParseFailed { path, .. }) => {
                assert!(path.ends_with(CONFIG_FILE), "unexpected path {path}");
            }
            other => panic!("expected parse failure, got {other:?}"),
        }
    }

    #[test]
    fn test_from_json_names_source() {
        let err = ProjectConfig::from_json("[]", "fixture.json").unwrap_err();
        assert!(err.to_string().contains("fixture.json"));
        assert!(!err.to_string().contains("unknown"));
    }

    #[test]
    fn test_save_reports_write_failure() {
        let temp = temp_project();
        std::fs::create_dir(temp.path().join(CONFIG_FILE)).unwrap();

        let config = ProjectConfig::detect(temp.path());
        assert!(matches!(
            config.save(temp.path()),
            Err(crate::error::ShadcnError::FileWriteFailed { .. })
        ));
    }

    #[test]
    fn test_shadcn_style_file_parses() {
        let json = r#"{
            "$schema": "https://ui.shadcn.com/schema.json",
            "style": "default",
            "rsc": true,
            "tailwind": { "config": "tailwind.config.ts", "css": "app/globals.css", "baseColor": "zinc" },
            "aliases": { "components": "components", "lib": "lib" }
        }"#;

        let config = ProjectConfig::from_json(json, CONFIG_FILE).unwrap();
        assert!(config.tsx);
        assert!(config.tailwind.css_variables);
        assert_eq!(config.tailwind.base_color, "zinc");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_escaping_alias() {
        let temp = temp_project();
        let mut config = ProjectConfig::detect(temp.path());
        config.aliases.ui = Some("../outside".to_string());
        assert!(config.validate().is_err());

        config.aliases.ui = Some("/abs/ui".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_style() {
        let temp = temp_project();
        let mut config = ProjectConfig::detect(temp.path());
        config.style = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
