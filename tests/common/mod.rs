//! Common test utilities for shadcn-ext integration tests

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Minimal components.json for a project without `src/`
pub const DEFAULT_CONFIG: &str = r#"{
  "$schema": "https://ui.shadcn.com/schema.json",
  "style": "default",
  "tsx": true,
  "tailwind": {
    "config": "tailwind.config.ts",
    "css": "styles/globals.css",
    "baseColor": "slate",
    "cssVariables": true
  },
  "aliases": {
    "components": "components",
    "lib": "lib"
  }
}
"#;

/// Small registry exercising dependencies, packages and file sources
///
/// `alpha` has its content in `ui/alpha.tsx` next to the index; see
/// [`TestProject::write_registry`].
pub const TEST_REGISTRY: &str = r#"{
  "name": "test-registry",
  "items": [
    {
      "name": "utils",
      "type": "lib",
      "dependencies": ["clsx@^2.0.0"],
      "files": [{ "path": "lib/utils.ts", "content": "export const cn = () => \"\";\n" }]
    },
    {
      "name": "alpha",
      "type": "ui",
      "description": "Alpha primitive",
      "registryDependencies": ["utils"],
      "dependencies": ["clsx@^2.1.0"],
      "files": [{ "path": "ui/alpha.tsx" }]
    },
    {
      "name": "beta",
      "type": "extension",
      "description": "Beta extension",
      "registryDependencies": ["alpha"],
      "dependencies": ["@radix-ui/react-popover@^1.0.7"],
      "devDependencies": ["@types/node"],
      "files": [
        { "path": "extension/beta.tsx", "content": "export function Beta() {}\n" },
        { "path": "extension/beta/parts.tsx", "target": "beta/parts.tsx", "content": "export {}\n" }
      ]
    },
    {
      "name": "use-gamma",
      "type": "hook",
      "files": [{ "path": "hooks/use-gamma.ts", "content": "export function useGamma() {}\n" }]
    }
  ]
}
"#;

/// Content of `alpha`'s file source
pub const ALPHA_SOURCE: &str = "export function Alpha() {}\n";

/// A temporary consumer project for integration tests
pub struct TestProject {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

impl TestProject {
    /// Create a new empty project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = dunce::canonicalize(temp.path()).expect("Failed to canonicalize temp directory");
        Self { temp, path }
    }

    /// Create a project with a default components.json
    pub fn with_config() -> Self {
        let project = Self::new();
        project.write_file("components.json", DEFAULT_CONFIG);
        project
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write [`TEST_REGISTRY`] and its file sources under `registry/`
    ///
    /// Returns the absolute path of the index.
    pub fn write_registry(&self) -> PathBuf {
        self.write_file("registry/index.json", TEST_REGISTRY);
        self.write_file("registry/ui/alpha.tsx", ALPHA_SOURCE);
        self.path.join("registry/index.json")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}
