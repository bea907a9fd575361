//! Expansion of requested component names
//!
//! Plain names pass through unchanged. Names containing glob metacharacters
//! are matched against every registry entry name:
//!
//! ```text
//! shadcn-ext add "date*" tree-view  =>  [datetime-picker, tree-view]
//! ```

use wax::{CandidatePath, Glob, Pattern};

use crate::error::{self, Result};
use crate::registry::RegistryIndex;

const GLOB_CHARS: &[char] = &['*', '?', '[', '{'];

/// Whether a requested name should be treated as a glob
pub fn is_pattern(name: &str) -> bool {
    name.contains(GLOB_CHARS)
}

/// Expand patterns into entry names, keeping request order and dropping duplicates
///
/// A pattern's matches are added in sorted order. Unknown plain names are kept
/// so the resolver reports them; a pattern matching nothing is an error.
pub fn expand_names<S: AsRef<str>>(requested: &[S], index: &RegistryIndex) -> Result<Vec<String>> {
    let mut names: Vec<String> = Vec::new();
    let all_names = index.all_names();

    for name in requested {
        let name = name.as_ref().trim();

        if !is_pattern(name) {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
            continue;
        }

        let glob = Glob::new(name).map_err(|_| error::registry::unknown_component(name))?;
        let matched: Vec<&String> = all_names
            .iter()
            .filter(|candidate| glob.is_match(CandidatePath::from(candidate.as_str())))
            .collect();

        if matched.is_empty() {
            return Err(error::registry::unknown_component(name));
        }

        tracing::debug!(pattern = name, matches = matched.len(), "expanded component pattern");
        for m in matched {
            if !names.contains(m) {
                names.push(m.clone());
            }
        }
    }

    Ok(names)
}
