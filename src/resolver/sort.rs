//! Topological ordering of registry entries using depth-first search (DFS)
//!
//! Uses DFS with three-color marking:
//!
//! 1. **WHITE** (unvisited): entry hasn't been processed
//! 2. **GRAY** (on the active path): entry is in the current recursion stack
//! 3. **BLACK** (emitted): entry and all of its dependencies are in the result
//!
//! Entries are emitted in post-order, so every dependency lands before its
//! dependents. Reaching a GRAY entry again means the graph has a cycle; the
//! active path from that entry is reported.
//!
//! ```text
//! multi-select -> [badge, command, popover]
//! command      -> [dialog]
//!
//! Result: [badge, dialog, command, popover, multi-select]
//! ```

use std::collections::HashSet;

use crate::error::{self, Result};
use crate::registry::{RegistryEntry, RegistryIndex};

/// State shared across the DFS
struct TopoSortContext<'a> {
    index: &'a RegistryIndex,
    /// Emitted entries (BLACK)
    emitted: HashSet<&'a str>,
    /// Active DFS path (GRAY), in visiting order
    path: Vec<&'a str>,
    /// Result in dependency order
    order: Vec<&'a RegistryEntry>,
}

/// Order the closure of `roots` so dependencies precede dependents
///
/// Roots are visited in the given order and dependencies in declaration
/// order; an entry reached twice is emitted once, at its first visit.
pub fn topological_sort<'a, S: AsRef<str>>(
    index: &'a RegistryIndex,
    roots: &[S],
) -> Result<Vec<&'a RegistryEntry>> {
    let mut ctx = TopoSortContext {
        index,
        emitted: HashSet::new(),
        path: Vec::new(),
        order: Vec::new(),
    };

    for root in roots {
        let entry = index.lookup(root.as_ref())?;
        visit(&mut ctx, entry)?;
    }

    Ok(ctx.order)
}

fn visit<'a>(ctx: &mut TopoSortContext<'a>, entry: &'a RegistryEntry) -> Result<()> {
    let name = entry.name.as_str();

    if ctx.emitted.contains(name) {
        return Ok(());
    }

    if let Some(start) = ctx.path.iter().position(|n| *n == name) {
        return Err(error::deps::cyclic(&ctx.path[start..]));
    }

    ctx.path.push(name);

    for dep_name in &entry.registry_dependencies {
        let Some(dep) = ctx.index.get(dep_name) else {
            tracing::debug!(entry = name, dependency = %dep_name, "dangling registry dependency");
            return Err(error::registry::unknown_component(dep_name.clone()));
        };
        visit(ctx, dep)?;
    }

    ctx.path.pop();
    ctx.emitted.insert(name);
    ctx.order.push(entry);
    tracing::trace!(entry = name, position = ctx.order.len(), "emitted");

    Ok(())
}
