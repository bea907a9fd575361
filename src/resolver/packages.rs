//! npm package dependency merging
//!
//! When several entries in a closure need the same package, one range is
//! kept. The range admitting the highest *floor version* (the lowest version
//! the range accepts) wins:
//!
//! ```text
//! date-fns@^3.0.0 + date-fns@^3.6.0  =>  date-fns@^3.6.0
//! lucide-react    + lucide-react@^0.368.0  =>  lucide-react@^0.368.0
//! ```
//!
//! Wildcards (`*`, `latest`, empty) have floor `0.0.0`. A union (`^18 || ^19`)
//! has the lowest floor of its alternatives. Ranges `semver` cannot parse
//! (e.g. `1.0.0 - 2.0.0`) rank below every parseable range. Equal ranks keep
//! the lexicographically greater range string.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use semver::{BuildMetadata, Op, Version, VersionReq};

use crate::registry::PackageDependency;

/// Merge dependencies by package name, sorted by name
pub fn merge_dependencies<'a, I>(deps: I) -> Vec<PackageDependency>
where
    I: IntoIterator<Item = &'a PackageDependency>,
{
    let mut merged: BTreeMap<&str, &PackageDependency> = BTreeMap::new();

    for dep in deps {
        match merged.get(dep.name.as_str()) {
            Some(current) if compare_ranges(&current.version_range, &dep.version_range) != Ordering::Less => {}
            Some(current) => {
                tracing::debug!(
                    package = %dep.name,
                    from = %current.version_range,
                    to = %dep.version_range,
                    "merged package range"
                );
                merged.insert(&dep.name, dep);
            }
            None => {
                merged.insert(&dep.name, dep);
            }
        }
    }

    merged.into_values().cloned().collect()
}

/// Order two ranges of the same package; the greater one wins a merge
pub fn compare_ranges(a: &str, b: &str) -> Ordering {
    rank(a).cmp(&rank(b)).then_with(|| a.trim().cmp(b.trim()))
}

/// `(parseable, floor)`; unparseable ranges sort first
fn rank(range: &str) -> (bool, Version) {
    floor_version(range).map_or((false, Version::new(0, 0, 0)), |v| (true, v))
}

/// Lowest version admitted by an npm-style range
///
/// Returns `None` when the range cannot be parsed.
pub fn floor_version(range: &str) -> Option<Version> {
    let range = range.trim();
    if matches!(range, "" | "*" | "latest" | "x" | "X") {
        return Some(Version::new(0, 0, 0));
    }

    if range.contains("||") {
        return range
            .split("||")
            .map(floor_version)
            .collect::<Option<Vec<_>>>()?
            .into_iter()
            .min();
    }

    let req = parse_req(range)?;

    let floor = req
        .comparators
        .iter()
        .filter_map(|c| match c.op {
            Op::Less | Op::LessEq => None,
            _ => Some(Version {
                major: c.major,
                minor: c.minor.unwrap_or(0),
                patch: c.patch.unwrap_or(0),
                pre: c.pre.clone(),
                build: BuildMetadata::EMPTY,
            }),
        })
        .max()
        .unwrap_or_else(|| Version::new(0, 0, 0));

    Some(floor)
}

/// Parse a range, accepting npm's space-separated comparator sets
fn parse_req(range: &str) -> Option<VersionReq> {
    if let Ok(req) = VersionReq::parse(range) {
        return Some(req);
    }
    if range.contains(" - ") {
        return None;
    }
    let comma_separated = range.split_whitespace().collect::<Vec<_>>().join(", ");
    VersionReq::parse(&comma_separated).ok()
}
