//! Dependency errors

use super::ShadcnError;

/// Creates a cyclic dependency error from the names on the cycle
///
/// The first name is repeated at the end so the chain reads `a -> b -> a`.
pub fn cyclic<S: AsRef<str>>(path: &[S]) -> ShadcnError {
    let mut chain: Vec<&str> = path.iter().map(AsRef::as_ref).collect();
    if let Some(first) = chain.first().copied() {
        chain.push(first);
    }
    ShadcnError::CyclicDependency {
        chain: chain.join(" -> "),
    }
}
