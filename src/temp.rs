//! Base directory for test fixtures
//!
//! A relative `TMPDIR` would put fixtures inside the working tree, so fall
//! back to the platform temp location instead.

use std::env;
use std::path::PathBuf;

pub fn temp_dir_base() -> PathBuf {
    let dir = env::temp_dir();
    if dir.is_absolute() {
        return dir;
    }
    if cfg!(windows) {
        env::var_os("TEMP").map_or_else(|| PathBuf::from(r"C:\Windows\Temp"), PathBuf::from)
    } else {
        PathBuf::from("/tmp")
    }
}
