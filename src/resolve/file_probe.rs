//! Filesystem probe: path string to `file://` handle.
//!
//! # Responsibilities
//! - Absolutize relative paths against the process working directory
//! - Normalize (`.`/`..`, symlinks per platform convention)
//! - Only produce a handle for a readable regular file
//!
//! # Design Decisions
//! - Pure probe: the only side effect is the read-permission check
//! - All failures collapse to "not resolved"; nothing is reported

use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use crate::resolve::ResourceHandle;

/// Probe `path` and return a `file://` handle if it names a readable
/// regular file. Probing the same path twice yields equal handles.
pub fn probe(path: &str) -> Option<ResourceHandle> {
    if path.is_empty() {
        return None;
    }
    let normalized = normalize(Path::new(path))?;
    if !is_readable_file(&normalized) {
        return None;
    }
    Url::from_file_path(&normalized).ok().map(ResourceHandle::Url)
}

/// Absolutize and canonicalize. Fails for nonexistent paths, which the
/// readability check would reject anyway.
fn normalize(path: &Path) -> Option<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().ok()?.join(path)
    };
    fs::canonicalize(absolute).ok()
}

fn is_readable_file(path: &Path) -> bool {
    // File::open also succeeds on directories on some platforms, so the
    // file-type check cannot be folded into the open.
    path.is_file() && fs::File::open(path).is_ok()
}
