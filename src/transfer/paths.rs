//! Local and remote path resolution for manifest entries.
//!
//! The remote side always uses forward slashes, whatever the host OS. The
//! remote leaf name is taken from the resolved local path, not directly from
//! `fileName`, so it matches the file that was actually opened.

use crate::config::{ManifestEntry, RootPaths};
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub local: PathBuf,
    pub remote: String,
}

pub fn resolve(roots: &RootPaths, entry: &ManifestEntry) -> ResolvedPaths {
    let local = resolve_local(&roots.local, entry);
    let remote = resolve_remote(&roots.remote, entry, &local);
    ResolvedPaths { local, remote }
}

pub fn resolve_local(root_local: &str, entry: &ManifestEntry) -> PathBuf {
    Path::new(root_local).join(&entry.path).join(&entry.file_name)
}

pub fn resolve_remote(root_remote: &str, entry: &ManifestEntry, local: &Path) -> String {
    let directory = join_remote(root_remote, &entry.path);
    join_remote(&directory, &base_name(local))
}

/// Joins with POSIX semantics: an absolute `tail` replaces `base`.
pub fn join_remote(base: &str, tail: &str) -> String {
    if tail.starts_with('/') || base.is_empty() {
        tail.to_string()
    } else if base.ends_with('/') {
        format!("{base}{tail}")
    } else {
        format!("{base}/{tail}")
    }
}

/// Text after the last separator; empty when the path ends with one.
fn base_name(path: &Path) -> String {
    let text = path.to_string_lossy();
    match text.rfind(|c: char| c == '/' || c == MAIN_SEPARATOR) {
        Some(idx) => text[idx + 1..].to_string(),
        None => text.into_owned(),
    }
}
