//! Path arithmetic. Nothing in here touches the filesystem.

use std::path::{Component, Path, PathBuf};

/// Remove `.` segments and fold `..` segments into their parents.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            component => normalized.push(component),
        }
    }
    normalized
}

/// Resolve `path` against `base` into a normalized path.
///
/// An absolute `path` ignores `base`.
pub fn resolve(base: &Path, path: &Path) -> PathBuf {
    normalize(&base.join(path))
}

/// Absolute destination directory, relative paths being relative to `process_cwd`.
pub fn resolve_dest_dir(process_cwd: &Path, dest_dir: &Path) -> PathBuf {
    resolve(process_cwd, dest_dir)
}

/// Absolute base directory of a request. `None` means the process working directory.
pub fn resolve_cwd(process_cwd: &Path, cwd: Option<&Path>) -> PathBuf {
    match cwd {
        Some(cwd) => resolve(process_cwd, cwd),
        None => normalize(process_cwd),
    }
}

/// Absolute path the link should point to.
pub fn target_path(cwd: &Path, matched_path: &Path) -> PathBuf {
    resolve(cwd, matched_path)
}

/// Where the link for `matched_path` goes: the destination directory joined with the base name.
///
/// Directories in `matched_path` are dropped. Returns `None` if `matched_path` has no base name.
pub fn destination_path(dest_dir: &Path, matched_path: &Path) -> Option<PathBuf> {
    matched_path.file_name().map(|name| dest_dir.join(name))
}
