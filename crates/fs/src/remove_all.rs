use std::{fs, io, path::Path};

/// Check whether anything occupies `path`, without following symlinks.
///
/// A dangling symlink counts as an existing entry.
pub fn entry_exists(path: &Path) -> io::Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(error) => Err(error),
    }
}

/// Remove whatever occupies `path`.
///
/// * A real directory is removed together with everything beneath it.
/// * A file, a symlink, or a junction is unlinked. Links are never followed.
pub fn remove_all(path: &Path) -> io::Result<()> {
    let file_type = fs::symlink_metadata(path)?.file_type();
    tracing::trace!(target: "globlink::fs", ?path, ?file_type, "remove_all");

    if file_type.is_dir() {
        return fs::remove_dir_all(path);
    }

    #[cfg(windows)]
    {
        use std::os::windows::fs::FileTypeExt;
        if file_type.is_symlink_dir() {
            return fs::remove_dir(path);
        }
    }

    fs::remove_file(path)
}
