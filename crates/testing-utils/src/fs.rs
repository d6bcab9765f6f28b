use std::{io, path::Path};
use walkdir::WalkDir;

pub fn get_filenames_in_folder(path: &Path) -> Vec<String> {
    let mut files = std::fs::read_dir(path)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect::<Vec<_>>();

    files.sort();
    files
}

fn normalized_suffix(path: &Path, prefix: &Path) -> String {
    path.strip_prefix(prefix)
        .expect("strip prefix from path")
        .to_str()
        .expect("convert suffix to UTF-8")
        .replace('\\', "/")
}

/// List every entry under `root` without following links, sorted.
pub fn get_all_entries(root: &Path) -> Vec<String> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| entry.expect("access entry"))
        .map(|entry| normalized_suffix(entry.path(), root))
        .filter(|suffix| !suffix.is_empty())
        .collect()
}

// Helper function to check if a path is a symlink or junction
pub fn is_symlink_or_junction(path: &Path) -> io::Result<bool> {
    #[cfg(windows)]
    return junction::exists(path).map(|is_junction| is_junction || path.is_symlink());

    #[cfg(not(windows))]
    return Ok(path.is_symlink());
}

/// Assert that each of `names` inside `dir` is a link that resolves to an existing entry.
pub fn assert_links_exist(dir: &Path, names: &[&str]) {
    for name in names {
        let path = dir.join(name);
        assert!(path.exists(), "{path:?} should exist");
        assert!(is_symlink_or_junction(&path).unwrap(), "{path:?} should be a link");
    }
}

/// Assert that nothing occupies any of `names` inside `dir`.
pub fn assert_entries_missing(dir: &Path, names: &[&str]) {
    for name in names {
        let path = dir.join(name);
        assert!(path.symlink_metadata().is_err(), "{path:?} should not exist");
    }
}
