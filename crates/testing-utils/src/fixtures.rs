use std::{
    fs,
    path::{Path, PathBuf},
};
use tempfile::{tempdir, TempDir};
use text_block_macros::text_block_fnl;

const A_JS: &str = text_block_fnl! {
    "'use strict';"
    "module.exports = 'a';"
};

/// Files of the fixture tree, relative to its root.
pub const FIXTURE_FILES: &[(&str, &str)] = &[
    ("foo.txt", "foo\n"),
    ("bar.txt", "bar\n"),
    (".dot.txt", "dot\n"),
    ("folders/baz.txt", "baz\n"),
    ("folders/a.js", A_JS),
];

/// Populate `root` with the fixture tree:
///
/// ```text
/// root
/// ├── .dot.txt
/// ├── bar.txt
/// ├── foo.txt
/// └── folders
///     ├── a.js
///     └── baz.txt
/// ```
pub fn create_fixture_tree(root: &Path) {
    for (suffix, content) in FIXTURE_FILES {
        let path = root.join(suffix);
        let parent = path.parent().expect("fixture file has a parent");
        fs::create_dir_all(parent).expect("create fixture directory");
        fs::write(&path, content).expect("write fixture file");
    }
}

/// Temporary workspace holding a fixture tree and an empty destination directory.
pub struct FixtureDirs {
    /// Keeps the workspace alive. Use it as `cwd` so that `fixtures/*` patterns work.
    pub root: TempDir,
    /// `<root>/fixtures`, populated by [`create_fixture_tree`].
    pub fixtures: PathBuf,
    /// `<root>/links`, empty.
    pub dest: PathBuf,
}

pub fn fixture_with_dest() -> FixtureDirs {
    let root = tempdir().expect("create temporary directory");
    let fixtures = root.path().join("fixtures");
    create_fixture_tree(&fixtures);
    let dest = root.path().join("links");
    fs::create_dir(&dest).expect("create destination directory");
    FixtureDirs { root, fixtures, dest }
}
