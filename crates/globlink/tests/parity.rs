//! `link` and `link_sync` must agree on everything they return and everything they leave on disk.

use globlink::{link, link_sync, GlobOptions, LinkOptions, LinkResult};
use globlink_testing_utils::{create_fixture_tree, fs::get_all_entries};
use pretty_assertions::assert_eq;
use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};
use tempfile::{tempdir, TempDir};

/// Two identical workspaces, one per entry point.
struct Twins {
    _root: TempDir,
    concurrent: PathBuf,
    sequential: PathBuf,
}

fn twins() -> Twins {
    let root = tempdir().unwrap();
    let concurrent = root.path().join("concurrent");
    let sequential = root.path().join("sequential");
    for workspace in [&concurrent, &sequential] {
        create_fixture_tree(&workspace.join("fixtures"));
        fs::create_dir(workspace.join("links")).unwrap();
    }
    Twins { _root: root, concurrent, sequential }
}

/// Strip the workspace prefix so that results of both workspaces can be compared.
fn relative(results: &[LinkResult], workspace: &Path) -> Vec<(PathBuf, PathBuf)> {
    results
        .iter()
        .map(|result| {
            (
                result.target.strip_prefix(workspace).unwrap().to_path_buf(),
                result.path.strip_prefix(workspace).unwrap().to_path_buf(),
            )
        })
        .collect()
}

async fn assert_parity(patterns: &[&str], options: LinkOptions) {
    let Twins { _root, concurrent, sequential } = twins();

    let concurrent_results =
        link(patterns, concurrent.join("links"), options.clone().with_cwd(&concurrent))
            .await
            .unwrap();
    let sequential_results =
        link_sync(patterns, sequential.join("links"), options.with_cwd(&sequential)).unwrap();

    assert_eq!(
        relative(&concurrent_results, &concurrent),
        relative(&sequential_results, &sequential),
    );
    assert_eq!(
        get_all_entries(&concurrent.join("links")),
        get_all_entries(&sequential.join("links")),
    );
}

#[tokio::test]
async fn same_results_for_recursive_patterns() {
    assert_parity(&["fixtures/**/*.txt"], LinkOptions::default()).await;
}

#[tokio::test]
async fn same_results_for_multiple_patterns() {
    assert_parity(&["fixtures/*.txt", "fixtures/.*", "fixtures/**/*.js"], LinkOptions::default())
        .await;
}

#[tokio::test]
async fn same_results_in_dry_run() {
    assert_parity(&["fixtures/**"], LinkOptions::default().with_dry_run(true)).await;
}

#[tokio::test]
async fn same_results_with_glob_options() {
    let glob = GlobOptions { dot: true, only_files: false, ..GlobOptions::default() };
    assert_parity(&["fixtures/*", "!fixtures/folders"], LinkOptions::default().with_glob(glob))
        .await;
}

#[tokio::test]
async fn same_results_when_forcing_over_existing_links() {
    let Twins { _root, concurrent, sequential } = twins();
    for workspace in [&concurrent, &sequential] {
        fs::write(workspace.join("links/foo.txt"), "old").unwrap();
        fs::create_dir_all(workspace.join("links/bar.txt/nested")).unwrap();
    }
    let options = LinkOptions::default().with_force(true);

    let concurrent_results =
        link(["fixtures/*"], concurrent.join("links"), options.clone().with_cwd(&concurrent))
            .await
            .unwrap();
    let sequential_results =
        link_sync(["fixtures/*"], sequential.join("links"), options.with_cwd(&sequential)).unwrap();

    assert_eq!(
        relative(&concurrent_results, &concurrent),
        relative(&sequential_results, &sequential),
    );
    for workspace in [&concurrent, &sequential] {
        let names: Vec<OsString> = fs::read_dir(workspace.join("links"))
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names.len(), 2);
        assert_eq!(fs::read_to_string(workspace.join("links/foo.txt")).unwrap(), "foo\n");
        assert_eq!(fs::read_to_string(workspace.join("links/bar.txt")).unwrap(), "bar\n");
    }
}
