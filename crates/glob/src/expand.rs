use crate::{pattern::Pattern, GlobError, GlobOptions};
use globset::{GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};
use pipe_trait::Pipe;
use std::{
    collections::HashSet,
    ffi::OsStr,
    fs, io,
    path::{Component, Path, PathBuf},
};
use walkdir::WalkDir;

fn is_dot_name(name: &OsStr) -> bool {
    name.to_str().is_some_and(|name| name.starts_with('.'))
}

fn count_dot_components(path: &Path) -> usize {
    path.components()
        .filter(|component| matches!(component, Component::Normal(name) if is_dot_name(name)))
        .count()
}

fn build_glob(glob: &str, options: &GlobOptions) -> Result<globset::Glob, GlobError> {
    GlobBuilder::new(glob)
        .literal_separator(true)
        .case_insensitive(options.case_insensitive)
        .build()
        .map_err(|error| GlobError::InvalidPattern { pattern: glob.to_string(), error })
}

fn build_matcher(glob: &str, options: &GlobOptions) -> Result<GlobMatcher, GlobError> {
    build_glob(glob, options).map(|glob| glob.compile_matcher())
}

fn build_exclusions(
    globs: impl IntoIterator<Item = String>,
    options: &GlobOptions,
) -> Result<GlobSet, GlobError> {
    let mut builder = GlobSetBuilder::new();
    for glob in globs {
        builder.add(build_glob(&glob, options)?);
    }
    builder.build().map_err(|error| GlobError::InvalidPattern { pattern: String::new(), error })
}

/// Whether a walk error comes from an entry that vanished or a dangling symlink.
fn is_missing_entry(error: &walkdir::Error) -> bool {
    error.io_error().is_some_and(|error| error.kind() == io::ErrorKind::NotFound)
}

fn expand_literal(pattern: &Pattern, cwd: &Path, options: &GlobOptions) -> Vec<PathBuf> {
    if pattern.base.file_name().is_none() {
        return Vec::new();
    }
    let full_path = cwd.join(&pattern.base);
    let metadata = if options.follow_symlinks {
        fs::metadata(&full_path)
    } else {
        fs::symlink_metadata(&full_path)
    };
    match metadata {
        Ok(metadata) if !options.only_files || metadata.is_file() => vec![pattern.base.clone()],
        _ => Vec::new(),
    }
}

fn expand_glob(
    pattern: &Pattern,
    glob: &str,
    cwd: &Path,
    options: &GlobOptions,
) -> Result<Vec<PathBuf>, GlobError> {
    let matcher = build_matcher(glob, options)?;
    let root = cwd.join(&pattern.base);
    if !root.is_dir() {
        tracing::debug!(target: "globlink::glob", ?root, "Walk root is not a directory");
        return Ok(Vec::new());
    }

    let allow_dots = options.dot || pattern.explicit_dots > 0;
    let mut walker = WalkDir::new(&root).min_depth(1).follow_links(options.follow_symlinks);
    if let Some(max_depth) = pattern.max_depth {
        walker = walker.max_depth(max_depth);
    }
    let walker = walker
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || allow_dots || !is_dot_name(entry.file_name()));

    let mut matches = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) if is_missing_entry(&error) => {
                tracing::debug!(target: "globlink::glob", ?error, "Skip missing entry");
                continue;
            }
            Err(error) => return Err(GlobError::Walk { root, error }),
        };

        if options.only_files && !entry.file_type().is_file() {
            continue;
        }

        let Ok(relative) = entry.path().strip_prefix(&root) else {
            continue;
        };

        if !matcher.is_match(relative) {
            continue;
        }

        if !options.dot && count_dot_components(relative) > pattern.explicit_dots {
            continue;
        }

        matches.push(pattern.base.join(relative));
    }

    Ok(matches)
}

/// Expand `patterns` relative to `cwd`.
///
/// * Patterns starting with `!` and [`GlobOptions::ignore`] remove matches of every other pattern.
/// * Matches of one pattern come in walk order, sorted by file name.
/// * Patterns are expanded in order. A path matched by an earlier pattern is not repeated.
/// * A pattern whose literal base directory does not exist matches nothing.
pub fn expand_patterns<Patterns>(
    patterns: Patterns,
    cwd: &Path,
    options: &GlobOptions,
) -> Result<Vec<PathBuf>, GlobError>
where
    Patterns: IntoIterator,
    Patterns::Item: AsRef<str>,
{
    let (negated, positive): (Vec<_>, Vec<_>) = patterns
        .into_iter()
        .map(|pattern| Pattern::parse(pattern.as_ref()))
        .partition(|pattern| pattern.negated);

    let exclusions = negated
        .iter()
        .map(Pattern::full_glob)
        .chain(options.ignore.iter().map(|glob| Pattern::parse(glob).full_glob()))
        .pipe(|globs| build_exclusions(globs, options))?;

    let mut seen = HashSet::new();
    let mut matches = Vec::new();
    for pattern in &positive {
        let expanded = match &pattern.glob {
            Some(glob) => expand_glob(pattern, glob, cwd, options)?,
            None => expand_literal(pattern, cwd, options),
        };
        for path in expanded {
            if exclusions.is_match(&path) || !seen.insert(path.clone()) {
                continue;
            }
            matches.push(path);
        }
    }

    tracing::debug!(target: "globlink::glob", count = matches.len(), "Expanded patterns");
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use globlink_testing_utils::create_fixture_tree;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn expand(patterns: &[&str], cwd: &Path, options: &GlobOptions) -> Vec<String> {
        expand_patterns(patterns, cwd, options)
            .unwrap()
            .into_iter()
            .map(|path| path.to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn star_skips_dotfiles_and_directories() {
        let dir = tempdir().unwrap();
        create_fixture_tree(&dir.path().join("dir"));

        let matches = expand(&["dir/*"], dir.path(), &GlobOptions::default());
        assert_eq!(matches, ["dir/bar.txt", "dir/foo.txt"]);
    }

    #[test]
    fn explicit_dot_segment_matches_dotfiles() {
        let dir = tempdir().unwrap();
        create_fixture_tree(&dir.path().join("dir"));

        let matches = expand(&["dir/*", "dir/.*"], dir.path(), &GlobOptions::default());
        assert_eq!(matches, ["dir/bar.txt", "dir/foo.txt", "dir/.dot.txt"]);
    }

    #[test]
    fn dot_option_matches_dotfiles() {
        let dir = tempdir().unwrap();
        create_fixture_tree(dir.path());

        let options = GlobOptions { dot: true, ..GlobOptions::default() };
        let matches = expand(&["*.txt"], dir.path(), &options);
        assert_eq!(matches, [".dot.txt", "bar.txt", "foo.txt"]);
    }

    #[test]
    fn globstar_walks_subdirectories() {
        let dir = tempdir().unwrap();
        create_fixture_tree(dir.path());

        let matches = expand(&["./**/*.txt"], dir.path(), &GlobOptions::default());
        assert_eq!(matches, ["bar.txt", "folders/baz.txt", "foo.txt"]);
    }

    #[test]
    fn brace_alternation() {
        let dir = tempdir().unwrap();
        create_fixture_tree(dir.path());

        let matches = expand(&["**/*.{txt,js}"], dir.path(), &GlobOptions::default());
        assert_eq!(matches, ["bar.txt", "folders/a.js", "folders/baz.txt", "foo.txt"]);
    }

    #[test]
    fn include_directories_when_not_only_files() {
        let dir = tempdir().unwrap();
        create_fixture_tree(dir.path());

        let options = GlobOptions { only_files: false, ..GlobOptions::default() };
        let matches = expand(&["*"], dir.path(), &options);
        assert_eq!(matches, ["bar.txt", "folders", "foo.txt"]);
    }

    #[test]
    fn duplicates_across_patterns_are_removed() {
        let dir = tempdir().unwrap();
        create_fixture_tree(dir.path());

        let matches = expand(&["*.txt", "foo.*", "**/*.txt"], dir.path(), &GlobOptions::default());
        assert_eq!(matches, ["bar.txt", "foo.txt", "folders/baz.txt"]);
    }

    #[test]
    fn negated_patterns_and_ignore_exclude_matches() {
        let dir = tempdir().unwrap();
        create_fixture_tree(dir.path());

        let matches = expand(&["**/*", "!**/*.js"], dir.path(), &GlobOptions::default());
        assert_eq!(matches, ["bar.txt", "folders/baz.txt", "foo.txt"]);

        let ignore = vec!["folders/**".to_string()];
        let options = GlobOptions { ignore, ..GlobOptions::default() };
        let matches = expand(&["**/*"], dir.path(), &options);
        assert_eq!(matches, ["bar.txt", "foo.txt"]);
    }

    #[test]
    fn literal_pattern_matches_existing_file_only() {
        let dir = tempdir().unwrap();
        create_fixture_tree(dir.path());

        let patterns = ["folders/baz.txt", "missing.txt"];
        let matches = expand(&patterns, dir.path(), &GlobOptions::default());
        assert_eq!(matches, ["folders/baz.txt"]);
    }

    #[test]
    fn absolute_pattern_yields_absolute_paths() {
        let dir = tempdir().unwrap();
        create_fixture_tree(dir.path());
        let pattern = format!("{}/*", dir.path().to_string_lossy().replace('\\', "/"));

        let matches = expand_patterns([pattern], Path::new("/unrelated"), &GlobOptions::default())
            .unwrap();
        assert_eq!(matches, [dir.path().join("bar.txt"), dir.path().join("foo.txt")]);
    }

    #[test]
    fn missing_base_matches_nothing() {
        let dir = tempdir().unwrap();
        let matches = expand(&["missing/**/*"], dir.path(), &GlobOptions::default());
        assert!(matches.is_empty());
    }

    #[test]
    fn invalid_pattern() {
        let dir = tempdir().unwrap();
        let error = expand_patterns(["a/[b"], dir.path(), &GlobOptions::default()).unwrap_err();
        assert!(matches!(error, GlobError::InvalidPattern { .. }));
    }

    #[test]
    fn case_insensitive_matching() {
        let dir = tempdir().unwrap();
        create_fixture_tree(dir.path());

        let options = GlobOptions { case_insensitive: true, ..GlobOptions::default() };
        assert_eq!(expand(&["FOO.*"], dir.path(), &options), ["foo.txt"]);
        assert!(expand(&["FOO.*"], dir.path(), &GlobOptions::default()).is_empty());
    }
}
