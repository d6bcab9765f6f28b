use crate::LinkTypeHint;
use std::{io, path::Path};

/// Create a link at `link` that points to `target`.
///
/// The target doesn't need to exist unless the hint is [`LinkTypeHint::Junction`]
/// and the target is meant to be a directory.
pub fn create_link(target: &Path, link: &Path, hint: LinkTypeHint) -> io::Result<()> {
    tracing::trace!(target: "globlink::fs", ?target, ?link, ?hint, "create_link");

    #[cfg(unix)]
    return std::os::unix::fs::symlink(target, link);

    #[cfg(windows)]
    return match hint {
        LinkTypeHint::Junction if target.is_dir() => junction::create(target, link),
        LinkTypeHint::Junction => std::os::windows::fs::symlink_file(target, link),
        LinkTypeHint::Symlink if target.is_dir() => std::os::windows::fs::symlink_dir(target, link),
        LinkTypeHint::Symlink => std::os::windows::fs::symlink_file(target, link),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LinkTypeHint, Platform};
    use pretty_assertions::assert_eq;
    use std::{fs, io::ErrorKind};
    use tempfile::tempdir;

    fn hint() -> LinkTypeHint {
        LinkTypeHint::for_platform(Platform::current())
    }

    #[test]
    fn link_to_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("target.txt");
        let link = dir.path().join("link.txt");
        fs::write(&target, "hello").unwrap();

        create_link(&target, &link, hint()).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&link).unwrap(), "hello");
    }

    #[test]
    fn link_to_directory() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("target");
        let link = dir.path().join("link");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("inner.txt"), "inner").unwrap();

        create_link(&target, &link, hint()).unwrap();

        assert_eq!(fs::read_to_string(link.join("inner.txt")).unwrap(), "inner");
    }

    #[test]
    fn refuse_existing_link_path() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("target.txt");
        let link = dir.path().join("link.txt");
        fs::write(&target, "new").unwrap();
        fs::write(&link, "old").unwrap();

        let error = create_link(&target, &link, hint()).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::AlreadyExists);
        assert_eq!(fs::read_to_string(&link).unwrap(), "old");
    }
}
