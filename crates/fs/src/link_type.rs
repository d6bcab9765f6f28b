/// Operating system family, as far as link creation is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Unix,
    Windows,
}

impl Platform {
    /// Platform this binary was compiled for.
    pub const fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// Kind of link to ask the operating system for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTypeHint {
    /// Plain symbolic link. The target's type doesn't matter.
    Symlink,
    /// Junction for directory targets, file symlink otherwise.
    Junction,
}

impl LinkTypeHint {
    /// Default hint of a platform.
    ///
    /// Windows gets junctions because directory symlinks may require elevated privileges.
    pub const fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Unix => LinkTypeHint::Symlink,
            Platform::Windows => LinkTypeHint::Junction,
        }
    }
}
