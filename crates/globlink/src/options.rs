use globlink_glob::GlobOptions;
use serde::Deserialize;
use smart_default::SmartDefault;
use std::path::PathBuf;

/// Options of [`link`](crate::link) and [`link_sync`](crate::link_sync).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, SmartDefault)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkOptions {
    /// Base directory of the patterns and of the link targets.
    ///
    /// Defaults to the current working directory of the process.
    pub cwd: Option<PathBuf>,

    /// Remove entries that already occupy a destination instead of failing.
    pub force: bool,

    /// Report the links that would be created without touching the filesystem.
    pub dry_run: bool,

    /// Options handed to the glob engine as-is.
    #[serde(flatten)]
    pub glob: GlobOptions,
}

impl LinkOptions {
    /// Parse options from a JSON document such as `{ "cwd": "fixtures", "dryRun": true }`.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn with_cwd(self, cwd: impl Into<PathBuf>) -> Self {
        LinkOptions { cwd: Some(cwd.into()), ..self }
    }

    pub fn with_force(self, force: bool) -> Self {
        LinkOptions { force, ..self }
    }

    pub fn with_dry_run(self, dry_run: bool) -> Self {
        LinkOptions { dry_run, ..self }
    }

    pub fn with_glob(self, glob: GlobOptions) -> Self {
        LinkOptions { glob, ..self }
    }
}
