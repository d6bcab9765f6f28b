use serde::Deserialize;
use smart_default::SmartDefault;

/// Options of the glob engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, SmartDefault)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobOptions {
    /// Let wildcards match entries whose name starts with `.`.
    pub dot: bool,

    /// Only return regular files, never directories.
    #[default = true]
    pub only_files: bool,

    /// Patterns whose matches are removed from the result.
    pub ignore: Vec<String>,

    pub case_insensitive: bool,

    /// Descend into symlinked directories and judge entries by their targets.
    #[default = true]
    pub follow_symlinks: bool,
}
