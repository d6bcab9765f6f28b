mod error;
mod expand;
mod options;
mod pattern;

pub use error::GlobError;
pub use expand::expand_patterns;
pub use options::GlobOptions;
