mod fixtures;

pub mod fs;

pub use fixtures::{create_fixture_tree, fixture_with_dest, FixtureDirs, FIXTURE_FILES};
