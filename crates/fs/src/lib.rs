mod create_link;
mod link_type;
mod remove_all;

pub use create_link::create_link;
pub use link_type::{LinkTypeHint, Platform};
pub use remove_all::{entry_exists, remove_all};
