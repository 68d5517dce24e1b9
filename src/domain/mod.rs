//! Domain logic - version tag shapes and their increment rules

pub mod dev_tag;
pub mod release_tag;

pub use dev_tag::DevTag;
pub use release_tag::ReleaseTag;
