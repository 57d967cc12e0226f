//! Domain logic - pure versioning rules independent of git and file I/O

pub mod commit;
pub mod tag;
pub mod taxonomy;
pub mod version;

pub use commit::CommitRecord;
pub use tag::TagPrefix;
pub use taxonomy::EmojiTaxonomy;
pub use version::{apply_bump, format_version, parse_version, BumpCategory, Version};
