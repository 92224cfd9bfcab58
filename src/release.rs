//! Release helpers: version bump, changelog copies and the release blog post.
/// Release blog post rendering
pub mod blog;
/// Changelog copies for store metadata
pub mod changelog;
/// Release errors
pub mod error;
/// Build manifest version bump
pub mod version;

pub use blog::{
    BlogPost,
    create_blog_post,
};
pub use changelog::copy_changelog;
pub use error::ReleaseError;
pub use version::{
    ManifestVersion,
    VersionBump,
    bump_version,
};
