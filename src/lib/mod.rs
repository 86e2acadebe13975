//! Open Graph metadata generation for content-managed sites.
//!
//! Resolves a small set of `og:` properties for the page being rendered
//! (home page, blog index, or a single content item), finds a
//! representative image for items through an ordered fallback chain, and
//! renders the result as `<meta>` markup for the head section.
//!
//! Host-specific behaviour is injected rather than reached for globally:
//! media lookups go through [`image::MediaLibrary`], caching through
//! [`image::ImageCache`], and overrides through the named filters in
//! [`hooks`].

pub mod config;
pub mod description;
pub mod head;
pub mod hooks;
pub mod image;
pub mod metadata;
pub mod page;
pub mod types;
