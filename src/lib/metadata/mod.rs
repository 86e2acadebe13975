//! Selection of Open Graph properties for the current page.

use std::fmt;

use tracing::debug;

use crate::{
    config::{DEFAULT_DESCRIPTION_WORDS, SiteInfo},
    description,
    hooks::{Hooks, names},
    image::{ImageCache, ImageResolver, MediaLibrary},
    page::{ContentItem, PageContext},
    types::Timestamp,
};

/// The fixed vocabulary of `og:` properties this crate emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OgProperty {
    Type,
    Title,
    Description,
    Url,
    Image,
    PublishedTime,
    ModifiedTime,
    Author,
}

impl OgProperty {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Title => "title",
            Self::Description => "description",
            Self::Url => "url",
            Self::Image => "image",
            Self::PublishedTime => "published_time",
            Self::ModifiedTime => "modified_time",
            Self::Author => "author",
        }
    }
}

impl fmt::Display for OgProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Property-to-value mapping for one request. Insertion order is the
/// output order, and a property never appears twice: setting an existing
/// property replaces its value in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetadataMap {
    entries: Vec<(OgProperty, String)>,
}

impl MetadataMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, property: OgProperty, content: impl Into<String>) {
        let content = content.into();
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some((_, existing)) => *existing = content,
            None => self.entries.push((property, content)),
        }
    }

    pub fn get(&self, property: OgProperty) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, content)| content.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (OgProperty, &str)> {
        self.entries.iter().map(|(p, content)| (*p, content.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Produces the metadata map for a page, branching on its view flags and
/// passing every branch through its named hook.
pub struct MetadataResolver<'a> {
    site: &'a SiteInfo,
    hooks: &'a Hooks,
    images: ImageResolver<'a>,
}

impl<'a> MetadataResolver<'a> {
    pub fn new(
        site: &'a SiteInfo,
        hooks: &'a Hooks,
        media: &'a dyn MediaLibrary,
        cache: &'a dyn ImageCache,
    ) -> Self {
        Self {
            site,
            hooks,
            images: ImageResolver::new(media, cache, hooks, &site.default_image),
        }
    }

    pub fn hooks(&self) -> &'a Hooks {
        self.hooks
    }

    pub fn resolve(&self, ctx: &PageContext) -> MetadataMap {
        let mut metadata = MetadataMap::new();

        if ctx.is_front_page && !ctx.is_paged {
            metadata = self
                .hooks
                .filter_map(names::GET_HOME_METADATA, self.home_metadata(), ctx);
        }

        // Deliberately not an else-if: when a view is both front page and
        // blog index, the blog branch runs second and its result wins.
        if ctx.is_blog_index {
            metadata = self
                .hooks
                .filter_map(names::GET_BLOG_METADATA, self.blog_metadata(), ctx);
        } else if let Some(item) = &ctx.item {
            let hook = names::item_type_metadata(&item.item_type);
            metadata = self.hooks.filter_map(&hook, self.item_metadata(item), ctx);
        }

        debug!(properties = metadata.len(), "resolved page metadata");
        self.hooks.filter_map(names::GET_METADATA, metadata, ctx)
    }

    /// Description for a single item: the excerpt when present, the body
    /// otherwise, passed through its hook and then trimmed.
    pub fn describe(&self, item: &ContentItem) -> String {
        let source = if item.excerpt.is_empty() {
            item.body.clone()
        } else {
            item.excerpt.clone()
        };

        let resolved = self.hooks.filter_text(names::GET_THE_DESCRIPTION, source);
        let limit = self
            .hooks
            .filter_len(names::TRIM_DESCRIPTION_LENGTH, DEFAULT_DESCRIPTION_WORDS);

        description::trim_description(&resolved, limit)
    }

    fn home_metadata(&self) -> MetadataMap {
        let mut metadata = MetadataMap::new();
        metadata.set(OgProperty::Type, "website");
        metadata.set(OgProperty::Description, self.site.tagline.as_str());
        metadata
    }

    fn blog_metadata(&self) -> MetadataMap {
        let mut metadata = MetadataMap::new();
        metadata.set(OgProperty::Type, "blog");
        metadata.set(OgProperty::Description, self.site.tagline.as_str());
        metadata
    }

    fn item_metadata(&self, item: &ContentItem) -> MetadataMap {
        let mut metadata = MetadataMap::new();
        metadata.set(OgProperty::Title, item.title.as_str());
        metadata.set(OgProperty::Type, "article");
        metadata.set(OgProperty::Description, self.describe(item));
        metadata.set(OgProperty::Url, item.permalink.as_str());
        metadata.set(OgProperty::Image, self.images.resolve(item.id));
        metadata.set(OgProperty::PublishedTime, format_time(&item.published));
        metadata.set(OgProperty::ModifiedTime, format_time(&item.modified));
        metadata.set(OgProperty::Author, item.author.as_str());
        metadata
    }
}

// Absent data becomes an empty value, never an omitted property.
fn format_time(time: &Option<Timestamp>) -> String {
    time.as_ref().map(Timestamp::long_format).unwrap_or_default()
}
