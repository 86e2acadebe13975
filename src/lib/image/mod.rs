//! Best-effort image resolution for content items: an ordered fallback
//! chain with a per-item cache in front of it.

use std::{collections::HashMap, sync::LazyLock};

use parking_lot::Mutex;
use regex::Regex;
use tracing::{debug, trace};

use crate::{
    config::{ATTACHMENT_TYPE, THUMBNAIL_RENDITION},
    hooks::{Hooks, names},
    types::{Fingerprint, ItemId},
};

/// Cached resolutions for one item, keyed by fingerprint. The indirection
/// allows several fingerprints per item id, though resolution only ever
/// produces one.
pub type RenditionMap = HashMap<Fingerprint, String>;

/// Read-only media queries answered by the host platform.
pub trait MediaLibrary {
    /// Attachment id of the item's assigned thumbnail, if one is set.
    fn thumbnail_id(&self, item: ItemId) -> Option<ItemId>;

    /// URL of an attachment's rendition at the given size.
    fn image_src(&self, attachment: ItemId, size: &str) -> Option<String>;

    /// Whether the item is an attachment whose MIME type is an image.
    fn is_image_attachment(&self, item: ItemId) -> bool;

    /// Host-side type name of the item.
    fn item_type(&self, item: ItemId) -> Option<String>;

    /// Raw body markup of the item.
    fn body(&self, item: ItemId) -> Option<String>;
}

/// Store for resolved image URLs, injected into the resolver. Entries
/// never expire here; eviction belongs to the implementation.
pub trait ImageCache {
    fn get(&self, item: ItemId) -> Option<RenditionMap>;
    fn set(&self, item: ItemId, entries: RenditionMap);
}

/// In-memory cache. `get` and `set` are individually locked but a
/// resolve's read-then-write is not atomic: two callers racing on the
/// same uncached item may both run the chain, and the later write wins.
/// The chain is pure, so both compute the same value.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<ItemId, RenditionMap>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ImageCache for MemoryCache {
    fn get(&self, item: ItemId) -> Option<RenditionMap> {
        self.entries.lock().get(&item).cloned()
    }

    fn set(&self, item: ItemId, entries: RenditionMap) {
        self.entries.lock().insert(item, entries);
    }
}

static IMG_SRC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<img.*?src=['"](.*?)['"]"#).expect("static img pattern is valid")
});

/// `src` of the first `<img>` element in the markup, if any.
pub fn first_image_src(markup: &str) -> Option<String> {
    IMG_SRC
        .captures(markup)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Resolves one image URL per item: assigned thumbnail, the item itself
/// when it is an image attachment, a scan of the body markup, then the
/// configured default. The default never fails.
pub struct ImageResolver<'a> {
    media: &'a dyn MediaLibrary,
    cache: &'a dyn ImageCache,
    hooks: &'a Hooks,
    default_url: &'a str,
}

impl<'a> ImageResolver<'a> {
    pub fn new(
        media: &'a dyn MediaLibrary,
        cache: &'a dyn ImageCache,
        hooks: &'a Hooks,
        default_url: &'a str,
    ) -> Self {
        Self {
            media,
            cache,
            hooks,
            default_url,
        }
    }

    pub fn resolve(&self, item: ItemId) -> String {
        let item_type = self.media.item_type(item).unwrap_or_default();
        let key = Fingerprint::for_item(item, &item_type);

        let mut entries = self.cache.get(item).unwrap_or_default();
        if let Some(url) = entries.get(&key) {
            trace!(%item, "image cache hit");
            return url.clone();
        }

        let url = self
            .by_thumbnail(item)
            .or_else(|| self.by_attachment(item, &item_type))
            .or_else(|| self.by_scan(item))
            .unwrap_or_else(|| self.by_default());
        debug!(%item, url = %url, "resolved item image");

        entries.insert(key, url.clone());
        self.cache.set(item, entries);

        url
    }

    fn by_thumbnail(&self, item: ItemId) -> Option<String> {
        let thumbnail = self.media.thumbnail_id(item)?;
        // A thumbnail whose rendition lookup fails falls through to the
        // next step rather than erroring.
        self.media.image_src(thumbnail, THUMBNAIL_RENDITION)
    }

    fn by_attachment(&self, item: ItemId, item_type: &str) -> Option<String> {
        if item_type != ATTACHMENT_TYPE || !self.media.is_image_attachment(item) {
            return None;
        }
        self.media.image_src(item, THUMBNAIL_RENDITION)
    }

    fn by_scan(&self, item: ItemId) -> Option<String> {
        let body = self.media.body(item)?;
        first_image_src(&body)
    }

    fn by_default(&self) -> String {
        self.hooks
            .filter_text(names::GET_THE_IMAGE_BY_DEFAULT, self.default_url.to_string())
    }
}
