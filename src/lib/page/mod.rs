use crate::types::{ItemId, Timestamp};

/// Snapshot of a single content item as handed over by the host platform.
/// Read-only to this crate.
#[derive(Clone, Debug, Default)]
pub struct ContentItem {
    pub id: ItemId,
    /// Host-side type name, e.g. `post`, `page` or `attachment`.
    pub item_type: String,
    pub title: String,
    /// Short-form summary; empty when the author provided none.
    pub excerpt: String,
    /// Raw body markup.
    pub body: String,
    pub published: Option<Timestamp>,
    pub modified: Option<Timestamp>,
    /// Author display name.
    pub author: String,
    pub permalink: String,
}

/// The resolved page for the current request, passed explicitly into
/// every resolver.
///
/// The view flags are independent predicates rather than one enum: the
/// host can resolve a request to several of them at once (a front page
/// that doubles as the blog index, for instance), and branch selection
/// depends on that.
#[derive(Clone, Debug, Default)]
pub struct PageContext {
    pub is_front_page: bool,
    pub is_paged: bool,
    pub is_blog_index: bool,
    /// Present exactly for single-item views.
    pub item: Option<ContentItem>,
}

impl PageContext {
    pub fn front_page(paged: bool) -> Self {
        Self {
            is_front_page: true,
            is_paged: paged,
            ..Self::default()
        }
    }

    pub fn blog_index() -> Self {
        Self {
            is_blog_index: true,
            ..Self::default()
        }
    }

    pub fn single(item: ContentItem) -> Self {
        Self {
            item: Some(item),
            ..Self::default()
        }
    }
}
