//! Named extension points, replacing the host platform's string-keyed
//! filter dispatch with an explicit registry. Each hook name maps to an
//! ordered list of pure transforms; dispatch runs them synchronously in
//! registration order, folding the value through each one.

use std::{collections::HashMap, fmt};

use crate::{metadata::MetadataMap, page::PageContext};

/// Hook names dispatched by this crate.
pub mod names {
    pub const GET_HOME_METADATA: &str = "ogp_get_home_metadata";
    pub const GET_BLOG_METADATA: &str = "ogp_get_blog_metadata";
    pub const GET_METADATA: &str = "ogp_get_metadata";
    pub const GET_THE_DESCRIPTION: &str = "ogp_get_the_description";
    pub const TRIM_DESCRIPTION_LENGTH: &str = "ogp_trim_description_length";
    pub const GET_THE_IMAGE_BY_DEFAULT: &str = "ogp_get_the_image_by_default";
    pub const HEAD_METADATA: &str = "ogp_head_metadata";

    /// Per-item-type metadata hook, named from the item's type.
    pub fn item_type_metadata(item_type: &str) -> String {
        format!("ogp_get_{item_type}_metadata")
    }
}

type MapFilter = Box<dyn Fn(MetadataMap, &PageContext) -> MetadataMap>;
type TextFilter = Box<dyn Fn(String) -> String>;
type LenFilter = Box<dyn Fn(usize) -> usize>;

/// Registry of transforms, keyed by hook name and typed by the value the
/// hook carries: metadata maps, text, or lengths.
#[derive(Default)]
pub struct Hooks {
    map_filters: HashMap<String, Vec<MapFilter>>,
    text_filters: HashMap<String, Vec<TextFilter>>,
    len_filters: HashMap<String, Vec<LenFilter>>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_map<F>(&mut self, name: impl Into<String>, filter: F)
    where
        F: Fn(MetadataMap, &PageContext) -> MetadataMap + 'static,
    {
        self.map_filters
            .entry(name.into())
            .or_default()
            .push(Box::new(filter));
    }

    pub fn on_text<F>(&mut self, name: impl Into<String>, filter: F)
    where
        F: Fn(String) -> String + 'static,
    {
        self.text_filters
            .entry(name.into())
            .or_default()
            .push(Box::new(filter));
    }

    pub fn on_len<F>(&mut self, name: impl Into<String>, filter: F)
    where
        F: Fn(usize) -> usize + 'static,
    {
        self.len_filters
            .entry(name.into())
            .or_default()
            .push(Box::new(filter));
    }

    pub fn filter_map(&self, name: &str, value: MetadataMap, ctx: &PageContext) -> MetadataMap {
        match self.map_filters.get(name) {
            Some(filters) => filters.iter().fold(value, |v, f| f(v, ctx)),
            None => value,
        }
    }

    pub fn filter_text(&self, name: &str, value: String) -> String {
        match self.text_filters.get(name) {
            Some(filters) => filters.iter().fold(value, |v, f| f(v)),
            None => value,
        }
    }

    pub fn filter_len(&self, name: &str, value: usize) -> usize {
        match self.len_filters.get(name) {
            Some(filters) => filters.iter().fold(value, |v, f| f(v)),
            None => value,
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("map_filters", &self.map_filters.keys())
            .field("text_filters", &self.text_filters.keys())
            .field("len_filters", &self.len_filters.keys())
            .finish()
    }
}
