use super::{HeadPipeline, register_head_metadata, render_metadata};
use crate::{
    config::SiteInfo,
    hooks::{Hooks, names},
    image::{MediaLibrary, MemoryCache},
    metadata::{MetadataMap, MetadataResolver, OgProperty},
    page::PageContext,
    types::ItemId,
};

#[derive(Default)]
struct NoMedia;

impl MediaLibrary for NoMedia {
    fn thumbnail_id(&self, _item: ItemId) -> Option<ItemId> {
        None
    }

    fn image_src(&self, _attachment: ItemId, _size: &str) -> Option<String> {
        None
    }

    fn is_image_attachment(&self, _item: ItemId) -> bool {
        false
    }

    fn item_type(&self, _item: ItemId) -> Option<String> {
        None
    }

    fn body(&self, _item: ItemId) -> Option<String> {
        None
    }
}

#[test]
fn one_line_per_property_with_trailing_newline() {
    let hooks = Hooks::new();
    let mut metadata = MetadataMap::new();
    metadata.set(OgProperty::Type, "website");
    metadata.set(OgProperty::Description, "Just another site");

    assert_eq!(
        render_metadata(&metadata, &hooks),
        "<meta property='og:type' content='website' />\n\
         <meta property='og:description' content='Just another site' />\n"
    );
}

#[test]
fn empty_map_renders_a_bare_newline() {
    let hooks = Hooks::new();
    assert_eq!(render_metadata(&MetadataMap::new(), &hooks), "\n");
}

#[test]
fn values_are_emitted_verbatim() {
    let hooks = Hooks::new();
    let mut metadata = MetadataMap::new();
    metadata.set(OgProperty::Title, "a 'quoted' title");

    assert_eq!(
        render_metadata(&metadata, &hooks),
        "<meta property='og:title' content='a 'quoted' title' />\n"
    );
}

#[test]
fn final_markup_hook_overrides_the_output() {
    let mut hooks = Hooks::new();
    hooks.on_text(names::HEAD_METADATA, |markup| {
        format!("<!-- og -->\n{markup}")
    });
    let mut metadata = MetadataMap::new();
    metadata.set(OgProperty::Type, "website");

    assert_eq!(
        render_metadata(&metadata, &hooks),
        "<!-- og -->\n<meta property='og:type' content='website' />\n"
    );
}

#[test]
fn pipeline_runs_emitters_in_priority_order() {
    let mut pipeline = HeadPipeline::new();
    pipeline.register(5, |_ctx, out| out.write_all(b"b"));
    pipeline.register(1, |_ctx, out| out.write_all(b"a"));
    pipeline.register(5, |_ctx, out| out.write_all(b"c"));

    let mut out: Vec<u8> = Vec::new();
    pipeline
        .render(&PageContext::default(), &mut out)
        .expect("render head");
    assert_eq!(out, b"abc");
}

#[test]
fn registered_og_emitter_writes_head_markup() {
    let site = SiteInfo {
        tagline: "Just another site".to_string(),
        default_image: String::new(),
    };
    let hooks = Hooks::new();
    let media = NoMedia;
    let cache = MemoryCache::new();
    let resolver = MetadataResolver::new(&site, &hooks, &media, &cache);

    let mut pipeline = HeadPipeline::new();
    register_head_metadata(&mut pipeline, &resolver);
    pipeline.register(10, |_ctx, out| out.write_all(b"<!-- late -->"));

    let mut out: Vec<u8> = Vec::new();
    pipeline
        .render(&PageContext::front_page(false), &mut out)
        .expect("render head");

    let markup = String::from_utf8(out).expect("utf8 output");
    assert_eq!(
        markup,
        "<meta property='og:type' content='website' />\n\
         <meta property='og:description' content='Just another site' />\n\
         <!-- late -->"
    );
}

#[test]
fn failing_emitter_surfaces_an_error() {
    let mut pipeline = HeadPipeline::new();
    pipeline.register(1, |_ctx, _out| {
        Err(std::io::Error::other("stream closed"))
    });

    let mut out: Vec<u8> = Vec::new();
    assert!(pipeline.render(&PageContext::default(), &mut out).is_err());
}

#[test]
fn no_media_resolves_items_to_the_default_image() {
    let site = SiteInfo {
        tagline: String::new(),
        default_image: "https://example.com/default.png".to_string(),
    };
    let hooks = Hooks::new();
    let media = NoMedia;
    let cache = MemoryCache::new();
    let resolver = MetadataResolver::new(&site, &hooks, &media, &cache);

    let item = crate::page::ContentItem {
        id: ItemId::new(1),
        item_type: "post".to_string(),
        ..Default::default()
    };
    let metadata = resolver.resolve(&PageContext::single(item));
    assert_eq!(
        metadata.get(OgProperty::Image),
        Some("https://example.com/default.png")
    );
}
