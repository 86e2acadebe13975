use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use libogp::{
    config::SiteInfo,
    description::trim_description,
    hooks::Hooks,
    image::{MediaLibrary, MemoryCache, first_image_src},
    metadata::MetadataResolver,
    page::{ContentItem, PageContext},
    types::ItemId,
};

struct BenchMedia {
    body: String,
}

impl MediaLibrary for BenchMedia {
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
        Some("post".to_string())
    }

    fn body(&self, _item: ItemId) -> Option<String> {
        Some(self.body.clone())
    }
}

fn long_body(words: usize) -> String {
    let mut body = String::from("<p>");
    for i in 0..words {
        body.push_str("lorem");
        body.push_str(&i.to_string());
        body.push(' ');
    }
    body.push_str("<img src='deep.png'></p>");
    body
}

fn bench_trim(c: &mut Criterion) {
    let body = long_body(500);
    let mut group = c.benchmark_group("trim_description");
    group.throughput(Throughput::Bytes(body.len() as u64));
    group.bench_function("500_words", |b| {
        b.iter(|| black_box(trim_description(black_box(&body), 25)))
    });
    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let body = long_body(500);
    let mut group = c.benchmark_group("image_scan");
    group.throughput(Throughput::Bytes(body.len() as u64));
    group.bench_function("img_near_end", |b| {
        b.iter(|| black_box(first_image_src(black_box(&body))))
    });
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let site = SiteInfo {
        tagline: "Benchmark site".to_string(),
        default_image: "https://example.com/default.png".to_string(),
    };
    let hooks = Hooks::new();
    let media = BenchMedia {
        body: long_body(500),
    };

    let item = ContentItem {
        id: ItemId::new(1),
        item_type: "post".to_string(),
        title: "Benchmark".to_string(),
        body: media.body.clone(),
        author: "Bench".to_string(),
        permalink: "https://example.com/bench".to_string(),
        ..ContentItem::default()
    };
    let ctx = PageContext::single(item);

    let mut group = c.benchmark_group("resolve_metadata");

    group.bench_function("single_item_cold_cache", |b| {
        b.iter_batched(
            MemoryCache::new,
            |cache| {
                let resolver = MetadataResolver::new(&site, &hooks, &media, &cache);
                black_box(resolver.resolve(&ctx));
            },
            BatchSize::SmallInput,
        )
    });

    let warm_cache = MemoryCache::new();
    let warm_resolver = MetadataResolver::new(&site, &hooks, &media, &warm_cache);
    warm_resolver.resolve(&ctx);
    group.bench_function("single_item_warm_cache", |b| {
        b.iter(|| black_box(warm_resolver.resolve(&ctx)))
    });

    group.finish();
}

criterion_group!(benches, bench_trim, bench_scan, bench_resolve);
criterion_main!(benches);
