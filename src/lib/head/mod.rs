//! Head-section markup: serialising a metadata map into `<meta>` lines
//! and a priority-ordered pipeline of emitters writing into the page's
//! output stream.

use std::io;

use color_eyre::Section;

use crate::{
    hooks::{Hooks, names},
    metadata::{MetadataMap, MetadataResolver},
    page::PageContext,
};

/// Open Graph markup is emitted early in the head section.
pub const OG_HEAD_PRIORITY: u8 = 1;

/// One `<meta property='og:{key}' content='{value}' />` line per entry,
/// newline-joined with a trailing newline, after the final markup hook.
/// Values are emitted verbatim; escaping is owned by whoever produced
/// them upstream.
pub fn render_metadata(metadata: &MetadataMap, hooks: &Hooks) -> String {
    let lines: Vec<String> = metadata
        .iter()
        .map(|(property, content)| {
            format!("<meta property='og:{property}' content='{content}' />")
        })
        .collect();

    let markup = hooks.filter_text(names::HEAD_METADATA, lines.join("\n"));
    format!("{markup}\n")
}

type Emitter<'a> = Box<dyn Fn(&PageContext, &mut dyn io::Write) -> io::Result<()> + 'a>;

/// Emitters for the head section, run in ascending priority. Emitters
/// sharing a priority keep their registration order.
#[derive(Default)]
pub struct HeadPipeline<'a> {
    emitters: Vec<(u8, Emitter<'a>)>,
}

impl<'a> HeadPipeline<'a> {
    pub fn new() -> Self {
        Self {
            emitters: Vec::new(),
        }
    }

    pub fn register<F>(&mut self, priority: u8, emit: F)
    where
        F: Fn(&PageContext, &mut dyn io::Write) -> io::Result<()> + 'a,
    {
        let at = self
            .emitters
            .iter()
            .position(|(p, _)| *p > priority)
            .unwrap_or(self.emitters.len());
        self.emitters.insert(at, (priority, Box::new(emit)));
    }

    pub fn render(&self, ctx: &PageContext, out: &mut dyn io::Write) -> color_eyre::Result<()> {
        for (_, emit) in &self.emitters {
            emit(ctx, &mut *out).with_note(|| "While emitting head-section markup")?;
        }
        Ok(())
    }
}

/// Register the Open Graph emitter on a head pipeline.
pub fn register_head_metadata<'a>(
    pipeline: &mut HeadPipeline<'a>,
    resolver: &'a MetadataResolver<'a>,
) {
    pipeline.register(OG_HEAD_PRIORITY, move |ctx, out| {
        let metadata = resolver.resolve(ctx);
        out.write_all(render_metadata(&metadata, resolver.hooks()).as_bytes())
    });
}

#[cfg(test)]
mod tests;
