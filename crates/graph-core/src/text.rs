// File: crates/graph-core/src/text.rs
// Summary: Text shaping via Skia textlayout; measures and fits label text into fixed boxes.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Smallest font size shrink-to-fit will go down to.
const MIN_FONT_SIZE: f32 = 1.0;
/// Multiplicative step used while shrinking.
const SHRINK_STEP: f32 = 0.9;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(MIN_FONT_SIZE));
        ts.set_color(color);
        ts.set_font_families(&["Helvetica", "Arial", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        pstyle.set_max_lines(1);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Width and height of a single line of `text` at `size`.
    pub fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        let p = self.layout(text, size, skia::Color::TRANSPARENT);
        (p.longest_line(), p.height())
    }

    /// Largest size `<= nominal` at which `text` fits `width` x `height`.
    pub fn fit_size(&self, text: &str, nominal: f32, width: f32, height: f32) -> f32 {
        let mut size = nominal.max(MIN_FONT_SIZE);
        loop {
            let (w, h) = self.measure(text, size);
            if (w <= width && h <= height) || size <= MIN_FONT_SIZE {
                return size;
            }
            size = (size * SHRINK_STEP).max(MIN_FONT_SIZE);
        }
    }

    /// Paint `text` with its top-left corner at `(x, y)` in pixel space.
    pub fn draw_at(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let mut p = self.layout(text, size, color);
        p.paint(canvas, (x, y));
    }
}
