// File: crates/grapher-core/src/text.rs
// Summary: Caption shaping/measuring via Skia textlayout, honoring the configured font family.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::style::FontSpec;

// Tried after the configured family when it is not installed.
const FALLBACK_FAMILIES: [&str; 5] = ["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(font: &FontSpec, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size((font.size as f32).max(1.0));
        ts.set_color(color);
        let mut families = Vec::with_capacity(FALLBACK_FAMILIES.len() + 1);
        families.push(font.family.as_str());
        families.extend(FALLBACK_FAMILIES);
        ts.set_font_families(families.as_slice());
        ts
    }

    pub fn layout(&self, text: &str, font: &FontSpec, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(font, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// `(width, height)` of the laid-out text.
    pub fn measure(&self, text: &str, font: &FontSpec) -> (f64, f64) {
        let p = self.layout(text, font, skia::Color::TRANSPARENT);
        (p.longest_line() as f64, p.height() as f64)
    }

    /// Paragraphs paint from their top-left corner.
    pub fn draw_top_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, font: &FontSpec, color: skia::Color) {
        let mut p = self.layout(text, font, color);
        p.paint(canvas, (x, y));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
