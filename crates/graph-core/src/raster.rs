// File: crates/graph-core/src/raster.rs
// Summary: DrawSurface backed by a Skia CPU raster surface; maps plot points to pixels.
// Notes:
// - Document points have their origin at the plot origin with y growing up;
//   pixels have their origin top-left with y growing down.
// - Text is painted with the current fill color.

use skia_safe as skia;

use crate::error::{ChartError, Result};
use crate::layout::Layout;
use crate::surface::{DrawSurface, HAlign, Overflow, TextBox, VAlign};
use crate::text::TextShaper;
use crate::theme::Color;
use crate::types::FONT_SIZE;

pub struct SkiaSurface {
    surface: skia::Surface,
    /// Plot origin in document points, measured from the document's bottom-left.
    origin: (f32, f32),
    /// Document height in points, for flipping y.
    doc_height: f32,
    /// Pixels per document point.
    scale: f32,
    stroke: skia::Paint,
    fill: skia::Paint,
    line_width: f32,
    shaper: TextShaper,
}

impl SkiaSurface {
    /// Surface covering `layout.bounds` at `scale` pixels per point, cleared to `background`.
    pub fn for_layout(layout: &Layout, scale: f32, background: Color) -> Result<Self> {
        let scale = scale.max(0.01);
        let width = (layout.bounds.width * scale).ceil().max(1.0) as i32;
        let height = (layout.bounds.height * scale).ceil().max(1.0) as i32;
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| ChartError::Surface(format!("failed to create {width}x{height} raster surface")))?;
        surface.canvas().clear(background.to_skia());
        tracing::debug!(width, height, scale, "created raster surface");

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(scale);
        stroke.set_color(Color::BLACK.to_skia());

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(Color::BLACK.to_skia());

        Ok(Self {
            surface,
            origin: layout.plot_origin(),
            doc_height: layout.bounds.height,
            scale,
            stroke,
            fill,
            line_width: 1.0,
            shaper: TextShaper::new(),
        })
    }

    pub fn width(&self) -> i32 { self.surface.width() }

    pub fn height(&self) -> i32 { self.surface.height() }

    #[inline]
    fn to_px(&self, (x, y): (f32, f32)) -> (f32, f32) {
        (
            (self.origin.0 + x) * self.scale,
            (self.doc_height - (self.origin.1 + y)) * self.scale,
        )
    }

    /// Encode the current contents as PNG.
    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ChartError::Surface("encode PNG failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Read back unpremultiplied RGBA8 pixels: (pixels, width, height, stride).
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, i32, i32, usize)> {
        let (w, h) = (self.width(), self.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::Surface("read_pixels failed".into()));
        }
        Ok((pixels, w, h, stride))
    }
}

impl DrawSurface for SkiaSurface {
    fn set_stroke_color(&mut self, color: Color) { self.stroke.set_color(color.to_skia()); }

    fn set_fill_color(&mut self, color: Color) { self.fill.set_color(color.to_skia()); }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width.max(0.0);
        self.stroke.set_stroke_width(self.line_width * self.scale);
    }

    fn stroke_horizontal_line(&mut self, x1: f32, x2: f32, at: f32) {
        self.stroke_line((x1, at), (x2, at));
    }

    fn stroke_vertical_line(&mut self, y1: f32, y2: f32, at: f32) {
        self.stroke_line((at, y1), (at, y2));
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32)) {
        let (a, b) = (self.to_px(from), self.to_px(to));
        self.surface.canvas().draw_line(a, b, &self.stroke);
    }

    fn fill_rectangle(&mut self, top_left: (f32, f32), width: f32, height: f32) {
        let (l, t) = self.to_px(top_left);
        let (r, b) = self.to_px((top_left.0 + width, top_left.1 - height));
        let rect = skia::Rect::from_ltrb(l.min(r), t.min(b), l.max(r), t.max(b));
        self.surface.canvas().draw_rect(rect, &self.fill);
    }

    fn fill_and_stroke_ellipse(&mut self, center: (f32, f32), radius: f32) {
        let c = self.to_px(center);
        let r = radius * self.scale;
        let canvas = self.surface.canvas();
        canvas.draw_circle(c, r, &self.fill);
        canvas.draw_circle(c, r, &self.stroke);
    }

    fn text_box(&mut self, text: &str, options: &TextBox) {
        if text.is_empty() { return; }
        let (left, top) = self.to_px(options.at);
        let (w, h) = (options.width * self.scale, options.height * self.scale);
        if w <= 0.0 || h <= 0.0 { return; }

        let nominal = FONT_SIZE * self.scale;
        let size = match options.overflow {
            Overflow::ShrinkToFit => self.shaper.fit_size(text, nominal, w, h),
            Overflow::Truncate => nominal,
        };
        let (tw, th) = self.shaper.measure(text, size);
        let x = match options.align {
            HAlign::Left => left,
            HAlign::Center => left + (w - tw) * 0.5,
            HAlign::Right => left + w - tw,
        };
        let y = match options.valign {
            VAlign::Top => top,
            VAlign::Center => top + (h - th) * 0.5,
            VAlign::Bottom => top + h - th,
        };

        let color = self.fill.color();
        let canvas = self.surface.canvas();
        canvas.save();
        if options.overflow == Overflow::Truncate {
            canvas.clip_rect(skia::Rect::from_xywh(left, top, w, h), None, Some(true));
        }
        self.shaper.draw_at(canvas, text, x, y, size, color);
        canvas.restore();
    }
}
