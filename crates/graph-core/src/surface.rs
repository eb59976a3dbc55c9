// File: crates/graph-core/src/surface.rs
// Summary: Drawing-surface primitives consumed by renderers, plus a command-recording surface.
// Notes:
// - Coordinates are document points relative to the plot origin, y growing upwards.
// - Stroke/fill color and line width are surface state and persist across calls.

use crate::theme::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// What a text box does with text that does not fit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overflow {
    /// Reduce the font size until the text fits the box.
    ShrinkToFit,
    /// Draw at the nominal size and clip to the box.
    Truncate,
}

/// Placement of a text box. `at` is the box's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextBox {
    pub at: (f32, f32),
    pub width: f32,
    pub height: f32,
    pub align: HAlign,
    pub valign: VAlign,
    pub overflow: Overflow,
}

impl TextBox {
    pub fn new(at: (f32, f32), width: f32, height: f32) -> Self {
        Self { at, width, height, align: HAlign::Left, valign: VAlign::Top, overflow: Overflow::Truncate }
    }

    pub fn align(mut self, align: HAlign) -> Self {
        self.align = align;
        self
    }

    pub fn valign(mut self, valign: VAlign) -> Self {
        self.valign = valign;
        self
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }
}

/// Document surface a renderer issues drawing commands against.
pub trait DrawSurface {
    fn set_stroke_color(&mut self, color: Color);
    fn set_fill_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f32);

    /// Stroke from `(x1, at)` to `(x2, at)`.
    fn stroke_horizontal_line(&mut self, x1: f32, x2: f32, at: f32);
    /// Stroke from `(at, y1)` to `(at, y2)`.
    fn stroke_vertical_line(&mut self, y1: f32, y2: f32, at: f32);
    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32));

    /// Fill a rectangle whose top-left corner is `top_left`.
    fn fill_rectangle(&mut self, top_left: (f32, f32), width: f32, height: f32);
    fn fill_and_stroke_ellipse(&mut self, center: (f32, f32), radius: f32);

    fn text_box(&mut self, text: &str, options: &TextBox);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    StrokeColor(Color),
    FillColor(Color),
    LineWidth(f32),
    HorizontalLine { x1: f32, x2: f32, at: f32 },
    VerticalLine { y1: f32, y2: f32, at: f32 },
    Line { from: (f32, f32), to: (f32, f32) },
    FillRectangle { top_left: (f32, f32), width: f32, height: f32 },
    FillAndStrokeEllipse { center: (f32, f32), radius: f32 },
    TextBox { text: String, options: TextBox },
}

/// Surface that keeps every command in issue order instead of drawing.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self { Self::default() }

    pub fn clear(&mut self) { self.commands.clear(); }

    /// Recorded text boxes as `(text, options)` pairs, in draw order.
    pub fn text_boxes(&self) -> impl Iterator<Item = (&str, &TextBox)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::TextBox { text, options } => Some((text.as_str(), options)),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn set_stroke_color(&mut self, color: Color) { self.commands.push(DrawCommand::StrokeColor(color)); }

    fn set_fill_color(&mut self, color: Color) { self.commands.push(DrawCommand::FillColor(color)); }

    fn set_line_width(&mut self, width: f32) { self.commands.push(DrawCommand::LineWidth(width)); }

    fn stroke_horizontal_line(&mut self, x1: f32, x2: f32, at: f32) {
        self.commands.push(DrawCommand::HorizontalLine { x1, x2, at });
    }

    fn stroke_vertical_line(&mut self, y1: f32, y2: f32, at: f32) {
        self.commands.push(DrawCommand::VerticalLine { y1, y2, at });
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32)) {
        self.commands.push(DrawCommand::Line { from, to });
    }

    fn fill_rectangle(&mut self, top_left: (f32, f32), width: f32, height: f32) {
        self.commands.push(DrawCommand::FillRectangle { top_left, width, height });
    }

    fn fill_and_stroke_ellipse(&mut self, center: (f32, f32), radius: f32) {
        self.commands.push(DrawCommand::FillAndStrokeEllipse { center, radius });
    }

    fn text_box(&mut self, text: &str, options: &TextBox) {
        self.commands.push(DrawCommand::TextBox { text: text.to_owned(), options: *options });
    }
}
