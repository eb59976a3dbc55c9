// File: crates/graph-core/src/theme.rs
// Summary: Named chart color themes and the hex RGB color type used by surfaces.

use std::fmt;

use skia_safe as skia;

/// Opaque RGB color, written as six hex digits (`"1f77b4"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    /// Parse `rrggbb`, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() { return None; }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_skia(self) -> skia::Color {
        skia::Color::from_argb(255, self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub title: Color,
    pub axes: Color,
    pub markers: Color,
    /// Per-series colors, cycled by series index.
    pub series: Vec<Color>,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::WHITE,
            title: Color::rgb(0x33, 0x33, 0x33),
            axes: Color::rgb(0x66, 0x66, 0x66),
            markers: Color::rgb(0x99, 0x99, 0x99),
            series: vec![
                Color::rgb(0x1f, 0x77, 0xb4),
                Color::rgb(0xff, 0x7f, 0x0e),
                Color::rgb(0x2c, 0xa0, 0x2c),
                Color::rgb(0xd6, 0x27, 0x28),
                Color::rgb(0x94, 0x67, 0xbd),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            title: Color::rgb(235, 235, 245),
            axes: Color::rgb(180, 180, 190),
            markers: Color::rgb(150, 150, 160),
            series: vec![
                Color::rgb(64, 160, 255),
                Color::rgb(40, 200, 120),
                Color::rgb(255, 230, 70),
                Color::rgb(220, 80, 80),
            ],
        }
    }

    pub fn solarized_light() -> Self {
        // Base colors from Solarized light palette
        Self {
            name: "solarized-light",
            background: Color::rgb(0xfd, 0xf6, 0xe3), // base3
            title: Color::rgb(0x00, 0x2b, 0x36),      // base03
            axes: Color::rgb(0x65, 0x7b, 0x83),       // base00
            markers: Color::rgb(0x93, 0xa1, 0xa1),    // base1
            series: vec![
                Color::rgb(0x26, 0x8b, 0xd2), // blue
                Color::rgb(0x2a, 0xa1, 0x98), // cyan
                Color::rgb(0xcb, 0x4b, 0x16), // orange
                Color::rgb(0xdc, 0x32, 0x2f), // red
            ],
        }
    }

    /// Color for the series at `index`, cycling through the palette.
    pub fn series_color(&self, index: usize) -> Color {
        if self.series.is_empty() { return Color::BLACK; }
        self.series[index % self.series.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::solarized_light()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
