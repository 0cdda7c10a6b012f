//! Icon style configuration
//!
//! The generated launcher icon is a fixed two-circle composition: an accent
//! disc with an outline stroke filling the canvas, and a solid glyph dot at
//! the center. This module carries the colors and proportions of that
//! composition; the default is the Android-green preset.

use image::Rgba;
use std::str::FromStr;

/// Drawing parameters for one launcher icon.
#[derive(Debug, Clone)]
pub struct IconStyle {
    /// Fill color of the background disc.
    pub background: Rgba<u8>,

    /// Color of the stroke along the disc's rim.
    pub outline: Rgba<u8>,

    /// Stroke width of the rim, in pixels.
    pub outline_width: u32,

    /// Fill color of the centered glyph dot.
    pub glyph: Rgba<u8>,

    /// Glyph diameter as a fraction of the canvas edge length.
    pub glyph_ratio: f32,
}

impl Default for IconStyle {
    /// Android-green placeholder preset: `#3DDC84` disc with a `#2CA56C`
    /// two-pixel rim and a white dot spanning a third of the canvas.
    fn default() -> Self {
        Self {
            background: parse_css_color("#3DDC84"),
            outline: parse_css_color("#2CA56C"),
            outline_width: 2,
            glyph: parse_css_color("#FFFFFF"),
            glyph_ratio: 1.0 / 3.0,
        }
    }
}

/// Parse a CSS color string into an opaque RGBA pixel, falling back to
/// white when the string is not a valid color.
pub fn parse_css_color(value: &str) -> Rgba<u8> {
    css_color::Srgb::from_str(value)
        .map(|color| {
            Rgba([
                (color.red * 255.) as u8,
                (color.green * 255.) as u8,
                (color.blue * 255.) as u8,
                255,
            ])
        })
        .unwrap_or(Rgba([255, 255, 255, 255]))
}
