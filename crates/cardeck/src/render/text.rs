//! Text wrapping, measurement, and effect drawing.

use ab_glyph::{Font, ScaleFont};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};

use crate::render::fonts::RenderFont;

const OUTLINE_COLOR: Rgb<u8> = Rgb([0, 0, 0]);
const SHADOW_COLOR: Rgb<u8> = Rgb([0, 0, 0]);
const SHADOW_OFFSET: i32 = 6;
/// Extra spacing between wrapped lines, as a fraction of line height.
const LINE_GAP_RATIO: f32 = 0.2;
/// Outline thickness steps up for display-sized text.
const THICK_OUTLINE_THRESHOLD: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Measured pixel width of a single line.
pub fn measure_line_width(font: &RenderFont, text: &str) -> u32 {
    let (width, _) = text_size(font.scale, &font.font, text);
    width as u32
}

/// Line height from the face's ascent/descent metrics, so that height
/// depends only on the font and size, never on which characters are present.
pub fn line_height(font: &RenderFont) -> u32 {
    let scaled = font.font.as_scaled(font.scale);
    (scaled.ascent() + scaled.descent().abs()).round() as u32
}

fn line_gap(font: &RenderFont) -> u32 {
    (line_height(font) as f32 * LINE_GAP_RATIO) as u32
}

/// Greedy word-wrap: words accumulate into the current line while its
/// measured width stays within `max_width`. A single word wider than the
/// budget is placed alone on its own line rather than dropped.
pub fn wrap_text(text: &str, font: &RenderFont, max_width: u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if measure_line_width(font, &candidate) <= max_width {
            current = candidate;
        } else if current.is_empty() {
            // Over-wide single word: forced break, never dropped.
            lines.push(word.to_string());
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Total height of `line_count` wrapped lines including inter-line gaps.
pub fn measure_lines_height(line_count: usize, font: &RenderFont) -> u32 {
    if line_count == 0 {
        return 0;
    }
    let count = line_count as u32;
    count * line_height(font) + (count - 1) * line_gap(font)
}

/// Wrap and measure in one step.
pub fn measure_text_height(text: &str, font: &RenderFont, max_width: u32) -> u32 {
    measure_lines_height(wrap_text(text, font, max_width).len(), font)
}

/// Draw a glyph run with legibility effects and return the height used.
///
/// Every line is stamped first as a thick black outline (a full square ring
/// of integer offsets, the zero offset skipped), optionally followed by an
/// offset drop shadow, then the fill color on top.
#[allow(clippy::too_many_arguments)]
pub fn draw_text_with_effects(
    img: &mut RgbImage,
    text: &str,
    anchor_x: i32,
    top: i32,
    font: &RenderFont,
    color: Rgb<u8>,
    align: Align,
    max_width: u32,
    with_shadow: bool,
) -> u32 {
    let lines = wrap_text(text, font, max_width);
    if lines.is_empty() {
        return 0;
    }

    let lh = line_height(font) as i32;
    let gap = line_gap(font) as i32;
    let radius: i32 = if font.size > THICK_OUTLINE_THRESHOLD { 4 } else { 3 };

    let mut y = top;
    for line in &lines {
        let width = measure_line_width(font, line) as i32;
        let x = match align {
            Align::Center => anchor_x - width / 2,
            Align::Right => anchor_x - width,
            Align::Left => anchor_x,
        };

        for dx in -radius..=radius {
            for dy in -radius..=radius {
                if dx != 0 || dy != 0 {
                    draw_text_mut(img, OUTLINE_COLOR, x + dx, y + dy, font.scale, &font.font, line);
                }
            }
        }
        if with_shadow {
            draw_text_mut(
                img,
                SHADOW_COLOR,
                x + SHADOW_OFFSET,
                y + SHADOW_OFFSET,
                font.scale,
                &font.font,
                line,
            );
        }
        draw_text_mut(img, color, x, y, font.scale, &font.font, line);

        y += lh + gap;
    }

    measure_lines_height(lines.len(), font)
}
