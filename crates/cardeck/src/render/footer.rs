//! Slide chrome along the bottom margin: position-indicator dots and the
//! brand watermark.

use image::RgbImage;
use imageproc::drawing::{draw_filled_circle_mut, draw_text_mut, text_size};

use crate::render::fonts::RenderFont;
use crate::theme::{Color, Theme};

pub const MAX_INDICATOR_DOTS: u32 = 10;
pub const WATERMARK_FONT_SIZE: u32 = 18;

const INDICATOR_DIAMETER: i32 = 30;
const INDICATOR_GAP: i32 = 10;
const INDICATOR_MARGIN: i32 = 40;
const INACTIVE_DOT: Color = Color::rgb(0xe0, 0xe0, 0xe0);

const WATERMARK_INSET: i32 = 30;
const WATERMARK_PADDING: f32 = 8.0;
const WATERMARK_RADIUS: f32 = 5.0;
const WATERMARK_ALPHA: f32 = 0.5;

/// Progress affordance: dots with index below the slide's ordinal are
/// filled with the theme primary, the rest stay neutral gray.
pub fn draw_indicator_dots(img: &mut RgbImage, theme: &Theme, slide_number: u32) {
    let height = img.height() as i32;
    let y = height - INDICATOR_MARGIN - INDICATOR_DIAMETER;
    let radius = INDICATOR_DIAMETER / 2;

    for i in 0..MAX_INDICATOR_DOTS {
        let x = INDICATOR_MARGIN + i as i32 * (INDICATOR_DIAMETER + INDICATOR_GAP);
        let color = if i < slide_number {
            theme.primary
        } else {
            INACTIVE_DOT
        };
        draw_filled_circle_mut(img, (x + radius, y + radius), radius, color.to_rgb());
    }
}

/// Brand watermark bottom-right, over a semi-transparent rounded backing
/// sized to the measured text plus padding.
pub fn draw_watermark(img: &mut RgbImage, theme: &Theme, font: &RenderFont) {
    let text = theme.watermark();
    let (text_w, text_h) = text_size(font.scale, &font.font, &text);
    let (text_w, text_h) = (text_w as i32, text_h as i32);

    let x = img.width() as i32 - text_w - WATERMARK_INSET;
    let y = img.height() as i32 - text_h - WATERMARK_INSET;

    fill_rounded_rect(
        img,
        x as f32 - WATERMARK_PADDING,
        y as f32 - WATERMARK_PADDING,
        (x + text_w) as f32 + WATERMARK_PADDING,
        (y + text_h) as f32 + WATERMARK_PADDING,
        WATERMARK_RADIUS,
        theme.background,
        WATERMARK_ALPHA,
    );
    draw_text_mut(img, theme.text.to_rgb(), x, y, font.scale, &font.font, &text);
}

/// Alpha-blend a rounded rectangle over the existing pixels.
pub(crate) fn fill_rounded_rect(
    img: &mut RgbImage,
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
    radius: f32,
    color: Color,
    alpha: f32,
) {
    let inner_left = left + radius;
    let inner_right = right - radius;
    let inner_top = top + radius;
    let inner_bottom = bottom - radius;

    let x0 = left.floor().max(0.0) as u32;
    let y0 = top.floor().max(0.0) as u32;
    let x1 = (right.ceil().max(0.0) as u32).min(img.width());
    let y1 = (bottom.ceil().max(0.0) as u32).min(img.height());

    for y in y0..y1 {
        for x in x0..x1 {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            let dx = if px < inner_left {
                inner_left - px
            } else if px > inner_right {
                px - inner_right
            } else {
                0.0
            };
            let dy = if py < inner_top {
                inner_top - py
            } else if py > inner_bottom {
                py - inner_bottom
            } else {
                0.0
            };
            if dx * dx + dy * dy <= radius * radius {
                blend_pixel(img, x, y, color, alpha);
            }
        }
    }
}

fn blend_pixel(img: &mut RgbImage, x: u32, y: u32, color: Color, alpha: f32) {
    if x >= img.width() || y >= img.height() {
        return;
    }
    let pixel = img.get_pixel_mut(x, y);
    let blend = |dst: u8, src: u8| (dst as f32 * (1.0 - alpha) + src as f32 * alpha) as u8;
    pixel.0 = [
        blend(pixel.0[0], color.r),
        blend(pixel.0[1], color.g),
        blend(pixel.0[2], color.b),
    ];
}
