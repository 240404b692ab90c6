//! Background fills: flat color or a vertical two-stop gradient.

use image::RgbImage;

use crate::deck::BackgroundStyle;
use crate::theme::{Color, Theme};

pub fn paint(img: &mut RgbImage, theme: &Theme, style: BackgroundStyle) {
    match style {
        BackgroundStyle::Gradient => fill_gradient(img, theme.primary, theme.secondary),
        BackgroundStyle::Solid => fill_solid(img, theme.background),
    }
}

pub fn fill_solid(img: &mut RgbImage, color: Color) {
    let px = color.to_rgb();
    for pixel in img.pixels_mut() {
        *pixel = px;
    }
}

/// Linear interpolation from `top` to `bottom`, one blend per scanline.
pub fn fill_gradient(img: &mut RgbImage, top: Color, bottom: Color) {
    let (width, height) = img.dimensions();
    for y in 0..height {
        let ratio = y as f32 / height as f32;
        let row = top.lerp(bottom, ratio).to_rgb();
        for x in 0..width {
            img.put_pixel(x, y, row);
        }
    }
}
