use super::*;
use crate::render::footer;
use crate::render::subtitle_color;
use crate::theme::Color;
use image::RgbImage;

#[test]
fn subtitle_contrast_policy() {
    let mut theme = Theme::violet();

    assert_eq!(
        subtitle_color(&theme, BackgroundStyle::Gradient),
        Color::WHITE
    );

    theme.background = Color::BLACK;
    assert_eq!(subtitle_color(&theme, BackgroundStyle::Solid), Color::WHITE);

    theme.background = Color::WHITE;
    assert_eq!(subtitle_color(&theme, BackgroundStyle::Solid), Color::BLACK);

    // Any non-black solid background counts as light.
    theme.background = Color::rgb(0x12, 0x34, 0x56);
    assert_eq!(subtitle_color(&theme, BackgroundStyle::Solid), Color::BLACK);
}

#[test]
fn indicator_dots_reflect_slide_position() {
    let theme = Theme::violet();
    let mut img = RgbImage::from_pixel(1080, 1080, Color::WHITE.to_rgb());
    footer::draw_indicator_dots(&mut img, &theme, 3);

    // Dot centers: x = 40 + i*40 + 15, y = 1080 - 70 + 15.
    let y = 1025;
    for i in 0..10u32 {
        let x = 40 + i * 40 + 15;
        let pixel = img.get_pixel(x, y);
        let expected = if i < 3 {
            theme.primary.to_rgb()
        } else {
            Color::rgb(0xe0, 0xe0, 0xe0).to_rgb()
        };
        assert_eq!(*pixel, expected, "dot {i}");
    }
}

#[test]
fn first_slide_fills_exactly_one_dot() {
    let theme = Theme::midnight();
    let mut img = RgbImage::from_pixel(1080, 1080, Color::WHITE.to_rgb());
    footer::draw_indicator_dots(&mut img, &theme, 1);
    let y = 1025;
    assert_eq!(*img.get_pixel(55, y), theme.primary.to_rgb());
    assert_eq!(*img.get_pixel(95, y), Color::rgb(0xe0, 0xe0, 0xe0).to_rgb());
}

#[test]
fn rounded_backing_blends_at_half_opacity() {
    let mut img = RgbImage::from_pixel(20, 20, Color::WHITE.to_rgb());
    footer::fill_rounded_rect(&mut img, 2.0, 2.0, 18.0, 18.0, 5.0, Color::BLACK, 0.5);

    // Center pixel is a straight 50/50 blend.
    assert_eq!(img.get_pixel(10, 10).0, [127, 127, 127]);
    // Corners of the image stay untouched.
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255]);
    assert_eq!(img.get_pixel(19, 19).0, [255, 255, 255]);
    // The rectangle's sharp corner is rounded away.
    assert_eq!(img.get_pixel(2, 2).0, [255, 255, 255]);
}

#[test]
fn gradient_background_rows_match_theme_stops() {
    let theme = Theme::violet();
    let renderer = Renderer::new(theme.clone());
    let slide = Slide::new(1).with_background(BackgroundStyle::Gradient);
    let out = renderer.render_slide(&slide, None);
    if out.degraded.is_some() {
        return;
    }
    // Top row carries the primary stop; text never reaches row zero.
    assert_eq!(*out.image.get_pixel(5, 0), theme.primary.to_rgb());
}

#[test]
fn solid_background_uses_theme_background_color() {
    let theme = Theme::midnight();
    let renderer = Renderer::new(theme.clone());
    let slide = Slide::new(1).with_background(BackgroundStyle::Solid);
    let out = renderer.render_slide(&slide, None);
    if out.degraded.is_some() {
        return;
    }
    assert_eq!(*out.image.get_pixel(5, 0), theme.background.to_rgb());
}
