pub mod background;
pub mod fonts;
pub mod footer;
pub mod layout;
pub mod text;

#[cfg(test)]
mod tests;

use image::{Rgb, RgbImage};
use rayon::prelude::*;

use crate::content;
use crate::deck::{BackgroundStyle, Layout, Slide};
use crate::error::Result;
use crate::theme::{Color, Theme};

use fonts::{FontLibrary, RenderFont};
use layout::{FontSizes, SECTION_SPACING};
use text::Align;

pub const CANVAS_WIDTH: u32 = 1080;
pub const CANVAS_HEIGHT: u32 = 1080;
/// Maximum text width before platform chrome may crop it.
pub const SAFE_ZONE: u32 = 950;
pub const TEXT_PADDING: u32 = 80;
/// Bottom strip reserved for the indicator dots and watermark.
pub const BOTTOM_RESERVE: u32 = 120;

/// Cursor may not pass this close to the reserved footer before bullets
/// stop being drawn.
const BULLET_BAILOUT_MARGIN: i32 = 50;
const LEFT_INSET: i32 = (TEXT_PADDING + 20) as i32;
const FALLBACK_BACKGROUND: Color = Color::rgb(0xcc, 0x00, 0x00);

/// The outcome of rendering one slide: always exactly one bitmap.
pub struct RenderedSlide {
    pub image: RgbImage,
    /// Trailing bullets skipped when the vertical budget ran out.
    pub dropped_bullets: usize,
    /// Set when the slide could not be drawn and a diagnostic placeholder
    /// was produced instead.
    pub degraded: Option<String>,
}

/// Subtitle color against the slide background. Gradients always take pure
/// white; solid backgrounds take white on black, black otherwise. A binary
/// heuristic, not a computed contrast ratio.
pub fn subtitle_color(theme: &Theme, style: BackgroundStyle) -> Color {
    match style {
        BackgroundStyle::Gradient => Color::WHITE,
        BackgroundStyle::Solid => {
            if theme.background == Color::BLACK {
                Color::WHITE
            } else {
                Color::BLACK
            }
        }
    }
}

/// Renders slides for one theme. Holds no per-slide state; the font
/// library's sticky family slot is the only thing that warms up across
/// calls.
pub struct Renderer {
    theme: Theme,
    fonts: FontLibrary,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            fonts: FontLibrary::new(),
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Render one slide. Never fails: any internal error is converted into
    /// a diagnostic placeholder bitmap at this boundary.
    pub fn render_slide(&self, slide: &Slide, custom_sizes: Option<&FontSizes>) -> RenderedSlide {
        match self.try_render(slide, custom_sizes) {
            Ok(rendered) => rendered,
            Err(err) => self.fallback_bitmap(slide, &err.to_string()),
        }
    }

    /// Render every slide independently, in parallel, preserving input
    /// order. One slide's failure never touches its siblings.
    pub fn render_all(&self, slides: &[Slide]) -> Vec<RenderedSlide> {
        self.render_all_with(slides, None)
    }

    pub fn render_all_with(
        &self,
        slides: &[Slide],
        custom_sizes: Option<&FontSizes>,
    ) -> Vec<RenderedSlide> {
        slides
            .par_iter()
            .map(|slide| self.render_slide(slide, custom_sizes))
            .collect()
    }

    fn try_render(&self, slide: &Slide, custom_sizes: Option<&FontSizes>) -> Result<RenderedSlide> {
        let mut img = RgbImage::new(CANVAS_WIDTH, CANVAS_HEIGHT);
        background::paint(&mut img, &self.theme, slide.background);

        let content_top = TEXT_PADDING as i32;
        let content_bottom = (CANVAS_HEIGHT - BOTTOM_RESERVE) as i32;
        let available_height = (content_bottom - content_top) as u32;

        let optimized = content::optimize(slide);

        // Explicit sizes bypass scaling and centering; the caller owns fit.
        let (sizes, top_margin) = match custom_sizes {
            Some(sizes) => (*sizes, 0),
            None => {
                let plan = layout::plan(&optimized, available_height);
                (plan.sizes, plan.top_margin)
            }
        };

        let (anchor_x, align) = match optimized.layout {
            Layout::Center => ((CANVAS_WIDTH / 2) as i32, Align::Center),
            Layout::Left => (LEFT_INSET, Align::Left),
            Layout::Right => ((CANVAS_WIDTH - TEXT_PADDING - 20) as i32, Align::Right),
        };

        let mut y = content_top + top_margin as i32;
        let mut dropped_bullets = 0usize;

        if let Some(title) = nonempty(&optimized.title) {
            let font = self.measurable_font(&self.theme.font_family, sizes.title, title)?;
            let height = text::draw_text_with_effects(
                &mut img,
                title,
                anchor_x,
                y,
                &font,
                self.theme.text.to_rgb(),
                align,
                SAFE_ZONE,
                true,
            );
            y += height as i32 + SECTION_SPACING as i32;
        }

        if let Some(subtitle) = nonempty(&optimized.subtitle) {
            let font = self.measurable_font(&self.theme.font_family, sizes.subtitle, subtitle)?;
            let color = subtitle_color(&self.theme, optimized.background);
            let height = text::draw_text_with_effects(
                &mut img,
                subtitle,
                anchor_x,
                y,
                &font,
                color.to_rgb(),
                align,
                SAFE_ZONE,
                true,
            );
            y += height as i32 + SECTION_SPACING as i32;
        }

        if let Some(body) = nonempty(&optimized.body) {
            let font = self.measurable_font(&self.theme.font_family, sizes.body, body)?;
            let height = text::draw_text_with_effects(
                &mut img,
                body,
                anchor_x,
                y,
                &font,
                self.theme.text.to_rgb(),
                align,
                SAFE_ZONE,
                false,
            );
            y += height as i32 + SECTION_SPACING as i32;
        }

        if !optimized.bullets.is_empty() {
            let font = self.measurable_font(&self.theme.font_family, sizes.bullet, "•")?;
            // Bullets hang off the anchor and always read left-to-right.
            let bullet_x = if optimized.layout == Layout::Center {
                anchor_x
            } else {
                anchor_x + 20
            };
            for (index, bullet) in optimized.bullets.iter().enumerate() {
                if y > content_bottom - BULLET_BAILOUT_MARGIN {
                    // Accepted degradation: skip the rest rather than draw
                    // over the reserved footer.
                    dropped_bullets = optimized.bullets.len() - index;
                    break;
                }
                let bullet_text = format!("• {bullet}");
                let height = text::draw_text_with_effects(
                    &mut img,
                    &bullet_text,
                    bullet_x,
                    y,
                    &font,
                    self.theme.text.to_rgb(),
                    Align::Left,
                    SAFE_ZONE - 40,
                    false,
                );
                y += height as i32 + (SECTION_SPACING / 2) as i32;
            }
        }

        footer::draw_indicator_dots(&mut img, &self.theme, slide.number);
        let watermark_font = self
            .fonts
            .resolve(&self.theme.font_family, footer::WATERMARK_FONT_SIZE)?;
        footer::draw_watermark(&mut img, &self.theme, &watermark_font);

        Ok(RenderedSlide {
            image: img,
            dropped_bullets,
            degraded: None,
        })
    }

    /// Resolve a font and verify the sample measures; one retry with a
    /// neutral face covers unmeasurable glyph runs.
    fn measurable_font(&self, family: &str, size: u32, sample: &str) -> Result<RenderFont> {
        let font = self.fonts.resolve(family, size)?;
        if sample.trim().is_empty() || text::measure_line_width(&font, sample) > 0 {
            return Ok(font);
        }
        self.fonts.default_font(size).map_err(|err| {
            crate::error::Error::Measurement(format!(
                "glyph run measured empty and the retry face failed: {err}"
            ))
        })
    }

    /// Worst-case output: a solid red canvas with a best-effort diagnostic
    /// line, so a batch always yields one bitmap per slide.
    fn fallback_bitmap(&self, slide: &Slide, reason: &str) -> RenderedSlide {
        let mut img = RgbImage::from_pixel(
            CANVAS_WIDTH,
            CANVAS_HEIGHT,
            Rgb([FALLBACK_BACKGROUND.r, FALLBACK_BACKGROUND.g, FALLBACK_BACKGROUND.b]),
        );
        let message = format!("slide {} failed: {reason}", slide.number);
        if let Ok(font) = self.fonts.default_font(24) {
            text::draw_text_with_effects(
                &mut img,
                &message,
                TEXT_PADDING as i32,
                (CANVAS_HEIGHT / 2) as i32,
                &font,
                Color::WHITE.to_rgb(),
                Align::Left,
                SAFE_ZONE,
                false,
            );
        }
        RenderedSlide {
            image: img,
            dropped_bullets: 0,
            degraded: Some(message),
        }
    }
}

fn nonempty(text: &Option<String>) -> Option<&str> {
    text.as_deref().map(str::trim).filter(|t| !t.is_empty())
}
