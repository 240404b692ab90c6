//! One-pass layout planning.
//!
//! Content height is estimated from character counts alone (no wrap pass),
//! then a single scale factor shrinks every base font size until the
//! estimate fits the available band with breathing room. This trades a
//! small risk of residual overflow, absorbed by truncation and the bullet
//! bailout, for cost independent of text length.

use serde::{Deserialize, Serialize};

use crate::deck::Slide;

pub const MIN_FONT_SIZE: u32 = 24;
pub const MAX_FONT_SIZE: u32 = 80;
pub const SECTION_SPACING: u32 = 60;
pub const LINE_SPACING_MULTIPLIER: f32 = 1.2;

/// Fraction of the available band the estimate is allowed to fill.
const HEIGHT_BUDGET_RATIO: f32 = 0.8;
/// Legibility floor for the scale factor.
const MIN_SCALE: f32 = 0.6;
/// Rough characters-per-line divisor for the line estimate.
const CHARS_PER_LINE: usize = 50;

const BASE_TITLE: f32 = 72.0;
const BASE_SUBTITLE: f32 = 48.0;
const BASE_BODY: f32 = 36.0;
const BASE_BULLET: f32 = 32.0;

/// Per-element pixel font sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSizes {
    pub title: u32,
    pub subtitle: u32,
    pub body: u32,
    pub bullet: u32,
}

impl FontSizes {
    pub const BASE: FontSizes = FontSizes {
        title: 72,
        subtitle: 48,
        body: 36,
        bullet: 32,
    };
}

/// The planner's output: bounded font sizes plus a centering margin.
/// Derived fresh per render call; never cached across slides.
#[derive(Debug, Clone, Copy)]
pub struct LayoutPlan {
    pub sizes: FontSizes,
    pub top_margin: u32,
}

fn estimated_lines(char_count: usize) -> usize {
    (char_count / CHARS_PER_LINE).max(1)
}

fn element_height(base_size: f32, char_count: usize) -> f32 {
    estimated_lines(char_count) as f32 * base_size * LINE_SPACING_MULTIPLIER
        + SECTION_SPACING as f32
}

fn present(text: &Option<String>) -> Option<usize> {
    text.as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| t.chars().count())
}

/// Estimate total content height and derive scaled font sizes plus a
/// vertical centering margin for the slide.
pub fn plan(slide: &Slide, available_height: u32) -> LayoutPlan {
    let mut estimated = 0.0f32;
    if let Some(chars) = present(&slide.title) {
        estimated += element_height(BASE_TITLE, chars);
    }
    if let Some(chars) = present(&slide.subtitle) {
        estimated += element_height(BASE_SUBTITLE, chars);
    }
    if let Some(chars) = present(&slide.body) {
        estimated += element_height(BASE_BODY, chars);
    }
    for bullet in &slide.bullets {
        if !bullet.trim().is_empty() {
            estimated += element_height(BASE_BULLET, bullet.chars().count());
        }
    }

    let budget = available_height as f32 * HEIGHT_BUDGET_RATIO;
    let scale = if estimated > budget {
        (budget / estimated).clamp(MIN_SCALE, 1.0)
    } else {
        1.0
    };

    let bounded = |base: f32| ((base * scale).round() as u32).clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    let top_margin = ((available_height as f32 - estimated * scale) / 2.0).max(0.0) as u32;

    LayoutPlan {
        sizes: FontSizes {
            title: bounded(BASE_TITLE),
            subtitle: bounded(BASE_SUBTITLE),
            body: bounded(BASE_BODY),
            bullet: bounded(BASE_BULLET),
        },
        top_margin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Slide;

    fn slide_with_text(title_len: usize, bullet_count: usize) -> Slide {
        Slide::new(1)
            .with_title("t".repeat(title_len))
            .with_bullets(vec!["bullet point".to_string(); bullet_count])
    }

    #[test]
    fn sizes_stay_within_bounds() {
        for (title_len, bullets) in [(0, 0), (5, 0), (60, 6), (600, 20)] {
            let slide = slide_with_text(title_len.max(1), bullets);
            let plan = plan(&slide, 880);
            for size in [
                plan.sizes.title,
                plan.sizes.subtitle,
                plan.sizes.body,
                plan.sizes.bullet,
            ] {
                assert!((MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size));
            }
        }
    }

    #[test]
    fn short_content_keeps_base_sizes() {
        let slide = Slide::new(1).with_title("Hi");
        let plan = plan(&slide, 880);
        assert_eq!(plan.sizes.title, FontSizes::BASE.title);
        assert_eq!(plan.sizes.subtitle, FontSizes::BASE.subtitle);
    }

    #[test]
    fn title_size_is_monotonically_non_increasing() {
        let mut previous = MAX_FONT_SIZE;
        for bullets in 0..12 {
            let slide = slide_with_text(60, bullets);
            let current = plan(&slide, 880).sizes.title;
            assert!(
                current <= previous,
                "size grew from {previous} to {current} at {bullets} bullets"
            );
            previous = current;
        }
    }

    #[test]
    fn top_margin_is_never_negative_and_centers_small_content() {
        let slide = Slide::new(1).with_title("Hi");
        let p = plan(&slide, 880);
        // One short element: roughly half the leftover space above.
        assert!(p.top_margin > 0);
        assert!(p.top_margin < 880);

        let heavy = slide_with_text(60, 10);
        assert!(plan(&heavy, 880).top_margin < p.top_margin + 1);
    }

    #[test]
    fn empty_slide_centers_on_the_full_band() {
        let slide = Slide::new(1);
        let p = plan(&slide, 880);
        assert_eq!(p.top_margin, 440);
        assert_eq!(p.sizes.title, FontSizes::BASE.title);
    }

    #[test]
    fn scale_floor_prevents_illegible_sizes() {
        let slide = slide_with_text(600, 20);
        let p = plan(&slide, 880);
        // 0.6 * 72 rounds to 43; the floor keeps the title at or above it.
        assert!(p.sizes.title >= 43);
        assert!(p.sizes.bullet >= MIN_FONT_SIZE);
    }
}
