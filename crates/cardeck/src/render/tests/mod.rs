mod batch;
mod effects;

use crate::deck::{BackgroundStyle, Layout, Slide};
use crate::render::fonts::{FontLibrary, RenderFont};
use crate::render::Renderer;
use crate::theme::Theme;

/// Helper to create a Renderer with the default theme.
fn renderer() -> Renderer {
    Renderer::new(Theme::violet())
}

/// Helper to create a representative slide exercising every element kind.
fn sample_slide() -> Slide {
    Slide::new(2)
        .with_title("Grow your audience")
        .with_subtitle("Three habits that compound")
        .with_body("Consistency beats intensity. Show up on a schedule you can sustain.")
        .with_bullets(["Post on a fixed cadence", "Answer every comment", "Reuse what works"])
        .with_layout(Layout::Left)
        .with_background(BackgroundStyle::Gradient)
}

/// Resolve a test font, or None when the environment has no loadable
/// faces; font-dependent tests return early in that case.
fn try_font(size: u32) -> Option<RenderFont> {
    FontLibrary::new().resolve("DejaVu Sans", size).ok()
}
