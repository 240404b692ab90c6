use std::path::PathBuf;

use anyhow::Context;
use colored::Colorize;

use crate::config::Config;
use crate::deck::Deck;
use crate::render::{Renderer, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::theme::Theme;

pub fn run(
    file: PathBuf,
    output_dir: Option<PathBuf>,
    theme_override: Option<String>,
    quiet: bool,
    verbose: u8,
) -> anyhow::Result<()> {
    let contents = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let deck =
        Deck::from_yaml(&contents).with_context(|| format!("Failed to parse {}", file.display()))?;
    if deck.slides.is_empty() {
        anyhow::bail!("No slides found in {}", file.display());
    }

    let config = Config::load_or_default();
    let theme = match theme_override {
        Some(name) => Theme::from_name(&name),
        None => deck.theme.clone().unwrap_or_else(|| {
            Theme::from_name(config.default_theme().unwrap_or("violet"))
        }),
    };
    let output_dir = output_dir.unwrap_or_else(|| {
        PathBuf::from(config.default_output_dir().unwrap_or("export"))
    });

    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    if !quiet {
        eprintln!(
            "Exporting {} slides to {} ({CANVAS_WIDTH}x{CANVAS_HEIGHT}, theme {})",
            deck.slides.len(),
            output_dir.display(),
            theme.name.bold(),
        );
    }

    let renderer = Renderer::new(theme);
    let rendered = renderer.render_all_with(&deck.slides, deck.font_sizes.as_ref());

    for (index, slide) in rendered.iter().enumerate() {
        let filename = format!("slide-{:02}.png", index + 1);
        let path = output_dir.join(&filename);
        slide
            .image
            .save(&path)
            .with_context(|| format!("Failed to save {}", path.display()))?;

        if let Some(reason) = &slide.degraded {
            eprintln!("  {} {filename}: {reason}", "degraded".red().bold());
        } else if slide.dropped_bullets > 0 && verbose > 0 {
            eprintln!(
                "  {} {filename}: {} trailing bullets dropped for space",
                "note".yellow(),
                slide.dropped_bullets
            );
        }
        if !quiet {
            eprintln!("  Saved {filename}");
        }
    }

    if !quiet {
        eprintln!("{}", "Export complete.".green());
    }
    Ok(())
}
