use std::path::PathBuf;

use anyhow::Context;
use colored::Colorize;

use crate::deck::Deck;
use crate::plan::CarouselPlan;

pub fn run(
    topic: &str,
    slides: usize,
    output: PathBuf,
    json: Option<PathBuf>,
    quiet: bool,
) -> anyhow::Result<()> {
    let plan = CarouselPlan::fallback(topic, slides);

    if let Some(path) = &json {
        let contents = serde_json::to_string_pretty(&plan)?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        if !quiet {
            eprintln!("Wrote plan to {}", path.display());
        }
    }

    if !quiet {
        eprintln!("{}", "Suggested caption:".bold());
        eprintln!("{}", plan.caption);
        eprintln!();
        eprintln!("{}", plan.hashtags.join(" ").dimmed());
        eprintln!();
    }

    let deck = Deck {
        theme: None,
        font_sizes: None,
        slides: plan.into_slides(),
    };
    std::fs::write(&output, deck.to_yaml()?)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    eprintln!(
        "{} {} slides written to {}",
        "Done:".green().bold(),
        deck.slides.len(),
        output.display()
    );
    Ok(())
}
