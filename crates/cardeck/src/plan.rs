//! Carousel plan interchange: the structure an external content generator
//! hands over (hook slide, content sections, call-to-action, hashtags,
//! caption), plus the static template used when no generator is available.
//!
//! The core is agnostic to how a plan was produced; it only consumes the
//! validated strings.

use serde::{Deserialize, Serialize};

use crate::deck::{BackgroundStyle, Layout, Slide};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselPlan {
    #[serde(rename = "hook_slide")]
    pub hook: HookSlide,

    #[serde(rename = "content_slides")]
    pub content: Vec<ContentSection>,

    #[serde(rename = "cta_slide")]
    pub cta: CtaSlide,

    #[serde(default)]
    pub hashtags: Vec<String>,

    #[serde(default)]
    pub caption: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookSlide {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSection {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(rename = "bullet_points", default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CtaSlide {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(rename = "action_text", default)]
    pub action: String,
}

impl CarouselPlan {
    /// Build a basic plan without any generator. `num_slides` counts the
    /// hook and call-to-action slides and is floored at 3.
    pub fn fallback(topic: &str, num_slides: usize) -> Self {
        let num_slides = num_slides.max(3);
        let content = (0..num_slides - 2)
            .map(|i| ContentSection {
                title: format!("Point {}", i + 1),
                subtitle: "Key insight".to_string(),
                bullets: (0..3)
                    .map(|j| format!("Detail {} about this point", j + 1))
                    .collect(),
            })
            .collect();

        Self {
            hook: HookSlide {
                title: topic.chars().take(50).collect(),
                subtitle: "Swipe to learn more →".to_string(),
            },
            content,
            cta: CtaSlide {
                title: "Want more tips?".to_string(),
                subtitle: "Follow for daily insights".to_string(),
                action: "Save this post and share it if it helped!".to_string(),
            },
            hashtags: [
                "#carousel",
                "#contentcreation",
                "#socialmedia",
                "#marketing",
                "#business",
                "#tips",
                "#growth",
                "#success",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            caption: format!(
                "{topic}\n\nSwipe through to discover actionable insights that will \
                 transform your approach.\n\nWhich tip resonated most with you? Let me \
                 know in the comments!"
            ),
        }
    }

    /// Convert the plan into a numbered slide sequence: hook first
    /// (centered, gradient), one slide per content section (left-aligned),
    /// call-to-action last with the action text as body.
    pub fn into_slides(self) -> Vec<Slide> {
        let mut slides = Vec::with_capacity(self.content.len() + 2);
        slides.push(
            Slide::new(1)
                .with_title(self.hook.title)
                .with_subtitle(self.hook.subtitle)
                .with_layout(Layout::Center)
                .with_background(BackgroundStyle::Gradient),
        );
        for (i, section) in self.content.into_iter().enumerate() {
            slides.push(
                Slide::new(i as u32 + 2)
                    .with_title(section.title)
                    .with_subtitle(section.subtitle)
                    .with_bullets(section.bullets)
                    .with_layout(Layout::Left)
                    .with_background(BackgroundStyle::Gradient),
            );
        }
        slides.push(
            Slide::new(slides.len() as u32 + 1)
                .with_title(self.cta.title)
                .with_subtitle(self.cta.subtitle)
                .with_body(self.cta.action)
                .with_layout(Layout::Center)
                .with_background(BackgroundStyle::Gradient),
        );
        slides
    }
}
