use serde::{Deserialize, Serialize};

use crate::render::layout::FontSizes;
use crate::theme::Theme;

/// Horizontal placement of a slide's text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Center,
    Left,
    Right,
}

/// Background treatment for a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundStyle {
    Solid,
    #[default]
    Gradient,
}

/// One unit of carousel content, rendered to exactly one bitmap.
///
/// A slide is a value type: rendering never mutates it, and the content
/// optimizer produces a derived copy instead of editing in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// 1-based position within the carousel, drives the indicator dots.
    #[serde(default)]
    pub number: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<String>,

    #[serde(default)]
    pub layout: Layout,

    #[serde(default)]
    pub background: BackgroundStyle,
}

impl Slide {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            title: None,
            subtitle: None,
            body: None,
            bullets: Vec::new(),
            layout: Layout::default(),
            background: BackgroundStyle::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_bullets<I, S>(mut self, bullets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bullets = bullets.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_background(mut self, background: BackgroundStyle) -> Self {
        self.background = background;
        self
    }
}

/// A deck file: an optional theme plus the slide sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,

    /// Explicit per-element font sizes applied to every slide; when set,
    /// the layout planner is bypassed entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_sizes: Option<FontSizes>,

    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Parse a YAML deck and assign slide numbers from file order.
    pub fn from_yaml(input: &str) -> anyhow::Result<Self> {
        let mut deck: Deck = serde_yaml::from_str(input)?;
        deck.renumber();
        Ok(deck)
    }

    pub fn to_yaml(&self) -> anyhow::Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Slide numbers follow file order, 1-based.
    pub fn renumber(&mut self) {
        for (index, slide) in self.slides.iter_mut().enumerate() {
            slide.number = index as u32 + 1;
        }
    }
}
