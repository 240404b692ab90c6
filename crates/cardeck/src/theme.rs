use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Error;

static HEX_COLOR: OnceLock<Regex> = OnceLock::new();

fn hex_color_pattern() -> &'static Regex {
    HEX_COLOR.get_or_init(|| Regex::new("^#[0-9a-fA-F]{6}$").unwrap())
}

/// An opaque RGB color, serialized as a `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(value: &str) -> Result<Self, Error> {
        if !hex_color_pattern().is_match(value) {
            return Err(Error::InvalidColor(value.to_string()));
        }
        let r = u8::from_str_radix(&value[1..3], 16).map_err(|_| Error::InvalidColor(value.to_string()))?;
        let g = u8::from_str_radix(&value[3..5], 16).map_err(|_| Error::InvalidColor(value.to_string()))?;
        let b = u8::from_str_radix(&value[5..7], 16).map_err(|_| Error::InvalidColor(value.to_string()))?;
        Ok(Self { r, g, b })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_rgb(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }

    /// Per-channel linear blend toward `other`. `t` is clamped to [0, 1];
    /// channel values truncate, matching the gradient fill.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 * (1.0 - t) + b as f32 * t) as u8;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Immutable brand style bundle.
///
/// A theme is replaced wholesale; nothing mutates one in place. The name
/// doubles as the watermark text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub name: String,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub background: Color,
    pub text: Color,
    pub font_family: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self::violet()
    }
}

impl Theme {
    pub fn violet() -> Self {
        Self {
            name: "violet".to_string(),
            primary: Color::rgb(0x66, 0x7e, 0xea),
            secondary: Color::rgb(0x76, 0x4b, 0xa2),
            accent: Color::rgb(0xf0, 0x93, 0xfb),
            background: Color::WHITE,
            text: Color::rgb(0x2d, 0x34, 0x36),
            font_family: "Arial".to_string(),
        }
    }

    pub fn midnight() -> Self {
        Self {
            name: "midnight".to_string(),
            primary: Color::rgb(0x25, 0x63, 0xeb),
            secondary: Color::rgb(0x3b, 0x82, 0xf6),
            accent: Color::rgb(0xff, 0x3b, 0x3b),
            background: Color::BLACK,
            text: Color::WHITE,
            font_family: "Arial".to_string(),
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "midnight" => Self::midnight(),
            _ => Self::violet(),
        }
    }

    pub fn builtin_names() -> &'static [&'static str] {
        &["violet", "midnight"]
    }

    /// Watermark text stamped bottom-right on every slide.
    pub fn watermark(&self) -> String {
        format!("@{}", self.name)
    }
}
