//! Font resolution and caching.
//!
//! Families resolve through a ranked fallback chain against the platform
//! font database. The database and the (family, size) memo live for the
//! process; the sticky "last known good" slot is scoped to one library
//! instance so renderers keep locality without sharing mutable preference.

use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

use ab_glyph::{FontArc, PxScale};
use fontdb::{Database, Family, Query, Source};

use crate::error::{Error, Result};

/// Ranked platform fallback, Unicode/emoji-capable families first.
const FALLBACK_FAMILIES: &[&str] = &[
    "Arial Unicode MS",
    "Segoe UI Emoji",
    "Apple Color Emoji",
    "Noto Color Emoji",
    "Arial",
    "DejaVu Sans",
];

static FONT_DB: OnceLock<Database> = OnceLock::new();
static FONT_CACHE: OnceLock<RwLock<HashMap<(String, u32), FontArc>>> = OnceLock::new();

fn font_db() -> &'static Database {
    FONT_DB.get_or_init(|| {
        let mut db = Database::new();
        db.load_system_fonts();
        db
    })
}

fn font_cache() -> &'static RwLock<HashMap<(String, u32), FontArc>> {
    FONT_CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

/// A loadable face paired with the pixel scale it was requested at.
#[derive(Clone)]
pub struct RenderFont {
    pub font: FontArc,
    pub scale: PxScale,
    pub size: u32,
}

impl RenderFont {
    fn new(font: FontArc, size: u32) -> Self {
        Self {
            font,
            scale: PxScale::from(size as f32),
            size,
        }
    }
}

pub struct FontLibrary {
    last_good: RwLock<Option<String>>,
}

impl FontLibrary {
    pub fn new() -> Self {
        Self {
            last_good: RwLock::new(None),
        }
    }

    /// Resolve a family at a pixel size.
    ///
    /// Order: memoized (family, size) hit, the sticky last-good family, the
    /// requested family, the ranked fallback list, a generic sans face, and
    /// finally any loadable face at all. Concurrent misses for the same key
    /// may resolve redundantly; resolution is idempotent.
    pub fn resolve(&self, family: &str, size: u32) -> Result<RenderFont> {
        let key = (family.to_string(), size);
        if let Some(font) = font_cache()
            .read()
            .expect("font cache lock poisoned")
            .get(&key)
        {
            return Ok(RenderFont::new(font.clone(), size));
        }

        let sticky = self
            .last_good
            .read()
            .expect("last-good lock poisoned")
            .clone();

        let mut candidates: Vec<&str> = Vec::new();
        if let Some(name) = sticky.as_deref() {
            candidates.push(name);
        }
        candidates.push(family);
        candidates.extend_from_slice(FALLBACK_FAMILIES);

        for name in candidates {
            if let Some(font) = lookup_family(name) {
                *self.last_good.write().expect("last-good lock poisoned") =
                    Some(name.to_string());
                self.memoize(key, &font);
                return Ok(RenderFont::new(font, size));
            }
        }

        if let Some(font) = generic_sans().or_else(any_face) {
            self.memoize(key, &font);
            return Ok(RenderFont::new(font, size));
        }

        Err(Error::FontResolution(format!(
            "no loadable face for {family:?} or any fallback"
        )))
    }

    /// Resolve without consulting the sticky slot or any requested family;
    /// used when a glyph run measured as empty and needs one retry with a
    /// neutral face.
    pub fn default_font(&self, size: u32) -> Result<RenderFont> {
        let key = (String::new(), size);
        if let Some(font) = font_cache()
            .read()
            .expect("font cache lock poisoned")
            .get(&key)
        {
            return Ok(RenderFont::new(font.clone(), size));
        }
        for name in FALLBACK_FAMILIES {
            if let Some(font) = lookup_family(name) {
                self.memoize(key, &font);
                return Ok(RenderFont::new(font, size));
            }
        }
        if let Some(font) = generic_sans().or_else(any_face) {
            self.memoize(key, &font);
            return Ok(RenderFont::new(font, size));
        }
        Err(Error::FontResolution(
            "no loadable face in the fallback chain".to_string(),
        ))
    }

    fn memoize(&self, key: (String, u32), font: &FontArc) {
        font_cache()
            .write()
            .expect("font cache lock poisoned")
            .insert(key, font.clone());
    }
}

impl Default for FontLibrary {
    fn default() -> Self {
        Self::new()
    }
}

fn lookup_family(name: &str) -> Option<FontArc> {
    if name.trim().is_empty() {
        return None;
    }
    let id = font_db().query(&Query {
        families: &[Family::Name(name)],
        ..Query::default()
    })?;
    load_face(id)
}

fn generic_sans() -> Option<FontArc> {
    let id = font_db().query(&Query {
        families: &[Family::SansSerif],
        ..Query::default()
    })?;
    load_face(id)
}

fn any_face() -> Option<FontArc> {
    font_db().faces().find_map(|face| load_face(face.id))
}

fn load_face(id: fontdb::ID) -> Option<FontArc> {
    let face = font_db().face(id)?;
    let data: Vec<u8> = match &face.source {
        Source::Binary(data) => data.as_ref().as_ref().to_vec(),
        Source::File(path) => std::fs::read(path).ok()?,
        Source::SharedFile(_, data) => data.as_ref().as_ref().to_vec(),
    };
    FontArc::try_from_vec(data).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ab_glyph::Font as _;

    #[test]
    fn unknown_family_falls_back_or_errors_cleanly() {
        let library = FontLibrary::new();
        match library.resolve("No Such Family 12345", 32) {
            Ok(font) => assert_eq!(font.size, 32),
            // Acceptable only on systems with no fonts at all.
            Err(Error::FontResolution(_)) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn repeated_resolution_is_memoized_and_stable() {
        let library = FontLibrary::new();
        let Ok(first) = library.resolve("Arial", 24) else {
            return;
        };
        let second = library.resolve("Arial", 24).unwrap();
        // Same underlying face both times.
        assert_eq!(first.font.units_per_em(), second.font.units_per_em());
        assert_eq!(first.size, second.size);
    }

    #[test]
    fn success_sets_the_sticky_slot() {
        let library = FontLibrary::new();
        if library.resolve("DejaVu Sans", 18).is_err() {
            return;
        }
        assert!(library.last_good.read().unwrap().is_some());
    }
}
