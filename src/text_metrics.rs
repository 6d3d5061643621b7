use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Mutex;
use ttf_parser::Face;

/// Pixel width of a single-line label.
///
/// Implementations return the raw advance width; block sizing adds its own
/// horizontal padding on top.
pub trait TextMeasure {
    fn measure(&self, text: &str, font_size: f32) -> f32;
}

static FONT_MEASURER: Lazy<Mutex<FontCache>> = Lazy::new(|| Mutex::new(FontCache::new()));

/// Measures with a real system font, falling back to [`estimate_text_width`]
/// when no face can be loaded.
#[derive(Debug, Clone)]
pub struct FontMeasurer {
    font_family: String,
}

impl FontMeasurer {
    pub fn new(font_family: impl Into<String>) -> Self {
        Self {
            font_family: font_family.into(),
        }
    }
}

impl TextMeasure for FontMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> f32 {
        measure_text_width(text, font_size, &self.font_family)
            .unwrap_or_else(|| estimate_text_width(text, font_size))
    }
}

/// Font-free measurement from per-character width factors.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimateMeasurer;

impl TextMeasure for EstimateMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> f32 {
        estimate_text_width(text, font_size)
    }
}

/// Every character has the same advance. Useful where layouts must not depend
/// on installed fonts.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidthMeasurer {
    pub char_width: f32,
}

impl TextMeasure for FixedWidthMeasurer {
    fn measure(&self, text: &str, _font_size: f32) -> f32 {
        text.chars().filter(|ch| *ch != '\n').count() as f32 * self.char_width
    }
}

pub fn measure_text_width(text: &str, font_size: f32, font_family: &str) -> Option<f32> {
    if text.is_empty() || font_size <= 0.0 {
        return Some(0.0);
    }
    let mut guard = FONT_MEASURER.lock().ok()?;
    guard.measure(text, font_size, font_family)
}

/// Upper-bound width estimate for bold label text.
pub fn estimate_text_width(text: &str, font_size: f32) -> f32 {
    text.chars()
        .filter(|ch| *ch != '\n')
        .map(char_width_factor)
        .sum::<f32>()
        * font_size.max(0.0)
}

pub(crate) fn char_width_factor(ch: char) -> f32 {
    if is_wide(ch) {
        return 1.0;
    }
    match ch {
        ' ' => 0.30,
        '.' | ',' | ':' | ';' | '|' | '!' | '\'' | 'i' | 'j' | 'l' | 'I' => 0.32,
        '(' | ')' | '[' | ']' | '{' | '}' | 'f' | 'r' | 't' => 0.40,
        'm' | 'w' | 'M' | 'W' | '@' | '%' => 0.95,
        'A'..='Z' | '0'..='9' | '#' | '&' => 0.72,
        'a'..='z' | '_' | '-' => 0.62,
        _ => 0.72,
    }
}

fn is_wide(ch: char) -> bool {
    matches!(
        ch as u32,
        0x1100..=0x11FF
            | 0x2E80..=0x303F
            | 0x3040..=0x30FF
            | 0x3130..=0x318F
            | 0x3400..=0x4DBF
            | 0x4E00..=0x9FFF
            | 0xAC00..=0xD7A3
            | 0xF900..=0xFAFF
            | 0xFF00..=0xFF60
            | 0xFFE0..=0xFFE6
    )
}

struct FontCache {
    db: Database,
    loaded_system_fonts: bool,
    faces: HashMap<String, Option<FontFace>>,
}

impl FontCache {
    fn new() -> Self {
        Self {
            db: Database::new(),
            loaded_system_fonts: false,
            faces: HashMap::new(),
        }
    }

    fn measure(&mut self, text: &str, font_size: f32, font_family: &str) -> Option<f32> {
        let family_key = normalize_family_key(font_family);
        if !self.faces.contains_key(&family_key) {
            let face = self.load_face(font_family);
            if face.is_none() {
                tracing::debug!(family = %family_key, "no font face found, estimating label widths");
            }
            self.faces.insert(family_key.clone(), face);
        }
        let face = self.faces.get_mut(&family_key)?.as_mut()?;
        face.measure_width(text, font_size)
    }

    fn load_face(&mut self, font_family: &str) -> Option<FontFace> {
        let names: Vec<String> = font_family
            .split(',')
            .map(|part| part.trim().trim_matches('"').trim_matches('\'').to_string())
            .filter(|part| !part.is_empty())
            .collect();
        let mut families: Vec<Family<'_>> = names
            .iter()
            .map(|name| match name.to_ascii_lowercase().as_str() {
                "serif" => Family::Serif,
                "sans-serif" | "system-ui" | "-apple-system" => Family::SansSerif,
                "monospace" => Family::Monospace,
                _ => Family::Name(name.as_str()),
            })
            .collect();
        if families.is_empty() {
            families.push(Family::SansSerif);
        }

        if !self.loaded_system_fonts {
            self.db.load_system_fonts();
            self.loaded_system_fonts = true;
        }

        let query = Query {
            families: &families,
            weight: Weight::BOLD,
            stretch: Stretch::Normal,
            style: Style::Normal,
        };
        let id = self.db.query(&query)?;
        self.db
            .with_face_data(id, |data, index| FontFace::parse(data.to_vec(), index))
            .flatten()
    }
}

struct FontFace {
    data: Vec<u8>,
    index: u32,
    units_per_em: u16,
    ascii_advances: [u16; 128],
    advance_cache: HashMap<char, Option<u16>>,
}

impl FontFace {
    fn parse(data: Vec<u8>, index: u32) -> Option<Self> {
        let face = Face::parse(&data, index).ok()?;
        let units_per_em = face.units_per_em().max(1);
        let mut ascii_advances = [0u16; 128];
        for byte in 0u8..=127 {
            if let Some(glyph_id) = face.glyph_index(byte as char) {
                ascii_advances[byte as usize] = face.glyph_hor_advance(glyph_id).unwrap_or(0);
            }
        }
        Some(Self {
            data,
            index,
            units_per_em,
            ascii_advances,
            advance_cache: HashMap::new(),
        })
    }

    fn measure_width(&mut self, text: &str, font_size: f32) -> Option<f32> {
        let scale = font_size / self.units_per_em as f32;
        let mut width = 0.0f32;
        let mut face: Option<Face<'_>> = None;

        for ch in text.chars() {
            if ch == '\n' {
                continue;
            }
            let advance = if ch.is_ascii() && self.ascii_advances[ch as usize] != 0 {
                Some(self.ascii_advances[ch as usize])
            } else if let Some(cached) = self.advance_cache.get(&ch) {
                *cached
            } else {
                if face.is_none() {
                    face = Some(Face::parse(&self.data, self.index).ok()?);
                }
                let value = face.as_ref().and_then(|parsed| {
                    let glyph = parsed.glyph_index(ch)?;
                    parsed.glyph_hor_advance(glyph)
                });
                self.advance_cache.insert(ch, value);
                value
            };
            width += match advance {
                Some(units) if units > 0 => units as f32 * scale,
                _ => char_width_factor(ch) * font_size,
            };
        }

        Some(width.max(0.0))
    }
}

fn normalize_family_key(font_family: &str) -> String {
    let trimmed = font_family.trim();
    if trimmed.is_empty() {
        "sans-serif".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_scales_with_font_size() {
        let w12 = estimate_text_width("Hello", 12.0);
        let w24 = estimate_text_width("Hello", 24.0);
        assert!((w24 - w12 * 2.0).abs() < 0.01);
    }

    #[test]
    fn hangul_counts_as_full_em() {
        assert_eq!(estimate_text_width("반복", 12.0), 24.0);
    }

    #[test]
    fn char_width_factor_returns_positive_values() {
        for ch in ['a', 'Z', ' ', '0', '@', '\u{4e2d}', '가'] {
            assert!(char_width_factor(ch) > 0.0, "char {:?} has zero width", ch);
        }
    }

    #[test]
    fn fixed_width_counts_chars_not_bytes() {
        let measurer = FixedWidthMeasurer { char_width: 10.0 };
        assert_eq!(measurer.measure("이동", 12.0), 20.0);
        assert_eq!(measurer.measure("", 12.0), 0.0);
    }

    #[test]
    fn font_measurer_never_returns_negative() {
        let measurer = FontMeasurer::new("\"Nanum Gothic\", sans-serif");
        assert!(measurer.measure("move 10 steps", 12.0) >= 0.0);
        assert_eq!(measurer.measure("", 12.0), 0.0);
    }
}
