use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const ENTRY_CATEGORY_COLORS: [(&str, &str); 10] = [
    ("start", "#00ab00"),
    ("flow", "#179ccb"),
    ("moving", "#a336fa"),
    ("looks", "#ff3356"),
    ("brush", "#ff9000"),
    ("sound", "#5ca800"),
    ("judgement", "#3c57f3"),
    ("calc", "#f2a617"),
    ("variable", "#e19be9"),
    ("func", "#d95208"),
];

const HIGH_CONTRAST_CATEGORY_COLORS: [(&str, &str); 10] = [
    ("start", "#007a00"),
    ("flow", "#0b6f94"),
    ("moving", "#7a16c9"),
    ("looks", "#c8002a"),
    ("brush", "#c46f00"),
    ("sound", "#437c00"),
    ("judgement", "#1f3bd1"),
    ("calc", "#b87a00"),
    ("variable", "#a4479f"),
    ("func", "#a63a00"),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    /// Label size for start, simple and container blocks.
    pub font_size: f32,
    /// Label size for judgement and value blocks.
    pub small_font_size: f32,
    pub label_color: String,
    pub category_colors: BTreeMap<String, String>,
    pub fallback_color: String,
    pub stroke_darken: u8,
    pub stroke_width: f32,
    pub highlight_color: String,
    pub selected_stroke_width: f32,
    pub list_font_size: f32,
    pub list_tag_font_size: f32,
    pub list_tag_color: String,
    pub background: String,
}

impl Theme {
    pub fn entry() -> Self {
        Self {
            font_family: "NanumGothic".to_string(),
            font_size: 12.0,
            small_font_size: 11.0,
            label_color: "white".to_string(),
            category_colors: palette(&ENTRY_CATEGORY_COLORS),
            fallback_color: "#4C97FF".to_string(),
            stroke_darken: 30,
            stroke_width: 1.0,
            highlight_color: "#FFD700".to_string(),
            selected_stroke_width: 3.0,
            list_font_size: 13.0,
            list_tag_font_size: 10.0,
            list_tag_color: "rgba(255,255,255,0.7)".to_string(),
            background: "transparent".to_string(),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            category_colors: palette(&HIGH_CONTRAST_CATEGORY_COLORS),
            fallback_color: "#1f5fd1".to_string(),
            stroke_darken: 60,
            stroke_width: 1.5,
            highlight_color: "#FFB000".to_string(),
            list_tag_color: "rgba(255,255,255,0.9)".to_string(),
            background: "#FFFFFF".to_string(),
            ..Self::entry()
        }
    }

    /// Font stack used when measuring labels.
    pub fn measure_font_family(&self) -> String {
        format!("\"Nanum Gothic\", {}, sans-serif", self.font_family)
    }

    /// Fill color for a category; unknown or missing categories get the fallback swatch.
    pub fn color_for(&self, category: &str) -> &str {
        self.category_colors
            .get(category)
            .map(String::as_str)
            .unwrap_or(self.fallback_color.as_str())
    }

    pub fn stroke_for(&self, fill: &str) -> String {
        darken_color(fill, self.stroke_darken)
    }

    /// Stroke color and width for a block, honoring the selection highlight.
    pub fn block_stroke(&self, fill: &str, selected: bool) -> (String, f32) {
        if selected {
            (self.highlight_color.clone(), self.selected_stroke_width)
        } else {
            (self.stroke_for(fill), self.stroke_width)
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::entry()
    }
}

fn palette(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(category, color)| (category.to_string(), color.to_string()))
        .collect()
}

/// Subtracts `delta` from each RGB channel (clamped at 0). Colors that are not
/// `#rgb`/`#rrggbb` hex are returned unchanged.
pub fn darken_color(color: &str, delta: u8) -> String {
    let Some((r, g, b)) = parse_hex_rgb(color) else {
        return color.to_string();
    };
    format!(
        "#{:02x}{:02x}{:02x}",
        r.saturating_sub(delta),
        g.saturating_sub(delta),
        b.saturating_sub(delta)
    )
}

pub fn parse_hex_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim().strip_prefix('#')?;
    if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => {
            let value = u32::from_str_radix(hex, 16).ok()?;
            Some(((value >> 16) as u8, (value >> 8) as u8, value as u8))
        }
        3 => {
            let mut channels = hex.chars().map(|ch| {
                let digit = ch.to_digit(16).unwrap_or(0) as u8;
                digit * 17
            });
            Some((channels.next()?, channels.next()?, channels.next()?))
        }
        _ => None,
    }
}
