use crate::theme::{Theme, parse_hex_rgb};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Spacing of the block tree layout. Row, header and footer heights belong to
/// the block outlines and live in `layout::shapes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub sibling_padding: f32,
    pub top_margin: f32,
    pub bottom_margin: f32,
    pub min_block_width: f32,
    pub max_block_width: f32,
    /// Horizontal padding added to the measured label width.
    pub label_padding: f32,
    pub max_label_chars: usize,
    pub canvas_width: f32,
    pub origin_x: f32,
    pub origin_y: f32,
    /// Skip font lookup and size labels from per-character estimates.
    pub fast_text_metrics: bool,
    pub list: ListLayoutConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            sibling_padding: 5.0,
            top_margin: 60.0,
            bottom_margin: 40.0,
            min_block_width: 100.0,
            max_block_width: 250.0,
            label_padding: 28.0,
            max_label_chars: 25,
            canvas_width: 380.0,
            origin_x: 50.0,
            origin_y: 20.0,
            fast_text_metrics: false,
            list: ListLayoutConfig::default(),
        }
    }
}

/// Card geometry for flat block listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListLayoutConfig {
    pub canvas_width: f32,
    pub card_height: f32,
    pub card_gap: f32,
    pub margin: f32,
    pub card_width: f32,
    pub corner_radius: f32,
    pub label_x: f32,
    pub tag_x: f32,
    pub text_y: f32,
}

impl Default for ListLayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 360.0,
            card_height: 35.0,
            card_gap: 10.0,
            margin: 10.0,
            card_width: 340.0,
            corner_radius: 8.0,
            label_x: 15.0,
            tag_x: 325.0,
            text_y: 22.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Fallback raster size when the SVG carries no usable extent.
    pub width: f32,
    pub height: f32,
    /// Raster scale factor for PNG output.
    pub scale: f32,
    /// Fill painted under the PNG raster; non-hex values leave it transparent.
    pub background: String,
}

impl RenderConfig {
    pub fn background_rgb(&self) -> Option<(u8, u8, u8)> {
        parse_hex_rgb(&self.background)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 380.0,
            height: 200.0,
            scale: 2.0,
            background: "transparent".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    font_size: Option<f32>,
    small_font_size: Option<f32>,
    label_color: Option<String>,
    fallback_color: Option<String>,
    stroke_darken: Option<u8>,
    stroke_width: Option<f32>,
    highlight_color: Option<String>,
    selected_stroke_width: Option<f32>,
    background: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct LayoutConfigFile {
    sibling_padding: Option<f32>,
    top_margin: Option<f32>,
    bottom_margin: Option<f32>,
    min_block_width: Option<f32>,
    max_block_width: Option<f32>,
    label_padding: Option<f32>,
    max_label_chars: Option<usize>,
    canvas_width: Option<f32>,
    origin_x: Option<f32>,
    origin_y: Option<f32>,
    fast_text_metrics: Option<bool>,
    list: Option<ListLayoutConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    category_colors: Option<BTreeMap<String, String>>,
    layout: Option<LayoutConfigFile>,
    scale: Option<f32>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;
    apply_config_file(&mut config, parsed);
    Ok(config)
}

/// Applies a JSON config document on top of the defaults.
pub fn config_from_str(contents: &str) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let parsed: ConfigFile = serde_json::from_str(contents)?;
    apply_config_file(&mut config, parsed);
    Ok(config)
}

fn apply_config_file(config: &mut Config, parsed: ConfigFile) {
    match parsed.theme.as_deref() {
        Some("high-contrast") | Some("highContrast") => config.theme = Theme::high_contrast(),
        Some("entry") | Some("default") => config.theme = Theme::entry(),
        Some(other) => tracing::warn!(theme = other, "unknown theme name, keeping default"),
        None => {}
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.font_size {
            config.theme.font_size = v;
        }
        if let Some(v) = vars.small_font_size {
            config.theme.small_font_size = v;
        }
        if let Some(v) = vars.label_color {
            config.theme.label_color = v;
        }
        if let Some(v) = vars.fallback_color {
            config.theme.fallback_color = v;
        }
        if let Some(v) = vars.stroke_darken {
            config.theme.stroke_darken = v;
        }
        if let Some(v) = vars.stroke_width {
            config.theme.stroke_width = v;
        }
        if let Some(v) = vars.highlight_color {
            config.theme.highlight_color = v;
        }
        if let Some(v) = vars.selected_stroke_width {
            config.theme.selected_stroke_width = v;
        }
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
    }

    if let Some(colors) = parsed.category_colors {
        config.theme.category_colors.extend(colors);
    }

    if let Some(layout) = parsed.layout {
        if let Some(v) = layout.sibling_padding {
            config.layout.sibling_padding = v;
        }
        if let Some(v) = layout.top_margin {
            config.layout.top_margin = v;
        }
        if let Some(v) = layout.bottom_margin {
            config.layout.bottom_margin = v;
        }
        if let Some(v) = layout.min_block_width {
            config.layout.min_block_width = v;
        }
        if let Some(v) = layout.max_block_width {
            config.layout.max_block_width = v;
        }
        if let Some(v) = layout.label_padding {
            config.layout.label_padding = v;
        }
        if let Some(v) = layout.max_label_chars {
            config.layout.max_label_chars = v;
        }
        if let Some(v) = layout.canvas_width {
            config.layout.canvas_width = v;
        }
        if let Some(v) = layout.origin_x {
            config.layout.origin_x = v;
        }
        if let Some(v) = layout.origin_y {
            config.layout.origin_y = v;
        }
        if let Some(v) = layout.fast_text_metrics {
            config.layout.fast_text_metrics = v;
        }
        if let Some(list) = layout.list {
            config.layout.list = list;
        }
    }

    if let Some(scale) = parsed.scale {
        config.render.scale = scale;
    }

    config.render.background = config.theme.background.clone();
}
