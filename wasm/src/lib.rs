use entry_block_renderer::{RenderOptions, render_list_with_options, render_with_options};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlockRenderOptions {
    theme: Option<String>,
    font_family: Option<String>,
    font_size: Option<f32>,
    highlight_color: Option<String>,
    fast_text: Option<bool>,
}

fn build_render_options(options: BlockRenderOptions) -> RenderOptions {
    let render_options = if options.theme.as_deref() == Some("high-contrast") {
        RenderOptions::high_contrast()
    } else {
        RenderOptions::entry()
    };
    // There are no system fonts to query inside the browser sandbox.
    let mut render_options = render_options.with_fast_text(options.fast_text.unwrap_or(true));

    if let Some(font_family) = options.font_family {
        render_options.theme.font_family = font_family;
    }
    if let Some(font_size) = options.font_size {
        render_options.theme.font_size = font_size;
    }
    if let Some(color) = options.highlight_color {
        render_options.theme.highlight_color = color;
    }

    render_options
}

fn parse_options(options_json: Option<String>) -> Result<RenderOptions, JsValue> {
    let options = if let Some(raw_options) = options_json {
        serde_json::from_str::<BlockRenderOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string()))?
    } else {
        BlockRenderOptions::default()
    };
    Ok(build_render_options(options))
}

/// Renders a block tree (or sibling sequence) given as JSON.
#[wasm_bindgen]
pub fn render_blocks_svg(blocks_json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let render_options = parse_options(options_json)?;
    render_with_options(blocks_json, render_options)
        .map_err(|error| JsValue::from_str(&error.to_string()))
}

/// Renders search results as a flat list of block cards.
#[wasm_bindgen]
pub fn render_block_list_svg(
    blocks_json: &str,
    options_json: Option<String>,
) -> Result<String, JsValue> {
    let render_options = parse_options(options_json)?;
    render_list_with_options(blocks_json, render_options)
        .map_err(|error| JsValue::from_str(&error.to_string()))
}

#[cfg(test)]
mod tests {
    use entry_block_renderer::{render_list_with_options, render_with_options};

    use crate::{BlockRenderOptions, build_render_options};

    #[test]
    fn renders_loop_under_synthesized_start() {
        let blocks = r#"[
            {"id": "loop", "fileName": "repeat_basic", "category": "flow", "name": "10 번 반복하기",
             "children": [{"id": "mv", "category": "moving", "name": "10 만큼 움직이기"}]}
        ]"#;

        let svg = render_with_options(blocks, build_render_options(BlockRenderOptions::default()))
            .expect("block tree should render");

        assert!(svg.contains("<svg"));
        assert!(svg.contains("data-id=\"start\""));
        assert!(svg.contains("10 만큼 움직이기"));
    }

    #[test]
    fn options_override_theme() {
        let options = build_render_options(BlockRenderOptions {
            highlight_color: Some("#00FFFF".to_string()),
            ..Default::default()
        });
        assert!(options.layout.fast_text_metrics);
        let svg = render_with_options(r#"{"name":"x","selected":true}"#, options).unwrap();
        assert!(svg.contains("stroke=\"#00FFFF\""));
    }

    #[test]
    fn renders_card_list() {
        let svg = render_list_with_options(
            r#"[{"name":"a","category":"sound"},{"name":"b","category":"func"}]"#,
            build_render_options(BlockRenderOptions::default()),
        )
        .unwrap();
        assert!(svg.contains("height=\"110\""));
    }
}
