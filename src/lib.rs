//! Lays out trees of Entry-style programming blocks and renders them as
//! compact SVG diagrams.
//!
//! ```no_run
//! use entry_block_renderer::{BlockInput, BlockNode, RenderOptions, render_blocks};
//!
//! let input = BlockInput::Many(vec![
//!     BlockNode::new("10번 반복하기", "flow")
//!         .with_file_name("repeat_basic")
//!         .with_children(vec![BlockNode::new("이동 방향으로 10 만큼 움직이기", "moving")]),
//! ]);
//! let options = RenderOptions::default();
//! let svg = render_blocks(Some(&input), &options.theme, &options.layout);
//! assert!(svg.starts_with("<svg"));
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod parser;
pub mod render;
pub mod text_metrics;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, LayoutConfig, RenderConfig, load_config};
pub use ir::{BlockInput, BlockKind, BlockNode};
pub use layout::{Layout, LayoutEngine, classify, compute_layout, compute_layout_with, root_block};
pub use parser::{ParseError, parse_block_list, parse_blocks};
pub use render::{render_block_list, render_svg};
pub use text_metrics::{EstimateMeasurer, FixedWidthMeasurer, FontMeasurer, TextMeasure};
pub use theme::Theme;

/// Theme and layout settings for one render call.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub theme: Theme,
    pub layout: LayoutConfig,
}

impl RenderOptions {
    pub fn entry() -> Self {
        Self::default()
    }

    pub fn high_contrast() -> Self {
        Self {
            theme: Theme::high_contrast(),
            layout: LayoutConfig::default(),
        }
    }

    /// Size labels from character estimates instead of system fonts.
    pub fn with_fast_text(mut self, fast: bool) -> Self {
        self.layout.fast_text_metrics = fast;
        self
    }
}

/// Renders a block tree (or a sequence of sibling blocks) as an SVG document.
///
/// Sequences that do not begin with an entry block are shown beneath a
/// synthesized one. `None` or an empty sequence renders as an empty string.
pub fn render_blocks(input: Option<&BlockInput>, theme: &Theme, config: &LayoutConfig) -> String {
    let Some(root) = input.and_then(layout::root_block) else {
        return String::new();
    };
    let layout = compute_layout(&root, theme, config);
    render_svg(&layout, theme)
}

/// Like [`render_blocks`], with an explicit text measurer.
pub fn render_blocks_with(
    input: Option<&BlockInput>,
    theme: &Theme,
    config: &LayoutConfig,
    measurer: &dyn TextMeasure,
) -> String {
    let Some(root) = input.and_then(layout::root_block) else {
        return String::new();
    };
    let layout = compute_layout_with(&root, theme, config, measurer);
    render_svg(&layout, theme)
}

/// Parses block JSON and renders the tree diagram.
pub fn render_with_options(input: &str, options: RenderOptions) -> Result<String, ParseError> {
    let blocks = parse_blocks(input)?;
    Ok(render_blocks(blocks.as_ref(), &options.theme, &options.layout))
}

/// Parses block JSON and renders the flat card listing.
pub fn render_list_with_options(input: &str, options: RenderOptions) -> Result<String, ParseError> {
    let blocks = parse_block_list(input)?;
    Ok(render_block_list(&blocks, &options.theme, &options.layout))
}
