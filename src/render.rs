use crate::config::{LayoutConfig, RenderConfig};
use crate::ir::{BlockKind, BlockNode};
use crate::layout::{BlockLayout, Layout, truncate_label};
use crate::theme::Theme;
use anyhow::Result;
use std::fmt::Write as _;
use std::path::Path;

/// Where a block's label sits relative to the block origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub translate: (f32, f32),
    pub text: (f32, f32),
    /// Judgement and value blocks use the smaller label size.
    pub small_font: bool,
    /// Statement shapes are stroked with round joins and caps.
    pub round_joins: bool,
}

impl BlockKind {
    pub fn label_placement(self) -> LabelPlacement {
        match self {
            BlockKind::Start => LabelPlacement {
                translate: (18.0, 20.0),
                text: (21.0, 1.315),
                small_font: false,
                round_joins: true,
            },
            BlockKind::Simple | BlockKind::Container => LabelPlacement {
                translate: (14.0, 14.0),
                text: (0.0, 3.315),
                small_font: false,
                round_joins: true,
            },
            BlockKind::Judgement | BlockKind::Value => LabelPlacement {
                translate: (20.0, 14.0),
                text: (0.0, 3.315),
                small_font: true,
                round_joins: false,
            },
        }
    }
}

pub fn render_svg(layout: &Layout, theme: &Theme) -> String {
    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\" style=\"background: {};\">",
        layout.width,
        layout.height,
        escape_xml(&theme.background)
    );
    render_block(&mut svg, &layout.root, theme);
    svg.push_str("</svg>");
    svg
}

// Parent group first, then children top to bottom; paint order depends on it.
fn render_block(svg: &mut String, block: &BlockLayout, theme: &Theme) {
    let fill = theme.color_for(&block.category);
    let (stroke, stroke_width) = theme.block_stroke(fill, block.selected);
    let placement = block.kind.label_placement();
    let font_size = if placement.small_font {
        theme.small_font_size
    } else {
        theme.font_size
    };
    let joins = if placement.round_joins {
        " stroke-linejoin=\"round\" stroke-linecap=\"round\""
    } else {
        ""
    };

    let _ = write!(
        svg,
        "<g transform=\"translate({},{})\" class=\"block-group\" data-id=\"{}\">",
        block.x,
        block.y,
        escape_xml(block.id.as_deref().unwrap_or(""))
    );
    let _ = write!(
        svg,
        "<g><path d=\"{}\" fill=\"{}\" class=\"blockPath\" stroke=\"{}\" stroke-width=\"{}\"{}/></g>",
        block.kind.outline(block.width, block.inner_height),
        escape_xml(fill),
        escape_xml(&stroke),
        stroke_width,
        joins
    );
    let _ = write!(
        svg,
        "<g transform=\"translate({},{})\"><text font-size=\"{}px\" font-weight=\"bold\" font-family=\"{}\" fill=\"{}\" x=\"{}\" y=\"{}\">{}</text></g>",
        placement.translate.0,
        placement.translate.1,
        font_size,
        escape_xml(&theme.font_family),
        escape_xml(&theme.label_color),
        placement.text.0,
        placement.text.1,
        escape_xml(&block.label)
    );
    svg.push_str("</g>");

    for child in &block.children {
        render_block(svg, child, theme);
    }
}

/// Flat listing of blocks as uniform cards, one per row, in input order.
pub fn render_block_list(blocks: &[BlockNode], theme: &Theme, config: &LayoutConfig) -> String {
    if blocks.is_empty() {
        return String::new();
    }
    let list = &config.list;
    let row = list.card_height + list.card_gap;
    let height = row * blocks.len() as f32 + 2.0 * list.margin;

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\" style=\"background: {};\">",
        list.canvas_width,
        height,
        escape_xml(&theme.background)
    );

    for (index, block) in blocks.iter().enumerate() {
        let y = list.margin + index as f32 * row;
        let fill = theme.color_for(block.category());
        let label = truncate_label(block.label(), config.max_label_chars);
        let _ = write!(
            svg,
            "<g transform=\"translate({}, {})\" class=\"block-card\" data-id=\"{}\">",
            list.margin,
            y,
            escape_xml(block.id.as_deref().unwrap_or(""))
        );
        let _ = write!(
            svg,
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" rx=\"{r}\" ry=\"{r}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            list.card_width,
            list.card_height,
            escape_xml(fill),
            escape_xml(&theme.stroke_for(fill)),
            theme.stroke_width,
            r = list.corner_radius
        );
        let _ = write!(
            svg,
            "<text x=\"{}\" y=\"{}\" font-size=\"{}px\" font-weight=\"bold\" fill=\"{}\">{}</text>",
            list.label_x,
            list.text_y,
            theme.list_font_size,
            escape_xml(&theme.label_color),
            escape_xml(&label)
        );
        let _ = write!(
            svg,
            "<text x=\"{}\" y=\"{}\" font-size=\"{}px\" fill=\"{}\" text-anchor=\"end\">{}</text>",
            list.tag_x,
            list.text_y,
            theme.list_tag_font_size,
            escape_xml(&theme.list_tag_color),
            escape_xml(block.category())
        );
        svg.push_str("</g>");
    }

    svg.push_str("</svg>");
    svg
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    if svg.is_empty() {
        return Err(anyhow::anyhow!("Nothing to rasterize: the diagram is empty"));
    }
    let mut opt = usvg::Options::default();
    opt.font_family = "NanumGothic".to_string();
    opt.fontdb_mut().load_system_fonts();
    opt.default_size = usvg::Size::from_wh(render_cfg.width, render_cfg.height)
        .ok_or_else(|| anyhow::anyhow!("Invalid default raster size"))?;

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let scale = render_cfg.scale.max(0.1);
    let size = tree.size().to_int_size();
    let width = (size.width() as f32 * scale).ceil() as u32;
    let height = (size.height() as f32 * scale).ceil() as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;
    if let Some((r, g, b)) = render_cfg.background_rgb() {
        pixmap.fill(resvg::tiny_skia::Color::from_rgba8(r, g, b, 255));
    }

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap_mut,
    );
    pixmap.save_png(output)?;
    tracing::debug!(path = %output.display(), width, height, "wrote png");
    Ok(())
}

#[cfg(not(feature = "png"))]
pub fn write_output_png(_svg: &str, _output: &Path, _render_cfg: &RenderConfig) -> Result<()> {
    Err(anyhow::anyhow!("PNG output requires the `png` feature"))
}

pub(crate) fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
