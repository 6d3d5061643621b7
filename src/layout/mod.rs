mod classify;
pub mod shapes;
mod text;
pub(crate) mod types;

pub use classify::classify;
pub use text::truncate_label;
pub use types::*;

use std::borrow::Cow;

use crate::config::LayoutConfig;
use crate::ir::{BlockInput, BlockKind, BlockNode};
use crate::text_metrics::{EstimateMeasurer, FontMeasurer, TextMeasure};
use crate::theme::Theme;
use shapes::{CHILD_INDENT, CONTAINER_FOOTER_HEIGHT, ROW_HEIGHT, START_CHILD_OFFSET, START_HEIGHT};
use text::{clamp_block_width, padded_label_width};

/// Id and label of the entry block wrapped around bare block sequences
/// ("when the start button is clicked").
pub const SYNTHESIZED_START_ID: &str = "start";
pub const SYNTHESIZED_START_LABEL: &str = "시작하기 버튼을 클릭했을 때";

/// Sizes and places blocks. Holds no state beyond its borrowed configuration,
/// so every measurement is recomputed per call.
pub struct LayoutEngine<'a> {
    config: &'a LayoutConfig,
    measurer: &'a dyn TextMeasure,
    font_size: f32,
}

impl<'a> LayoutEngine<'a> {
    pub fn new(config: &'a LayoutConfig, measurer: &'a dyn TextMeasure, font_size: f32) -> Self {
        Self {
            config,
            measurer,
            font_size,
        }
    }

    /// Display label after truncation.
    pub fn label(&self, node: &BlockNode) -> String {
        truncate_label(node.label(), self.config.max_label_chars)
    }

    pub fn block_width(&self, node: &BlockNode) -> f32 {
        self.width_for_label(&self.label(node))
    }

    pub fn width_for_label(&self, label: &str) -> f32 {
        let measured = padded_label_width(label, self.font_size, self.measurer, self.config);
        clamp_block_width(measured, self.config)
    }

    /// Vertical space taken by a container's nested children.
    pub fn inner_height(&self, node: &BlockNode) -> f32 {
        if node.children.is_empty() {
            return 0.0;
        }
        let mut total = 0.0;
        for (index, child) in node.children.iter().enumerate() {
            total += ROW_HEIGHT;
            if classify(child) == BlockKind::Container {
                let child_inner = self.inner_height(child);
                if child_inner > 0.0 {
                    total += child_inner + CONTAINER_FOOTER_HEIGHT;
                } else {
                    // empty body still shows one row
                    total += ROW_HEIGHT;
                }
            }
            if index + 1 < node.children.len() {
                total += self.config.sibling_padding;
            }
        }
        total + ROW_HEIGHT
    }

    /// Height of children stacked as a plain sequence below a shape.
    pub fn children_stack_height(&self, children: &[BlockNode]) -> f32 {
        let mut total = 0.0;
        for (index, child) in children.iter().enumerate() {
            if index > 0 {
                total += self.config.sibling_padding;
            }
            total += self.row_advance(child);
        }
        total
    }

    pub fn total_height(&self, root: &BlockNode) -> f32 {
        let cfg = self.config;
        let body = match classify(root) {
            BlockKind::Start => START_HEIGHT + self.children_stack_height(&root.children),
            BlockKind::Container => ROW_HEIGHT + self.inner_height(root),
            _ => ROW_HEIGHT,
        };
        cfg.top_margin + body + cfg.bottom_margin
    }

    /// Vertical advance of one child row before the next sibling's padding.
    fn row_advance(&self, child: &BlockNode) -> f32 {
        let mut advance = ROW_HEIGHT;
        if classify(child) == BlockKind::Container {
            advance += self.inner_height(child);
        }
        advance
    }

    /// Where the first child of a `kind` block at (x, y) goes, if it takes children.
    fn child_origin(&self, kind: BlockKind, x: f32, y: f32) -> Option<(f32, f32)> {
        let (start_dx, start_dy) = START_CHILD_OFFSET;
        match kind {
            BlockKind::Start => Some((x + start_dx, y + start_dy)),
            BlockKind::Container => Some((x + CHILD_INDENT, y + ROW_HEIGHT)),
            BlockKind::Simple => Some((x, y + ROW_HEIGHT + self.config.sibling_padding)),
            BlockKind::Judgement | BlockKind::Value => None,
        }
    }

    /// Positions `node` at (x, y) and recursively places its children.
    pub fn place(&self, node: &BlockNode, x: f32, y: f32) -> BlockLayout {
        let kind = classify(node);
        let label = self.label(node);
        let width = self.width_for_label(&label);
        let inner_height = if kind == BlockKind::Container {
            self.inner_height(node)
        } else {
            0.0
        };

        let mut children = Vec::new();
        match self.child_origin(kind, x, y) {
            Some((child_x, mut child_y)) => {
                children.reserve(node.children.len());
                for (index, child) in node.children.iter().enumerate() {
                    if index > 0 {
                        child_y += self.config.sibling_padding;
                    }
                    children.push(self.place(child, child_x, child_y));
                    child_y += self.row_advance(child);
                }
            }
            None if !node.children.is_empty() => {
                tracing::debug!(
                    kind = kind.as_str(),
                    dropped = node.children.len(),
                    "value-like block does not render children"
                );
            }
            None => {}
        }

        BlockLayout {
            id: node.id.clone(),
            kind,
            category: node.category().to_string(),
            label,
            x,
            y,
            width,
            inner_height,
            selected: node.selected,
            children,
        }
    }
}

/// Roots the input: anything that does not begin with a start block is hung
/// beneath a synthesized one, a lone node included.
/// Returns `None` when there is nothing to draw.
pub fn root_block(input: &BlockInput) -> Option<Cow<'_, BlockNode>> {
    let nodes = input.as_slice();
    let first = nodes.first()?;
    if !first.is_start_category() {
        return Some(Cow::Owned(synthesized_start(nodes.to_vec())));
    }
    if nodes.len() > 1 {
        tracing::warn!(
            ignored = nodes.len() - 1,
            "input already starts with an entry block; trailing siblings are not drawn"
        );
    }
    Some(Cow::Borrowed(first))
}

pub fn synthesized_start(children: Vec<BlockNode>) -> BlockNode {
    BlockNode::new(SYNTHESIZED_START_LABEL, "start")
        .with_id(SYNTHESIZED_START_ID)
        .with_children(children)
}

/// Lays out a rooted tree with the measurer implied by `config`.
pub fn compute_layout(root: &BlockNode, theme: &Theme, config: &LayoutConfig) -> Layout {
    if config.fast_text_metrics {
        compute_layout_with(root, theme, config, &EstimateMeasurer)
    } else {
        let measurer = FontMeasurer::new(theme.measure_font_family());
        compute_layout_with(root, theme, config, &measurer)
    }
}

pub fn compute_layout_with(
    root: &BlockNode,
    theme: &Theme,
    config: &LayoutConfig,
    measurer: &dyn TextMeasure,
) -> Layout {
    let engine = LayoutEngine::new(config, measurer, theme.font_size);
    let height = engine.total_height(root);
    let root = engine.place(root, config.origin_x, config.origin_y);
    tracing::debug!(width = config.canvas_width, height, "computed block layout");
    Layout {
        width: config.canvas_width,
        height,
        root,
    }
}
