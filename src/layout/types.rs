use serde::Serialize;

use crate::ir::BlockKind;

/// A block with its resolved kind, display label and absolute position.
#[derive(Debug, Clone, Serialize)]
pub struct BlockLayout {
    pub id: Option<String>,
    pub kind: BlockKind,
    pub category: String,
    pub label: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    /// Height of the nested body; non-zero only for containers with children.
    pub inner_height: f32,
    pub selected: bool,
    pub children: Vec<BlockLayout>,
}

impl BlockLayout {
    pub fn height(&self) -> f32 {
        self.kind.body_height(self.inner_height)
    }
}

/// A laid-out block tree and the canvas it is drawn on.
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub root: BlockLayout,
}
