use crate::layout::{BlockLayout, Layout};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Flattened, serializable view of a computed layout, for comparing
/// geometry across versions without diffing SVG text.
#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub width: f32,
    pub height: f32,
    pub blocks: Vec<BlockDump>,
}

#[derive(Debug, Serialize)]
pub struct BlockDump {
    pub id: Option<String>,
    pub kind: String,
    pub label: String,
    pub depth: usize,
    pub parent: Option<usize>,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub inner_height: f32,
    pub selected: bool,
}

impl LayoutDump {
    pub fn from_layout(layout: &Layout) -> Self {
        let mut blocks = Vec::new();
        push_block(&mut blocks, &layout.root, None, 0);
        LayoutDump {
            width: layout.width,
            height: layout.height,
            blocks,
        }
    }
}

fn push_block(out: &mut Vec<BlockDump>, block: &BlockLayout, parent: Option<usize>, depth: usize) {
    let index = out.len();
    out.push(BlockDump {
        id: block.id.clone(),
        kind: block.kind.as_str().to_string(),
        label: block.label.clone(),
        depth,
        parent,
        x: block.x,
        y: block.y,
        width: block.width,
        height: block.height(),
        inner_height: block.inner_height,
        selected: block.selected,
    });
    for child in &block.children {
        push_block(out, child, Some(index), depth + 1);
    }
}

pub fn write_layout_dump(path: &Path, layout: &Layout) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_layout(layout);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
