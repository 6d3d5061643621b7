use std::path::Path;

use entry_block_renderer::layout_dump::LayoutDump;
use entry_block_renderer::{
    FixedWidthMeasurer, LayoutConfig, Theme, compute_layout_with, parse_blocks, render_svg,
    root_block,
};

fn assert_valid_svg(svg: &str, fixture: &str) {
    assert!(svg.contains("<svg"), "{fixture}: missing <svg tag");
    assert!(svg.contains("</svg>"), "{fixture}: missing </svg tag");
    assert_eq!(
        svg.matches("<g transform").count(),
        2 * svg.matches("class=\"block-group\"").count(),
        "{fixture}: every block carries a shape group and a label group"
    );
}

fn load_fixture(rel: &str) -> entry_block_renderer::BlockInput {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(rel);
    assert!(path.exists(), "fixture missing: {}", rel);
    let input = std::fs::read_to_string(&path).expect("fixture read failed");
    parse_blocks(&input)
        .expect("parse failed")
        .expect("fixture is not empty")
}

fn layout_fixture(rel: &str) -> (LayoutDump, String) {
    let input = load_fixture(rel);
    let root = root_block(&input).expect("fixture has a root");
    let theme = Theme::entry();
    let config = LayoutConfig::default();
    let layout = compute_layout_with(&root, &theme, &config, &FixedWidthMeasurer { char_width: 7.0 });
    (LayoutDump::from_layout(&layout), render_svg(&layout, &theme))
}

#[test]
fn render_all_fixtures() {
    // Keep this list explicit so new fixtures must be added intentionally.
    let candidates = [
        "start_sequence.json",
        "nested_loops.json",
        "value_blocks.json",
        "loose.json5",
    ];

    for rel in candidates {
        let (_, svg) = layout_fixture(rel);
        assert_valid_svg(&svg, rel);
    }
}

#[test]
fn nested_loops_geometry() {
    let (dump, svg) = layout_fixture("nested_loops.json");
    assert_eq!(dump.width, 380.0);
    assert_eq!(dump.height, 389.0);

    let find = |id: &str| {
        dump.blocks
            .iter()
            .find(|block| block.id.as_deref() == Some(id))
            .unwrap_or_else(|| panic!("block {id} missing"))
    };
    let positions: Vec<(&str, f32, f32, &str)> = ["root", "loop", "cond", "turn", "empty", "stop"]
        .into_iter()
        .map(|id| {
            let block = find(id);
            (id, block.x, block.y, block.kind.as_str())
        })
        .collect();
    assert_eq!(
        positions,
        vec![
            ("root", 50.0, 20.0, "start"),
            ("loop", 62.0, 54.0, "container"),
            ("cond", 76.0, 82.0, "container"),
            ("turn", 90.0, 110.0, "simple"),
            ("empty", 76.0, 171.0, "container"),
            ("stop", 62.0, 275.0, "simple"),
        ]
    );
    assert_eq!(find("loop").inner_height, 188.0);
    assert_eq!(find("cond").inner_height, 56.0);
    assert_eq!(find("empty").inner_height, 0.0);

    assert!(svg.contains("stroke=\"#FFD700\" stroke-width=\"3\""));
    assert_eq!(svg.matches("#FFD700").count(), 1);
}

#[test]
fn sequence_is_wrapped_in_synthesized_start() {
    let (dump, svg) = layout_fixture("start_sequence.json");
    assert_eq!(dump.height, 234.0);
    assert_eq!(dump.blocks[0].id.as_deref(), Some("start"));
    assert_eq!(dump.blocks[0].label, "시작하기 버튼을 클릭했을 때");
    let children: Vec<&str> = dump
        .blocks
        .iter()
        .filter(|block| block.parent == Some(0))
        .filter_map(|block| block.id.as_deref())
        .collect();
    assert_eq!(children, vec!["b1", "b2", "b3"]);
    assert!(svg.find("data-id=\"b1\"").unwrap() < svg.find("data-id=\"b3\"").unwrap());
}

#[test]
fn value_like_blocks_and_bad_types() {
    let (dump, svg) = layout_fixture("value_blocks.json");
    let kinds: Vec<(&str, &str)> = dump
        .blocks
        .iter()
        .skip(1)
        .map(|block| (block.id.as_deref().unwrap_or(""), block.kind.as_str()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("cmp", "judgement"),
            ("var", "value"),
            ("calc", "simple"),
            ("forced", "value"),
            ("bogus", "simple"),
        ]
    );
    assert!(!svg.contains("metadata only"));
    assert_eq!(dump.height, 300.0);
}

#[test]
fn json5_input_with_placeholders_and_truncation() {
    let (dump, svg) = layout_fixture("loose.json5");
    assert_eq!(dump.blocks.len(), 3);
    assert_eq!(dump.height, 201.0);
    assert_eq!(dump.blocks[1].label, "a very long label that ..");
    assert_eq!(dump.blocks[2].label, "블록");
    assert!(svg.contains("fill=\"#d95208\""));
}
