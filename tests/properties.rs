use entry_block_renderer::layout::synthesized_start;
use entry_block_renderer::render::render_block_list;
use entry_block_renderer::{
    BlockInput, BlockKind, BlockNode, FixedWidthMeasurer, LayoutConfig, LayoutEngine, Theme,
    classify, render_blocks, render_blocks_with,
};

const MEASURER: FixedWidthMeasurer = FixedWidthMeasurer { char_width: 7.0 };

fn statement(name: &str) -> BlockNode {
    BlockNode::new(name, "moving")
}

fn loop_block(children: Vec<BlockNode>) -> BlockNode {
    BlockNode::new("계속 반복하기", "flow")
        .with_file_name("repeat_inf")
        .with_children(children)
}

#[test]
fn width_stays_within_clamp_and_grows_with_label() {
    let config = LayoutConfig::default();
    let mut previous = 0.0;
    for char_width in [0.0, 1.0, 3.5, 5.0, 8.0, 12.0, 20.0, 40.0] {
        let measurer = FixedWidthMeasurer { char_width };
        let engine = LayoutEngine::new(&config, &measurer, 12.0);
        let width = engine.block_width(&statement("move ten steps"));
        assert!((100.0..=250.0).contains(&width), "width {width} out of range");
        assert!(width >= previous, "width shrank from {previous} to {width}");
        previous = width;
    }
}

#[test]
fn explicit_kind_is_authoritative() {
    let categories = ["start", "flow", "judgement", "calc", "variable", "", "unknown"];
    for kind in BlockKind::ALL {
        for category in categories {
            let node = BlockNode::new("만약 반복", category)
                .with_file_name("when_boolean_get_repeat")
                .with_type(kind.as_str());
            assert_eq!(classify(&node), kind, "category {category:?}");
        }
    }
}

#[test]
fn container_inner_heights() {
    let config = LayoutConfig::default();
    let engine = LayoutEngine::new(&config, &MEASURER, 12.0);
    assert_eq!(engine.inner_height(&loop_block(vec![])), 0.0);
    assert_eq!(engine.inner_height(&loop_block(vec![statement("a")])), 56.0);
}

#[test]
fn total_height_grows_with_every_sibling() {
    let config = LayoutConfig::default();
    let engine = LayoutEngine::new(&config, &MEASURER, 12.0);
    let mut children = Vec::new();
    let mut previous = engine.total_height(&synthesized_start(children.clone()));
    for index in 0..8 {
        let child = if index % 3 == 2 {
            loop_block(vec![])
        } else {
            statement("step")
        };
        children.push(child);
        let height = engine.total_height(&synthesized_start(children.clone()));
        assert!(height > previous, "{height} <= {previous} after {} children", index + 1);
        previous = height;
    }
}

#[test]
fn flow_classification_depends_on_loop_naming() {
    let looped = BlockNode::new("10번 반복하기", "flow").with_file_name("repeat_basic");
    assert_eq!(classify(&looped), BlockKind::Container);
    let plain = BlockNode::new("2초 기다리기", "flow").with_file_name("wait_second");
    assert_eq!(classify(&plain), BlockKind::Simple);
}

#[test]
fn empty_inputs_render_empty_documents() {
    let theme = Theme::entry();
    let config = LayoutConfig::default();
    assert_eq!(render_blocks(None, &theme, &config), "");
    assert_eq!(render_blocks(Some(&BlockInput::Many(vec![])), &theme, &config), "");
}

#[test]
fn bare_sequence_gets_a_start_wrapper_with_children_in_order() {
    let theme = Theme::entry();
    let config = LayoutConfig::default();
    let input = BlockInput::Many(vec![
        statement("first").with_id("a"),
        statement("second").with_id("b"),
    ]);
    let svg = render_blocks_with(Some(&input), &theme, &config, &MEASURER);
    let root = svg.find("data-id=\"start\"").expect("wrapper rendered");
    let a = svg.find("data-id=\"a\"").expect("a rendered");
    let b = svg.find("data-id=\"b\"").expect("b rendered");
    assert!(root < a && a < b);
    assert!(svg.contains("translate(62,54)"));
    assert!(svg.contains("translate(62,87)"));
    assert_eq!(svg.matches("class=\"block-group\"").count(), 3);
}

#[test]
fn list_height_and_card_offsets() {
    let theme = Theme::entry();
    let config = LayoutConfig::default();
    for count in 1..6usize {
        let blocks: Vec<BlockNode> = (0..count).map(|i| statement(&format!("b{i}"))).collect();
        let svg = render_block_list(&blocks, &theme, &config);
        let expected_height = 45 * count + 20;
        assert!(
            svg.contains(&format!("height=\"{expected_height}\"")),
            "count {count}: {svg}"
        );
        for index in 0..count {
            assert!(svg.contains(&format!("translate(10, {})", 10 + index * 45)));
        }
    }
}

#[test]
fn selection_overrides_stroke_for_every_kind() {
    let theme = Theme::entry();
    let config = LayoutConfig::default();
    for kind in BlockKind::ALL {
        let node = BlockNode::new("picked", "moving")
            .with_type(kind.as_str())
            .selected(true);
        let svg = render_blocks_with(Some(&BlockInput::Single(node)), &theme, &config, &MEASURER);
        assert!(
            svg.contains("stroke=\"#FFD700\" stroke-width=\"3\""),
            "{kind:?}: {svg}"
        );
        assert!(!svg.contains("#8518dc"), "{kind:?} kept the category stroke");
    }
}
