use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use entry_block_renderer::config::LayoutConfig;
use entry_block_renderer::ir::{BlockInput, BlockNode};
use entry_block_renderer::layout::{compute_layout_with, root_block};
use entry_block_renderer::parser::parse_blocks;
use entry_block_renderer::render::{render_block_list, render_svg};
use entry_block_renderer::text_metrics::EstimateMeasurer;
use entry_block_renderer::theme::Theme;
use std::hint::black_box;

/// `depth` levels of loops, each holding `width` statements plus the next loop.
fn nested_program(depth: usize, width: usize) -> BlockNode {
    let mut body: Vec<BlockNode> = (0..width)
        .map(|i| BlockNode::new(format!("이동 방향으로 {i} 만큼 움직이기"), "moving"))
        .collect();
    for level in 0..depth {
        let mut children: Vec<BlockNode> = (0..width)
            .map(|i| BlockNode::new(format!("step {level}.{i}"), "looks"))
            .collect();
        children.push(
            BlockNode::new(format!("{level} 번 반복하기"), "flow")
                .with_file_name("repeat_basic")
                .with_children(body),
        );
        body = children;
    }
    BlockNode::new("시작하기 버튼을 클릭했을 때", "start").with_children(body)
}

fn fixture(name: &str) -> &'static str {
    match name {
        "nested_loops" => include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/benches/fixtures/nested_loops.json"
        )),
        "start_sequence" => include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/benches/fixtures/start_sequence.json"
        )),
        _ => panic!("unknown fixture"),
    }
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for name in ["nested_loops", "start_sequence"] {
        let input = fixture(name);
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, data| {
            b.iter(|| {
                let parsed = parse_blocks(black_box(data)).expect("parse failed");
                black_box(parsed.map(|input| input.as_slice().len()));
            });
        });
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let theme = Theme::entry();
    let config = LayoutConfig::default();
    for (depth, width) in [(2, 3), (6, 4), (12, 8)] {
        let root = nested_program(depth, width);
        group.bench_with_input(
            BenchmarkId::new("nested", format!("{depth}x{width}")),
            &root,
            |b, root| {
                b.iter(|| {
                    let layout = compute_layout_with(black_box(root), &theme, &config, &EstimateMeasurer);
                    black_box(layout.height);
                });
            },
        );
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let theme = Theme::entry();
    let config = LayoutConfig::default();
    for name in ["nested_loops", "start_sequence"] {
        let input = parse_blocks(fixture(name))
            .expect("parse failed")
            .expect("fixture is not empty");
        let root = root_block(&input).expect("fixture has a root").into_owned();
        group.bench_with_input(BenchmarkId::new("tree", name), &root, |b, root| {
            b.iter(|| {
                let layout = compute_layout_with(root, &theme, &config, &EstimateMeasurer);
                black_box(render_svg(&layout, &theme).len());
            });
        });
    }

    let cards: Vec<BlockNode> = (0..40)
        .map(|i| BlockNode::new(format!("block {i}"), "calc"))
        .collect();
    let list_input = BlockInput::Many(cards);
    group.bench_function("list/40", |b| {
        b.iter(|| {
            black_box(render_block_list(black_box(list_input.as_slice()), &theme, &config).len());
        });
    });
    group.finish();
}

criterion_group!(benches, bench_parse, bench_layout, bench_render);
criterion_main!(benches);
