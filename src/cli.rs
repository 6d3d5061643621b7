use crate::config::{Config, load_config};
use crate::layout::{compute_layout, root_block};
use crate::layout_dump::write_layout_dump;
use crate::parser::{parse_block_list, parse_blocks};
use crate::render::{render_block_list, render_svg, write_output_png, write_output_svg};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "blockr", version, about = "Render Entry block trees as SVG diagrams")]
pub struct Args {
    /// Input file with block JSON, or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file (svg/png). Defaults to stdout for SVG if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (theme, themeVariables, categoryColors, layout)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Render a flat card list instead of the block tree
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Write the computed tree layout as JSON to this path
    #[arg(long = "dumpLayout")]
    pub dump_layout: Option<PathBuf>,

    /// Size labels from character estimates instead of system fonts
    #[arg(long = "fastText")]
    pub fast_text: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Png,
}

pub fn run() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if args.fast_text {
        config.layout.fast_text_metrics = true;
    }

    let input = read_input(args.input.as_deref())?;
    let svg = if args.list {
        if args.dump_layout.is_some() {
            tracing::warn!("--dumpLayout is ignored in list mode");
        }
        let blocks = parse_block_list(&input)?;
        render_block_list(&blocks, &config.theme, &config.layout)
    } else {
        render_tree(&input, &config, args.dump_layout.as_deref())?
    };

    if svg.is_empty() {
        tracing::warn!("input contains no blocks; writing an empty document");
    }

    match args.output_format {
        OutputFormat::Svg => write_output_svg(&svg, args.output.as_deref())?,
        OutputFormat::Png => {
            let output = ensure_output(&args.output, "png")?;
            write_output_png(&svg, &output, &config.render)?;
        }
    }
    Ok(())
}

fn render_tree(input: &str, config: &Config, dump_path: Option<&Path>) -> Result<String> {
    let Some(blocks) = parse_blocks(input)? else {
        return Ok(String::new());
    };
    let Some(root) = root_block(&blocks) else {
        return Ok(String::new());
    };
    let layout = compute_layout(&root, &config.theme, &config.layout);
    if let Some(path) = dump_path {
        write_layout_dump(path, &layout)?;
    }
    Ok(render_svg(&layout, &config.theme))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path
        && path != Path::new("-")
    {
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!("Output path required for {} output", ext))
}
