use anyhow::Context;
use clap::{Parser, ValueEnum};
use env_logger::Env;
use fortress_foreman::*;
use log::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Ascii,
    Svg,
    Json,
}

/// Compute a fortress layout and print it.
#[derive(Debug, Parser)]
#[command(name = "fortress-foreman", version)]
struct Args {
    /// Layout to draw: corner or ring.
    #[arg(short, long, default_value = "corner")]
    layout: LayoutKind,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,

    /// Grid width in tiles.
    #[arg(long, default_value_t = constants::GRID_WIDTH)]
    width: u32,

    /// Grid height in tiles.
    #[arg(long, default_value_t = constants::GRID_HEIGHT)]
    height: u32,

    /// Pixel size of one tile in SVG output.
    #[arg(long, default_value_t = constants::CELL_SIZE_PX)]
    cell_size: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();
    let config = LayoutConfig::default()
        .with_grid_size(args.width, args.height)
        .with_cell_size(args.cell_size);

    let mut dispatcher = LayoutDispatcher::new(config).context("invalid layout configuration")?;
    let plan = dispatcher.dispatch(args.layout)?;

    let summary = plan.summary();
    info!(
        "{} layout: {} furnaces, {} bases, {} machine guns, {} central",
        plan.kind,
        summary.furnaces,
        summary.bases,
        summary.machine_guns,
        summary.central_structures
    );

    for (style, tiles) in dispatcher.grid().style_counts() {
        debug!("{}: {} tiles", style, tiles);
    }

    match args.format {
        OutputFormat::Ascii => print!("{}", render_ascii(dispatcher.grid())),
        OutputFormat::Svg => {
            let config = dispatcher.config();
            let mut svg = SvgRenderer::new(config.grid_width, config.grid_height, config.cell_size_px);
            plan.visualize(&mut svg);
            print!("{}", svg.to_svg());
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&plan).context("failed to serialize layout")?;
            println!("{}", json);
        }
    }

    Ok(())
}
