use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use peano_explorer::{
    AnimationConfig, HeadlessController, Intent, PpmFilePresenter, TickPlan, Viewport,
};

#[derive(Parser, Debug)]
#[command(name = "peano_explorer")]
#[command(about = "Renders the animated Peano curve to a PPM image", long_about = None)]
#[command(version)]
struct Cli {
    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Number of animation ticks to run before capturing the frame
    #[arg(long, default_value_t = 250)]
    ticks: u32,

    /// Synthetic clock step between ticks, in milliseconds
    #[arg(long, default_value_t = 16)]
    tick_ms: u64,

    /// Deepest recursion level the animation ratchets up to
    #[arg(long, default_value_t = 4)]
    max_depth: u32,

    /// Hold zoom in for every tick
    #[arg(long)]
    zoom_in: bool,

    /// Hold zoom out for every tick
    #[arg(long)]
    zoom_out: bool,

    /// Horizontal pan direction held for every tick
    #[arg(long, default_value_t = 0, allow_negative_numbers = true,
          value_parser = clap::value_parser!(i8).range(-1..=1))]
    pan_x: i8,

    /// Vertical pan direction held for every tick
    #[arg(long, default_value_t = 0, allow_negative_numbers = true,
          value_parser = clap::value_parser!(i8).range(-1..=1))]
    pan_y: i8,

    /// Output image path
    #[arg(short, long, default_value = "output/peano.ppm",
          value_hint = clap::ValueHint::FilePath)]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger with default level (overridden by RUST_LOG)
    let env = Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env).init();

    let config = AnimationConfig {
        max_depth: cli.max_depth,
        ..AnimationConfig::default()
    };
    let viewport = Viewport::new(cli.width, cli.height).context("invalid image size")?;
    let plan = TickPlan {
        ticks: cli.ticks,
        tick_ms: cli.tick_ms,
        intent: Intent {
            zoom_in: cli.zoom_in,
            zoom_out: cli.zoom_out,
            pan_x: cli.pan_x,
            pan_y: cli.pan_y,
        },
    };

    let mut controller = HeadlessController::new(PpmFilePresenter::new(), config, viewport)
        .context("invalid animation settings")?;

    controller.render(plan).context("failed to render frame")?;
    controller
        .write(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    Ok(())
}
