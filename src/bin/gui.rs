use clap::Parser;
use env_logger::Env;
use peano_explorer::{AnimationConfig, DisplayConfig, RunGuiCommand};

#[derive(Parser, Debug)]
#[command(name = "gui")]
#[command(about = "Interactive Peano curve explorer", long_about = None)]
#[command(version)]
struct Cli {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Open borderless fullscreen
    #[arg(long)]
    fullscreen: bool,

    /// Tick rate of the animation
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Deepest recursion level the animation ratchets up to
    #[arg(long, default_value_t = 4)]
    max_depth: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger with default level (overridden by RUST_LOG)
    let env = Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env).init();

    let display = DisplayConfig {
        width: cli.width,
        height: cli.height,
        fullscreen: cli.fullscreen,
        target_fps: cli.fps,
        ..DisplayConfig::default()
    };
    let animation = AnimationConfig {
        max_depth: cli.max_depth,
        ..AnimationConfig::default()
    };

    RunGuiCommand::new(display, animation).execute()
}
