mod app;
mod convert;
mod input;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use slim_core::config::{Background, ScaleFilter, ViewerConfig};
use slim_core::consts::{DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH};
use slim_core::image_source::load_image;
use slim_core::viewer::Viewer;
use slim_core::viewport::initial_layout;

#[derive(Parser)]
#[command(name = "slim", about = "Simple lightweight image viewer")]
#[command(version)]
struct Args {
    /// Image to open
    image: PathBuf,

    /// Screen width available to the window
    #[arg(long, default_value_t = DEFAULT_SCREEN_WIDTH)]
    max_width: u32,

    /// Screen height available to the window
    #[arg(long, default_value_t = DEFAULT_SCREEN_HEIGHT)]
    max_height: u32,

    /// Resampling filter (nearest, triangle, catmull-rom, gaussian, lanczos3)
    #[arg(long, default_value_t = ScaleFilter::Triangle)]
    filter: ScaleFilter,

    /// Background color as RRGGBB
    #[arg(long, default_value = "000000")]
    background: Background,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let image = load_image(&args.image)?;
    let layout = initial_layout(image.width(), image.height(), args.max_width, args.max_height);
    let title = image.title();

    print_controls();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([layout.win_width as f32, layout.win_height as f32])
            .with_min_inner_size([64.0, 64.0])
            .with_title(title),
        ..Default::default()
    };

    let config = ViewerConfig {
        filter: args.filter,
        background: args.background,
    };
    let window_size = (layout.win_width, layout.win_height);
    let viewer = Viewer::new(image, layout, config);

    eframe::run_native(
        "slim",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::SlimApp::new(&cc.egui_ctx, viewer, window_size)))
        }),
    )
    .map_err(|e| anyhow!("Cannot open window: {e}"))
}

fn print_controls() {
    println!("SLIM Controls:");
    println!("  Mouse wheel / +/- : Zoom in/out");
    println!("  Left mouse drag   : Pan image");
    println!("  R                 : Reset view");
    println!("  Q / ESC           : Quit");
}
