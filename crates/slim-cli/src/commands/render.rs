use std::collections::VecDeque;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use slim_core::compositor::BackBuffer;
use slim_core::config::{Background, ScaleFilter, ViewerConfig};
use slim_core::consts::{DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH};
use slim_core::event::{parse_script, EventQueue, ViewerEvent};
use slim_core::image_source::load_image;
use slim_core::viewer::{Presenter, Viewer};
use slim_core::viewport::{initial_layout, InitialLayout};
use tracing::info;

#[derive(Args)]
pub struct RenderArgs {
    /// Input image file
    pub file: PathBuf,

    /// Window width (defaults to the size the viewer would open with)
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height (defaults to the size the viewer would open with)
    #[arg(long)]
    pub height: Option<u32>,

    /// Starting zoom (defaults to the viewer's initial zoom)
    #[arg(long)]
    pub zoom: Option<f64>,

    /// Input script, e.g. "press:50,50 move:30,80 release key:+ scroll-down resize:800x600"
    #[arg(long, default_value = "")]
    pub events: String,

    /// Resampling filter (nearest, triangle, catmull-rom, gaussian, lanczos3)
    #[arg(long, default_value_t = ScaleFilter::Triangle)]
    pub filter: ScaleFilter,

    /// Background color as RRGGBB
    #[arg(long, default_value = "000000")]
    pub background: Background,

    /// Output PNG path
    #[arg(short, long, default_value = "frame.png")]
    pub output: PathBuf,
}

/// Keeps the most recent frame handed over by the session.
#[derive(Default)]
struct LastFrame {
    frame: Option<BackBuffer>,
    presented: usize,
}

impl Presenter for LastFrame {
    fn present(&mut self, frame: &BackBuffer) {
        self.frame = Some(frame.clone());
        self.presented += 1;
    }
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let image = load_image(&args.file)?;
    let mut events: VecDeque<ViewerEvent> = parse_script(&args.events)
        .context("Invalid --events script")?
        .into();
    events.push_back(ViewerEvent::Close);

    let layout = resolve_layout(args, image.width(), image.height());
    let config = ViewerConfig {
        filter: args.filter,
        background: args.background,
    };

    let mut viewer = Viewer::new(image, layout, config);
    let mut queue = EventQueue::new(events);
    let mut presenter = LastFrame::default();
    viewer.run(&mut queue, &mut presenter);

    let frame = presenter
        .frame
        .context("Viewer session produced no frame")?;
    frame
        .save_png(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    let (win_w, win_h) = viewer.viewport().window_size();
    let (off_x, off_y) = viewer.viewport().offset();
    info!(frames = presenter.presented, "Render finished");
    println!("Window:    {win_w}x{win_h}");
    println!("Zoom:      {:.3}", viewer.viewport().zoom());
    println!("Offset:    ({off_x}, {off_y})");
    println!("Rebuilds:  {}", viewer.cache().rebuild_count());
    println!("Frames:    {}", presenter.presented);
    println!("Saved:     {}", args.output.display());

    Ok(())
}

fn resolve_layout(args: &RenderArgs, image_width: u32, image_height: u32) -> InitialLayout {
    let mut layout = initial_layout(
        image_width,
        image_height,
        DEFAULT_SCREEN_WIDTH,
        DEFAULT_SCREEN_HEIGHT,
    );
    if let Some(w) = args.width {
        layout.win_width = w;
    }
    if let Some(h) = args.height {
        layout.win_height = h;
    }
    if let Some(z) = args.zoom {
        layout.zoom = z;
    }
    layout
}
