use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use slim_core::consts::{DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH};
use slim_core::image_source::load_image;
use slim_core::viewport::{fit_zoom, initial_layout};

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,

    /// Screen width used to size the initial window
    #[arg(long, default_value_t = DEFAULT_SCREEN_WIDTH)]
    pub screen_width: u32,

    /// Screen height used to size the initial window
    #[arg(long, default_value_t = DEFAULT_SCREEN_HEIGHT)]
    pub screen_height: u32,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let image = load_image(&args.file)?;
    let layout = initial_layout(
        image.width(),
        image.height(),
        args.screen_width,
        args.screen_height,
    );

    let bytes = u64::from(image.width()) * u64::from(image.height()) * 4;
    println!("File:        {}", args.file.display());
    println!("Title:       {}", image.title());
    println!("Dimensions:  {}x{}", image.width(), image.height());
    println!("Decoded:     {:.1} MB", bytes as f64 / (1024.0 * 1024.0));
    println!("Window:      {}x{}", layout.win_width, layout.win_height);
    println!("Zoom:        {:.3}", layout.zoom);
    println!(
        "Fit zoom:    {:.3}",
        fit_zoom(image.width(), image.height(), layout.win_width, layout.win_height)
    );

    Ok(())
}
