#![allow(dead_code)]

use image::{Rgba, RgbaImage};

use slim_core::compositor::BackBuffer;
use slim_core::config::ViewerConfig;
use slim_core::image_source::SourceImage;
use slim_core::viewer::{Presenter, Viewer};
use slim_core::viewport::InitialLayout;

/// Image whose pixel at (x, y) encodes its own coordinates: R = x % 256,
/// G = y % 256, B = (x / 256) + 16 * (y / 256).
pub fn coordinate_image(width: u32, height: u32) -> SourceImage {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x % 256) as u8,
            (y % 256) as u8,
            ((x / 256) + 16 * (y / 256)) as u8,
            255,
        ])
    });
    SourceImage::from_rgba(img).expect("non-empty image")
}

pub fn solid_image(width: u32, height: u32, color: [u8; 4]) -> SourceImage {
    SourceImage::from_rgba(RgbaImage::from_pixel(width, height, Rgba(color)))
        .expect("non-empty image")
}

pub fn viewer(image: SourceImage, win_width: u32, win_height: u32, zoom: f64) -> Viewer {
    Viewer::new(
        image,
        InitialLayout {
            win_width,
            win_height,
            zoom,
        },
        ViewerConfig::default(),
    )
}

/// Presenter that keeps a copy of every frame it is handed.
#[derive(Default)]
pub struct RecordingPresenter {
    pub frames: Vec<BackBuffer>,
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, frame: &BackBuffer) {
        self.frames.push(frame.clone());
    }
}
