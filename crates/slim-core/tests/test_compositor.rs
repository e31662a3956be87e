mod common;

use image::{Rgba, RgbaImage};

use slim_core::cache::ScaledRegion;
use slim_core::compositor::Compositor;
use slim_core::geometry::PixelRect;

const BG: Rgba<u8> = Rgba([10, 20, 30, 255]);
const FG: Rgba<u8> = Rgba([200, 100, 50, 255]);

fn region(dest: PixelRect) -> ScaledRegion {
    ScaledRegion {
        source: PixelRect::new(0, 0, dest.width, dest.height),
        dest,
        pixels: RgbaImage::from_pixel(dest.width as u32, dest.height as u32, FG),
    }
}

#[test]
fn test_draw_without_region_clears() {
    let mut compositor = Compositor::new(8, 6, BG);
    compositor.draw(None);
    let buf = compositor.back_buffer();
    assert!(buf.pixels().pixels().all(|p| *p == BG));
}

#[test]
fn test_draw_places_region_at_dest() {
    let mut compositor = Compositor::new(20, 20, BG);
    compositor.draw(Some(&region(PixelRect::new(5, 7, 4, 3))));
    let buf = compositor.back_buffer();

    assert_eq!(buf.pixel(5, 7), Some(FG));
    assert_eq!(buf.pixel(8, 9), Some(FG));
    assert_eq!(buf.pixel(4, 7), Some(BG));
    assert_eq!(buf.pixel(9, 7), Some(BG));
    assert_eq!(buf.pixel(5, 10), Some(BG));

    let painted = buf.pixels().pixels().filter(|p| **p == FG).count();
    assert_eq!(painted, 12);
}

#[test]
fn test_draw_clears_previous_frame() {
    let mut compositor = Compositor::new(10, 10, BG);
    compositor.draw(Some(&region(PixelRect::new(0, 0, 10, 10))));
    compositor.draw(Some(&region(PixelRect::new(8, 8, 2, 2))));
    let buf = compositor.back_buffer();
    assert_eq!(buf.pixel(0, 0), Some(BG));
    assert_eq!(buf.pixel(9, 9), Some(FG));
}

#[test]
fn test_draw_clips_overhanging_region() {
    let mut compositor = Compositor::new(10, 10, BG);
    // One pixel wider and taller than what fits.
    compositor.draw(Some(&region(PixelRect::new(5, 5, 6, 6))));
    let buf = compositor.back_buffer();
    assert_eq!(buf.pixel(9, 9), Some(FG));
    let painted = buf.pixels().pixels().filter(|p| **p == FG).count();
    assert_eq!(painted, 25);
}

#[test]
fn test_draw_region_outside_buffer_is_skipped() {
    let mut compositor = Compositor::new(10, 10, BG);
    compositor.draw(Some(&region(PixelRect::new(50, 50, 4, 4))));
    assert!(compositor.back_buffer().pixels().pixels().all(|p| *p == BG));
}

#[test]
fn test_resize_recreates_buffer() {
    let mut compositor = Compositor::new(10, 10, BG);
    compositor.resize(30, 12);
    assert_eq!(compositor.back_buffer().width(), 30);
    assert_eq!(compositor.back_buffer().height(), 12);
    assert_eq!(compositor.back_buffer().as_bytes().len(), 30 * 12 * 4);
}

#[test]
fn test_save_png() {
    let mut compositor = Compositor::new(4, 4, BG);
    compositor.draw(None);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.png");
    compositor.back_buffer().save_png(&path).unwrap();
    let reloaded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(reloaded.dimensions(), (4, 4));
    assert_eq!(*reloaded.get_pixel(2, 2), BG);
}
