use slim_core::geometry::PixelRect;
use slim_core::transform::{placement, visible_region};
use slim_core::viewport::ViewportState;

fn state(img: (u32, u32), win: (u32, u32), zoom: f64, offset: (i32, i32)) -> ViewportState {
    let mut s = ViewportState::new(img.0, img.1, win.0, win.1, zoom);
    s.set_offset(offset.0, offset.1);
    s
}

#[test]
fn test_fit_reset_centers_wide_image() {
    let mut s = state((1000, 500), (500, 500), 1.0, (0, 0));
    s.reset();
    assert_eq!(s.zoom(), 0.5);
    assert_eq!(s.scaled_size(), (500, 250));

    let drawn = placement(&s);
    assert_eq!(drawn.x, 0);
    assert_eq!(drawn.y, 125);

    let region = visible_region(&s).unwrap();
    assert_eq!(region.source, PixelRect::new(0, 0, 1000, 500));
    assert_eq!(region.dest, PixelRect::new(0, 125, 500, 250));
}

#[test]
fn test_window_smaller_than_image_shows_center() {
    let s = state((400, 400), (200, 200), 1.0, (0, 0));
    let region = visible_region(&s).unwrap();
    assert_eq!(region.source, PixelRect::new(100, 100, 200, 200));
    assert_eq!(region.dest, PixelRect::new(0, 0, 200, 200));
}

#[test]
fn test_image_fully_inside_window() {
    let s = state((100, 50), (300, 300), 2.0, (10, -20));
    let region = visible_region(&s).unwrap();
    assert_eq!(region.source, PixelRect::new(0, 0, 100, 50));
    // (300 - 200) / 2 + 10, (300 - 100) / 2 - 20
    assert_eq!(region.dest, PixelRect::new(60, 80, 200, 100));
}

#[test]
fn test_panned_left_clips_left_columns() {
    // scaled 800x800 in 400x400: draw_x = -200 - 100 = -300
    let s = state((400, 400), (400, 400), 2.0, (-100, 0));
    let region = visible_region(&s).unwrap();
    assert_eq!(region.source.x, 150);
    assert_eq!(region.dest.x, 0);
    // right edge at 500 -> 100 px overflow -> 50 source columns dropped
    assert_eq!(region.source.width, 400 - 150 - 50);
    assert_eq!(region.dest.width, region.source.width * 2);
}

#[test]
fn test_panned_off_right_edge_is_nothing_visible() {
    // Only reachable when the window shrinks after panning.
    let s = state((100, 100), (50, 50), 1.0, (80, 0));
    // draw_x = (50 - 100) / 2 + 80 = 55 > window width
    assert!(visible_region(&s).is_none());
}

#[test]
fn test_tiny_crop_at_min_zoom_is_nothing_visible() {
    // 5 px image at 0.1 zoom scales to nothing.
    let s = state((5, 5), (100, 100), 0.1, (0, 0));
    assert!(visible_region(&s).is_none());
}

#[test]
fn test_source_always_inside_image_and_dest_matches_zoom() {
    let image_sizes = [(400u32, 300u32), (37, 91), (1000, 10)];
    let windows = [(200u32, 200u32), (640, 480), (33, 77)];
    let zooms = [0.1, 0.33, 0.5, 1.0, 1.7, 2.5, 5.0];
    let offsets = [-5000, -333, -17, 0, 17, 333, 5000];

    for &(iw, ih) in &image_sizes {
        for &(ww, wh) in &windows {
            for &zoom in &zooms {
                for &ox in &offsets {
                    for &oy in &offsets {
                        let mut s = state((iw, ih), (ww, wh), zoom, (ox, oy));
                        s.clamp_offsets();
                        let Some(region) = visible_region(&s) else {
                            continue;
                        };
                        let src = region.source;
                        assert!(src.x >= 0 && src.y >= 0, "{src:?}");
                        assert!(src.width > 0 && src.height > 0, "{src:?}");
                        assert!(src.right() <= iw as i32, "{src:?} in {iw}x{ih}");
                        assert!(src.bottom() <= ih as i32, "{src:?} in {iw}x{ih}");
                        assert!(src.x < iw as i32 && src.y < ih as i32);

                        let z = s.zoom();
                        assert_eq!(region.dest.width, (src.width as f64 * z) as i32);
                        assert_eq!(region.dest.height, (src.height as f64 * z) as i32);
                        assert!(region.dest.x >= 0 && region.dest.y >= 0);
                    }
                }
            }
        }
    }
}

#[test]
fn test_extreme_negative_pan_keeps_clip_ordering() {
    // Pan limit lets 80% of the image leave on the left.
    let mut s = state((100, 100), (100, 100), 1.0, (-1000, 0));
    s.clamp_offsets();
    assert_eq!(s.offset(), (-80, 0));
    let region = visible_region(&s).unwrap();
    assert_eq!(region.source, PixelRect::new(80, 0, 20, 100));
    assert_eq!(region.dest, PixelRect::new(0, 0, 20, 100));
}
