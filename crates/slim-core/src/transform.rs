//! Transform & clip: decides which part of the image is visible and where it
//! lands in the window.
//!
//! Cropping happens before scaling, so the amount of pixel work is bounded by
//! the window area regardless of image resolution or zoom.

use crate::geometry::PixelRect;
use crate::viewport::ViewportState;

/// Result of a successful clip: an image-space crop and the window-space
/// rectangle it is scaled into.
///
/// `dest.width/height` always equal `source.width/height * zoom`, truncated,
/// computed from the final clamped source rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleRegion {
    pub source: PixelRect,
    pub dest: PixelRect,
}

/// Where the full scaled image would be drawn, before any clipping.
pub fn placement(state: &ViewportState) -> PixelRect {
    let (win_w, win_h) = window_i32(state);
    let (scaled_w, scaled_h) = state.scaled_size();
    let (offset_x, offset_y) = state.offset();
    PixelRect::new(
        (win_w - scaled_w) / 2 + offset_x,
        (win_h - scaled_h) / 2 + offset_y,
        scaled_w,
        scaled_h,
    )
}

/// Compute the visible source rectangle and its destination.
///
/// Returns `None` when nothing of the image is on screen (or the clip
/// degenerates to an empty crop); callers skip cropping and compositing for
/// that frame.
pub fn visible_region(state: &ViewportState) -> Option<VisibleRegion> {
    let zoom = state.zoom();
    let (img_w, img_h) = image_i32(state);
    let (win_w, win_h) = window_i32(state);
    let drawn = placement(state);

    let mut src_x = 0;
    let mut src_y = 0;
    let mut dest_x = drawn.x;
    let mut dest_y = drawn.y;

    if drawn.x < 0 {
        src_x = (f64::from(-drawn.x) / zoom) as i32;
        dest_x = 0;
    }
    if drawn.y < 0 {
        src_y = (f64::from(-drawn.y) / zoom) as i32;
        dest_y = 0;
    }

    // Widths come from the pre-clamp origins; the origin clamp below must
    // stay after this.
    let mut src_w = if drawn.right() > win_w {
        let clip = drawn.right() - win_w;
        img_w - src_x - (f64::from(clip) / zoom) as i32
    } else {
        img_w - src_x
    };
    let mut src_h = if drawn.bottom() > win_h {
        let clip = drawn.bottom() - win_h;
        img_h - src_y - (f64::from(clip) / zoom) as i32
    } else {
        img_h - src_y
    };

    src_x = src_x.max(0);
    src_y = src_y.max(0);
    if src_x >= img_w || src_y >= img_h {
        return None;
    }
    if src_w <= 0 || src_h <= 0 {
        return None;
    }
    if src_x + src_w > img_w {
        src_w = img_w - src_x;
    }
    if src_y + src_h > img_h {
        src_h = img_h - src_y;
    }

    let dest_w = (f64::from(src_w) * zoom) as i32;
    let dest_h = (f64::from(src_h) * zoom) as i32;
    if dest_w <= 0 || dest_h <= 0 {
        return None;
    }

    Some(VisibleRegion {
        source: PixelRect::new(src_x, src_y, src_w, src_h),
        dest: PixelRect::new(dest_x, dest_y, dest_w, dest_h),
    })
}

fn image_i32(state: &ViewportState) -> (i32, i32) {
    let (w, h) = state.image_size();
    (to_i32(w), to_i32(h))
}

fn window_i32(state: &ViewportState) -> (i32, i32) {
    let (w, h) = state.window_size();
    (to_i32(w), to_i32(h))
}

fn to_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
