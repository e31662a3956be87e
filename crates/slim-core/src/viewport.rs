use crate::consts::{
    KEY_ZOOM_IN, KEY_ZOOM_OUT, MAX_ZOOM, MIN_ZOOM, SCREEN_MARGIN, WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT,
};
use crate::pan::clamp_offsets;

/// One discrete zoom action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomStep {
    WheelIn,
    WheelOut,
    KeyIn,
    KeyOut,
}

impl ZoomStep {
    pub fn factor(self) -> f64 {
        match self {
            ZoomStep::WheelIn => WHEEL_ZOOM_IN,
            ZoomStep::WheelOut => WHEEL_ZOOM_OUT,
            ZoomStep::KeyIn => KEY_ZOOM_IN,
            ZoomStep::KeyOut => KEY_ZOOM_OUT,
        }
    }
}

/// Transform parameters mapping image space onto window space.
///
/// Zoom is kept inside `[MIN_ZOOM, MAX_ZOOM]` by every constructor and
/// mutator. Offsets are the window-space displacement of the image center
/// from the window center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    zoom: f64,
    offset_x: i32,
    offset_y: i32,
    win_width: u32,
    win_height: u32,
    image_width: u32,
    image_height: u32,
}

impl ViewportState {
    pub fn new(
        image_width: u32,
        image_height: u32,
        win_width: u32,
        win_height: u32,
        zoom: f64,
    ) -> Self {
        Self {
            zoom: clamp_zoom(zoom),
            offset_x: 0,
            offset_y: 0,
            win_width: win_width.max(1),
            win_height: win_height.max(1),
            image_width: image_width.max(1),
            image_height: image_height.max(1),
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn offset(&self) -> (i32, i32) {
        (self.offset_x, self.offset_y)
    }

    pub fn window_size(&self) -> (u32, u32) {
        (self.win_width, self.win_height)
    }

    pub fn image_size(&self) -> (u32, u32) {
        (self.image_width, self.image_height)
    }

    /// Image dimensions at the current zoom, truncated to whole pixels.
    pub fn scaled_size(&self) -> (i32, i32) {
        (
            (f64::from(self.image_width) * self.zoom) as i32,
            (f64::from(self.image_height) * self.zoom) as i32,
        )
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = clamp_zoom(zoom);
    }

    /// Multiply zoom by the step's factor. Returns true if zoom changed.
    pub fn zoom_by(&mut self, step: ZoomStep) -> bool {
        let before = self.zoom;
        self.set_zoom(self.zoom * step.factor());
        self.zoom != before
    }

    pub fn set_offset(&mut self, offset_x: i32, offset_y: i32) {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
    }

    pub fn pan_by(&mut self, dx: i32, dy: i32) {
        self.offset_x = self.offset_x.saturating_add(dx);
        self.offset_y = self.offset_y.saturating_add(dy);
    }

    /// Apply the pan limit for the current zoom.
    pub fn clamp_offsets(&mut self) {
        let (scaled_w, scaled_h) = self.scaled_size();
        let (x, y) = clamp_offsets(self.offset_x, self.offset_y, scaled_w, scaled_h);
        self.offset_x = x;
        self.offset_y = y;
    }

    /// Fit the whole image into the window and re-center it.
    ///
    /// When the fit ratio falls outside `[MIN_ZOOM, MAX_ZOOM]` the zoom
    /// limit wins, so a tiny image is not blown up past `MAX_ZOOM` and a huge
    /// one may still overflow the window at `MIN_ZOOM`.
    pub fn reset(&mut self) {
        self.zoom = fit_zoom(self.image_width, self.image_height, self.win_width, self.win_height);
        self.offset_x = 0;
        self.offset_y = 0;
    }

    /// Update the window geometry. Returns false (and changes nothing) when
    /// the size is unchanged or degenerate.
    pub fn resize(&mut self, win_width: u32, win_height: u32) -> bool {
        if win_width == 0 || win_height == 0 {
            return false;
        }
        if (win_width, win_height) == (self.win_width, self.win_height) {
            return false;
        }
        self.win_width = win_width;
        self.win_height = win_height;
        true
    }
}

/// Largest zoom at which the whole image fits the window, within zoom limits.
pub fn fit_zoom(image_width: u32, image_height: u32, win_width: u32, win_height: u32) -> f64 {
    let scale_w = f64::from(win_width) / f64::from(image_width.max(1));
    let scale_h = f64::from(win_height) / f64::from(image_height.max(1));
    clamp_zoom(scale_w.min(scale_h))
}

fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() {
        return 1.0;
    }
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Window size and starting zoom for a freshly opened image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InitialLayout {
    pub win_width: u32,
    pub win_height: u32,
    pub zoom: f64,
}

/// Open at native size unless the image does not fit the screen minus a
/// margin, in which case both the window and the zoom shrink to fit.
pub fn initial_layout(
    image_width: u32,
    image_height: u32,
    screen_width: u32,
    screen_height: u32,
) -> InitialLayout {
    let max_width = screen_width.saturating_sub(SCREEN_MARGIN).max(1);
    let max_height = screen_height.saturating_sub(SCREEN_MARGIN).max(1);

    if image_width <= max_width && image_height <= max_height {
        return InitialLayout {
            win_width: image_width,
            win_height: image_height,
            zoom: 1.0,
        };
    }

    let scale_w = f64::from(max_width) / f64::from(image_width);
    let scale_h = f64::from(max_height) / f64::from(image_height);
    let zoom = clamp_zoom(scale_w.min(scale_h));

    // Window follows the clamped zoom, but never grows past the screen area.
    let scaled_w = (f64::from(image_width) * zoom) as u32;
    let scaled_h = (f64::from(image_height) * zoom) as u32;

    InitialLayout {
        win_width: scaled_w.clamp(1, max_width),
        win_height: scaled_h.clamp(1, max_height),
        zoom,
    }
}
