/// Smallest zoom factor the viewport will accept.
pub const MIN_ZOOM: f64 = 0.1;

/// Largest zoom factor the viewport will accept.
pub const MAX_ZOOM: f64 = 5.0;

/// Zoom multiplier for one scroll-wheel notch towards the viewer.
pub const WHEEL_ZOOM_IN: f64 = 1.1;

/// Zoom multiplier for one scroll-wheel notch away from the viewer.
pub const WHEEL_ZOOM_OUT: f64 = 0.9;

/// Zoom multiplier for the `+`/`=` keys.
pub const KEY_ZOOM_IN: f64 = 1.2;

/// Zoom multiplier for the `-`/`_` keys.
pub const KEY_ZOOM_OUT: f64 = 0.8;

/// Fraction of the scaled image that may be panned out of view on each axis.
/// The remaining 20% always stays reachable inside the window.
pub const PAN_LIMIT_FRACTION: f64 = 0.8;

/// Pixels kept free around the window when the image is larger than the screen.
pub const SCREEN_MARGIN: u32 = 100;

/// Screen width assumed when the host cannot report one.
pub const DEFAULT_SCREEN_WIDTH: u32 = 1920;

/// Screen height assumed when the host cannot report one.
pub const DEFAULT_SCREEN_HEIGHT: u32 = 1080;
