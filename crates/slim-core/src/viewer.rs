//! The viewer session: one exclusively owned context threaded through every
//! input event, from state mutation to a presented frame.

use tracing::{debug, info};

use crate::cache::ScaledRegionCache;
use crate::compositor::{BackBuffer, Compositor};
use crate::config::ViewerConfig;
use crate::event::{EventQueue, EventSource, Key, MouseButton, ViewerEvent};
use crate::image_source::SourceImage;
use crate::transform::visible_region;
use crate::viewport::{InitialLayout, ViewportState, ZoomStep};

/// Copies a finished back buffer to the visible surface.
pub trait Presenter {
    fn present(&mut self, frame: &BackBuffer);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewerMode {
    #[default]
    Idle,
    /// Left button held; `last_*` is the previous pointer sample.
    Dragging { last_x: i32, last_y: i32 },
}

/// What an event asks of the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    None,
    Redraw,
    Quit,
}

/// Whether the control loop should keep going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug)]
pub struct Viewer {
    image: SourceImage,
    viewport: ViewportState,
    mode: ViewerMode,
    cache: ScaledRegionCache,
    compositor: Compositor,
    frames_presented: u64,
}

impl Viewer {
    pub fn new(image: SourceImage, layout: InitialLayout, config: ViewerConfig) -> Self {
        let viewport = ViewportState::new(
            image.width(),
            image.height(),
            layout.win_width,
            layout.win_height,
            layout.zoom,
        );
        let (win_w, win_h) = viewport.window_size();
        info!(
            width = win_w,
            height = win_h,
            zoom = viewport.zoom(),
            filter = %config.filter,
            "Viewer session started"
        );

        Self {
            image,
            viewport,
            mode: ViewerMode::Idle,
            cache: ScaledRegionCache::new(config.filter),
            compositor: Compositor::new(win_w, win_h, config.background.0),
            frames_presented: 0,
        }
    }

    pub fn image(&self) -> &SourceImage {
        &self.image
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn mode(&self) -> ViewerMode {
        self.mode
    }

    pub fn cache(&self) -> &ScaledRegionCache {
        &self.cache
    }

    pub fn back_buffer(&self) -> &BackBuffer {
        self.compositor.back_buffer()
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Apply one event to the viewport state.
    ///
    /// Every mutation clamps the pan offsets and marks the cache dirty; no
    /// pixels are touched here.
    pub fn handle_event(&mut self, event: ViewerEvent) -> Action {
        match event {
            ViewerEvent::Expose => Action::Redraw,
            ViewerEvent::Resize { width, height } => {
                if !self.viewport.resize(width, height) {
                    return Action::None;
                }
                self.compositor.resize(width, height);
                self.after_mutation();
                Action::Redraw
            }
            ViewerEvent::ButtonPress { button, x, y } => match button {
                MouseButton::Left => {
                    self.mode = ViewerMode::Dragging {
                        last_x: x,
                        last_y: y,
                    };
                    Action::None
                }
                MouseButton::ScrollUp => self.zoom(ZoomStep::WheelIn),
                MouseButton::ScrollDown => self.zoom(ZoomStep::WheelOut),
                MouseButton::Middle | MouseButton::Right => Action::None,
            },
            ViewerEvent::ButtonRelease {
                button: MouseButton::Left,
            } => {
                self.mode = ViewerMode::Idle;
                Action::None
            }
            ViewerEvent::ButtonRelease { .. } => Action::None,
            ViewerEvent::PointerMove { x, y } => {
                let ViewerMode::Dragging { last_x, last_y } = self.mode else {
                    return Action::None;
                };
                self.viewport.pan_by(x - last_x, y - last_y);
                self.mode = ViewerMode::Dragging {
                    last_x: x,
                    last_y: y,
                };
                self.after_mutation();
                Action::Redraw
            }
            ViewerEvent::KeyPress(key) => self.handle_key(key),
            ViewerEvent::Close => Action::Quit,
        }
    }

    fn handle_key(&mut self, key: Key) -> Action {
        match key {
            Key::Escape | Key::Char('q' | 'Q') => Action::Quit,
            Key::Char('r' | 'R') => {
                self.viewport.reset();
                debug!(zoom = self.viewport.zoom(), "View reset");
                self.after_mutation();
                Action::Redraw
            }
            Key::Char('+' | '=') => self.zoom(ZoomStep::KeyIn),
            Key::Char('-' | '_') => self.zoom(ZoomStep::KeyOut),
            Key::Char(_) | Key::Other => Action::None,
        }
    }

    fn zoom(&mut self, step: ZoomStep) -> Action {
        self.viewport.zoom_by(step);
        debug!(?step, zoom = self.viewport.zoom(), "Zoom");
        self.after_mutation();
        Action::Redraw
    }

    fn after_mutation(&mut self) {
        self.viewport.clamp_offsets();
        self.cache.mark_dirty();
    }

    /// Bring the back buffer up to date. Does nothing while the cache is
    /// clean, since the buffer already holds the current frame.
    pub fn render(&mut self) {
        if !self.cache.is_dirty() {
            return;
        }
        let visible = visible_region(&self.viewport);
        let region = self.cache.update(&self.image, visible);
        self.compositor.draw(region);
    }

    /// Render if needed, then hand the back buffer to the presenter.
    pub fn present<P: Presenter>(&mut self, presenter: &mut P) {
        self.render();
        presenter.present(self.compositor.back_buffer());
        self.frames_presented += 1;
    }

    /// Blocking control loop. Presents a first frame, then handles events
    /// until a quit request or the end of the stream.
    pub fn run<S: EventSource, P: Presenter>(
        &mut self,
        queue: &mut EventQueue<S>,
        presenter: &mut P,
    ) -> Flow {
        self.present(presenter);
        while let Some(event) = queue.next() {
            if self.dispatch(event, queue, presenter) == Flow::Quit {
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    /// Handle every event already queued without blocking, for hosts that
    /// drive their own loop.
    pub fn pump<S: EventSource, P: Presenter>(
        &mut self,
        queue: &mut EventQueue<S>,
        presenter: &mut P,
    ) -> Flow {
        while let Some(event) = queue.poll() {
            if self.dispatch(event, queue, presenter) == Flow::Quit {
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    fn dispatch<S: EventSource, P: Presenter>(
        &mut self,
        event: ViewerEvent,
        queue: &mut EventQueue<S>,
        presenter: &mut P,
    ) -> Flow {
        let event = match event {
            ViewerEvent::PointerMove { x, y }
                if matches!(self.mode, ViewerMode::Dragging { .. }) =>
            {
                let (x, y) = queue.latest_motion(x, y);
                ViewerEvent::PointerMove { x, y }
            }
            ViewerEvent::Expose => {
                queue.skip_queued_exposes();
                ViewerEvent::Expose
            }
            other => other,
        };

        match self.handle_event(event) {
            Action::Quit => {
                info!("Quit requested");
                Flow::Quit
            }
            Action::Redraw => {
                self.present(presenter);
                Flow::Continue
            }
            Action::None => Flow::Continue,
        }
    }
}
