//! Input events and the queue they arrive through.

use std::collections::VecDeque;
use std::str::FromStr;
use std::sync::mpsc;

use tracing::trace;

use crate::error::SlimError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    ScrollUp,
    ScrollDown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
    Other,
}

/// One input notification from the window host, in arrival order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerEvent {
    Expose,
    Resize { width: u32, height: u32 },
    ButtonPress { button: MouseButton, x: i32, y: i32 },
    ButtonRelease { button: MouseButton },
    PointerMove { x: i32, y: i32 },
    KeyPress(Key),
    Close,
}

/// Parses the compact script syntax used by the headless renderer:
/// `expose`, `close`, `resize:WxH`, `press:X,Y`, `release`, `move:X,Y`,
/// `scroll-up`, `scroll-down`, `key:C`, `escape`.
impl FromStr for ViewerEvent {
    type Err = SlimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let invalid = || SlimError::InvalidEvent(token.to_string());
        let (name, arg) = match token.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (token, None),
        };

        let point = |arg: Option<&str>| -> Result<(i32, i32), SlimError> {
            let (x, y) = arg.and_then(|a| a.split_once(',')).ok_or_else(invalid)?;
            Ok((
                x.trim().parse().map_err(|_| invalid())?,
                y.trim().parse().map_err(|_| invalid())?,
            ))
        };

        let event = match (name.to_ascii_lowercase().as_str(), arg) {
            ("expose", None) => ViewerEvent::Expose,
            ("close", None) => ViewerEvent::Close,
            ("escape", None) => ViewerEvent::KeyPress(Key::Escape),
            ("release", None) => ViewerEvent::ButtonRelease {
                button: MouseButton::Left,
            },
            ("scroll-up", None) => ViewerEvent::ButtonPress {
                button: MouseButton::ScrollUp,
                x: 0,
                y: 0,
            },
            ("scroll-down", None) => ViewerEvent::ButtonPress {
                button: MouseButton::ScrollDown,
                x: 0,
                y: 0,
            },
            ("press", arg) => {
                let (x, y) = point(arg)?;
                ViewerEvent::ButtonPress {
                    button: MouseButton::Left,
                    x,
                    y,
                }
            }
            ("move", arg) => {
                let (x, y) = point(arg)?;
                ViewerEvent::PointerMove { x, y }
            }
            ("resize", Some(arg)) => {
                let (w, h) = arg.split_once(['x', 'X']).ok_or_else(invalid)?;
                ViewerEvent::Resize {
                    width: w.trim().parse().map_err(|_| invalid())?,
                    height: h.trim().parse().map_err(|_| invalid())?,
                }
            }
            ("key", Some(arg)) => {
                let mut chars = arg.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => ViewerEvent::KeyPress(Key::Char(c)),
                    _ => return Err(invalid()),
                }
            }
            _ => return Err(invalid()),
        };
        Ok(event)
    }
}

/// Parse script tokens separated by whitespace or `;`.
pub fn parse_script(script: &str) -> Result<Vec<ViewerEvent>, SlimError> {
    script
        .split(|c: char| c == ';' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

/// Where events come from.
pub trait EventSource {
    /// Block until the next event arrives. `None` means the stream ended.
    fn next_event(&mut self) -> Option<ViewerEvent>;

    /// The next event if one is already waiting.
    fn poll_event(&mut self) -> Option<ViewerEvent>;
}

impl EventSource for mpsc::Receiver<ViewerEvent> {
    fn next_event(&mut self) -> Option<ViewerEvent> {
        self.recv().ok()
    }

    fn poll_event(&mut self) -> Option<ViewerEvent> {
        self.try_recv().ok()
    }
}

impl EventSource for VecDeque<ViewerEvent> {
    fn next_event(&mut self) -> Option<ViewerEvent> {
        self.pop_front()
    }

    fn poll_event(&mut self) -> Option<ViewerEvent> {
        self.pop_front()
    }
}

/// An [`EventSource`] with one event of lookahead, used to collapse runs of
/// redundant events.
#[derive(Debug)]
pub struct EventQueue<S> {
    source: S,
    lookahead: Option<ViewerEvent>,
}

impl<S: EventSource> EventQueue<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            lookahead: None,
        }
    }

    pub fn next(&mut self) -> Option<ViewerEvent> {
        self.lookahead.take().or_else(|| self.source.next_event())
    }

    pub fn poll(&mut self) -> Option<ViewerEvent> {
        self.lookahead.take().or_else(|| self.source.poll_event())
    }

    /// Consume pointer moves already queued right behind `(x, y)` and return
    /// the most recent position.
    pub fn latest_motion(&mut self, x: i32, y: i32) -> (i32, i32) {
        let mut latest = (x, y);
        let mut dropped = 0usize;
        while let Some(event) = self.poll() {
            match event {
                ViewerEvent::PointerMove { x, y } => {
                    latest = (x, y);
                    dropped += 1;
                }
                other => {
                    self.lookahead = Some(other);
                    break;
                }
            }
        }
        if dropped > 0 {
            trace!(dropped, "Coalesced pointer motion");
        }
        latest
    }

    /// Consume expose events queued right behind the current one, so only the
    /// last of a batch is acted on.
    pub fn skip_queued_exposes(&mut self) {
        while let Some(event) = self.poll() {
            if event != ViewerEvent::Expose {
                self.lookahead = Some(event);
                break;
            }
        }
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}
