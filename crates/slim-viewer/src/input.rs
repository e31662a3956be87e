//! Translate egui input into the viewer's event stream.

use slim_core::event::{Key, MouseButton, ViewerEvent};

/// Window-space mapping from egui points to back-buffer pixels.
#[derive(Clone, Copy, Debug)]
pub struct Surface {
    pub origin: egui::Pos2,
    pub pixels_per_point: f32,
}

impl Surface {
    fn to_pixels(self, pos: egui::Pos2) -> (i32, i32) {
        let rel = (pos - self.origin) * self.pixels_per_point;
        (rel.x.round() as i32, rel.y.round() as i32)
    }
}

/// Scroll distance in points that counts as one wheel notch.
const POINTS_PER_NOTCH: f32 = 50.0;

/// Remembers the last window size so resizes are reported once, and
/// accumulates fractional scrolling until it adds up to whole notches.
#[derive(Default)]
pub struct InputTranslator {
    last_size: Option<(u32, u32)>,
    wheel_notches: f32,
}

impl InputTranslator {
    /// Events for this egui pass, in order: a resize first if the drawable
    /// area changed, then the raw input events.
    pub fn translate(&mut self, ctx: &egui::Context, rect: egui::Rect) -> Vec<ViewerEvent> {
        let pixels_per_point = ctx.pixels_per_point();
        let surface = Surface {
            origin: rect.min,
            pixels_per_point,
        };
        let mut out = Vec::new();

        let size = (
            (rect.width() * pixels_per_point).round().max(1.0) as u32,
            (rect.height() * pixels_per_point).round().max(1.0) as u32,
        );
        if self.last_size != Some(size) {
            self.last_size = Some(size);
            out.push(ViewerEvent::Resize {
                width: size.0,
                height: size.1,
            });
        }

        ctx.input(|i| {
            for event in &i.events {
                if let egui::Event::MouseWheel { unit, delta, .. } = event {
                    self.scroll(*unit, delta.y, &mut out);
                } else if let Some(translated) = translate_event(event, surface) {
                    out.push(translated);
                }
            }
            if i.viewport().close_requested() {
                out.push(ViewerEvent::Close);
            }
        });
        out
    }

    /// One zoom step per whole notch of accumulated vertical scroll.
    pub fn scroll(
        &mut self,
        unit: egui::MouseWheelUnit,
        delta_y: f32,
        out: &mut Vec<ViewerEvent>,
    ) {
        let notches = match unit {
            egui::MouseWheelUnit::Line => delta_y,
            egui::MouseWheelUnit::Point => delta_y / POINTS_PER_NOTCH,
            egui::MouseWheelUnit::Page => delta_y * 3.0,
        };
        self.wheel_notches += notches;

        while self.wheel_notches.abs() >= 1.0 {
            let button = if self.wheel_notches > 0.0 {
                self.wheel_notches -= 1.0;
                MouseButton::ScrollUp
            } else {
                self.wheel_notches += 1.0;
                MouseButton::ScrollDown
            };
            out.push(ViewerEvent::ButtonPress { button, x: 0, y: 0 });
        }
    }
}

pub fn translate_event(event: &egui::Event, surface: Surface) -> Option<ViewerEvent> {
    match event {
        egui::Event::PointerButton {
            pos,
            button,
            pressed,
            ..
        } => {
            let button = map_button(*button)?;
            if *pressed {
                let (x, y) = surface.to_pixels(*pos);
                Some(ViewerEvent::ButtonPress { button, x, y })
            } else {
                Some(ViewerEvent::ButtonRelease { button })
            }
        }
        egui::Event::PointerMoved(pos) => {
            let (x, y) = surface.to_pixels(*pos);
            Some(ViewerEvent::PointerMove { x, y })
        }
        egui::Event::Key {
            key, pressed: true, ..
        } => map_key(*key).map(ViewerEvent::KeyPress),
        egui::Event::WindowFocused(true) => Some(ViewerEvent::Expose),
        _ => None,
    }
}

fn map_button(button: egui::PointerButton) -> Option<MouseButton> {
    match button {
        egui::PointerButton::Primary => Some(MouseButton::Left),
        egui::PointerButton::Middle => Some(MouseButton::Middle),
        egui::PointerButton::Secondary => Some(MouseButton::Right),
        _ => None,
    }
}

pub fn map_key(key: egui::Key) -> Option<Key> {
    let key = match key {
        egui::Key::Escape => Key::Escape,
        egui::Key::Q => Key::Char('q'),
        egui::Key::R => Key::Char('r'),
        egui::Key::Plus => Key::Char('+'),
        egui::Key::Equals => Key::Char('='),
        egui::Key::Minus => Key::Char('-'),
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(ppp: f32) -> Surface {
        Surface {
            origin: egui::pos2(10.0, 20.0),
            pixels_per_point: ppp,
        }
    }

    #[test]
    fn test_pointer_move_is_window_relative() {
        let event = egui::Event::PointerMoved(egui::pos2(15.0, 30.0));
        assert_eq!(
            translate_event(&event, surface(1.0)),
            Some(ViewerEvent::PointerMove { x: 5, y: 10 })
        );
        assert_eq!(
            translate_event(&event, surface(2.0)),
            Some(ViewerEvent::PointerMove { x: 10, y: 20 })
        );
    }

    #[test]
    fn test_focus_gain_is_expose() {
        assert_eq!(
            translate_event(&egui::Event::WindowFocused(true), surface(1.0)),
            Some(ViewerEvent::Expose)
        );
        assert_eq!(
            translate_event(&egui::Event::WindowFocused(false), surface(1.0)),
            None
        );
    }

    #[test]
    fn test_trackpad_scroll_accumulates_to_notches() {
        let mut input = InputTranslator::default();
        let mut out = Vec::new();
        for _ in 0..3 {
            input.scroll(egui::MouseWheelUnit::Point, 12.5, &mut out);
        }
        assert!(out.is_empty());

        input.scroll(egui::MouseWheelUnit::Point, 12.5, &mut out);
        assert_eq!(
            out,
            vec![ViewerEvent::ButtonPress {
                button: MouseButton::ScrollUp,
                x: 0,
                y: 0
            }]
        );
    }

    #[test]
    fn test_wheel_lines_map_to_steps() {
        let mut input = InputTranslator::default();
        let mut out = Vec::new();
        input.scroll(egui::MouseWheelUnit::Line, -2.0, &mut out);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|e| matches!(
            e,
            ViewerEvent::ButtonPress {
                button: MouseButton::ScrollDown,
                ..
            }
        )));

        // Opposite directions cancel out instead of zooming both ways.
        out.clear();
        input.scroll(egui::MouseWheelUnit::Line, 0.75, &mut out);
        input.scroll(egui::MouseWheelUnit::Line, -0.75, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(map_key(egui::Key::Q), Some(Key::Char('q')));
        assert_eq!(map_key(egui::Key::Escape), Some(Key::Escape));
        assert_eq!(map_key(egui::Key::Equals), Some(Key::Char('=')));
        assert_eq!(map_key(egui::Key::Minus), Some(Key::Char('-')));
        assert_eq!(map_key(egui::Key::A), None);
    }

    #[test]
    fn test_button_mapping() {
        assert_eq!(map_button(egui::PointerButton::Primary), Some(MouseButton::Left));
        assert_eq!(map_button(egui::PointerButton::Extra1), None);
    }
}
