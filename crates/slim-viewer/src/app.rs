use std::sync::mpsc;

use slim_core::event::{EventQueue, ViewerEvent};
use slim_core::viewer::{Flow, Viewer};
use tracing::info;

use crate::convert::TexturePresenter;
use crate::input::InputTranslator;

pub struct SlimApp {
    viewer: Viewer,
    event_tx: mpsc::Sender<ViewerEvent>,
    queue: EventQueue<mpsc::Receiver<ViewerEvent>>,
    display: TexturePresenter,
    input: InputTranslator,
    closing: bool,
    /// Window size in physical pixels, applied once the scale factor is known.
    pending_size: Option<(u32, u32)>,
}

/// Logical (point) size for a window that should be `width` x `height` pixels.
pub fn logical_size(width: u32, height: u32, pixels_per_point: f32) -> egui::Vec2 {
    egui::vec2(width as f32, height as f32) / pixels_per_point.max(f32::EPSILON)
}

impl SlimApp {
    pub fn new(ctx: &egui::Context, mut viewer: Viewer, window_size: (u32, u32)) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        let mut display = TexturePresenter::new(ctx.clone());
        viewer.present(&mut display);

        Self {
            viewer,
            event_tx,
            queue: EventQueue::new(event_rx),
            display,
            input: InputTranslator::default(),
            closing: false,
            pending_size: Some(window_size),
        }
    }
}

impl eframe::App for SlimApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some((width, height)) = self.pending_size.take() {
            let size = logical_size(width, height, ctx.pixels_per_point());
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(size));
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let rect = ui.available_rect_before_wrap();

                for event in self.input.translate(ctx, rect) {
                    self.event_tx.send(event).ok();
                }

                if self.viewer.pump(&mut self.queue, &mut self.display) == Flow::Quit
                    && !self.closing
                {
                    info!("Closing viewer");
                    self.closing = true;
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }

                self.display.paint(ui, rect);
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_size_divides_by_scale_factor() {
        assert_eq!(logical_size(800, 600, 1.0), egui::vec2(800.0, 600.0));
        assert_eq!(logical_size(800, 600, 2.0), egui::vec2(400.0, 300.0));
        assert_eq!(logical_size(1820, 980, 1.25), egui::vec2(1456.0, 784.0));
    }
}
