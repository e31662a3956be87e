use slim_core::compositor::BackBuffer;
use slim_core::viewer::Presenter;

/// Convert the RGBA back buffer to an egui ColorImage.
pub fn back_buffer_to_color_image(frame: &BackBuffer) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(
        [frame.width() as usize, frame.height() as usize],
        frame.as_bytes(),
    )
}

/// Presents frames by uploading them into a single egui texture, which is
/// then painted over the whole window every egui pass.
pub struct TexturePresenter {
    ctx: egui::Context,
    texture: Option<egui::TextureHandle>,
}

impl TexturePresenter {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx, texture: None }
    }

    pub fn paint(&self, ui: &egui::Ui, rect: egui::Rect) {
        let Some(texture) = &self.texture else {
            return;
        };
        ui.painter().image(
            texture.id(),
            rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    }
}

impl Presenter for TexturePresenter {
    fn present(&mut self, frame: &BackBuffer) {
        let image = back_buffer_to_color_image(frame);
        match &mut self.texture {
            Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
            None => {
                self.texture = Some(self.ctx.load_texture(
                    "back-buffer",
                    image,
                    egui::TextureOptions::NEAREST,
                ));
            }
        }
        self.ctx.request_repaint();
    }
}
