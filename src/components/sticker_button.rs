use eframe::egui;

/// Square palette button showing one sticker glyph.
pub struct StickerButton<'a> {
    pub glyph: &'a str,
    pub selected: bool,
}

impl<'a> StickerButton<'a> {
    pub fn new(glyph: &'a str, selected: bool) -> Self {
        Self { glyph, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(36.0, 36.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_rgb(255, 204, 128) // Amber while armed
            } else if response.hovered() {
                ui.visuals().widgets.hovered.bg_fill
            } else {
                ui.visuals().widgets.inactive.bg_fill
            };

            ui.painter().rect_filled(rect, 4.0, bg_color);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.glyph,
                egui::FontId::proportional(24.0),
                ui.visuals().text_color(),
            );

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(230, 120, 0)),
                );
            }
        }

        response.on_hover_text(format!("Place {}", self.glyph))
    }
}
