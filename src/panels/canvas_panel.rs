use crate::SketchpadApp;
use crate::renderer::{PainterSurface, render_scene};

pub fn canvas_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Sticker Sketchpad");

        let canvas_size = app.sketchpad().config().canvas_size();
        let (canvas_rect, response) = ui.allocate_exact_size(canvas_size, egui::Sense::drag());

        // Pointer events first, so this frame paints the state they produce.
        app.handle_canvas_input(ctx, &response);
        if response.hovered() {
            // The tool preview stands in for the cursor.
            ctx.set_cursor_icon(egui::CursorIcon::None);
        }

        let background = app.sketchpad().config().background_color();
        let mut surface = PainterSurface::new(ui.painter(), canvas_rect, background);
        render_scene(app.sketchpad(), &mut surface);
        ui.painter().rect_stroke(
            canvas_rect,
            0.0,
            ui.visuals().widgets.noninteractive.bg_stroke,
        );
    });
}
