use egui::Slider;

use crate::SketchpadApp;
use crate::components::StickerButton;
use crate::config::{STICKER_ROTATION_RANGE, STICKER_SIZE_RANGE, Thickness};

/// Side panel with every control-surface action.
pub fn controls_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::SidePanel::left("controls_panel")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Canvas");
            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    app.sketchpad_mut().clear();
                }

                let can_undo = app.sketchpad().history().can_undo();
                let can_redo = app.sketchpad().history().can_redo();
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.sketchpad_mut().undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.sketchpad_mut().redo();
                }
            });

            ui.separator();
            ui.label("Pen Width:");
            ui.horizontal(|ui| {
                let current = app.sketchpad().pen().width;
                for thickness in [Thickness::Thin, Thickness::Thick] {
                    let width = thickness.width(app.sketchpad().config());
                    let selected = (current - width).abs() < f32::EPSILON;
                    if ui.selectable_label(selected, thickness.label()).clicked() {
                        log::info!("Pen width: {} ({width})", thickness.label());
                        app.sketchpad_mut().set_thickness(thickness);
                    }
                }
            });

            ui.separator();
            ui.label("Stickers:");
            let armed = app.sketchpad().tool().sticker_glyph().map(str::to_owned);
            let mut chosen = None;
            ui.horizontal_wrapped(|ui| {
                if ui.selectable_label(armed.is_none(), "Pen").clicked() && armed.is_some() {
                    app.sketchpad_mut().select_pen();
                }
                for glyph in app.palette().glyphs() {
                    let selected = armed.as_deref() == Some(glyph.as_str());
                    if StickerButton::new(glyph, selected).show(ui).clicked() {
                        chosen = Some(glyph.clone());
                    }
                }
            });
            if let Some(glyph) = chosen {
                app.sketchpad_mut().select_sticker(&glyph);
            }
            if ui.button("Add Sticker").clicked() {
                app.open_sticker_prompt();
            }

            ui.separator();
            let mut rotation = app.sketchpad().sliders().rotation_deg;
            ui.horizontal(|ui| {
                ui.label("Sticker Rotation:");
                if ui
                    .add(Slider::new(&mut rotation, STICKER_ROTATION_RANGE).suffix("°"))
                    .changed()
                {
                    app.sketchpad_mut().set_sticker_rotation(rotation);
                }
            });
            let mut size = app.sketchpad().sliders().size;
            ui.horizontal(|ui| {
                ui.label("Sticker Size:");
                if ui.add(Slider::new(&mut size, STICKER_SIZE_RANGE)).changed() {
                    app.sketchpad_mut().set_sticker_size(size);
                }
            });

            ui.separator();
            if ui.button("Export").clicked() {
                app.export();
            }

            ui.separator();
            let pad = app.sketchpad();
            ui.small(format!(
                "History: {}  Undo buffer: {}  ({})",
                pad.history().items().len(),
                pad.history().undone().len(),
                pad.state().name(),
            ));
            if let Some(status) = app.status() {
                ui.small(status);
            }
        });
}
