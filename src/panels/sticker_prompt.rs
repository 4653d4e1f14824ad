use crate::SketchpadApp;

/// Modal asking for a custom sticker glyph.
pub fn sticker_prompt(app: &mut SketchpadApp, ctx: &egui::Context) {
    let Some(mut text) = app.sticker_prompt_text().map(str::to_owned) else {
        return;
    };

    let mut confirmed = false;
    let mut cancelled = false;
    egui::Window::new("Add Sticker")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label("Choose an emoji as a sticker");
            let response = ui.text_edit_singleline(&mut text);
            response.request_focus();
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                confirmed = true;
            }
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    confirmed = true;
                }
                if ui.button("Cancel").clicked() {
                    cancelled = true;
                }
            });
        });

    if confirmed {
        app.confirm_sticker_prompt(&text);
    } else if cancelled {
        app.close_sticker_prompt();
    } else {
        app.set_sticker_prompt_text(text);
    }
}
