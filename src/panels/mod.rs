mod canvas_panel;
mod controls_panel;
mod sticker_prompt;

pub use canvas_panel::canvas_panel;
pub use controls_panel::controls_panel;
pub use sticker_prompt::sticker_prompt;
