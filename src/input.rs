use egui::{Context, PointerButton, Pos2, Rect, Response};

/// Pointer events delivered to the sketchpad, in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed over the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved over the canvas (with or without the button held)
    PointerMove { position: Pos2 },
    /// Primary button was released over the canvas
    PointerUp { position: Pos2 },
    /// Pointer left the canvas
    PointerLeave,
}

impl InputEvent {
    pub fn position(&self) -> Option<Pos2> {
        match self {
            Self::PointerDown { position }
            | Self::PointerMove { position }
            | Self::PointerUp { position } => Some(*position),
            Self::PointerLeave => None,
        }
    }
}

/// Turns egui's per-frame pointer state into discrete [`InputEvent`]s for one canvas.
#[derive(Debug, Default)]
pub struct InputHandler {
    /// Last pointer position inside the canvas, in screen coordinates
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the pointer was over the canvas at the last update
    pub fn is_hovering(&self) -> bool {
        self.last_pointer_pos.is_some()
    }

    /// Read this frame's pointer input and emit the events for the canvas
    /// widget behind `canvas`.
    ///
    /// The pointer only counts as over the canvas when no other layer (a
    /// window, a popup) covers it there.
    pub fn process_input(&mut self, ctx: &Context, canvas: &Response) -> Vec<InputEvent> {
        let owns_pointer = canvas.contains_pointer();
        ctx.input(|input| {
            let hover = input
                .pointer
                .hover_pos()
                .filter(|pos| owns_pointer && canvas.rect.contains(*pos));
            self.translate(
                hover,
                input.pointer.button_pressed(PointerButton::Primary),
                input.pointer.button_released(PointerButton::Primary),
                canvas.rect,
            )
        })
    }

    /// Core of [`Self::process_input`], independent of egui's input state.
    ///
    /// `hover` is the screen-space pointer position if it is inside the canvas.
    pub fn translate(
        &mut self,
        hover: Option<Pos2>,
        pressed: bool,
        released: bool,
        canvas_rect: Rect,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let to_local = |pos: Pos2| (pos - canvas_rect.min).to_pos2();

        match (self.last_pointer_pos, hover) {
            (Some(_), None) => events.push(InputEvent::PointerLeave),
            (last, Some(pos)) if last != Some(pos) => events.push(InputEvent::PointerMove {
                position: to_local(pos),
            }),
            _ => {}
        }

        if let Some(pos) = hover {
            if pressed {
                events.push(InputEvent::PointerDown {
                    position: to_local(pos),
                });
            }
            if released {
                events.push(InputEvent::PointerUp {
                    position: to_local(pos),
                });
            }
        }

        self.last_pointer_pos = hover;
        events
    }
}
