/// Notifications emitted by the sketchpad after a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchEvent {
    /// Committed content or the in-progress item changed
    DrawingChanged,
    /// Only the tool preview moved or changed
    ToolMoved,
}

impl SketchEvent {
    /// Combine two pending notifications; a drawing change subsumes a preview move.
    fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::ToolMoved, Self::ToolMoved) => Self::ToolMoved,
            _ => Self::DrawingChanged,
        }
    }
}

/// "Mark dirty, repaint once" signal.
///
/// Any number of notifications between two repaints collapse into a single
/// pending event, which the render loop takes exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepaintSignal {
    pending: Option<SketchEvent>,
}

impl RepaintSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(&mut self, event: SketchEvent) {
        self.pending = Some(match self.pending {
            Some(pending) => pending.merge(event),
            None => event,
        });
    }

    pub fn is_dirty(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending event, leaving the signal clean.
    pub fn take(&mut self) -> Option<SketchEvent> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifications_coalesce() {
        let mut signal = RepaintSignal::new();
        signal.notify(SketchEvent::ToolMoved);
        signal.notify(SketchEvent::ToolMoved);
        assert_eq!(signal.take(), Some(SketchEvent::ToolMoved));
        assert_eq!(signal.take(), None);
    }

    #[test]
    fn test_drawing_change_wins() {
        let mut signal = RepaintSignal::new();
        signal.notify(SketchEvent::ToolMoved);
        signal.notify(SketchEvent::DrawingChanged);
        signal.notify(SketchEvent::ToolMoved);
        assert_eq!(signal.take(), Some(SketchEvent::DrawingChanged));
        assert!(!signal.is_dirty());
    }
}
