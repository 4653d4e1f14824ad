use egui::pos2;
use sticker_sketchpad::{InputEvent, RedoPolicy, Sketchpad, SketchpadConfig};

fn stroke(pad: &mut Sketchpad, x: f32) {
    pad.handle_input(InputEvent::PointerDown { position: pos2(x, 0.0) });
    pad.handle_input(InputEvent::PointerMove { position: pos2(x, 10.0) });
    pad.handle_input(InputEvent::PointerUp { position: pos2(x, 10.0) });
}

fn pad_with(policy: RedoPolicy) -> Sketchpad {
    Sketchpad::new(SketchpadConfig {
        redo_policy: policy,
        ..Default::default()
    })
}

#[test]
fn test_three_point_stroke_undo_redo_scenario() {
    let mut pad = Sketchpad::default();
    pad.handle_input(InputEvent::PointerDown { position: pos2(10.0, 10.0) });
    pad.handle_input(InputEvent::PointerMove { position: pos2(20.0, 10.0) });
    pad.handle_input(InputEvent::PointerMove { position: pos2(20.0, 20.0) });
    pad.handle_input(InputEvent::PointerUp { position: pos2(20.0, 20.0) });
    let original = pad.items()[0].clone();

    assert!(pad.undo());
    assert_eq!(pad.history().items().len(), 0);
    assert_eq!(pad.history().undone().len(), 1);

    assert!(pad.redo());
    assert_eq!(pad.items(), &[original]);
    assert_eq!(
        pad.items()[0].as_stroke().unwrap().points(),
        &[pos2(10.0, 10.0), pos2(20.0, 10.0), pos2(20.0, 20.0)]
    );
}

#[test]
fn test_undo_then_redo_restores_order_and_identity() {
    let mut pad = Sketchpad::default();
    for x in [1.0, 2.0, 3.0] {
        stroke(&mut pad, x);
    }
    let ids_before: Vec<_> = pad.items().iter().map(|item| item.id()).collect();

    assert!(pad.undo());
    assert!(pad.redo());
    let ids_after: Vec<_> = pad.items().iter().map(|item| item.id()).collect();
    assert_eq!(ids_before, ids_after);
}

#[test]
fn test_undo_redo_on_empty_stacks_change_nothing() {
    let mut pad = Sketchpad::default();
    pad.take_event();
    assert!(!pad.undo());
    assert!(!pad.redo());
    assert!(pad.items().is_empty());
    assert!(pad.history().undone().is_empty());
    assert_eq!(pad.take_event(), None);
}

#[test]
fn test_clear_on_commit_drops_redo() {
    let mut pad = pad_with(RedoPolicy::ClearOnCommit);
    stroke(&mut pad, 1.0);
    pad.undo();
    stroke(&mut pad, 2.0);
    assert!(!pad.redo());
    assert_eq!(pad.items().len(), 1);
}

#[test]
fn test_preserve_allows_stale_redo() {
    let mut pad = pad_with(RedoPolicy::Preserve);
    stroke(&mut pad, 1.0);
    pad.undo();
    stroke(&mut pad, 2.0);
    assert!(pad.redo());
    assert_eq!(pad.items().len(), 2);
}

#[test]
fn test_default_session_keeps_redo_across_new_strokes() {
    let mut pad = Sketchpad::default();
    stroke(&mut pad, 1.0);
    pad.undo();
    stroke(&mut pad, 2.0);
    assert_eq!(pad.history().undone().len(), 1);
    assert!(pad.redo());
    assert_eq!(pad.items().len(), 2);
}
