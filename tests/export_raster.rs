use egui::{Color32, pos2};
use image::Rgba;
use sticker_sketchpad::export::{Exporter, MemorySink};
use sticker_sketchpad::{ExportError, InputEvent, Sketchpad, SketchpadConfig};

fn is_dark(pixel: &Rgba<u8>) -> bool {
    pixel.0[0] < 128 && pixel.0[3] > 128
}

#[test]
fn test_export_is_scaled_and_contains_stroke() {
    let mut pad = Sketchpad::default();
    pad.handle_input(InputEvent::PointerDown { position: pos2(10.0, 10.0) });
    pad.handle_input(InputEvent::PointerMove { position: pos2(20.0, 10.0) });
    pad.handle_input(InputEvent::PointerMove { position: pos2(20.0, 20.0) });
    pad.handle_input(InputEvent::PointerUp { position: pos2(20.0, 20.0) });
    pad.undo();
    pad.redo();

    let image = Exporter::new().render_sketchpad(&pad).unwrap();
    assert_eq!(image.dimensions(), (1024, 1024));

    // Both segments, scaled by four.
    assert!(is_dark(image.get_pixel(60, 40)));
    assert!(is_dark(image.get_pixel(80, 60)));
    // Away from the stroke stays background.
    assert_eq!(image.get_pixel(10, 10), &Rgba([255, 255, 255, 255]));
    assert_eq!(image.get_pixel(60, 70), &Rgba([255, 255, 255, 255]));
}

#[test]
fn test_export_skips_in_progress_item_and_preview() {
    let config = SketchpadConfig {
        canvas_width: 32.0,
        canvas_height: 32.0,
        ..Default::default()
    };
    let mut pad = Sketchpad::new(config);
    pad.handle_input(InputEvent::PointerMove { position: pos2(16.0, 16.0) });
    pad.handle_input(InputEvent::PointerDown { position: pos2(2.0, 2.0) });
    pad.handle_input(InputEvent::PointerMove { position: pos2(30.0, 30.0) });

    let image = Exporter::new().render_sketchpad(&pad).unwrap();
    assert_eq!(image.dimensions(), (128, 128));
    assert!(image.pixels().all(|pixel| pixel == &Rgba([255, 255, 255, 255])));
}

#[test]
fn test_exported_sticker_lands_at_scaled_position() {
    let mut pad = Sketchpad::default();
    pad.select_sticker("🎃");
    pad.set_sticker_rotation(90.0);
    pad.set_sticker_size(40.0);
    pad.handle_input(InputEvent::PointerDown { position: pos2(50.0, 50.0) });
    pad.handle_input(InputEvent::PointerUp { position: pos2(50.0, 50.0) });

    let image = Exporter::new().render_sketchpad(&pad).unwrap();
    let ink_near = |x0: u32, y0: u32, radius: u32| {
        (y0 - radius..y0 + radius)
            .flat_map(|y| (x0 - radius..x0 + radius).map(move |x| (x, y)))
            .filter(|&(x, y)| image.get_pixel(x, y) != &Rgba([255, 255, 255, 255]))
            .count()
    };
    assert!(ink_near(200, 200, 100) > 0, "sticker should be drawn around (200, 200)");
    assert_eq!(ink_near(700, 700, 100), 0);
}

#[test]
fn test_export_hands_png_to_sink() {
    let mut pad = Sketchpad::default();
    pad.handle_input(InputEvent::PointerDown { position: pos2(1.0, 1.0) });
    pad.handle_input(InputEvent::PointerMove { position: pos2(100.0, 100.0) });
    pad.handle_input(InputEvent::PointerUp { position: pos2(100.0, 100.0) });

    let mut sink = MemorySink::default();
    let summary = Exporter::new().export(&pad, &mut sink).unwrap();
    assert_eq!(summary.file_name, "sketchpad.png");
    assert_eq!((summary.width, summary.height), (1024, 1024));

    let (name, png) = &sink.files[0];
    assert_eq!(name, "sketchpad.png");
    let decoded = image::load_from_memory(png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (1024, 1024));
}

#[test]
fn test_transparent_background_is_respected() {
    let mut exporter = Exporter::new();
    let image = exporter
        .render(&[], egui::vec2(8.0, 8.0), 2.0, Color32::TRANSPARENT)
        .unwrap();
    assert_eq!(image.dimensions(), (16, 16));
    assert!(image.pixels().all(|pixel| pixel.0[3] == 0));
}

#[test]
fn test_oversized_export_fails_before_allocating() {
    let mut exporter = Exporter::new();
    let result = exporter.render(&[], egui::vec2(256.0, 256.0), 300.0, Color32::WHITE);
    assert!(matches!(result, Err(ExportError::TooLarge { .. })));
}
