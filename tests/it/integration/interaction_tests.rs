//! Pointer gesture tests across all modes.

use crate::helpers::{assert_close, assert_mic_count, click, drag, marker_pos, mic_id, TestEditorBuilder};
use micboard::editor::{EditorEvent, Effect};
use micboard::export::ExportFormat;
use micboard::types::{Mode, Point};
use std::collections::HashSet;

// ============================================================================
// Add mode
// ============================================================================

#[test]
fn test_click_adds_microphone_at_pointer() {
    let mut editor = TestEditorBuilder::new().with_mode(Mode::Add).build();
    let pos = Point::new(450.0, 250.0);
    let expected = editor.screen_to_world(pos);

    let effects = click(&mut editor, pos);

    assert_mic_count(&editor, 1);
    let mic = &editor.microphones()[0];
    assert_close(mic.position(), expected);
    assert_close(mic.position(), Point::new(1.0, 1.0));
    assert_eq!(mic.id.to_string(), "mic-1");
    assert!(effects.contains(&Effect::MicrophoneAdded(mic.clone())));
}

#[test]
fn test_small_jitter_still_counts_as_click() {
    let mut editor = TestEditorBuilder::new().with_mode(Mode::Add).build();
    drag(&mut editor, Point::new(100.0, 100.0), &[Point::new(104.0, 96.0)]);
    assert_mic_count(&editor, 1);
    assert_close(editor.microphones()[0].position(), editor.screen_to_world(Point::new(104.0, 96.0)));
}

#[test]
fn test_drag_suppresses_add() {
    let mut editor = TestEditorBuilder::new().with_mode(Mode::Add).build();
    let effects = drag(&mut editor, Point::new(0.0, 0.0), &[Point::new(50.0, 50.0)]);
    assert_mic_count(&editor, 0);
    assert!(effects.iter().all(|e| !matches!(e, Effect::MicrophoneAdded(_))));
}

#[test]
fn test_displacement_at_tolerance_is_a_drag() {
    let mut editor = TestEditorBuilder::new().with_mode(Mode::Add).build();
    drag(&mut editor, Point::new(10.0, 10.0), &[Point::new(15.0, 10.0)]);
    assert_mic_count(&editor, 0);
}

#[test]
fn test_add_mode_does_not_pan() {
    let mut editor = TestEditorBuilder::new().with_mode(Mode::Add).build();
    drag(&mut editor, Point::new(0.0, 0.0), &[Point::new(80.0, 0.0)]);
    assert_eq!(editor.view().pan, Point::default());
}

#[test]
fn test_rapid_adds_get_unique_ids() {
    let mut editor = TestEditorBuilder::new().with_mode(Mode::Add).build();
    for i in 0..50 {
        click(&mut editor, Point::new(300.0 + i as f64, 300.0));
    }
    let ids: HashSet<_> = editor.microphones().iter().map(|m| m.id).collect();
    assert_eq!(ids.len(), 50);
}

// ============================================================================
// Delete mode
// ============================================================================

#[test]
fn test_click_on_hovered_deletes_only_that_microphone() {
    let mut editor = TestEditorBuilder::new()
        .with_mic(0.0, 0.0)
        .with_mic(2.0, 2.0)
        .with_mic(-1.0, 3.0)
        .with_mode(Mode::Delete)
        .build();
    let target = mic_id(&editor, 0);
    assert_eq!(target.to_string(), "mic-1");
    let others: Vec<_> = editor.microphones()[1..].to_vec();

    let pos = marker_pos(&editor, target);
    editor.handle(EditorEvent::PointerMove { pos });
    assert_eq!(editor.hovered(), Some(target));

    let effects = click(&mut editor, pos);

    assert!(effects.contains(&Effect::MicrophoneRemoved(target)));
    assert!(editor.microphone(target).is_none());
    assert_eq!(editor.microphones(), others.as_slice());
    assert_eq!(editor.hovered(), None);
}

#[test]
fn test_delete_click_on_empty_space_does_nothing() {
    let mut editor = TestEditorBuilder::new().with_mic(0.0, 0.0).with_mode(Mode::Delete).build();
    let effects = click(&mut editor, Point::new(10.0, 10.0));
    assert!(effects.is_empty());
    assert_mic_count(&editor, 1);
}

#[test]
fn test_delete_drag_over_marker_does_nothing() {
    let mut editor = TestEditorBuilder::new().with_mic(0.0, 0.0).with_mode(Mode::Delete).build();
    let pos = marker_pos(&editor, mic_id(&editor, 0));
    drag(&mut editor, pos, &[pos.offset(20.0, 0.0)]);
    assert_mic_count(&editor, 1);
}

#[test]
fn test_host_hover_targets_delete() {
    let mut editor = TestEditorBuilder::new().with_mic(0.0, 0.0).with_mic(1.0, 0.0).with_mode(Mode::Delete).build();
    let second = mic_id(&editor, 1);

    // Outside the 6 px marker radius, but inside the host's own hit area
    let pos = marker_pos(&editor, second).offset(6.5, 0.0);
    assert_eq!(editor.hit_test(pos), None);

    editor.handle(EditorEvent::Hover { id: Some(second) });
    let effects = click(&mut editor, pos);

    assert!(effects.contains(&Effect::MicrophoneRemoved(second)));
    assert!(editor.microphone(second).is_none());
    assert_mic_count(&editor, 1);
}

#[test]
fn test_host_hover_survives_pointer_moves() {
    let mut editor = TestEditorBuilder::new().with_mic(0.0, 0.0).with_mode(Mode::Edit).build();
    let id = mic_id(&editor, 0);
    let far = Point::new(10.0, 10.0);

    editor.handle(EditorEvent::Hover { id: Some(id) });
    assert!(editor.host_hover());
    editor.handle(EditorEvent::PointerMove { pos: far });
    assert_eq!(editor.hovered(), Some(id));

    click(&mut editor, far);
    assert_eq!(editor.edit_form().map(|f| f.target), Some(id));
}

#[test]
fn test_host_reported_no_hover_blocks_delete() {
    let mut editor = TestEditorBuilder::new().with_mic(0.0, 0.0).with_mode(Mode::Delete).build();
    let id = mic_id(&editor, 0);

    editor.handle(EditorEvent::Hover { id: None });
    let pos = marker_pos(&editor, id);
    let effects = click(&mut editor, pos);

    assert!(effects.is_empty());
    assert_mic_count(&editor, 1);
}

#[test]
fn test_non_finite_add_is_rejected() {
    let mut editor = TestEditorBuilder::new().with_mic(1.0, 1.0).build();

    assert!(editor.add_microphone(Point::new(f64::INFINITY, 0.0)).is_none());
    assert!(editor.add_microphone(Point::new(0.0, f64::NAN)).is_none());

    assert_mic_count(&editor, 1);
    assert_eq!(
        editor.export(ExportFormat::Numpy).unwrap(),
        "np.array([\n  [1.0000, 1.0000]\n])"
    );
}

// ============================================================================
// Edit mode
// ============================================================================

#[test]
fn test_click_on_hovered_opens_edit_dialog() {
    let mut editor = TestEditorBuilder::new().with_mic(1.5, -2.25).with_mode(Mode::Edit).build();
    let id = mic_id(&editor, 0);

    let pos = marker_pos(&editor, id);
    let effects = click(&mut editor, pos);

    let form = editor.edit_form().expect("dialog open");
    assert_eq!(form.target, id);
    assert_eq!(form.x_text, "1.5");
    assert_eq!(form.y_text, "-2.25");
    assert!(effects.iter().any(|e| matches!(e, Effect::EditDialogOpened(f) if f.target == id)));
    assert_mic_count(&editor, 1);
}

#[test]
fn test_edit_click_on_empty_space_opens_nothing() {
    let mut editor = TestEditorBuilder::new().with_mic(0.0, 0.0).with_mode(Mode::Edit).build();
    click(&mut editor, Point::new(5.0, 5.0));
    assert!(editor.edit_form().is_none());
}

// ============================================================================
// Pan mode
// ============================================================================

#[test]
fn test_pan_accumulates_move_deltas() {
    let mut editor = TestEditorBuilder::new().with_mode(Mode::Pan).build();
    let effects = drag(
        &mut editor,
        Point::new(0.0, 0.0),
        &[Point::new(5.0, 0.0), Point::new(8.0, 0.0), Point::new(6.0, 0.0)],
    );

    assert_eq!(editor.view().pan, Point::new(6.0, 0.0));
    let view_changes = effects.iter().filter(|e| matches!(e, Effect::ViewChanged(_))).count();
    assert_eq!(view_changes, 3);
}

#[test]
fn test_pan_click_does_not_mutate() {
    let mut editor = TestEditorBuilder::new().with_mic(0.0, 0.0).with_mode(Mode::Pan).build();
    let pos = marker_pos(&editor, mic_id(&editor, 0));
    click(&mut editor, pos);
    assert_mic_count(&editor, 1);
    assert!(editor.edit_form().is_none());
}

#[test]
fn test_moves_without_press_do_not_pan() {
    let mut editor = TestEditorBuilder::new().with_mode(Mode::Pan).build();
    editor.handle(EditorEvent::PointerMove { pos: Point::new(10.0, 10.0) });
    editor.handle(EditorEvent::PointerMove { pos: Point::new(40.0, 10.0) });
    assert_eq!(editor.view().pan, Point::default());
}

#[test]
fn test_add_after_pan_uses_new_view() {
    let mut editor = TestEditorBuilder::new().with_mode(Mode::Pan).build();
    drag(&mut editor, Point::new(400.0, 300.0), &[Point::new(450.0, 300.0)]);
    editor.handle(EditorEvent::Key { key: '2' });

    // World origin now sits at (450, 300)
    click(&mut editor, Point::new(450.0, 300.0));
    assert_close(editor.microphones()[0].position(), Point::new(0.0, 0.0));
}

// ============================================================================
// Gesture lifecycle
// ============================================================================

#[test]
fn test_pointer_leave_abandons_gesture() {
    let mut editor = TestEditorBuilder::new().with_mode(Mode::Add).build();
    editor.handle(EditorEvent::PointerDown { pos: Point::new(200.0, 200.0) });
    editor.handle(EditorEvent::PointerLeave);
    assert!(editor.input_state().is_idle());

    let effects = editor.handle(EditorEvent::PointerUp { pos: Point::new(200.0, 200.0) });
    assert!(effects.is_empty());
    assert_mic_count(&editor, 0);
}

#[test]
fn test_pointer_leave_clears_hover() {
    let mut editor = TestEditorBuilder::new().with_mic(0.0, 0.0).build();
    let pos = marker_pos(&editor, mic_id(&editor, 0));
    editor.handle(EditorEvent::PointerMove { pos });
    assert!(editor.hovered().is_some());

    let effects = editor.handle(EditorEvent::PointerLeave);
    assert_eq!(effects, vec![Effect::HoverChanged(None)]);
    assert_eq!(editor.hovered(), None);
}

#[test]
fn test_hover_tracks_marker_radius() {
    let mut editor = TestEditorBuilder::new().with_mic(0.0, 0.0).build();
    let id = mic_id(&editor, 0);
    let center = marker_pos(&editor, id);

    editor.handle(EditorEvent::PointerMove { pos: center.offset(4.0, 0.0) });
    assert_eq!(editor.hovered(), Some(id));

    editor.handle(EditorEvent::PointerMove { pos: center.offset(9.0, 0.0) });
    assert_eq!(editor.hovered(), None);
}

#[test]
fn test_tooltip_follows_hover() {
    let mut editor = TestEditorBuilder::new().with_mic(1.0, 1.0).build();
    assert!(editor.tooltip().is_none());

    let pos = marker_pos(&editor, mic_id(&editor, 0));
    editor.handle(EditorEvent::PointerMove { pos });

    let tooltip = editor.tooltip().expect("hovered");
    assert_eq!(tooltip.text, "(1.0000m, 1.0000m)");
    assert_eq!(tooltip.anchor, Point::new(460.0, 220.0));

    let markers = editor.markers();
    assert_eq!(markers.len(), 1);
    assert!(markers[0].hovered);
}

#[test]
fn test_mode_keys() {
    let mut editor = TestEditorBuilder::new().build();
    assert_eq!(editor.mode(), Mode::Add);

    assert_eq!(editor.handle(EditorEvent::Key { key: '1' }), vec![Effect::ModeChanged(Mode::Pan)]);
    editor.handle(EditorEvent::Key { key: '3' });
    assert_eq!(editor.mode(), Mode::Edit);
    editor.handle(EditorEvent::Key { key: '4' });
    assert_eq!(editor.mode(), Mode::Delete);

    assert!(editor.handle(EditorEvent::Key { key: 'x' }).is_empty());
    assert!(editor.handle(EditorEvent::Key { key: '4' }).is_empty());
    assert_eq!(editor.mode(), Mode::Delete);
}

#[test]
fn test_zoom_controls_clamp() {
    let mut editor = TestEditorBuilder::new().build();
    for _ in 0..30 {
        editor.handle(EditorEvent::ZoomIn);
    }
    assert_eq!(editor.view().zoom(), 200.0);
    assert!(editor.handle(EditorEvent::ZoomIn).is_empty());

    for _ in 0..30 {
        editor.handle(EditorEvent::ZoomOut);
    }
    assert_eq!(editor.view().zoom(), 20.0);

    editor.handle(EditorEvent::ResetView);
    assert_eq!(editor.view().zoom(), 50.0);
    assert_eq!(editor.view().pan, Point::default());
}
