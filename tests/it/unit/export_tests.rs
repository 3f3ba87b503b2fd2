//! Export format tests using inline insta snapshots.
//!
//! The numpy literal is pasted into other tools verbatim, so the snapshots pin
//! every character.

use crate::helpers::TestEditorBuilder;
use micboard::export::{numpy_array, ExportFormat};
use micboard::types::{MicId, Microphone};

fn mic(n: u64, x: f64, y: f64) -> Microphone {
    Microphone { id: MicId::new(n), x, y }
}

#[test]
fn test_numpy_exact_literal() {
    let mics = vec![mic(1, 1.2345, 6.789), mic(2, 2.3456, 7.8901)];
    assert_eq!(
        numpy_array(&mics),
        "np.array([\n  [1.2345, 6.7890],\n  [2.3456, 7.8901]\n])"
    );
}

#[test]
fn snapshot_numpy_mixed_signs() {
    let mics = vec![mic(1, -3.0, 0.5), mic(2, 0.0, -0.125), mic(3, 12.34567, -7.0)];
    insta::assert_snapshot!(numpy_array(&mics), @r"
    np.array([
      [-3.0000, 0.5000],
      [0.0000, -0.1250],
      [12.3457, -7.0000]
    ])
    ");
}

#[test]
fn snapshot_json_export() {
    let editor = TestEditorBuilder::new().with_mic(1.5, -2.0).build();
    let json = editor.export(ExportFormat::Json).unwrap();
    insta::assert_snapshot!(json, @r#"
    [
      {
        "id": "mic-1",
        "x": 1.5,
        "y": -2.0
      }
    ]
    "#);
}

#[test]
fn test_export_is_pure() {
    let editor = TestEditorBuilder::new().with_mic(0.1, 0.2).with_mic(-4.0, 4.0).build();
    let first = editor.export(ExportFormat::Numpy).unwrap();
    let second = editor.export(ExportFormat::Numpy).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_export_empty_board() {
    let editor = TestEditorBuilder::new().build();
    assert_eq!(editor.export(ExportFormat::Numpy).unwrap(), "np.array([\n  \n])");
    assert_eq!(editor.export(ExportFormat::Json).unwrap(), "[]");
}
