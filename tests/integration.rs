//! Integration tests for simops host-testable logic.

use simops::config::{
    BARCODE_ELEMENT_ID, BARCODE_IMAGE_PATH, BARCODE_ORIGIN, BARCODE_SIZE, BUTTON_COUNT,
    TEXT_ELEMENT_ID, TEXT_ORIGIN,
};
use simops::error::Error;
use simops::mock::{MockPanel, MockRadio, PanelOp};
use simops::radio::receiver::{recv_event, RxEvent};
use simops::records::RECORDS;
use simops::ui::dispatch_sample;

const ALL_RELEASED: [bool; BUTTON_COUNT] = [true; BUTTON_COUNT];

fn pressed(line: usize) -> [bool; BUTTON_COUNT] {
    let mut levels = ALL_RELEASED;
    levels[line] = false;
    levels
}

#[test]
fn line_one_renders_exactly_the_thomas_petty_record() {
    let mut panel = MockPanel::new();
    dispatch_sample(&mut panel, pressed(0)).unwrap();

    assert_eq!(
        panel.ops,
        vec![
            PanelOp::AddText {
                text: RECORDS[0].summary.into(),
                origin: TEXT_ORIGIN,
                id: TEXT_ELEMENT_ID.into(),
            },
            PanelOp::AddImage {
                path: BARCODE_IMAGE_PATH.into(),
                origin: BARCODE_ORIGIN,
                size: BARCODE_SIZE,
                id: BARCODE_ELEMENT_ID.into(),
            },
            PanelOp::WriteAll,
            PanelOp::RemoveText {
                id: TEXT_ELEMENT_ID.into(),
            },
            PanelOp::RemoveImage {
                id: BARCODE_ELEMENT_ID.into(),
            },
        ]
    );
    assert!(RECORDS[0].summary.contains("Petty, Thomas"));
}

#[test]
fn line_five_clears_without_any_insertion() {
    let mut panel = MockPanel::new();
    dispatch_sample(&mut panel, pressed(BUTTON_COUNT - 1)).unwrap();

    assert_eq!(panel.ops, vec![PanelOp::Clear]);
}

#[test]
fn idle_sample_leaves_the_panel_untouched() {
    let mut panel = MockPanel::new();
    dispatch_sample(&mut panel, ALL_RELEASED).unwrap();

    assert!(panel.ops.is_empty());
}

#[test]
fn simultaneous_presses_render_every_record_in_line_order() {
    let mut levels = ALL_RELEASED;
    levels[1] = false;
    levels[3] = false;

    let mut panel = MockPanel::new();
    dispatch_sample(&mut panel, levels).unwrap();

    // Two full render sequences, Maggie Smith first, Susan Dink second;
    // the second overwrites the first on the physical panel.
    assert_eq!(panel.ops.len(), 10);
    assert_eq!(
        panel.ops[0],
        PanelOp::AddText {
            text: RECORDS[1].summary.into(),
            origin: TEXT_ORIGIN,
            id: TEXT_ELEMENT_ID.into(),
        }
    );
    assert_eq!(
        panel.ops[5],
        PanelOp::AddText {
            text: RECORDS[3].summary.into(),
            origin: TEXT_ORIGIN,
            id: TEXT_ELEMENT_ID.into(),
        }
    );
}

#[test]
fn panel_fault_aborts_the_dispatch_pass() {
    let mut panel = MockPanel::new();
    panel.fail_write = true;

    assert_eq!(dispatch_sample(&mut panel, pressed(2)), Err(Error::Display));
}

#[test]
fn received_frame_decodes_after_quiet_polls() {
    let mut radio = MockRadio::new().ready_after(2);
    radio.queue_frame(&[0x00, b'R', b'o', b'o', b'm', b' ', b'4', 0xff]);

    match recv_event(&mut radio).unwrap() {
        RxEvent::Message { raw, text } => {
            assert_eq!(raw.len(), 8);
            assert_eq!(text.as_str(), "Room 4");
        }
        other => panic!("expected message, got {other:?}"),
    }
}

#[test]
fn empty_frame_is_the_placeholder_event() {
    let mut radio = MockRadio::new();
    radio.queue_frame(&[]);

    assert_eq!(recv_event(&mut radio).unwrap(), RxEvent::Empty);
}
