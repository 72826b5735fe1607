#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use swd_core::{
    PointerEvent, PointerEventKind, PointerId, RowId, ScrollState, SwipeClassifier, SwipeConfig,
    SwipeDirection, SwipeEvent, UniformRows,
};

#[derive(Debug, Arbitrary)]
enum Op {
    Pointer {
        kind: u8,
        pointer: u8,
        x: i16,
        y: i16,
        dt: u8,
    },
    Scroll(u8),
    Enable(bool),
    Direction(u8),
    CancelActive,
}

#[derive(Debug, Arbitrary)]
struct Input {
    rows: u8,
    width: u16,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let count = usize::from(input.rows % 32);
    let width = f32::from(input.width % 1200);
    let rows = UniformRows::new(count, 48.0, width);
    let mut classifier: SwipeClassifier<RowId> = SwipeClassifier::new(SwipeConfig::default());

    let mut time_ms = 0i64;
    // Row whose CancelPress has been seen and whose session is still open.
    let mut swiping: Option<RowId> = None;

    for op in input.ops.iter().take(512) {
        let events = match *op {
            Op::Pointer {
                kind,
                pointer,
                x,
                y,
                dt,
            } => {
                time_ms += i64::from(dt);
                let kind = match kind % 4 {
                    0 => PointerEventKind::Down,
                    1 => PointerEventKind::Move,
                    2 => PointerEventKind::Up,
                    _ => PointerEventKind::Cancel,
                };
                let event = PointerEvent::new(kind, f32::from(x) / 4.0, f32::from(y) / 4.0, time_ms)
                    .with_pointer(PointerId(u32::from(pointer % 3)));
                classifier.process(&event, &rows)
            }
            Op::Scroll(s) => {
                let state = match s % 3 {
                    0 => ScrollState::Idle,
                    1 => ScrollState::TouchScroll,
                    _ => ScrollState::Fling,
                };
                classifier.on_scroll_state_changed(state);
                Vec::new()
            }
            Op::Enable(enabled) => {
                classifier.set_enabled(enabled);
                Vec::new()
            }
            Op::Direction(d) => {
                let direction = match d % 3 {
                    0 => SwipeDirection::Both,
                    1 => SwipeDirection::Start,
                    _ => SwipeDirection::End,
                };
                classifier.set_direction(direction);
                Vec::new()
            }
            Op::CancelActive => classifier.cancel_active().into_iter().collect(),
        };

        for event in events {
            match event {
                SwipeEvent::CancelPress { row } => {
                    assert!(row.0 < count, "press cancelled on missing row");
                    swiping = Some(row);
                }
                SwipeEvent::Progress {
                    row,
                    handle,
                    offset,
                    opacity,
                } => {
                    assert_eq!(swiping, Some(row), "progress without swipe");
                    assert_eq!(handle, row);
                    assert!(offset.is_finite());
                    assert!((0.0..=1.0).contains(&opacity), "opacity {opacity}");
                }
                SwipeEvent::Dismiss { row, width, .. } => {
                    assert_eq!(swiping.take(), Some(row), "dismiss without swipe");
                    assert!(width >= 1.0);
                }
                SwipeEvent::Cancel { row, .. } => {
                    assert!(row.0 < count);
                    if swiping == Some(row) {
                        swiping = None;
                    }
                }
            }
        }

        assert_eq!(classifier.is_swiping(), swiping.is_some(), "swipe state diverged");
        if let Some(row) = swiping {
            assert_eq!(classifier.active_row(), Some(row));
        }
    }
});
