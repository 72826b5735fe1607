#![forbid(unsafe_code)]

//! Log policy checks for a full swipe-to-dismiss session.
//!
//! Verify that:
//! - Every event uses one of the `swd.*` targets.
//! - Per-move progress is TRACE; transitions are DEBUG; nothing is INFO+.
//! - Key transitions carry a structured `row` field.
//!
//! Run:
//!   cargo test -p swd-widgets --test dismiss_logging

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing_subscriber::layer::SubscriberExt;

use swd_core::{PointerEvent, RowId, UniformRows};
use swd_runtime::{FnUndoable, HideToken, PromptContent};
use swd_widgets::{Animator, PromptGeometry, PromptSurface, SwipeDismissList};

// ============================================================================
// Test Infrastructure
// ============================================================================

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: tracing::Level,
    target: String,
    fields: HashMap<String, String>,
}

impl CapturedEvent {
    fn message(&self) -> &str {
        self.fields.get("message").map_or("", String::as_str)
    }
}

struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCapture {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            target: event.metadata().target().to_string(),
            fields: visitor.0.into_iter().collect(),
        });
    }
}

fn with_captured_events<F: FnOnce()>(f: F) -> Vec<CapturedEvent> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::filter::LevelFilter::TRACE)
        .with(EventCapture {
            events: events.clone(),
        });
    tracing::subscriber::with_default(subscriber, f);
    let captured = events.lock().unwrap().clone();
    captured
}

// ============================================================================
// Silent collaborators
// ============================================================================

struct NullAnimator;

impl Animator<RowId> for NullAnimator {
    fn cancel_press(&mut self, _row: RowId) {}
    fn set_swipe_progress(&mut self, _row: RowId, _h: &RowId, _offset: f32, _opacity: f32) {}
    fn slide_out(&mut self, _row: RowId, _h: &RowId, _target: f32, _d: Duration) {}
    fn slide_back(&mut self, _row: RowId, _h: &RowId, _d: Duration) {}
    fn collapse(&mut self, _row: RowId, _h: &RowId, _d: Duration) {}
    fn reset_row(&mut self, _row: RowId, _h: &RowId) {}
}

#[derive(Default)]
struct NullSurface {
    showing: bool,
}

impl PromptSurface for NullSurface {
    fn show(&mut self, _content: &PromptContent, _geometry: PromptGeometry) {
        self.showing = true;
    }
    fn update(&mut self, _content: &PromptContent) {}
    fn hide(&mut self) {
        self.showing = false;
    }
    fn is_showing(&self) -> bool {
        self.showing
    }
}

fn run_session() {
    let mut list = SwipeDismissList::builder()
        .rows(UniformRows::new(4, 50.0, 400.0))
        .on_dismiss(|_| Some(FnUndoable::new(|| {}).boxed()))
        .animator(NullAnimator)
        .prompt_surface(NullSurface::default())
        .scheduler(|_: Duration, _: HideToken| {})
        .build()
        .expect("complete builder");

    list.handle_pointer(&PointerEvent::down(100.0, 75.0, 0));
    list.handle_pointer(&PointerEvent::moved(200.0, 75.0, 100));
    list.handle_pointer(&PointerEvent::moved(300.0, 75.0, 200));
    list.handle_pointer(&PointerEvent::up(320.0, 75.0, 300));
    list.on_slide_out_finished(RowId(1));
    list.on_collapse_finished(RowId(1));
    list.on_collapse_finished(RowId(1));
    list.undo_pressed();
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn all_events_use_swd_targets() {
    let events = with_captured_events(run_session);
    assert!(!events.is_empty());
    for event in &events {
        assert!(
            ["swd.gesture", "swd.undo", "swd.dismiss"].contains(&event.target.as_str()),
            "unexpected target {} for '{}'",
            event.target,
            event.message()
        );
    }
}

#[test]
fn progress_is_trace_and_nothing_is_info() {
    let events = with_captured_events(run_session);
    let progress: Vec<_> = events.iter().filter(|e| e.message() == "progress").collect();
    assert_eq!(progress.len(), 2);
    assert!(progress.iter().all(|e| e.level == tracing::Level::TRACE));
    assert!(events.iter().all(|e| e.level > tracing::Level::INFO));
}

#[test]
fn transitions_carry_row_field() {
    let events = with_captured_events(run_session);
    for message in ["swiping", "dismiss", "sliding out", "collapsing"] {
        let event = events
            .iter()
            .find(|e| e.message() == message)
            .unwrap_or_else(|| panic!("missing '{message}'"));
        assert_eq!(event.level, tracing::Level::DEBUG, "{message}");
        assert_eq!(event.fields.get("row").map(String::as_str), Some("#1"), "{message}");
    }
    assert!(events.iter().any(|e| e.message() == "batch complete"));
    assert!(
        events
            .iter()
            .any(|e| e.message() == "unexpected collapse completion")
    );
}
