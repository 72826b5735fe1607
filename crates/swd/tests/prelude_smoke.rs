#![forbid(unsafe_code)]

//! End-to-end use of the facade through `swd::prelude` only.

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use swd::prelude::*;

#[derive(Default)]
struct Quiet;

impl Animator<RowId> for Quiet {
    fn cancel_press(&mut self, _row: RowId) {}
    fn set_swipe_progress(&mut self, _row: RowId, _h: &RowId, _offset: f32, _opacity: f32) {}
    fn slide_out(&mut self, _row: RowId, _h: &RowId, _target: f32, _d: Duration) {}
    fn slide_back(&mut self, _row: RowId, _h: &RowId, _d: Duration) {}
    fn collapse(&mut self, _row: RowId, _h: &RowId, _d: Duration) {}
    fn reset_row(&mut self, _row: RowId, _h: &RowId) {}
}

#[derive(Clone, Default)]
struct SharedSurface(Rc<RefCell<Option<String>>>);

impl PromptSurface for SharedSurface {
    fn show(&mut self, content: &PromptContent, _geometry: PromptGeometry) {
        *self.0.borrow_mut() = Some(content.message.clone());
    }
    fn update(&mut self, content: &PromptContent) {
        *self.0.borrow_mut() = Some(content.message.clone());
    }
    fn hide(&mut self) {
        *self.0.borrow_mut() = None;
    }
    fn is_showing(&self) -> bool {
        self.0.borrow().is_some()
    }
}

struct Fixture {
    list: SwipeDismissList<UniformRows>,
    prompt: SharedSurface,
    live: Rc<RefCell<Vec<usize>>>,
}

fn fixture(policy: UndoPolicy, rows: usize) -> Result<Fixture> {
    let live = Rc::new(RefCell::new((0..rows).collect::<Vec<_>>()));
    let prompt = SharedSurface::default();
    let on_dismiss = {
        let live = live.clone();
        move |row: RowId| {
            live.borrow_mut().retain(|&r| r != row.0);
            let live = live.clone();
            Some(
                FnUndoable::new(move || {
                    let mut live = live.borrow_mut();
                    live.push(row.0);
                    live.sort_unstable();
                })
                .boxed(),
            )
        }
    };
    let list = SwipeDismissList::builder()
        .rows(UniformRows::new(rows, 48.0, 360.0))
        .on_dismiss(on_dismiss)
        .animator(Quiet)
        .prompt_surface(prompt.clone())
        .scheduler(|_: Duration, _: HideToken| {})
        .config(DismissConfig::default().with_undo_policy(policy))
        .build()?;
    Ok(Fixture { list, prompt, live })
}

#[test]
fn builder_errors_flow_into_facade_error() {
    fn incomplete() -> Result<SwipeDismissList<UniformRows>> {
        Ok(SwipeDismissList::builder()
            .rows(UniformRows::new(3, 48.0, 360.0))
            .build()?)
    }
    let err = incomplete().err().expect("incomplete builder must fail");
    assert!(matches!(err, Error::Build(swd::BuildError::MissingDismissCallback)));
}

#[test]
fn swipe_then_undo_restores_row() -> Result<()> {
    let mut f = fixture(UndoPolicy::Single, 5)?;

    f.list.handle_pointer(&PointerEvent::down(20.0, 100.0, 0));
    f.list.handle_pointer(&PointerEvent::moved(120.0, 100.0, 50));
    f.list.handle_pointer(&PointerEvent::moved(260.0, 100.0, 100));
    f.list.handle_pointer(&PointerEvent::up(270.0, 100.0, 120));
    f.list.on_slide_out_finished(RowId(2));
    f.list.on_collapse_finished(RowId(2));

    assert_eq!(*f.live.borrow(), vec![0, 1, 3, 4]);
    assert_eq!(f.prompt.0.borrow().as_deref(), Some("Item deleted"));

    f.list.undo_pressed();
    assert_eq!(*f.live.borrow(), vec![0, 1, 2, 3, 4]);
    assert!(!f.prompt.is_showing());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn collapsed_undo_restores_everything(
        rows in prop::collection::btree_set(0usize..12, 1..6),
    ) {
        let mut f = fixture(UndoPolicy::Collapsed, 12).unwrap();
        let ids: Vec<RowId> = rows.iter().map(|&r| RowId(r)).collect();
        f.list.dismiss(&ids);
        prop_assert_eq!(f.live.borrow().len(), 12 - ids.len());

        f.list.undo_pressed();
        prop_assert_eq!(f.live.borrow().clone(), (0..12).collect::<Vec<_>>());
        prop_assert!(!f.prompt.is_showing());
    }
}

#[cfg(feature = "config")]
#[test]
fn load_config_picks_format_by_extension() -> Result<()> {
    let dir = std::env::temp_dir();
    let toml_path = dir.join(format!("swd-smoke-{}.toml", std::process::id()));
    let json_path = dir.join(format!("swd-smoke-{}.json", std::process::id()));
    std::fs::write(&toml_path, "undo_policy = \"multi\"\n").unwrap();
    std::fs::write(&json_path, r#"{"undo_policy": "collapsed"}"#).unwrap();

    let from_toml = swd::load_config(&toml_path)?;
    let from_json = swd::load_config(&json_path)?;
    let _ = std::fs::remove_file(&toml_path);
    let _ = std::fs::remove_file(&json_path);

    assert_eq!(from_toml.undo_policy, UndoPolicy::Multi);
    assert_eq!(from_json.undo_policy, UndoPolicy::Collapsed);
    Ok(())
}

#[cfg(feature = "config")]
#[test]
fn load_config_rejects_invalid_values() {
    let path = std::env::temp_dir().join(format!("swd-invalid-{}.toml", std::process::id()));
    std::fs::write(&path, "auto_hide_delay_ms = 0\n").unwrap();
    let err = swd::load_config(&path).unwrap_err();
    let _ = std::fs::remove_file(&path);
    assert!(err.validation_messages().is_some_and(|m| m[0].contains("auto_hide_delay_ms")));
}
