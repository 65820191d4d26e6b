//! Destruction trace hook.
//!
//! Every node destruction reports its value here, exactly once per node
//! ever destroyed. The event always flows into `tracing`; tests
//! can additionally record events with [`capture`], and interactive runs
//! can mirror them to stdout with [`set_echo`] to reproduce the classic
//! `~Node(<value>)` trace lines.

use std::cell::{Cell, RefCell};

thread_local! {
    static RECORDER: RefCell<Option<Vec<i32>>> = const { RefCell::new(None) };
    static ECHO: Cell<bool> = const { Cell::new(false) };
}

/// Reports the destruction of a node holding `value`.
///
/// Called from `Node::drop` only; the single-owner invariant guarantees
/// each node is dropped exactly once, so each node yields exactly one event.
pub(crate) fn emit(value: i32) {
    tracing::trace!(value, "node destroyed");
    if ECHO.with(Cell::get) {
        println!("~Node({value})");
    }
    RECORDER.with(|r| {
        if let Some(events) = r.borrow_mut().as_mut() {
            events.push(value);
        }
    });
}

/// Runs `f` while recording destruction events on the current thread.
///
/// Returns `f`'s result together with the destroyed values in destruction
/// order. Not reentrant: a nested `capture` replaces the outer recording.
pub fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<i32>) {
    RECORDER.with(|r| *r.borrow_mut() = Some(Vec::new()));
    let out = f();
    let events = RECORDER
        .with(|r| r.borrow_mut().take())
        .unwrap_or_default();
    (out, events)
}

/// Mirrors destruction events to stdout as `~Node(<value>)` lines.
pub fn set_echo(enabled: bool) {
    ECHO.with(|e| e.set(enabled));
}
