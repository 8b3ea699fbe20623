use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::dom;

/// Runs `f` on the next animation frame.
pub fn next_frame(f: impl FnOnce() + 'static) {
    let Some(window) = dom::window() else {
        return;
    };
    let callback = Closure::once_into_js(move |_: f64| f());
    let _ = window.request_animation_frame(callback.unchecked_ref());
}

fn now() -> f64 {
    dom::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Coalesces bursts of scroll/pointer events into one update per frame.
#[derive(Clone, Default)]
pub struct FrameGuard {
    ticking: Rc<Cell<bool>>,
}

impl FrameGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no frame is pending; the caller then owns the next frame.
    fn try_claim(&self) -> bool {
        !self.ticking.replace(true)
    }

    fn release(&self) {
        self.ticking.set(false);
    }

    pub fn schedule(&self, update: impl FnOnce() + 'static) {
        if !self.try_claim() {
            return;
        }
        let guard = self.clone();
        next_frame(move || {
            update();
            guard.release();
        });
    }
}

/// Calls `on_frame` with the linear progress in `[0, 1]` once per frame for
/// `duration_ms`. The final call always receives exactly `1.0`.
pub fn animate(duration_ms: f64, mut on_frame: impl FnMut(f64) + 'static) {
    let Some(window) = dom::window() else {
        on_frame(1.0);
        return;
    };

    let start = now();
    let handle: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = handle.clone();
    let raf_window = window.clone();

    *handle.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
        let progress = super::timing::progress(timestamp - start, duration_ms);
        on_frame(progress);
        if progress < 1.0 {
            if let Some(cb) = next.borrow().as_ref() {
                let _ = raf_window.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        } else {
            // Breaks the self-reference so the closure is freed.
            next.borrow_mut().take();
        }
    }));

    if let Some(cb) = handle.borrow().as_ref() {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_update_per_frame_until_released() {
        let guard = FrameGuard::new();
        assert!(guard.try_claim());
        assert!(!guard.try_claim());
        assert!(!guard.clone().try_claim());
        guard.release();
        assert!(guard.try_claim());
    }
}
