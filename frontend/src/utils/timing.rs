use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor
}

/// Fraction of `duration_ms` covered by `elapsed_ms`, clamped to `[0, 1]`.
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Trailing-edge debounce: only the last call within `delay_ms` runs.
#[derive(Clone)]
pub struct Debounced {
    delay_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
    action: Rc<dyn Fn()>,
}

impl Debounced {
    pub fn new(delay_ms: u32, action: impl Fn() + 'static) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
            action: Rc::new(action),
        }
    }

    pub fn call(&self) {
        let action = self.action.clone();
        let timeout = Timeout::new(self.delay_ms, move || action());
        // Dropping the previous Timeout cancels it.
        self.pending.borrow_mut().replace(timeout);
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_interpolates_linearly() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 0.25), 2.5);
        assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
        assert_eq!(lerp(5.0, -5.0, 0.5), 0.0);
    }

    #[test]
    fn progress_clamps() {
        assert_eq!(progress(-5.0, 2000.0), 0.0);
        assert_eq!(progress(1000.0, 2000.0), 0.5);
        assert_eq!(progress(9000.0, 2000.0), 1.0);
        assert_eq!(progress(10.0, 0.0), 1.0);
    }
}
