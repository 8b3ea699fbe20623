use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Stops watching every intersecting target before handing it on, so each
/// target is reported at most once. Non-intersecting entries are skipped.
fn deliver_first_sightings<T>(
    entries: impl IntoIterator<Item = (T, bool)>,
    mut unobserve: impl FnMut(&T),
    mut on_visible: impl FnMut(T),
) {
    for (target, intersecting) in entries {
        if !intersecting {
            continue;
        }
        unobserve(&target);
        on_visible(target);
    }
}

/// Intersection observer that reports each element the first time it
/// becomes visible and then stops watching it. Disconnects on drop.
pub struct OneShotObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl OneShotObserver {
    pub fn new(
        threshold: f64,
        root_margin: Option<&str>,
        mut on_visible: impl FnMut(Element) + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let sightings = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| (entry.target(), entry.is_intersecting()));
                deliver_first_sightings(sightings, |target| observer.unobserve(target), &mut on_visible);
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|err| log::warn!("IntersectionObserver unavailable: {:?}", err))
                .ok()?;

        Some(Self { observer, _callback: callback })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for OneShotObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashSet;

    use super::*;

    /// Mimics the browser: only still-watched targets produce entries.
    fn run(watched: &RefCell<HashSet<&'static str>>, batch: &[(&'static str, bool)], seen: &mut Vec<&'static str>) {
        let entries: Vec<_> = batch
            .iter()
            .copied()
            .filter(|(target, _)| watched.borrow().contains(target))
            .collect();
        deliver_first_sightings(
            entries,
            |target| {
                watched.borrow_mut().remove(target);
            },
            |target| seen.push(target),
        );
    }

    #[test]
    fn each_target_is_reported_once() {
        let watched = RefCell::new(HashSet::from(["hero", "card", "faq"]));
        let mut seen = Vec::new();

        run(&watched, &[("hero", true), ("card", false)], &mut seen);
        run(&watched, &[("hero", true), ("card", true)], &mut seen);
        run(&watched, &[("hero", true), ("card", true), ("faq", false)], &mut seen);

        assert_eq!(seen, vec!["hero", "card"]);
        assert_eq!(*watched.borrow(), HashSet::from(["faq"]));
    }

    #[test]
    fn leaving_the_viewport_reports_nothing() {
        let mut seen = Vec::new();
        let mut unobserved = Vec::new();
        deliver_first_sightings([(1, false), (2, false)], |t| unobserved.push(*t), |t| seen.push(t));
        assert!(seen.is_empty());
        assert!(unobserved.is_empty());
    }
}
