//! Viewport-intersection hook
//!
//! `use_in_view` hands out a node ref to attach to a `<section>` and a signal
//! that turns true once the section crosses its visibility threshold. On the
//! server (and before hydration) the signal is false.

use leptos::html::Section;
use leptos::prelude::*;

use crate::core::visibility::{InViewOptions, VisibilityTracker};

/// Observe a section's visibility.
///
/// With `trigger_once` the returned signal flips to true at most once and the
/// observer disconnects right after. Without IntersectionObserver support the
/// section is reported visible immediately.
pub fn use_in_view(options: InViewOptions) -> (NodeRef<Section>, Signal<bool>) {
    let node_ref = NodeRef::<Section>::new();
    let tracker = RwSignal::new(VisibilityTracker::new(options));
    let visible = Memo::new(move |_| tracker.with(|t| t.is_visible()));

    #[cfg(not(feature = "ssr"))]
    observe(node_ref, tracker);

    (node_ref, visible.into())
}

#[cfg(not(feature = "ssr"))]
fn observe(node_ref: NodeRef<Section>, tracker: RwSignal<VisibilityTracker>) {
    use leptos::logging::warn;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    type Callback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    // Observer plus the closure it calls; both must outlive the observation
    let handle = StoredValue::new_local(None::<(IntersectionObserver, Callback)>);

    Effect::new(move |_| {
        let Some(element) = node_ref.get() else {
            return;
        };
        if handle.with_value(|h| h.is_some()) {
            return;
        }

        let options = tracker.with_untracked(|t| t.options());

        let callback: Callback = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    tracker.maybe_update(|t| {
                        t.observe(entry.is_intersecting(), entry.intersection_ratio())
                    });
                }
                if tracker.with_untracked(|t| t.should_disconnect()) {
                    observer.disconnect();
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                observer.observe(&element);
                handle.set_value(Some((observer, callback)));
            }
            Err(err) => {
                warn!("IntersectionObserver unavailable ({err:?}), skipping entrance animation");
                tracker.maybe_update(|t| t.force_visible());
            }
        }
    });

    on_cleanup(move || {
        handle.try_update_value(|h| {
            if let Some((observer, _callback)) = h.take() {
                observer.disconnect();
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_before_any_observation() {
        Owner::new().with(|| {
            let (_node_ref, visible) = use_in_view(InViewOptions::default());
            assert!(!visible.get_untracked());
        });
    }
}
