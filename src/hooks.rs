use log::warn;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Tuning for [`use_in_view`].
#[derive(Debug, Clone, PartialEq)]
pub struct InViewOptions {
    /// Fraction of the element that must be visible before the signal fires.
    pub threshold: f64,
    /// Extra margin around the viewport, e.g. `"400px"` to fire early.
    pub root_margin: Option<&'static str>,
}

impl Default for InViewOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: None,
        }
    }
}

/// Reports whether `node` has ever crossed into the viewport.
///
/// The signal is one-shot: it flips to `true` the first time the element
/// intersects and the observer is dropped on the spot, so later scrolling
/// never flips it back. Until the node is attached the signal stays `false`.
#[hook]
pub fn use_in_view(node: NodeRef, options: InViewOptions) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, options): &(NodeRef, InViewOptions)| {
                let cleanup: Box<dyn FnOnce()> = match node.cast::<Element>() {
                    Some(element) => {
                        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                            move |entries: js_sys::Array, observer: IntersectionObserver| {
                                let crossed = entries.iter().any(|entry| {
                                    entry
                                        .dyn_into::<IntersectionObserverEntry>()
                                        .map(|entry| entry.is_intersecting())
                                        .unwrap_or(false)
                                });
                                if crossed {
                                    visible.set(true);
                                    // One-shot: stop watching as soon as it fires.
                                    observer.disconnect();
                                }
                            },
                        );

                        let init = IntersectionObserverInit::new();
                        init.set_threshold(&JsValue::from_f64(options.threshold));
                        if let Some(margin) = options.root_margin {
                            init.set_root_margin(margin);
                        }

                        match IntersectionObserver::new_with_options(
                            callback.as_ref().unchecked_ref(),
                            &init,
                        ) {
                            Ok(observer) => {
                                observer.observe(&element);
                                Box::new(move || {
                                    observer.disconnect();
                                    drop(callback);
                                })
                            }
                            Err(err) => {
                                warn!("intersection observer unavailable: {:?}", err);
                                Box::new(|| ())
                            }
                        }
                    }
                    None => Box::new(|| ()),
                };
                move || cleanup()
            },
            (node, options),
        );
    }

    *visible
}
