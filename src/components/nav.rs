use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::config;

/// Scroll depth past which the bar gets a solid backdrop.
const SOLID_THRESHOLD: f64 = 60.0;

/// Smooth-scrolls the section with `id` into view. Unknown ids are a
/// no-op so a renamed section cannot break navigation.
pub fn jump_to_section(id: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(section) = document.get_element_by_id(id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

/// Fixed top bar: transparent over the hero, solid once the page has
/// scrolled, with a burger-driven overlay menu on small screens.
#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let scrolled = use_state_eq(|| false);
    let menu_open = use_state(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let cleanup: Box<dyn FnOnce()> = match web_sys::window() {
                    Some(window) => {
                        let listener = Closure::<dyn Fn()>::new({
                            let window = window.clone();
                            let scrolled = scrolled.clone();
                            move || {
                                let y = window.scroll_y().unwrap_or(0.0);
                                scrolled.set(y > SOLID_THRESHOLD);
                            }
                        });
                        match window.add_event_listener_with_callback(
                            "scroll",
                            listener.as_ref().unchecked_ref(),
                        ) {
                            Ok(()) => Box::new(move || {
                                let _ = window.remove_event_listener_with_callback(
                                    "scroll",
                                    listener.as_ref().unchecked_ref(),
                                );
                            }),
                            Err(_) => Box::new(move || drop(listener)),
                        }
                    }
                    None => Box::new(|| ()),
                };
                move || cleanup()
            },
            (),
        );
    }

    let go = {
        let menu_open = menu_open.clone();
        move |id: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |_: MouseEvent| {
                jump_to_section(id);
                menu_open.set(false);
            })
        }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    html! {
        <>
            <nav class={classes!("top-nav", (*scrolled).then(|| "scrolled"))}>
                <div class="nav-brand" onclick={go("hero")}>{"Ben Lewis Studios"}</div>
                <div class="nav-links">
                    <span class="nav-link" onclick={go("work")}>{"Work"}</span>
                    <span class="nav-link" onclick={go("ugc")}>{"UGC"}</span>
                    <span class="nav-link" onclick={go("about")}>{"About"}</span>
                    <a href={config::CALENDLY_URL} class="btn-primary nav-cta">{"Book a Call"}</a>
                </div>
                <button
                    class={classes!("nav-burger", (*menu_open).then(|| "open"))}
                    aria-label="Menu"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>
            if *menu_open {
                <div class="nav-overlay">
                    <span class="nav-link big" onclick={go("work")}>{"Work"}</span>
                    <span class="nav-link big" onclick={go("ugc")}>{"UGC"}</span>
                    <span class="nav-link big" onclick={go("about")}>{"About"}</span>
                    <a href={config::CALENDLY_URL} class="btn-primary" style="margin-top: 12px;">{"Book a Call"}</a>
                </div>
            }
        </>
    }
}
