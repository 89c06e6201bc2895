use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

/// Content tracks the pointer faster than 1:1 so a short drag travels a
/// full card.
pub const DRAG_GAIN: f64 = 1.5;

/// Scroll slack below which an edge counts as reached.
const EDGE_EPSILON: f64 = 4.0;

/// Scroll offset while dragging: the offset at press time, moved against
/// the pointer and amplified by `gain`.
pub fn drag_scroll_offset(start_offset: f64, start_x: f64, current_x: f64, gain: f64) -> f64 {
    start_offset - (current_x - start_x) * gain
}

/// Clamps a prospective offset to the container's scrollable range.
pub fn clamp_scroll_offset(offset: f64, max_scroll: f64) -> f64 {
    offset.max(0.0).min(max_scroll.max(0.0))
}

/// Offset that puts the center of the child spanning
/// `[child_left, child_left + child_width)` in the middle of the viewport.
pub fn centered_scroll_offset(child_left: f64, child_width: f64, viewport_width: f64) -> f64 {
    (child_left + child_width / 2.0 - viewport_width / 2.0).max(0.0)
}

fn at_left_edge(offset: f64) -> bool {
    offset <= EDGE_EPSILON
}

fn at_right_edge(offset: f64, max_scroll: f64) -> bool {
    offset >= max_scroll - EDGE_EPSILON
}

/// Pointer-drag interaction state. Pointer events are the only
/// transitions; release and leave both land back on `Idle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragPhase {
    Idle,
    Dragging { start_x: f64, start_offset: f64 },
}

impl DragPhase {
    /// Offset for a pointer currently at `x`, clamped to the scrollable
    /// range, or `None` when no drag is underway.
    pub fn offset_for(&self, x: f64, max_scroll: f64) -> Option<f64> {
        match *self {
            Self::Idle => None,
            Self::Dragging {
                start_x,
                start_offset,
            } => Some(clamp_scroll_offset(
                drag_scroll_offset(start_offset, start_x, x, DRAG_GAIN),
                max_scroll,
            )),
        }
    }

    /// Phase after pointer release or leave. Always `Idle`, even when no
    /// drag was underway.
    pub fn released(self) -> Self {
        Self::Idle
    }
}

fn refresh_edges(track: &NodeRef, can_left: &UseStateHandle<bool>, can_right: &UseStateHandle<bool>) {
    if let Some(el) = track.cast::<HtmlElement>() {
        let offset = el.scroll_left() as f64;
        let max_scroll = (el.scroll_width() - el.client_width()) as f64;
        can_left.set(!at_left_edge(offset));
        can_right.set(!at_right_edge(offset, max_scroll));
    }
}

/// Smooth-scrolls the track sideways by `delta` pixels.
fn nudge(track: &NodeRef, delta: f64) {
    if let Some(el) = track.cast::<HtmlElement>() {
        let options = ScrollToOptions::new();
        options.set_left(delta);
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_by_with_scroll_to_options(&options);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Left,
    Right,
}

#[derive(Properties, PartialEq)]
pub struct ArrowBtnProps {
    pub direction: ArrowDirection,
    pub visible: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(ArrowBtn)]
fn arrow_btn(props: &ArrowBtnProps) -> Html {
    let (side, icon, label) = match props.direction {
        ArrowDirection::Left => ("left: 8px;", "fa-solid fa-chevron-left", "Previous"),
        ArrowDirection::Right => ("right: 8px;", "fa-solid fa-chevron-right", "Next"),
    };
    let style = format!(
        "{} opacity: {}; pointer-events: {};",
        side,
        if props.visible { "1" } else { "0" },
        if props.visible { "auto" } else { "none" },
    );
    html! {
        <button class="carousel-arrow" aria-label={label} style={style} onclick={props.onclick.clone()}>
            <i class={icon}></i>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    /// Fixed width of each card cell in CSS pixels.
    #[prop_or(220)]
    pub card_width: u32,
    #[prop_or(16)]
    pub gap: u32,
    /// Child to center in the visible width on mount.
    #[prop_or_default]
    pub center_index: Option<usize>,
    #[prop_or_default]
    pub children: Children,
}

/// Horizontal snap-scrolling row with mouse drag, edge-aware arrow
/// buttons and native touch scrolling.
#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let track = use_node_ref();
    let drag = use_state(|| DragPhase::Idle);
    let can_left = use_state_eq(|| false);
    let can_right = use_state_eq(|| true);

    // Center the requested child on mount, then keep the edge flags
    // current across scroll position and window size changes.
    {
        let track = track.clone();
        let can_left = can_left.clone();
        let can_right = can_right.clone();
        use_effect_with_deps(
            move |center_index: &Option<usize>| {
                if let (Some(el), Some(index)) = (track.cast::<HtmlElement>(), *center_index) {
                    if let Some(child) = el.children().item(index as u32) {
                        let track_rect = el.get_bounding_client_rect();
                        let child_rect = child.get_bounding_client_rect();
                        let child_left =
                            child_rect.left() - track_rect.left() + el.scroll_left() as f64;
                        let offset = centered_scroll_offset(
                            child_left,
                            child_rect.width(),
                            el.client_width() as f64,
                        );
                        el.set_scroll_left(offset as i32);
                    }
                }
                refresh_edges(&track, &can_left, &can_right);

                let cleanup: Box<dyn FnOnce()> = match web_sys::window() {
                    Some(window) => {
                        let on_resize = Closure::<dyn Fn()>::new({
                            let track = track.clone();
                            let can_left = can_left.clone();
                            let can_right = can_right.clone();
                            move || refresh_edges(&track, &can_left, &can_right)
                        });
                        match window.add_event_listener_with_callback(
                            "resize",
                            on_resize.as_ref().unchecked_ref(),
                        ) {
                            Ok(()) => Box::new(move || {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.remove_event_listener_with_callback(
                                        "resize",
                                        on_resize.as_ref().unchecked_ref(),
                                    );
                                }
                            }),
                            Err(_) => Box::new(move || drop(on_resize)),
                        }
                    }
                    None => Box::new(|| ()),
                };
                move || cleanup()
            },
            props.center_index,
        );
    }

    let onmousedown = {
        let track = track.clone();
        let drag = drag.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(el) = track.cast::<HtmlElement>() {
                drag.set(DragPhase::Dragging {
                    start_x: e.page_x() as f64 - el.offset_left() as f64,
                    start_offset: el.scroll_left() as f64,
                });
            }
        })
    };

    let onmousemove = {
        let track = track.clone();
        let drag = drag.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(el) = track.cast::<HtmlElement>() {
                let x = e.page_x() as f64 - el.offset_left() as f64;
                let max_scroll = (el.scroll_width() - el.client_width()) as f64;
                if let Some(offset) = drag.offset_for(x, max_scroll) {
                    // Only an active drag may hijack the pointer.
                    e.prevent_default();
                    el.set_scroll_left(offset as i32);
                }
            }
        })
    };

    let end_drag = {
        let drag = drag.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*drag).released();
            if next != *drag {
                drag.set(next);
            }
        })
    };

    let onscroll = {
        let track = track.clone();
        let can_left = can_left.clone();
        let can_right = can_right.clone();
        Callback::from(move |_: Event| refresh_edges(&track, &can_left, &can_right))
    };

    let step = (props.card_width + props.gap) as f64;
    let nudge_left = {
        let track = track.clone();
        Callback::from(move |_: MouseEvent| nudge(&track, -step))
    };
    let nudge_right = {
        let track = track.clone();
        Callback::from(move |_: MouseEvent| nudge(&track, step))
    };

    let dragging = matches!(*drag, DragPhase::Dragging { .. });

    html! {
        <div style="position: relative; width: 100%;">
            <ArrowBtn direction={ArrowDirection::Left} visible={*can_left} onclick={nudge_left} />
            <ArrowBtn direction={ArrowDirection::Right} visible={*can_right} onclick={nudge_right} />
            <div
                ref={track}
                class="carousel-track"
                style={format!(
                    "gap: {}px; cursor: {};",
                    props.gap,
                    if dragging { "grabbing" } else { "grab" },
                )}
                onmousedown={onmousedown}
                onmousemove={onmousemove}
                onmouseup={end_drag.clone()}
                onmouseleave={end_drag}
                onscroll={onscroll}
            >
                { for props.children.iter().map(|child| html! {
                    <div style={format!(
                        "flex: 0 0 {}px; scroll-snap-align: center; user-select: none;",
                        props.card_width,
                    )}>
                        { child }
                    </div>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_moves_against_the_pointer_with_gain() {
        // Pointer moved 60px left, content scrolls 90px right.
        assert_eq!(drag_scroll_offset(500.0, 200.0, 140.0, DRAG_GAIN), 590.0);
        // Pointer moved 100px right, content scrolls 150px left.
        assert_eq!(drag_scroll_offset(500.0, 200.0, 300.0, DRAG_GAIN), 350.0);
    }

    #[test]
    fn offsets_clamp_to_the_scrollable_range() {
        assert_eq!(clamp_scroll_offset(-25.0, 800.0), 0.0);
        assert_eq!(clamp_scroll_offset(900.0, 800.0), 800.0);
        assert_eq!(clamp_scroll_offset(400.0, 800.0), 400.0);
        // Content narrower than the viewport cannot scroll at all.
        assert_eq!(clamp_scroll_offset(50.0, -120.0), 0.0);
    }

    #[test]
    fn centering_puts_the_child_mid_viewport() {
        assert_eq!(centered_scroll_offset(1000.0, 200.0, 600.0), 800.0);
        // A child already left of center never produces a negative offset.
        assert_eq!(centered_scroll_offset(10.0, 200.0, 600.0), 0.0);
    }

    #[test]
    fn edges_use_a_small_epsilon() {
        assert!(at_left_edge(0.0));
        assert!(at_left_edge(4.0));
        assert!(!at_left_edge(4.5));
        assert!(at_right_edge(797.0, 800.0));
        assert!(!at_right_edge(795.0, 800.0));
    }

    #[test]
    fn idle_phase_never_produces_an_offset() {
        assert_eq!(DragPhase::Idle.offset_for(120.0, 800.0), None);
    }

    #[test]
    fn dragging_phase_tracks_and_clamps() {
        let drag = DragPhase::Dragging {
            start_x: 200.0,
            start_offset: 500.0,
        };
        assert_eq!(drag.offset_for(140.0, 800.0), Some(590.0));
        // A long pull cannot overshoot the end of the track.
        assert_eq!(drag.offset_for(-400.0, 800.0), Some(800.0));
        assert_eq!(drag.offset_for(800.0, 800.0), Some(0.0));
    }

    #[test]
    fn release_always_returns_to_idle() {
        let drag = DragPhase::Dragging {
            start_x: 120.0,
            start_offset: 300.0,
        };
        assert_eq!(drag.offset_for(100.0, 1000.0), Some(330.0));
        assert_eq!(drag.released(), DragPhase::Idle);
        // Once released, later pointer positions are ignored.
        assert_eq!(drag.released().offset_for(100.0, 1000.0), None);
        // Releasing with no drag underway lands on Idle too.
        assert_eq!(DragPhase::Idle.released(), DragPhase::Idle);
    }
}
