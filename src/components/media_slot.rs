use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::catalog::{MediaItem, MediaKind};
use crate::hooks::{use_in_view, InViewOptions};

/// How far outside the viewport a lazy card may be when its fetch starts.
pub const LAZY_ROOT_MARGIN: &str = "400px";

/// When a media slot may start fetching its resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationMode {
    /// Wait until the card scrolls near the viewport.
    Lazy,
    /// Fetch on mount, optionally after a startup delay.
    Immediate { delay_ms: u32 },
    /// Fetch after a fixed delay regardless of visibility. Keeps row
    /// siblings from competing with a priority fetch for bandwidth.
    Deferred { delay_ms: u32 },
}

impl Default for ActivationMode {
    fn default() -> Self {
        Self::Lazy
    }
}

impl ActivationMode {
    /// Delay until a mount-scheduled fetch, or `None` when the fetch is
    /// visibility-driven.
    pub fn schedule_ms(self) -> Option<u32> {
        match self {
            Self::Lazy => None,
            Self::Immediate { delay_ms } | Self::Deferred { delay_ms } => Some(delay_ms),
        }
    }
}

/// Load lifecycle of one mounted slot.
///
/// Both flags are one-way: once a fetch has been requested or has
/// finished, nothing resets it short of a remount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivationState {
    requested: bool,
    finished: bool,
}

impl ActivationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_requested(&self) -> bool {
        self.requested
    }

    pub fn has_finished(&self) -> bool {
        self.finished
    }

    /// Marks the fetch as issued. Returns `true` only the first time, so
    /// a timer and an observer racing each other cannot start two fetches.
    pub fn request(&mut self) -> bool {
        if self.requested {
            return false;
        }
        self.requested = true;
        true
    }

    /// Records the element's load-completion signal. A completion without
    /// a preceding request is ignored.
    pub fn finish(&mut self) {
        if self.requested {
            self.finished = true;
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MediaSlotProps {
    pub item: MediaItem,
    #[prop_or_default]
    pub activation: ActivationMode,
    #[prop_or(AttrValue::Static("9/16"))]
    pub aspect_ratio: AttrValue,
    #[prop_or(AttrValue::Static("10px"))]
    pub border_radius: AttrValue,
}

/// A single gallery card: tinted gradient placeholder first, the real
/// image or looping video cross-faded in once its bytes have arrived.
#[function_component(MediaSlot)]
pub fn media_slot(props: &MediaSlotProps) -> Html {
    let state = use_state(ActivationState::new);
    let container = use_node_ref();
    let near = use_in_view(
        container.clone(),
        InViewOptions {
            threshold: 0.0,
            root_margin: Some(LAZY_ROOT_MARGIN),
        },
    );

    // Mount-scheduled activation (priority and deferred cards).
    {
        let state = state.clone();
        use_effect_with_deps(
            move |activation: &ActivationMode| {
                let pending = activation.schedule_ms().map(|delay_ms| {
                    Timeout::new(delay_ms, move || {
                        let mut next = *state;
                        if next.request() {
                            state.set(next);
                        }
                    })
                });
                // A still-pending timeout is cancelled by dropping it.
                move || drop(pending)
            },
            props.activation,
        );
    }

    // Visibility-driven activation (lazy cards).
    {
        let state = state.clone();
        use_effect_with_deps(
            move |(activation, near): &(ActivationMode, bool)| {
                if *activation == ActivationMode::Lazy && *near {
                    let mut next = *state;
                    if next.request() {
                        state.set(next);
                    }
                }
                || ()
            },
            (props.activation, near),
        );
    }

    let on_loaded = {
        let state = state.clone();
        Callback::from(move |_: Event| {
            let mut next = *state;
            next.finish();
            state.set(next);
        })
    };

    let loaded = state.has_finished();
    let media_style = format!(
        "position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; \
         opacity: {}; transition: opacity 0.5s ease;",
        if loaded { "1" } else { "0" },
    );

    let media = match (state.has_requested(), props.item.src) {
        (true, Some(src)) => match props.item.kind {
            MediaKind::Video => html! {
                <video
                    src={src}
                    autoplay=true
                    muted=true
                    loop=true
                    playsinline=true
                    onloadeddata={on_loaded}
                    style={media_style}
                />
            },
            MediaKind::Image => html! {
                <img
                    src={src}
                    alt={props.item.label.unwrap_or("")}
                    onload={on_loaded}
                    style={media_style}
                />
            },
        },
        // Nothing to fetch, or not yet allowed to: gradient only.
        _ => html! {},
    };

    let icon = match props.item.kind {
        MediaKind::Video => "fa-solid fa-play",
        MediaKind::Image => "fa-regular fa-image",
    };

    html! {
        <div
            ref={container}
            style={format!(
                "position: relative; overflow: hidden; aspect-ratio: {}; border-radius: {};",
                props.aspect_ratio, props.border_radius,
            )}
        >
            { media }
            <div
                class="slot-placeholder"
                style={format!(
                    "background: linear-gradient(160deg, {}, #080808); opacity: {};",
                    props.item.tint,
                    if loaded { "0" } else { "1" },
                )}
            >
                <div class="slot-placeholder-badge">
                    <i class={icon}></i>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_fires_once() {
        let mut state = ActivationState::new();
        assert!(state.request());
        assert!(!state.request());
        assert!(state.has_requested());
    }

    #[test]
    fn finish_without_request_is_ignored() {
        let mut state = ActivationState::new();
        state.finish();
        assert!(!state.has_finished());
    }

    #[test]
    fn finish_follows_request() {
        let mut state = ActivationState::new();
        state.request();
        state.finish();
        assert!(state.has_finished());
        // Completion never re-opens the fetch.
        assert!(!state.request());
    }

    #[test]
    fn only_mount_scheduled_modes_carry_a_delay() {
        assert_eq!(ActivationMode::Lazy.schedule_ms(), None);
        assert_eq!(ActivationMode::Immediate { delay_ms: 0 }.schedule_ms(), Some(0));
        assert_eq!(ActivationMode::Deferred { delay_ms: 1500 }.schedule_ms(), Some(1500));
    }
}
