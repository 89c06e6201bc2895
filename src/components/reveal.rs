use yew::prelude::*;

use crate::hooks::{use_in_view, InViewOptions};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Transition delay in seconds, used to stagger siblings.
    #[prop_or_default]
    pub delay: f32,
    #[prop_or_default]
    pub children: Children,
}

/// Fades and lifts its children into place the first time they scroll
/// into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), InViewOptions::default());

    let style = format!(
        "opacity: {}; transform: {}; transition: all 0.7s cubic-bezier(0.16, 1, 0.3, 1) {}s;",
        if visible { "1" } else { "0" },
        if visible { "translateY(0)" } else { "translateY(32px)" },
        props.delay,
    );

    html! {
        <div ref={node} style={style}>
            { for props.children.iter() }
        </div>
    }
}
