use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::reveal::{reveal_style, RevealPhase, RevealTiming, ScrollRevealer};
use crate::timer::BrowserScheduler;
use crate::viewport::{BrowserViewport, ViewportError};

#[derive(Properties, PartialEq)]
pub struct AnimatedItemProps {
    /// Position in the surrounding grid, used to stagger the entrance.
    pub index: usize,
    #[prop_or_default]
    pub children: Children,
}

/// Fades and slides its children in the first time they scroll into view.
#[function_component(AnimatedItem)]
pub fn animated_item(props: &AnimatedItemProps) -> Html {
    let node = use_node_ref();
    let phase = use_state(|| RevealPhase::Hidden);
    let timing = RevealTiming::from(config::get_timings());

    {
        let node = node.clone();
        let phase = phase.clone();
        use_effect_with_deps(
            move |index: &usize| {
                let revealer = match node.cast::<Element>() {
                    Some(element) => ScrollRevealer::attach(
                        &BrowserViewport,
                        &element,
                        *index,
                        timing,
                        BrowserScheduler,
                        move |next| phase.set(next),
                    ),
                    None => {
                        log::warn!("Showing item {}: {}", index, ViewportError::NotMounted);
                        phase.set(RevealPhase::Shown);
                        ScrollRevealer::shown()
                    }
                };
                move || revealer.dispose()
            },
            props.index,
        );
    }

    html! {
        <div ref={node} class="animated-item" style={reveal_style(*phase, &timing, props.index)}>
            { for props.children.iter() }
        </div>
    }
}
