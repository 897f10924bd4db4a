use yew::prelude::*;

use crate::config;
use crate::reveal::TypingRevealer;
use crate::timer::BrowserScheduler;

#[derive(Properties, PartialEq)]
pub struct TypewriterTextProps {
    pub text: AttrValue,
    #[prop_or(config::TIMINGS.typing_delay_ms)]
    pub delay_ms: u32,
}

/// Types `text` out one character at a time.
#[function_component(TypewriterText)]
pub fn typewriter_text(props: &TypewriterTextProps) -> Html {
    let display = use_state(String::new);
    {
        let display = display.clone();
        let delay_ms = props.delay_ms;
        use_effect_with_deps(
            move |text: &AttrValue| {
                display.set(String::new());
                let revealer = TypingRevealer::start(
                    text.to_string(),
                    delay_ms,
                    BrowserScheduler,
                    move |shown: &str| display.set(shown.to_owned()),
                );
                move || revealer.dispose()
            },
            props.text.clone(),
        );
    }

    html! {
        <span class="typewriter" aria-label={props.text.clone()}>{ (*display).clone() }</span>
    }
}
