use std::rc::Rc;

use yew::prelude::*;

use crate::config;
use crate::content::Testimonial;
use crate::reveal::TestimonialRotator;
use crate::timer::BrowserScheduler;

#[derive(Properties, PartialEq)]
pub struct TestimonialCarouselProps {
    pub items: Rc<[Testimonial]>,
}

#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel(props: &TestimonialCarouselProps) -> Html {
    let active = use_state(|| 0usize);
    let timings = config::get_timings();

    {
        let active = active.clone();
        use_effect_with_deps(
            move |items: &Rc<[Testimonial]>| {
                active.set(0);
                let rotator = TestimonialRotator::start(
                    items.clone(),
                    timings.rotation_interval_ms,
                    &BrowserScheduler,
                    move |index| active.set(index),
                );
                move || rotator.dispose()
            },
            props.items.clone(),
        );
    }

    if props.items.is_empty() {
        return html! {};
    }

    // Every slide stays mounted; only opacity changes so the swap is a cross-fade.
    html! {
        <div class="testimonial-stage">
            { for props.items.iter().enumerate().map(|(index, testimonial)| {
                let is_active = index == *active;
                let style = format!(
                    "opacity: {}; transition: opacity {}ms ease-in-out;",
                    if is_active { 1 } else { 0 },
                    timings.cross_fade_ms,
                );
                html! {
                    <div key={index} class="testimonial-slide" style={style} aria-hidden={(!is_active).to_string()}>
                        <div class="card">
                            <p class="testimonial-content">{ format!("「{}」", testimonial.content) }</p>
                            <div class="testimonial-author">
                                <div class="avatar">{ testimonial.initial() }</div>
                                <div class="author-meta">
                                    <p class="author-name">{ testimonial.name }</p>
                                    <p class="author-role">{ testimonial.role }</p>
                                </div>
                            </div>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
