use std::rc::Rc;

use yew::prelude::*;

use crate::components::animated_item::AnimatedItem;
use crate::components::testimonial_carousel::TestimonialCarousel;
use crate::components::typewriter::TypewriterText;
use crate::config;
use crate::content::{
    self, Testimonial, CONTACT_PROMPT, FEATURES, FOOTER_LINKS, HEADLINE, LEGAL_DOCUMENTS,
    NAV_LINKS, PRICING_PLANS, SOCIAL_LINKS, SUBHEADLINE, TAGLINE,
};

fn scroll_to_section(id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
    {
        element.scroll_into_view_with_bool(true);
    } else {
        log::warn!("Section #{} not found", id);
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let testimonials = use_state(|| Rc::<[Testimonial]>::from(content::TESTIMONIALS));

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let learn_more = Callback::from(|_: MouseEvent| scroll_to_section("features"));

    html! {
        <div class="landing-page">
            <header class="site-header">
                <div class="container header-row">
                    <h1 class="brand">{ config::BRAND }</h1>
                    <nav class="site-nav">
                        { for NAV_LINKS.iter().map(|link| html! {
                            <a href={link.href}>{ link.label }</a>
                        }) }
                    </nav>
                </div>
            </header>

            <main class="landing-main">
                <section class="hero">
                    <div class="container">
                        <h2 class="hero-title section-title">
                            <TypewriterText text={HEADLINE} />
                        </h2>
                        <p class="hero-subtitle">
                            <TypewriterText text={SUBHEADLINE} />
                        </p>
                        <button class="hero-cta" onclick={learn_more}>{"詳しく見る"}</button>
                    </div>
                </section>

                <section id="features" class="features-section">
                    <div class="container">
                        <h2 class="section-title section-title-soft">{"主な機能"}</h2>
                        <div class="grid-3">
                            { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                                <AnimatedItem key={index} index={index}>
                                    <div class="feature">
                                        <i class={format!("{} feature-icon", feature.icon.class())}></i>
                                        <h3>{ feature.title }</h3>
                                        <p>{ feature.description }</p>
                                    </div>
                                </AnimatedItem>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="testimonials" class="testimonials-section">
                    <div class="container">
                        <h2 class="section-title section-title-soft">{"ユーザーの声"}</h2>
                        <TestimonialCarousel items={(*testimonials).clone()} />
                    </div>
                </section>

                <section id="pricing" class="pricing-section">
                    <div class="container">
                        <h2 class="section-title section-title-soft">{"料金プラン"}</h2>
                        <div class="grid-3">
                            { for PRICING_PLANS.iter().enumerate().map(|(index, plan)| html! {
                                <AnimatedItem key={index} index={index}>
                                    <div class="card pricing-card">
                                        <h3>{ plan.name }</h3>
                                        <p class="price">{ plan.price }</p>
                                        <p class="capacity">{ format!("月額 ({})", plan.capacity) }</p>
                                        <ul class="plan-features">
                                            { for plan.features.iter().map(|item| html! {
                                                <li><i class="fa-solid fa-check"></i><span>{ *item }</span></li>
                                            }) }
                                        </ul>
                                    </div>
                                </AnimatedItem>
                            }) }
                        </div>
                    </div>
                    <div id="contact" class="contact">
                        <p>{ CONTACT_PROMPT }</p>
                        <a href={config::get_contact_href()} class="contact-link">{ config::CONTACT_EMAIL }</a>
                    </div>
                </section>
            </main>

            <footer class="site-footer">
                <div class="container grid-3">
                    <div>
                        <h3>{ config::BRAND }</h3>
                        <p>{ TAGLINE }</p>
                        <div class="social-links">
                            { for SOCIAL_LINKS.iter().map(|social| html! {
                                <a href={social.href} target="_blank" rel="noopener noreferrer" aria-label={social.label}>
                                    <i class={social.icon}></i>
                                </a>
                            }) }
                        </div>
                    </div>
                    <div>
                        <h4>{"リンク"}</h4>
                        <ul>
                            { for FOOTER_LINKS.iter().map(|link| html! {
                                <li><a href={link.href}>{ link.label }</a></li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h4>{"法的情報"}</h4>
                        <ul>
                            { for LEGAL_DOCUMENTS.iter().map(|doc| html! {
                                <li><a href={doc.path} download="">{ doc.label }</a></li>
                            }) }
                        </ul>
                    </div>
                </div>
                <div class="copyright">
                    <p>{ format!("© {} {}. All rights reserved.", config::COPYRIGHT_YEAR, config::BRAND) }</p>
                </div>
            </footer>
        </div>
    }
}
