pub mod components;
pub mod config;
pub mod content;
pub mod pages;
pub mod reveal;
pub mod timer;
pub mod viewport;

use yew::prelude::*;

use pages::landing::Landing;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <Landing />
    }
}
