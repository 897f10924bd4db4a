pub mod animated_item;
pub mod testimonial_carousel;
pub mod typewriter;
