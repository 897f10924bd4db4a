pub mod rotation;
pub mod scroll;
pub mod typing;

pub use rotation::{RotatorState, TestimonialRotator};
pub use scroll::{reveal_style, RevealPhase, RevealTiming, ScrollRevealer, VisibilityState};
pub use typing::{RevealState, TypingRevealer};
