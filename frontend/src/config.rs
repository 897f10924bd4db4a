/// Animation timings shared by the landing page components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timings {
    /// Delay between two typed characters.
    pub typing_delay_ms: u32,
    /// How long each testimonial stays active.
    pub rotation_interval_ms: u32,
    /// Length of the scroll-in transition.
    pub reveal_duration_ms: u32,
    /// Extra delay per grid position so siblings enter one after another.
    pub reveal_stagger_ms: u32,
    /// Vertical distance a hidden item starts below its resting place.
    pub reveal_offset_px: u32,
    pub cross_fade_ms: u32,
}

pub const TIMINGS: Timings = Timings {
    typing_delay_ms: 100,
    rotation_interval_ms: 5_000,
    reveal_duration_ms: 500,
    reveal_stagger_ms: 200,
    reveal_offset_px: 75,
    cross_fade_ms: 500,
};

impl Default for Timings {
    fn default() -> Self {
        TIMINGS
    }
}

pub fn get_timings() -> Timings {
    TIMINGS
}

pub const BRAND: &str = "krat";
pub const CONTACT_EMAIL: &str = "info@krat.jp";
pub const COPYRIGHT_YEAR: u16 = 2024;

pub fn get_contact_href() -> String {
    format!("mailto:{}", CONTACT_EMAIL)
}
