/// Widget tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Ambient hearts
    pub const HEART_INTERVAL_MS: u64 = 500;
    pub const HEART_LIFETIME_MS: u64 = 15_000; // matches the longest float animation
    pub const HEART_DURATION_MIN_S: f32 = 10.0;
    pub const HEART_DURATION_MAX_S: f32 = 15.0;
    pub const HEART_SIZE_MIN_PX: f32 = 10.0;
    pub const HEART_SIZE_MAX_PX: f32 = 30.0;
    pub const HEART_GLYPH: &'static str = "💖";

    // Confetti
    pub const CONFETTI_COUNT: usize = 50;
    pub const CONFETTI_LIFETIME_MS: u64 = 5_000;
    pub const CONFETTI_LAUNCH_DELAY_MS: u64 = 100; // lets the start state paint first
    pub const CONFETTI_FALL_MIN_S: f32 = 3.0;
    pub const CONFETTI_FALL_MAX_S: f32 = 5.0;
    pub const CONFETTI_SPIN_MIN_S: f32 = 3.0;
    pub const CONFETTI_SPIN_MAX_S: f32 = 5.0;
    pub const CONFETTI_START_TOP_PX: f32 = -10.0;
    pub const CONFETTI_SIZE_PX: f32 = 10.0;
    pub const CONFETTI_TARGET_TOP_VH: f32 = 110.0;
    pub const CONFETTI_FULL_TURN_DEG: f32 = 360.0;
    pub const CONFETTI_PALETTE: [&'static str; 4] = ["#FFD1DC", "#FF7E9C", "#FFF", "#FFB7B2"];

    // Shared
    pub const ORIGIN_MAX_VW: f32 = 100.0;

    // Evasive control
    pub const EDGE_MARGIN_PX: f32 = 20.0;
    pub const TILT_SPAN_DEG: i32 = 40; // -20..=19 degrees

    // Host element ids
    pub const ACCEPT_ID: &'static str = "yes-btn";
    pub const EVASIVE_ID: &'static str = "no-btn";
    pub const PROMPT_ID: &'static str = "proposal-card";
    pub const SUCCESS_ID: &'static str = "success-message";
}
