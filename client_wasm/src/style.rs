//! CSS values written onto widget elements

use std::fmt::Display;

use widget_core::{Confetti, Params};

pub const HEART_CLASS: &str = "heart";
pub const HIDDEN_CLASS: &str = "hidden";

pub fn vw(value: f32) -> String {
    format!("{value}vw")
}

pub fn vh(value: f32) -> String {
    format!("{value}vh")
}

pub fn px(value: impl Display) -> String {
    format!("{value}px")
}

pub fn seconds(value: f32) -> String {
    format!("{value}s")
}

pub fn rotate(deg: impl Display) -> String {
    format!("rotate({deg}deg)")
}

/// Fall eases in, spin stays linear
pub fn confetti_transition(confetti: &Confetti) -> String {
    format!(
        "top {}s ease-in, transform {}s linear",
        confetti.fall_s, confetti.spin_s
    )
}

pub fn confetti_target_top() -> String {
    vh(Params::CONFETTI_TARGET_TOP_VH)
}
