use serde::Deserialize;

use crate::error::{WidgetError, WidgetResult};
use crate::params::Params;
use crate::rng::{uniform, RandomSource};

/// Half-open range `[min, max)` sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn sample(&self, rng: &mut dyn RandomSource) -> f32 {
        uniform(rng, self.min, self.max)
    }

    fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

/// Ids of the elements the widget binds to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ElementIds {
    pub accept: String,
    pub evasive: String,
    pub prompt: String,
    pub success: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            accept: Params::ACCEPT_ID.to_string(),
            evasive: Params::EVASIVE_ID.to_string(),
            prompt: Params::PROMPT_ID.to_string(),
            success: Params::SUCCESS_ID.to_string(),
        }
    }
}

/// Widget configuration
///
/// Deserializes from a partial JSON object; missing fields keep their
/// defaults from [`Params`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub ids: ElementIds,
    pub heart_interval_ms: u64,
    pub heart_lifetime_ms: u64,
    pub heart_duration_s: Span,
    pub heart_size_px: Span,
    pub heart_glyphs: Vec<String>,
    pub confetti_count: usize,
    pub confetti_lifetime_ms: u64,
    pub confetti_launch_delay_ms: u64,
    pub confetti_fall_s: Span,
    pub confetti_spin_s: Span,
    pub confetti_palette: Vec<String>,
    pub edge_margin_px: f32,
    /// Keep the evasive control inside the viewport even when it does not fit the margin
    pub clamp_to_viewport: bool,
    /// Disable the accept control after its first activation
    pub single_acceptance: bool,
    /// Fixed seed for reproducible effects; entropy when absent
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            heart_interval_ms: Params::HEART_INTERVAL_MS,
            heart_lifetime_ms: Params::HEART_LIFETIME_MS,
            heart_duration_s: Span::new(Params::HEART_DURATION_MIN_S, Params::HEART_DURATION_MAX_S),
            heart_size_px: Span::new(Params::HEART_SIZE_MIN_PX, Params::HEART_SIZE_MAX_PX),
            heart_glyphs: vec![Params::HEART_GLYPH.to_string()],
            confetti_count: Params::CONFETTI_COUNT,
            confetti_lifetime_ms: Params::CONFETTI_LIFETIME_MS,
            confetti_launch_delay_ms: Params::CONFETTI_LAUNCH_DELAY_MS,
            confetti_fall_s: Span::new(Params::CONFETTI_FALL_MIN_S, Params::CONFETTI_FALL_MAX_S),
            confetti_spin_s: Span::new(Params::CONFETTI_SPIN_MIN_S, Params::CONFETTI_SPIN_MAX_S),
            confetti_palette: Params::CONFETTI_PALETTE
                .iter()
                .map(|c| c.to_string())
                .collect(),
            edge_margin_px: Params::EDGE_MARGIN_PX,
            clamp_to_viewport: false,
            single_acceptance: false,
            seed: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> WidgetResult<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> WidgetResult<()> {
        if self.heart_interval_ms == 0 {
            return Err(invalid("heart_interval_ms must be positive"));
        }
        let spans = [
            ("heart_duration_s", self.heart_duration_s),
            ("heart_size_px", self.heart_size_px),
            ("confetti_fall_s", self.confetti_fall_s),
            ("confetti_spin_s", self.confetti_spin_s),
        ];
        for (name, span) in spans {
            if !span.is_valid() {
                return Err(invalid(format!(
                    "{name} must satisfy min <= max, got {}..{}",
                    span.min, span.max
                )));
            }
        }
        if self.heart_glyphs.is_empty() {
            return Err(invalid("heart_glyphs must not be empty"));
        }
        if self.confetti_palette.is_empty() {
            return Err(invalid("confetti_palette must not be empty"));
        }
        if !self.edge_margin_px.is_finite() || self.edge_margin_px < 0.0 {
            return Err(invalid("edge_margin_px must be a non-negative number"));
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> WidgetError {
    WidgetError::InvalidConfig(msg.into())
}
