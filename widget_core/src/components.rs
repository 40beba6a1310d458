use glam::Vec2;

use crate::config::Config;
use crate::params::Params;
use crate::rng::{pick, uniform, RandomSource};

/// Heart component - a background decoration floating upward
#[derive(Debug, Clone, PartialEq)]
pub struct Heart {
    pub left_vw: f32,    // Horizontal origin, percent of viewport width
    pub duration_s: f32, // Float animation length
    pub size_px: f32,    // Font size
    pub glyph: String,
}

impl Heart {
    /// Draw a heart with randomized origin, duration and size
    pub fn random(rng: &mut dyn RandomSource, config: &Config) -> Self {
        let left_vw = uniform(rng, 0.0, Params::ORIGIN_MAX_VW);
        let duration_s = config.heart_duration_s.sample(rng);
        let size_px = config.heart_size_px.sample(rng);

        // Single-glyph lists consume no draw
        let glyph = match config.heart_glyphs.as_slice() {
            [only] => only.clone(),
            glyphs => pick(rng, glyphs).cloned().unwrap_or_default(),
        };

        Self {
            left_vw,
            duration_s,
            size_px,
            glyph,
        }
    }
}

/// Confetti component - one particle of the celebration burst
#[derive(Debug, Clone, PartialEq)]
pub struct Confetti {
    pub left_vw: f32,
    pub color: String,
    pub fall_s: f32,               // Transition length for the drop
    pub spin_s: f32,               // Transition length for the rotation
    pub rotation_deg: Option<f32>, // Set once launched
}

impl Confetti {
    pub fn random(rng: &mut dyn RandomSource, config: &Config) -> Self {
        let left_vw = uniform(rng, 0.0, Params::ORIGIN_MAX_VW);
        let color = pick(rng, &config.confetti_palette)
            .cloned()
            .unwrap_or_default();
        let fall_s = config.confetti_fall_s.sample(rng);
        let spin_s = config.confetti_spin_s.sample(rng);

        Self {
            left_vw,
            color,
            fall_s,
            spin_s,
            rotation_deg: None,
        }
    }

    pub fn is_launched(&self) -> bool {
        self.rotation_deg.is_some()
    }
}

/// Scene time at which an element was created
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Born {
    pub at_ms: u64,
}

impl Born {
    pub fn new(at_ms: u64) -> Self {
        Self { at_ms }
    }
}

/// Position and tilt of the evasive control (fixed positioning, px)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub pos: Vec2,
    pub rotation_deg: i32,
}

impl Placement {
    pub fn new(pos: Vec2, rotation_deg: i32) -> Self {
        Self { pos, rotation_deg }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;

    #[test]
    fn test_heart_draws_in_order() {
        let config = Config::new();
        let mut rng = ScriptedRng::new(vec![0.5, 0.0, 0.5]);
        let heart = Heart::random(&mut rng, &config);
        assert_eq!(heart.left_vw, 50.0);
        assert_eq!(heart.duration_s, 10.0);
        assert_eq!(heart.size_px, 20.0);
        assert_eq!(heart.glyph, "💖");
        assert_eq!(rng.draws(), 3, "Single glyph takes no draw");
    }

    #[test]
    fn test_heart_picks_glyph_from_list() {
        let mut config = Config::new();
        config.heart_glyphs = vec!["💖".into(), "💕".into(), "💗".into(), "💓".into()];
        let mut rng = ScriptedRng::new(vec![0.0, 0.0, 0.0, 0.6]);
        let heart = Heart::random(&mut rng, &config);
        assert_eq!(heart.glyph, "💗");
        assert_eq!(rng.draws(), 4);
    }

    #[test]
    fn test_confetti_starts_unlaunched() {
        let config = Config::new();
        let mut rng = ScriptedRng::new(vec![0.25, 0.3, 0.0, 0.5]);
        let confetti = Confetti::random(&mut rng, &config);
        assert_eq!(confetti.left_vw, 25.0);
        assert_eq!(confetti.color, "#FF7E9C");
        assert_eq!(confetti.fall_s, 3.0);
        assert_eq!(confetti.spin_s, 4.0);
        assert!(!confetti.is_launched());
    }

    #[test]
    fn test_heart_top_draw_stays_below_bounds() {
        let config = Config::new();
        let mut rng = ScriptedRng::constant(1.0 - f64::EPSILON);
        let heart = Heart::random(&mut rng, &config);
        assert!((0.0..100.0).contains(&heart.left_vw), "left {}", heart.left_vw);
        assert!((10.0..15.0).contains(&heart.duration_s), "duration {}", heart.duration_s);
        assert!((10.0..30.0).contains(&heart.size_px), "size {}", heart.size_px);
    }

    #[test]
    fn test_confetti_top_draw_stays_below_bounds() {
        let config = Config::new();
        let mut rng = ScriptedRng::constant(1.0 - f64::EPSILON);
        let confetti = Confetti::random(&mut rng, &config);
        assert!((0.0..100.0).contains(&confetti.left_vw), "left {}", confetti.left_vw);
        assert!((3.0..5.0).contains(&confetti.fall_s), "fall {}", confetti.fall_s);
        assert!((3.0..5.0).contains(&confetti.spin_s), "spin {}", confetti.spin_s);
        assert_eq!(confetti.color, "#FFB7B2");
    }

    #[test]
    fn test_heart_glyph_is_kept_verbatim() {
        let mut config = Config::new();
        config.heart_glyphs = vec!["<b>x</b>".into()];
        let heart = Heart::random(&mut ScriptedRng::constant(0.5), &config);
        assert_eq!(heart.glyph, "<b>x</b>");
    }
}
