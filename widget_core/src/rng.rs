use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of every random draw the widget makes
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`
    fn next_unit(&mut self) -> f64;
}

/// Random number generator backed by `StdRng`
pub struct WidgetRng(pub StdRng);

impl WidgetRng {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl Default for WidgetRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl RandomSource for WidgetRng {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
///
/// Values outside `[0, 1)` are clamped into range so a script can
/// never produce a draw the real source could not.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

/// Uniform `f32` in `[min, max)`.
///
/// The draw is scaled in `f64`; the cast back to `f32` can round up to
/// `max`, so the result is pulled to the largest `f32` below it.
pub fn uniform(rng: &mut dyn RandomSource, min: f32, max: f32) -> f32 {
    let value = min + (rng.next_unit() * (max - min) as f64) as f32;
    if min < max && value >= max {
        next_below(max).max(min)
    } else {
        value
    }
}

/// Largest finite `f32` strictly below `x`
fn next_below(x: f32) -> f32 {
    let bits = x.to_bits();
    if x == 0.0 {
        -f32::from_bits(1)
    } else if x > 0.0 {
        f32::from_bits(bits - 1)
    } else {
        f32::from_bits(bits + 1)
    }
}

/// Pick one entry uniformly
pub fn pick<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let idx = (rng.next_unit() * items.len() as f64).floor() as usize;
    items.get(idx.min(items.len() - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_rng_is_reproducible() {
        let mut a = WidgetRng::new(7);
        let mut b = WidgetRng::new(7);
        for _ in 0..32 {
            let draw = a.next_unit();
            assert_eq!(draw, b.next_unit());
            assert!((0.0..1.0).contains(&draw));
        }
    }

    #[test]
    fn test_scripted_rng_cycles() {
        let mut rng = ScriptedRng::new(vec![0.1, 0.2]);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.next_unit(), 0.2);
        assert_eq!(rng.next_unit(), 0.1);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_scripted_rng_clamps_out_of_range() {
        let mut rng = ScriptedRng::new(vec![1.5, -0.5]);
        assert!(rng.next_unit() < 1.0);
        assert_eq!(rng.next_unit(), 0.0);
    }

    #[test]
    fn test_uniform_excludes_upper_bound() {
        let top = 1.0 - f64::EPSILON;
        assert!(uniform(&mut ScriptedRng::constant(top), 0.0, 100.0) < 100.0);
        assert!(uniform(&mut ScriptedRng::constant(top), 0.0, 360.0) < 360.0);
        assert!(uniform(&mut ScriptedRng::constant(top), -20.0, -10.0) < -10.0);
        assert_eq!(uniform(&mut ScriptedRng::constant(top), 5.0, 5.0), 5.0);
        assert_eq!(uniform(&mut ScriptedRng::constant(0.0), 10.0, 30.0), 10.0);
    }

    #[test]
    fn test_pick_covers_every_slot() {
        let items = ["a", "b", "c", "d"];
        let mut rng = ScriptedRng::new(vec![0.0, 0.25, 0.5, 0.99]);
        let picked: Vec<_> = (0..4).map(|_| *pick(&mut rng, &items).unwrap()).collect();
        assert_eq!(picked, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_pick_empty() {
        let items: [u8; 0] = [];
        let mut rng = ScriptedRng::constant(0.5);
        assert!(pick(&mut rng, &items).is_none());
        assert_eq!(rng.draws(), 0);
    }
}
