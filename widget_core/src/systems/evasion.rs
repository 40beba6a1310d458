use glam::Vec2;

use crate::components::Placement;
use crate::config::Config;
use crate::params::Params;
use crate::resources::SceneEvent;
use crate::rng::RandomSource;
use crate::scene::Scene;

/// Pick a new spot and tilt for the evasive control.
///
/// `x = max(margin, floor(r * (W - bw - margin)))`, likewise for `y`.
/// When the viewport cannot fit the control plus margin the result may
/// land past the viewport edge unless `clamp` is set.
pub fn relocate(
    viewport: Vec2,
    control: Vec2,
    margin: f32,
    clamp: bool,
    rng: &mut dyn RandomSource,
) -> Placement {
    let max = viewport - control - Vec2::splat(margin);

    let mut x = margin.max((rng.next_unit() * max.x as f64).floor() as f32);
    let mut y = margin.max((rng.next_unit() * max.y as f64).floor() as f32);

    if clamp {
        let limit = (viewport - control).max(Vec2::ZERO);
        x = x.min(limit.x);
        y = y.min(limit.y);
    }

    let span = Params::TILT_SPAN_DEG;
    let rotation_deg = (rng.next_unit() * span as f64).floor() as i32 - span / 2;

    Placement::new(Vec2::new(x, y), rotation_deg)
}

/// Move the evasive control in place and report the new placement
pub fn evade(
    scene: &mut Scene,
    viewport: Vec2,
    control: Vec2,
    rng: &mut dyn RandomSource,
    config: &Config,
) -> Placement {
    let placement = relocate(
        viewport,
        control,
        config.edge_margin_px,
        config.clamp_to_viewport,
        rng,
    );
    scene.evasive = Some(placement);
    scene.events.push(SceneEvent::EvasiveMoved(placement));
    placement
}
