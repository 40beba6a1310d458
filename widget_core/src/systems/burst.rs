use hecs::Entity;

use crate::components::{Born, Confetti};
use crate::config::Config;
use crate::params::Params;
use crate::resources::SceneEvent;
use crate::rng::{uniform, RandomSource};
use crate::scene::Scene;
use crate::scheduler::{Scheduler, Task};

/// Spawn the celebration burst.
///
/// Each particle gets a launch task after the configured delay and an
/// unconditional removal after the confetti lifetime.
pub fn celebrate(
    scene: &mut Scene,
    scheduler: &mut Scheduler,
    rng: &mut dyn RandomSource,
    config: &Config,
) -> Vec<Entity> {
    let born = Born::new(scheduler.now_ms());
    let mut spawned = Vec::with_capacity(config.confetti_count);

    for _ in 0..config.confetti_count {
        let confetti = Confetti::random(rng, config);
        let entity = scene.world.spawn((confetti.clone(), born));

        scheduler.schedule_once(config.confetti_launch_delay_ms, Task::LaunchConfetti(entity));
        scheduler.schedule_once(config.confetti_lifetime_ms, Task::Despawn(entity));

        scene
            .events
            .push(SceneEvent::ConfettiSpawned { entity, confetti });
        spawned.push(entity);
    }

    spawned
}

/// Start a particle's fall and spin. False if it is already gone.
pub fn launch_confetti(scene: &mut Scene, rng: &mut dyn RandomSource, entity: Entity) -> bool {
    let Ok(mut confetti) = scene.world.get::<&mut Confetti>(entity) else {
        return false;
    };
    let rotation_deg = uniform(rng, 0.0, Params::CONFETTI_FULL_TURN_DEG);
    confetti.rotation_deg = Some(rotation_deg);
    drop(confetti);

    scene.events.push(SceneEvent::ConfettiLaunched {
        entity,
        rotation_deg,
    });
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;
    use crate::systems::despawn;

    #[test]
    fn test_celebrate_spawns_full_batch() {
        let mut scene = Scene::new();
        let mut scheduler = Scheduler::new();
        let mut rng = ScriptedRng::new(vec![0.1, 0.6, 0.3, 0.9]);
        let config = Config::new();

        let spawned = celebrate(&mut scene, &mut scheduler, &mut rng, &config);

        assert_eq!(spawned.len(), 50);
        assert_eq!(scene.live_confetti(), 50);
        assert_eq!(scheduler.pending_len(), 100, "Launch and removal per particle");
        assert_eq!(scheduler.next_deadline(), Some(100));
    }

    #[test]
    fn test_launch_sets_rotation() {
        let mut scene = Scene::new();
        let mut scheduler = Scheduler::new();
        let mut rng = ScriptedRng::constant(0.5);
        let mut config = Config::new();
        config.confetti_count = 1;

        let entity = celebrate(&mut scene, &mut scheduler, &mut rng, &config)[0];
        assert!(launch_confetti(&mut scene, &mut rng, entity));

        let confetti = scene.world.get::<&Confetti>(entity).unwrap();
        assert_eq!(confetti.rotation_deg, Some(180.0));
    }

    #[test]
    fn test_launch_after_removal_is_ignored() {
        let mut scene = Scene::new();
        let mut scheduler = Scheduler::new();
        let mut rng = ScriptedRng::constant(0.5);
        let mut config = Config::new();
        config.confetti_count = 1;

        let entity = celebrate(&mut scene, &mut scheduler, &mut rng, &config)[0];
        assert!(despawn(&mut scene, entity, 0));
        scene.events.drain();

        assert!(!launch_confetti(&mut scene, &mut rng, entity));
        assert!(scene.events.is_empty());
    }

    #[test]
    fn test_launch_rotation_stays_below_full_turn() {
        let mut scene = Scene::new();
        let mut scheduler = Scheduler::new();
        let mut rng = ScriptedRng::constant(1.0 - f64::EPSILON);
        let mut config = Config::new();
        config.confetti_count = 1;

        let entity = celebrate(&mut scene, &mut scheduler, &mut rng, &config)[0];
        assert!(launch_confetti(&mut scene, &mut rng, entity));

        let rotation = scene.world.get::<&Confetti>(entity).unwrap().rotation_deg.unwrap();
        assert!((0.0..360.0).contains(&rotation), "rotation {rotation}");
    }
}
