use hecs::Entity;

use crate::components::{Born, Heart};
use crate::config::Config;
use crate::resources::SceneEvent;
use crate::rng::RandomSource;
use crate::scene::Scene;
use crate::scheduler::{Scheduler, Task};

/// Spawn one background heart and schedule its removal
pub fn spawn_heart(
    scene: &mut Scene,
    scheduler: &mut Scheduler,
    rng: &mut dyn RandomSource,
    config: &Config,
) -> Entity {
    let heart = Heart::random(rng, config);
    let entity = scene
        .world
        .spawn((heart.clone(), Born::new(scheduler.now_ms())));

    // Removal is unconditional, whatever the animation is doing
    scheduler.schedule_once(config.heart_lifetime_ms, Task::Despawn(entity));

    scene.events.push(SceneEvent::HeartSpawned { entity, heart });
    entity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;

    #[test]
    fn test_spawn_heart_schedules_removal() {
        let mut scene = Scene::new();
        let mut scheduler = Scheduler::new();
        let mut rng = ScriptedRng::constant(0.5);
        let config = Config::new();

        let entity = spawn_heart(&mut scene, &mut scheduler, &mut rng, &config);

        assert_eq!(scene.live_hearts(), 1);
        assert_eq!(scheduler.next_deadline(), Some(15_000));
        assert_eq!(scheduler.pop_due(15_000).map(|(_, t)| t), Some(Task::Despawn(entity)));
        assert!(matches!(
            scene.events.drain().as_slice(),
            [SceneEvent::HeartSpawned { entity: e, .. }] if *e == entity
        ));
    }
}
