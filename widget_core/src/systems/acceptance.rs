use hecs::Entity;

use crate::config::Config;
use crate::resources::SceneEvent;
use crate::rng::RandomSource;
use crate::scene::Scene;
use crate::scheduler::Scheduler;
use crate::systems::celebrate;

/// Hide the prompt, reveal the success message, then celebrate.
///
/// Repeat activations re-run every effect unless `single_acceptance`
/// is set, in which case the control is disabled after the first one
/// and `None` is returned for later calls.
pub fn accept(
    scene: &mut Scene,
    scheduler: &mut Scheduler,
    rng: &mut dyn RandomSource,
    config: &Config,
) -> Option<Vec<Entity>> {
    if !scene.accept_enabled {
        return None;
    }

    scene.prompt_visible = false;
    scene.events.push(SceneEvent::PromptHidden);

    scene.success_visible = true;
    scene.events.push(SceneEvent::SuccessShown);

    let burst = celebrate(scene, scheduler, rng, config);

    if config.single_acceptance {
        scene.accept_enabled = false;
        scene.events.push(SceneEvent::AcceptDisabled);
    }

    Some(burst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;

    fn count(scene: &Scene, wanted: &SceneEvent) -> usize {
        scene.events.iter().filter(|e| *e == wanted).count()
    }

    #[test]
    fn test_accept_effects_in_order() {
        let mut scene = Scene::new();
        let mut scheduler = Scheduler::new();
        let config = Config::new();

        let burst = accept(&mut scene, &mut scheduler, &mut ScriptedRng::constant(0.3), &config);

        assert_eq!(burst.map(|b| b.len()), Some(50));
        assert!(!scene.prompt_visible);
        assert!(scene.success_visible);
        let events = scene.events.drain();
        assert_eq!(events[0], SceneEvent::PromptHidden);
        assert_eq!(events[1], SceneEvent::SuccessShown);
        assert!(matches!(events[2], SceneEvent::ConfettiSpawned { .. }));
        assert_eq!(events.len(), 52);
    }

    #[test]
    fn test_repeat_accept_reruns_effects() {
        let mut scene = Scene::new();
        let mut scheduler = Scheduler::new();
        let mut rng = ScriptedRng::constant(0.3);
        let config = Config::new();

        accept(&mut scene, &mut scheduler, &mut rng, &config);
        accept(&mut scene, &mut scheduler, &mut rng, &config);

        assert_eq!(count(&scene, &SceneEvent::PromptHidden), 2);
        assert_eq!(count(&scene, &SceneEvent::SuccessShown), 2);
        assert_eq!(scene.live_confetti(), 100);
    }

    #[test]
    fn test_single_acceptance_disables_control() {
        let mut scene = Scene::new();
        let mut scheduler = Scheduler::new();
        let mut rng = ScriptedRng::constant(0.3);
        let mut config = Config::new();
        config.single_acceptance = true;

        assert!(accept(&mut scene, &mut scheduler, &mut rng, &config).is_some());
        assert!(accept(&mut scene, &mut scheduler, &mut rng, &config).is_none());

        assert!(!scene.accept_enabled);
        assert_eq!(count(&scene, &SceneEvent::AcceptDisabled), 1);
        assert_eq!(count(&scene, &SceneEvent::SuccessShown), 1);
        assert_eq!(scene.live_confetti(), 50);
    }
}
