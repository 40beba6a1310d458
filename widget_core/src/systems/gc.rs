use hecs::Entity;

use crate::components::Born;
use crate::resources::SceneEvent;
use crate::scene::Scene;

/// Remove one element. Returns false when it was already gone.
pub fn despawn(scene: &mut Scene, entity: Entity, now_ms: u64) -> bool {
    let born = scene.world.get::<&Born>(entity).map(|b| *b);
    if scene.world.despawn(entity).is_err() {
        return false;
    }
    let age_ms = born.map(|b| now_ms.saturating_sub(b.at_ms)).unwrap_or(0);
    scene.events.push(SceneEvent::Removed { entity, age_ms });
    true
}

/// Remove every live element, oldest first
pub fn despawn_all(scene: &mut Scene, now_ms: u64) -> usize {
    let mut entities: Vec<_> = scene
        .world
        .query::<&Born>()
        .iter()
        .map(|(e, born)| (born.at_ms, e))
        .collect();
    entities.sort_by_key(|(at_ms, e)| (*at_ms, e.id()));

    entities
        .into_iter()
        .filter(|(_, e)| despawn(scene, *e, now_ms))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Heart;

    fn heart() -> Heart {
        Heart {
            left_vw: 0.0,
            duration_s: 10.0,
            size_px: 10.0,
            glyph: "💖".into(),
        }
    }

    #[test]
    fn test_despawn_reports_age_once() {
        let mut scene = Scene::new();
        let e = scene.world.spawn((heart(), Born::new(500)));

        assert!(despawn(&mut scene, e, 15_500));
        assert!(!despawn(&mut scene, e, 15_600), "No duplicate removal");
        assert_eq!(
            scene.events.drain(),
            vec![SceneEvent::Removed {
                entity: e,
                age_ms: 15_000
            }]
        );
    }

    #[test]
    fn test_despawn_all_clears_scene() {
        let mut scene = Scene::new();
        scene.world.spawn((heart(), Born::new(1_000)));
        scene.world.spawn((heart(), Born::new(0)));

        assert_eq!(despawn_all(&mut scene, 2_000), 2);
        assert_eq!(scene.live_hearts(), 0);

        let ages: Vec<_> = scene
            .events
            .drain()
            .into_iter()
            .filter_map(|e| match e {
                SceneEvent::Removed { age_ms, .. } => Some(age_ms),
                _ => None,
            })
            .collect();
        assert_eq!(ages, vec![2_000, 1_000]);
    }
}
