use hecs::Entity;
use serde::Serialize;

use crate::components::{Confetti, Heart, Placement};

/// Visible change the host must mirror onto its display surface
#[derive(Debug, Clone, PartialEq)]
pub enum SceneEvent {
    HeartSpawned { entity: Entity, heart: Heart },
    ConfettiSpawned { entity: Entity, confetti: Confetti },
    ConfettiLaunched { entity: Entity, rotation_deg: f32 },
    Removed { entity: Entity, age_ms: u64 },
    PromptHidden,
    SuccessShown,
    AcceptDisabled,
    EvasiveMoved(Placement),
}

/// Scene events queued since the host last drained them
#[derive(Debug, Clone, Default)]
pub struct Events {
    pending: Vec<SceneEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: SceneEvent) {
        self.pending.push(event);
    }

    pub fn drain(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneEvent> {
        self.pending.iter()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Widget counters, exported to the page as JSON
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub hearts_spawned: u64,
    pub confetti_spawned: u64,
    pub confetti_launched: u64,
    pub removed: u64,
    pub relocations: u64,
    pub acceptances: u64,
    pub live_hearts: usize,
    pub live_confetti: usize,
    pub pending_tasks: usize,
}
