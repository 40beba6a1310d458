use crate::config::Config;
use crate::dispatch::{Control, DispatchTable, EventKind, Handler};
use crate::error::WidgetResult;
use crate::resources::{SceneEvent, Stats};
use crate::rng::{RandomSource, WidgetRng};
use crate::scene::{Scene, Surface};
use crate::scheduler::{Scheduler, Task, TaskId};
use crate::systems::*;

/// Result of dispatching one host event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    pub handler: Option<Handler>, // None when nothing is bound or the handler declined
    pub prevent_default: bool,
}

/// What a teardown released
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Teardown {
    pub cancelled_tasks: usize,
    pub removed_elements: usize,
}

/// Top-level controller: owns the scene, its timers and its randomness
pub struct Widget {
    config: Config,
    scene: Scene,
    scheduler: Scheduler,
    rng: Box<dyn RandomSource>,
    table: DispatchTable,
    stats: Stats,
    emitter: Option<TaskId>,
}

impl Widget {
    /// Build from config, seeding from `config.seed` or entropy
    pub fn new(config: Config) -> WidgetResult<Self> {
        let rng: Box<dyn RandomSource> = match config.seed {
            Some(seed) => Box::new(WidgetRng::new(seed)),
            None => Box::new(WidgetRng::from_entropy()),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: Config, rng: Box<dyn RandomSource>) -> WidgetResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            scene: Scene::new(),
            scheduler: Scheduler::new(),
            rng,
            table: DispatchTable::default(),
            stats: Stats::default(),
            emitter: None,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn dispatch_table(&self) -> &DispatchTable {
        &self.table
    }

    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    pub fn is_running(&self) -> bool {
        self.emitter.is_some()
    }

    pub fn stats(&self) -> Stats {
        Stats {
            live_hearts: self.scene.live_hearts(),
            live_confetti: self.scene.live_confetti(),
            pending_tasks: self.scheduler.pending_len(),
            ..self.stats
        }
    }

    /// Start the ambient emitter. False if it is already running.
    pub fn start(&mut self, now_ms: u64) -> bool {
        self.advance(now_ms);
        if self.emitter.is_some() {
            return false;
        }
        let id = self
            .scheduler
            .schedule_repeating(self.config.heart_interval_ms, Task::EmitHeart);
        self.emitter = Some(id);
        true
    }

    /// Fire every task due at or before `now_ms`; returns how many fired
    pub fn advance(&mut self, now_ms: u64) -> usize {
        let mut fired = 0;
        while let Some((_, task)) = self.scheduler.pop_due(now_ms) {
            self.run_task(task);
            fired += 1;
        }
        self.scheduler.advance_clock(now_ms);
        fired
    }

    fn run_task(&mut self, task: Task) {
        match task {
            Task::EmitHeart => {
                spawn_heart(
                    &mut self.scene,
                    &mut self.scheduler,
                    self.rng.as_mut(),
                    &self.config,
                );
                self.stats.hearts_spawned += 1;
            }
            Task::LaunchConfetti(entity) => {
                if launch_confetti(&mut self.scene, self.rng.as_mut(), entity) {
                    self.stats.confetti_launched += 1;
                }
            }
            Task::Despawn(entity) => {
                if despawn(&mut self.scene, entity, self.scheduler.now_ms()) {
                    self.stats.removed += 1;
                }
            }
        }
    }

    /// Route a host event through the dispatch table
    pub fn dispatch(
        &mut self,
        now_ms: u64,
        control: Control,
        kind: EventKind,
        surface: &dyn Surface,
    ) -> Outcome {
        self.advance(now_ms);

        let Some(binding) = self.table.lookup(control, kind).copied() else {
            return Outcome::default();
        };

        let handled = match binding.handler {
            Handler::Start => self.start(now_ms),
            Handler::Accept => self.accept(),
            Handler::Evade => {
                self.evade(surface);
                true
            }
        };

        Outcome {
            handler: handled.then_some(binding.handler),
            prevent_default: binding.prevent_default,
        }
    }

    fn accept(&mut self) -> bool {
        let Some(burst) = accept(
            &mut self.scene,
            &mut self.scheduler,
            self.rng.as_mut(),
            &self.config,
        ) else {
            return false;
        };
        self.stats.acceptances += 1;
        self.stats.confetti_spawned += burst.len() as u64;
        true
    }

    fn evade(&mut self, surface: &dyn Surface) {
        evade(
            &mut self.scene,
            surface.viewport(),
            surface.control_size(Control::Evasive),
            self.rng.as_mut(),
            &self.config,
        );
        self.stats.relocations += 1;
    }

    /// Earliest pending timer deadline, for arming the host's timer
    pub fn next_deadline(&mut self) -> Option<u64> {
        self.scheduler.next_deadline()
    }

    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        self.scene.events.drain()
    }

    /// Cancel every timer and remove every live element
    pub fn teardown(&mut self, now_ms: u64) -> Teardown {
        self.scheduler.advance_clock(now_ms);
        let cancelled_tasks = self.scheduler.cancel_all();
        self.emitter = None;
        let removed_elements = despawn_all(&mut self.scene, self.scheduler.now_ms());
        self.stats.removed += removed_elements as u64;
        Teardown {
            cancelled_tasks,
            removed_elements,
        }
    }
}
