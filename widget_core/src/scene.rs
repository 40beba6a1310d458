use glam::Vec2;
use hecs::World;

use crate::components::{Confetti, Heart, Placement};
use crate::dispatch::Control;
use crate::resources::Events;

/// Measurements the host reports at interaction time
pub trait Surface {
    /// Viewport width and height in px
    fn viewport(&self) -> Vec2;
    /// Rendered width and height of a control in px
    fn control_size(&self, control: Control) -> Vec2;
}

/// Fixed measurements, for headless hosts and tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSurface {
    pub viewport: Vec2,
    pub control: Vec2,
}

impl FixedSurface {
    pub fn new(viewport: Vec2, control: Vec2) -> Self {
        Self { viewport, control }
    }
}

impl Surface for FixedSurface {
    fn viewport(&self) -> Vec2 {
        self.viewport
    }

    fn control_size(&self, _control: Control) -> Vec2 {
        self.control
    }
}

/// Display state owned by the widget
pub struct Scene {
    pub world: World,
    pub events: Events,
    pub prompt_visible: bool,
    pub success_visible: bool,
    pub accept_enabled: bool,
    pub evasive: Option<Placement>, // None until first relocation
}

impl Scene {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            events: Events::new(),
            prompt_visible: true,
            success_visible: false,
            accept_enabled: true,
            evasive: None,
        }
    }

    pub fn live_hearts(&self) -> usize {
        self.world.query::<&Heart>().iter().count()
    }

    pub fn live_confetti(&self) -> usize {
        self.world.query::<&Confetti>().iter().count()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
