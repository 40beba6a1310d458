//! Headless core of the evasive greeting widget
//!
//! Everything the page does is modeled here without a browser: the scene
//! of decorative elements, the timers that create and remove them, the
//! evasive control's placement and the table binding host events to
//! handlers. A host feeds it events and clock readings and mirrors the
//! resulting [`SceneEvent`]s onto its display surface.

pub mod components;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod params;
pub mod resources;
pub mod rng;
pub mod scene;
pub mod scheduler;
pub mod systems;
pub mod widget;

pub use components::*;
pub use config::*;
pub use dispatch::*;
pub use error::*;
pub use params::*;
pub use resources::*;
pub use rng::*;
pub use scene::*;
pub use scheduler::*;
pub use widget::*;

pub use glam::Vec2;
pub use hecs::Entity;
