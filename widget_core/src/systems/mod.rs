pub mod acceptance;
pub mod ambient;
pub mod burst;
pub mod evasion;
pub mod gc;

pub use acceptance::*;
pub use ambient::*;
pub use burst::*;
pub use evasion::*;
pub use gc::*;
