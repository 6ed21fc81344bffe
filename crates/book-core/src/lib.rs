//! Platform-free state for the falling-book scene.
//!
//! [`BookScene`] composes the drop simulation, cover hinge, page sequencer
//! and camera director. Front-ends feed it frame deltas and user intent and
//! read back a [`SceneFrame`] to draw.

pub mod camera;
pub mod clock;
pub mod constants;
pub mod cover;
pub mod director;
pub mod error;
pub mod impact;
pub mod layout;
pub mod menu;
pub mod params;
pub mod scene;
pub mod sequencer;
pub mod timer;
pub mod typewriter;

pub use camera::*;
pub use clock::*;
pub use constants::*;
pub use cover::*;
pub use director::*;
pub use error::*;
pub use impact::*;
pub use menu::*;
pub use params::*;
pub use scene::*;
pub use sequencer::*;
pub use timer::*;
pub use typewriter::*;
