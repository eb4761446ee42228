mod body;
pub mod camera;
pub mod constants;
pub mod orbit;
pub mod parameters;
pub mod presets;
pub mod sampler;
pub mod sim;
pub mod snapshot;
pub mod ui;

pub use body::{Body, mass_from_radius};
pub use orbit::{OrbitParameters, circular_speed};
pub use presets::PlanetParams;
pub use sampler::{SequenceSampler, UnitSampler};
pub use sim::World;
pub use snapshot::BodyInstance;
pub use ui::OrreryApp;
