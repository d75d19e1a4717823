pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod input;
pub mod lights;
pub mod particles;
pub mod scene;
pub mod shapes;
pub mod state;

pub use config::SceneConfig;
pub use constants::*;
pub use error::SceneError;
pub use geometry::{WireMesh, WireVertex};
pub use lights::{AmbientLight, LightRig, PointLight};
pub use particles::PointCloud;
pub use scene::{Fog, Scene};
pub use shapes::{FloatingShape, ShapeKind};
pub use state::*;
