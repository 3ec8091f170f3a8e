pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod flight;
pub mod frame;
pub mod mesh;
pub mod renderer;
pub mod scene;
pub mod texture;
pub mod types;
pub mod viewer;

pub use camera::{Camera, CameraMode};
pub use config::ViewerConfig;
pub use flight::{Airplane, FlightMode};
pub use viewer::Viewer;
