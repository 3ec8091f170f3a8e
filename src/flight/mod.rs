//! Airplane flight and orientation model.
//!
//! Each frame the active [`FlightMode`] moves the airplane, then the shared
//! [`Orientation`] update rebuilds the rigid transform and the chase-camera
//! anchors from the direction of travel.

pub mod airplane;
pub mod heading;
pub mod mode;
pub mod orientation;

pub use airplane::Airplane;
pub use heading::{Heading, MAX_PITCH};
pub use mode::{Direction, Directions, FlightMode};
pub use orientation::{Orientation, WORLD_UP};
