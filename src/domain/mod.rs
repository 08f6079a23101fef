pub mod commands;
pub mod events;
mod coordinate;
mod location;
mod location_deserializer;

pub use coordinate::{Coordinate, CoordinateError};
pub use location::Location;
