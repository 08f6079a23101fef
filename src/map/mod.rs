mod pending;
pub mod surface;

pub use pending::{COORDINATE_PLACEHOLDER, PendingSelector};
pub use surface::MapSurface;
