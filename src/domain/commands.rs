use crate::domain::Coordinate;

/// Instructions for the map surface. The surface renders them; the session
/// and its selectors decide when they happen.
#[derive(Clone, Debug, PartialEq)]
pub enum MapCommand {
    /// Place the single draggable pending marker, replacing any existing one.
    PlacePending(Coordinate),
    ClearPending,
    /// Swap the whole saved-location marker set in one go.
    ReplaceMarkers(Vec<Marker>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub coordinate: Coordinate,
    pub popup: String,
}
