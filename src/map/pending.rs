use crate::domain::Coordinate;
use crate::domain::commands::MapCommand;
use crate::map::MapSurface;
use std::sync::Arc;
use tracing::debug;

pub const COORDINATE_PLACEHOLDER: &str = "Click on map to select";

/// The single in-progress coordinate selection. Holds the optional pending
/// marker and the coordinate display text; nothing here touches the backend.
#[derive(Debug)]
pub struct PendingSelector {
    surface: Arc<dyn MapSurface>,
    coordinate: Option<Coordinate>,
    display: String,
}

impl PendingSelector {
    pub fn new(surface: Arc<dyn MapSurface>) -> Self {
        PendingSelector {
            surface,
            coordinate: None,
            display: COORDINATE_PLACEHOLDER.to_string(),
        }
    }

    /// Places the pending marker, replacing any existing one.
    pub async fn place(&mut self, coordinate: Coordinate) {
        debug!("📌 Pending selection at {}", coordinate.display_label());
        self.coordinate = Some(coordinate);
        self.display = coordinate.display_label();
        self.surface.apply(MapCommand::PlacePending(coordinate)).await;
    }

    /// Follows a marker drag; the surface already moved the marker.
    pub fn dragged(&mut self, coordinate: Coordinate) {
        if self.coordinate.is_none() {
            return;
        }

        self.coordinate = Some(coordinate);
        self.display = coordinate.display_label();
    }

    /// Overwrites the display with a manually typed value. The marker, if
    /// any, still wins at submit time.
    pub fn set_typed(&mut self, text: String) {
        self.display = text;
    }

    /// The coordinate a submit would use: the pending marker, or a parseable
    /// typed display value.
    pub fn resolved(&self) -> Option<Coordinate> {
        self.coordinate.or_else(|| Coordinate::parse_label(&self.display))
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        self.coordinate
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub async fn clear(&mut self) {
        if self.coordinate.take().is_some() {
            self.surface.apply(MapCommand::ClearPending).await;
        }
        self.display = COORDINATE_PLACEHOLDER.to_string();
    }
}
