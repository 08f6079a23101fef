use crate::backend::{Api, ApiError};
use crate::domain::Location;
use crate::domain::commands::{MapCommand, Marker};
use crate::map::MapSurface;
use crate::ui::FormUi;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// One rendered table row.
#[derive(Clone, Debug, PartialEq)]
pub struct RosterRow {
    pub id: u32,
    pub name: String,
    pub region: String,
    pub coordinates: String,
}

/// The saved-location collection: the fetched list, its table rows and its
/// map markers.
#[derive(Debug)]
pub struct Roster {
    surface: Arc<dyn MapSurface>,
    locations: Vec<Location>,
}

impl Roster {
    pub fn new(surface: Arc<dyn MapSurface>) -> Self {
        Roster { surface, locations: Vec::new() }
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn rows(&self) -> Vec<RosterRow> {
        self.locations
            .iter()
            .map(|location| RosterRow {
                id: location.id,
                name: location.name.clone(),
                region: location.region_label(),
                coordinates: location.coordinate_label(),
            })
            .collect()
    }

    /// Fetches the full list and replaces the table and the marker set. The
    /// markers are swapped with a single command, so the surface never shows
    /// stale and new markers together.
    #[instrument(skip_all)]
    pub async fn refresh(&mut self, api: &Api, ui: &dyn FormUi) -> Result<(), ApiError> {
        info!("📍 Loading locations...");
        let locations = api.locations().await?;
        info!("📍 Loading locations... OK, {} found", locations.len());
        self.locations = locations;

        let markers = self
            .locations
            .iter()
            .filter_map(|location| {
                location.coordinate.map(|coordinate| Marker {
                    coordinate,
                    popup: format!("{} ({})", location.name, location.region_label()),
                })
            })
            .collect();

        self.surface.apply(MapCommand::ReplaceMarkers(markers)).await;
        ui.render_roster(&self.rows());

        Ok(())
    }

    /// Asks for confirmation, deletes, and refreshes. A failed delete is
    /// surfaced but leaves the roster untouched.
    #[instrument(skip(self, api, ui))]
    pub async fn delete(&mut self, api: &Api, ui: &dyn FormUi, id: u32) {
        if !ui.confirm("Are you sure you want to delete this location?").await {
            return;
        }

        if let Err(e) = api.delete(id).await {
            warn!("⚠️ Deleting location {} failed: {}", id, e);
            ui.alert(&format!("Failed to delete location: {e}")).await;
            return;
        }

        info!("🗑️ Deleted location {}", id);

        if let Err(e) = self.refresh(api, ui).await {
            warn!("⚠️ Reloading locations after delete failed: {}", e);
            ui.alert(&format!("Failed to reload locations: {e}")).await;
        }
    }
}
