use crate::backend::{Api, ApiError, LocationDraft};
use crate::cascade::RegionSelector;
use crate::domain::events::Event;
use crate::map::{MapSurface, PendingSelector};
use crate::roster::Roster;
use crate::ui::{ButtonState, FormUi};
use std::sync::Arc;
use tokio::sync::mpsc::Receiver;
use tracing::{debug, info, instrument, warn};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    Create,
    Editing(u32),
}

/// The form lifecycle: owns the selectors, the roster and the mode, and is
/// the single consumer of UI events. Every piece of form state is mutated
/// from here, one event at a time.
#[derive(Debug)]
pub struct FormSession {
    api: Api,
    ui: Arc<dyn FormUi>,
    regions: RegionSelector,
    pending: PendingSelector,
    roster: Roster,
    mode: Mode,
    // Carried from the fetched location while editing so an update does not
    // blank it; the form itself has no description input
    description: String,
}

impl FormSession {
    pub fn new(api: Api, ui: Arc<dyn FormUi>, surface: Arc<dyn MapSurface>) -> Self {
        FormSession {
            api,
            ui,
            regions: RegionSelector::default(),
            pending: PendingSelector::new(surface.clone()),
            roster: Roster::new(surface),
            mode: Mode::Create,
            description: String::new(),
        }
    }

    /// Loads the country catalog and the saved locations.
    #[instrument(skip_all)]
    pub async fn start(&mut self) -> Result<(), ApiError> {
        self.regions.load_countries(&self.api).await?;
        self.roster.refresh(&self.api, self.ui.as_ref()).await?;
        self.ui.set_buttons(ButtonState::create_mode());
        Ok(())
    }

    #[instrument(skip_all)]
    pub async fn listen(&mut self, mut rx: Receiver<Event>) {
        while let Some(event) = rx.recv().await {
            debug!("🔵 Received event: {:?}", event);
            self.dispatch(event).await;
        }
    }

    pub async fn dispatch(&mut self, event: Event) {
        match event {
            Event::MapClicked(coordinate) => self.pending.place(coordinate).await,
            Event::MarkerDragged(coordinate) => self.pending.dragged(coordinate),
            Event::CoordinatesTyped(text) => self.pending.set_typed(text),
            Event::CountrySelected(country) => {
                if let Err(e) = self.regions.select_country(&self.api, country).await {
                    warn!("⚠️ Loading states failed: {}", e);
                    self.ui.alert(&format!("Failed to load states: {e}")).await;
                }
            }
            Event::StateSelected(state) => {
                if let Err(e) = self.regions.select_state(&self.api, state).await {
                    warn!("⚠️ Loading cities failed: {}", e);
                    self.ui.alert(&format!("Failed to load cities: {e}")).await;
                }
            }
            Event::CitySelected(city) => self.regions.select_city(city),
            Event::SaveRequested { name } => self.submit(name).await,
            Event::EditRequested(id) => self.start_edit(id).await,
            Event::DeleteRequested(id) => self.roster.delete(&self.api, self.ui.as_ref(), id).await,
            Event::CancelRequested => self.cancel().await,
            Event::RosterReloadRequested => {
                if let Err(e) = self.roster.refresh(&self.api, self.ui.as_ref()).await {
                    warn!("⚠️ Reloading locations failed: {}", e);
                    self.ui.alert(&format!("Failed to load locations: {e}")).await;
                }
            }
        }
    }

    /// Fetches the location, replays its region through the cascade, places
    /// its coordinate and switches to edit mode.
    #[instrument(skip(self))]
    pub async fn start_edit(&mut self, id: u32) {
        info!("✏️ Editing location {}...", id);

        let location = match self.api.location(id).await {
            Ok(location) => location,
            Err(e) => {
                warn!("⚠️ Loading location {} failed: {}", id, e);
                self.ui.alert(&format!("Failed to load location: {e}")).await;
                return;
            }
        };

        let cascade = self
            .regions
            .cascade(&self.api, &location.country, location.state.as_deref(), location.city.as_deref())
            .await;
        if let Err(e) = cascade {
            warn!("⚠️ Cascading region for location {} failed: {}", id, e);
            self.ui.alert(&format!("Failed to load location: {e}")).await;
            return;
        }

        match location.coordinate {
            Some(coordinate) => self.pending.place(coordinate).await,
            None => self.pending.clear().await,
        }

        self.description = location.description;
        self.mode = Mode::Editing(id);
        self.ui.set_buttons(ButtonState::edit_mode());
        info!("✏️ Editing location {}... OK", id);
    }

    /// Validates and sends the current form, as a create or an update
    /// depending on the mode. Validation happens before any network call;
    /// a failed send preserves the form so the user can retry.
    #[instrument(skip_all)]
    pub async fn submit(&mut self, name: Option<String>) {
        let name = match name.filter(|n| !n.is_empty()) {
            Some(name) => name,
            None => match self.ui.location_name().await.filter(|n| !n.is_empty()) {
                Some(name) => name,
                // Backing out of the prompt aborts silently
                None => return,
            },
        };

        let Some(country) = self.regions.selected_country().map(str::to_string) else {
            self.ui.alert("Country is required").await;
            return;
        };

        let Some(coordinate) = self.pending.resolved() else {
            self.ui.alert("Please select a location on the map").await;
            return;
        };

        let draft = LocationDraft::new(
            name,
            self.description.clone(),
            country,
            self.regions.selected_state().map(str::to_string),
            self.regions.selected_city().map(str::to_string),
            Some(coordinate),
        );

        info!("💾 Saving location...");
        let result = match self.mode {
            Mode::Create => self.api.create(&draft).await,
            Mode::Editing(id) => self.api.update(id, &draft).await,
        };

        match result {
            Ok(message) => {
                info!("💾 Saving location... OK");
                self.ui.alert(&message).await;

                if let Err(e) = self.roster.refresh(&self.api, self.ui.as_ref()).await {
                    warn!("⚠️ Reloading locations after save failed: {}", e);
                    self.ui.alert(&format!("Failed to load locations: {e}")).await;
                }

                self.reset().await;
            }
            Err(e) => {
                warn!("⚠️ Saving location failed: {}", e);
                self.ui.alert(&format!("Failed to save location: {e}")).await;
            }
        }
    }

    /// Discards in-progress edits without contacting the backend.
    pub async fn cancel(&mut self) {
        self.reset().await;
    }

    pub async fn reset(&mut self) {
        self.regions.reset();
        self.pending.clear().await;
        self.mode = Mode::Create;
        self.description = String::new();
        self.ui.set_buttons(ButtonState::create_mode());
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn regions(&self) -> &RegionSelector {
        &self.regions
    }

    pub fn pending(&self) -> &PendingSelector {
        &self.pending
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
}
