use crate::domain::Coordinate;

/// Everything the UI surface can ask of the form session. Dispatched over a
/// single channel so all form state is touched from one place.
#[derive(Debug)]
pub enum Event {
    MapClicked(Coordinate),
    MarkerDragged(Coordinate),
    CoordinatesTyped(String),
    CountrySelected(Option<String>),
    StateSelected(Option<String>),
    CitySelected(Option<String>),
    /// `name` carries a name typed alongside the save command; when absent
    /// the session falls back to prompting through the UI.
    SaveRequested { name: Option<String> },
    EditRequested(u32),
    DeleteRequested(u32),
    CancelRequested,
    RosterReloadRequested,
}
