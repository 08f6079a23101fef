use crate::domain::Coordinate;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatesRequest<'a> {
    pub country: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CitiesRequest<'a> {
    pub country: &'a str,
    pub state: &'a str,
}

/// Body of a create or update call: all location fields minus the id. Absent
/// region parts are sent as empty strings, matching what the backend stores.
#[derive(Debug, PartialEq, Serialize)]
pub struct LocationDraft {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub country: String,
    pub state: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl LocationDraft {
    pub fn new(name: String, description: String, country: String, state: Option<String>, city: Option<String>, coordinate: Option<Coordinate>) -> Self {
        LocationDraft {
            name,
            description,
            country,
            state: state.unwrap_or_default(),
            city: city.unwrap_or_default(),
            latitude: coordinate.map(|c| c.latitude()),
            longitude: coordinate.map(|c| c.longitude()),
        }
    }
}
