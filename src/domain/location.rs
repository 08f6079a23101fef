use crate::domain::Coordinate;

/// A saved location as held by the backend. The id is assigned on creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Location {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub country: String,
    pub state: Option<String>,
    pub city: Option<String>,
    pub coordinate: Option<Coordinate>,
}

impl Location {
    /// Human-readable "city, state, country" join, skipping absent parts.
    pub fn region_label(&self) -> String {
        [self.city.as_deref(), self.state.as_deref(), Some(self.country.as_str())]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn coordinate_label(&self) -> String {
        self.coordinate.map(|coordinate| coordinate.label()).unwrap_or_else(|| "Not set".to_string())
    }
}
