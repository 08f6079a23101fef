use crate::domain::{Coordinate, Location};
use serde::de::Error;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Debug, Deserialize)]
        pub struct Row {
            id: u32,
            name: String,
            #[serde(default)]
            description: Option<String>,
            country: String,
            #[serde(default)]
            state: Option<String>,
            #[serde(default)]
            city: Option<String>,
            #[serde(default)]
            latitude: Option<f64>,
            #[serde(default)]
            longitude: Option<f64>,
        }

        let row = Row::deserialize(deserializer)?;

        let coordinate = match (row.latitude, row.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinate::new(latitude, longitude).map_err(Error::custom)?),
            (None, None) => None,
            _ => {
                return Err(Error::custom(format!(
                    "location '{}' has an incomplete coordinate pair, latitude and longitude must both be set",
                    row.name
                )));
            }
        };

        Ok(Location {
            id: row.id,
            name: row.name,
            description: row.description.unwrap_or_default(),
            country: row.country,
            state: non_empty(row.state),
            city: non_empty(row.city),
            coordinate,
        })
    }
}

// The backend stores absent region parts as empty strings.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|part| !part.is_empty())
}
