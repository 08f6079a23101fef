use thiserror::Error;

/// A latitude/longitude pair. Both halves are always present; an unset
/// coordinate is `Option<Coordinate>` at the call site.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }

        Ok(Coordinate { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Plain "lat, lng" rendering, as stored.
    pub fn label(&self) -> String {
        format!("{}, {}", self.latitude, self.longitude)
    }

    /// "lat, lng" at six decimal places, used for the pending marker display.
    pub fn display_label(&self) -> String {
        format!("{:.6}, {:.6}", self.latitude, self.longitude)
    }

    /// Parses a typed "lat, lng" display value. Returns `None` for anything
    /// that is not two comma-separated numbers within range.
    pub fn parse_label(text: &str) -> Option<Self> {
        let (latitude, longitude) = text.split_once(',')?;
        let latitude = latitude.trim().parse::<f64>().ok()?;
        let longitude = longitude.trim().parse::<f64>().ok()?;

        Coordinate::new(latitude, longitude).ok()
    }
}

#[derive(Error, Debug)]
pub enum CoordinateError {
    #[error("invalid latitude: {0}, must be between -90 and 90")]
    LatitudeOutOfRange(f64),
    #[error("invalid longitude: {0}, must be between -180 and 180")]
    LongitudeOutOfRange(f64),
}
