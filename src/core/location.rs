use itertools::Itertools;
use serde::Serialize;

use crate::core::error::JourneyError;

/// Named geographic point, WGS84 degrees.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Location {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub const fn new(name: &'static str, latitude: f64, longitude: f64) -> Self {
        Self { name, latitude, longitude }
    }
}

static BUILTIN: [Location; 5] = [
    Location::new("Bristol", 51.4545, -2.5879),
    Location::new("Cardiff", 51.4816, -3.1791),
    Location::new("Brecon Beacons", 51.8833, -3.4361),
    Location::new("Betws-y-Coed", 53.0931, -3.8003),
    Location::new("St Ives", 50.2110, -5.4800),
];

/// Read-only list of the places the van travels between.
#[derive(Copy, Clone)]
pub struct Catalog(&'static [Location]);

impl Catalog {
    pub fn builtin() -> Self {
        Self(&BUILTIN)
    }

    /// Find a location by its exact name.
    pub fn lookup(self, name: &str) -> Result<&'static Location, JourneyError> {
        self.0.iter().find(|location| location.name == name).ok_or_else(|| {
            JourneyError::NotFound {
                name: name.to_string(),
                known: self.0.iter().map(|location| location.name).join(", "),
            }
        })
    }

    pub fn iter(self) -> impl Iterator<Item = &'static Location> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_ok() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.iter().count(), 5);
        assert!(catalog.iter().map(|location| location.name).all_unique());
    }

    #[test]
    fn lookup_ok() -> Result<(), JourneyError> {
        let location = Catalog::builtin().lookup("Cardiff")?;
        assert_eq!(location.name, "Cardiff");
        Ok(())
    }

    #[test]
    fn lookup_is_exact() {
        let error = Catalog::builtin().lookup("cardiff").unwrap_err();
        assert!(matches!(error, JourneyError::NotFound { ref name, .. } if name == "cardiff"));
        assert!(error.to_string().contains("Brecon Beacons"));
    }
}
