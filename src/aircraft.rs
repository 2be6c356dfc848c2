//! Contains the registry of aircraft profiles against which flights are
//! evaluated and substitutions proposed.
use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Physical and efficiency characteristics of an aircraft type
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct AircraftProfile {
    /// The type designator (e.g. `A320neo`)
    #[serde(rename = "type")]
    pub type_: Arc<str>,
    /// Emissions at reference load, in kg CO2 per nautical mile
    pub base_emission_rate: f64,
    /// Seating capacity
    pub max_passengers: u32,
    /// Maximum cargo the type is rated for, in kg
    pub max_cargo_weight: f64,
    /// Efficiency multiplier relative to the reference airframe; lower is more efficient
    pub fuel_efficiency_factor: f64,
}

/// A fixed set of [`AircraftProfile`]s indexed by type designator.
///
/// Registration order is observable through [`AircraftRegistry::iter`] and is
/// the tie-break of the substitution scan in
/// [`suggest_optimizations`](crate::suggest_optimizations): among qualifying
/// profiles, the earliest-registered wins.
#[derive(Debug, Clone, Default)]
pub struct AircraftRegistry {
    profiles: Vec<AircraftProfile>,
    index: HashMap<Arc<str>, usize>,
}

impl AircraftRegistry {
    /// Builds a registry from profiles, keeping their order
    pub fn new(profiles: impl IntoIterator<Item = AircraftProfile>) -> Self {
        let mut registry = AircraftRegistry::default();
        for profile in profiles {
            registry
                .index
                .insert(profile.type_.clone(), registry.profiles.len());
            registry.profiles.push(profile);
        }
        registry
    }

    /// Returns the profile registered under `type_`.
    /// Absence means the type is unknown; no default is substituted.
    pub fn get(&self, type_: &str) -> Option<&AircraftProfile> {
        self.index.get(type_).map(|i| &self.profiles[*i])
    }

    /// All profiles, in registration order
    pub fn iter(&self) -> impl Iterator<Item = &AircraftProfile> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Returns the registry of all [`AircraftProfile`] in `src/aircraft.csv`,
/// in file order.
/// # Error
/// Errors if the file cannot be read
pub fn load_aircraft_registry() -> Result<AircraftRegistry, Box<dyn Error>> {
    let profiles = super::csv::load::<AircraftProfile>("src/aircraft.csv")?;
    log::info!("loaded {} aircraft profiles", profiles.len());
    Ok(AircraftRegistry::new(profiles))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn seed_table() {
        let registry = load_aircraft_registry().unwrap();
        assert_eq!(registry.len(), 2);

        let a320 = registry.get("A320neo").unwrap();
        assert_eq!(a320.base_emission_rate, 11.5);
        assert_eq!(a320.max_passengers, 180);
        assert_eq!(a320.max_cargo_weight, 16600.0);
        assert_eq!(a320.fuel_efficiency_factor, 0.85);

        let b787 = registry.get("B787-9").unwrap();
        assert_eq!(b787.base_emission_rate, 25.7);
        assert_eq!(b787.max_passengers, 290);
        assert_eq!(b787.max_cargo_weight, 27000.0);
        assert_eq!(b787.fuel_efficiency_factor, 0.80);
    }

    #[test]
    fn iteration_follows_registration_order() {
        let registry = load_aircraft_registry().unwrap();
        assert_eq!(
            registry.iter().map(|p| p.type_.as_ref()).collect::<Vec<_>>(),
            vec!["A320neo", "B787-9"]
        );
    }

    #[test]
    fn unknown_type_is_not_found() {
        let registry = load_aircraft_registry().unwrap();
        assert!(registry.get("A380").is_none());
        // lookups are exact
        assert!(registry.get("a320neo").is_none());
    }

    #[test]
    fn empty_registry() {
        let registry = AircraftRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.get("A320neo").is_none());
    }
}
