use serde::{Deserialize, Serialize};

use crate::AircraftProfile;

/// Average mass of a passenger including luggage, in kg
const PASSENGER_WEIGHT_KG: f64 = 100.0;

/// A non-stop flight to be evaluated.
///
/// The aircraft profile travels with the flight by value, so that
/// hypothetical or unregistered aircraft can be evaluated without consulting
/// the registry.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct FlightDescription {
    /// Flown distance in nautical miles
    pub distance_nm: f64,
    /// Passengers on board
    pub passengers: u32,
    /// Cargo on board, in kg
    pub cargo_weight: f64,
    /// The aircraft flying the route
    pub aircraft: AircraftProfile,
}

impl FlightDescription {
    /// Returns a flight over the great-circle route `from` -> `to`
    pub fn over_route(
        from: (f64, f64),
        to: (f64, f64),
        passengers: u32,
        cargo_weight: f64,
        aircraft: AircraftProfile,
    ) -> Self {
        Self {
            distance_nm: crate::distance_nm(from, to),
            passengers,
            cargo_weight,
            aircraft,
        }
    }
}

/// Intermediate factors of an emission estimate
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct EmissionMetrics {
    /// Payload utilization, 0.8 for an empty aircraft and 1.0 at rated
    /// maximum payload; above 1.0 the flight is overloaded
    pub load_factor: f64,
    /// Per-mile adjustment for the flown distance
    pub distance_factor: f64,
    /// kg CO2 per passenger per nautical mile, efficiency-weighted; lower is better
    pub efficiency_score: f64,
}

/// The emission estimate of a flight
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct EmissionResult {
    /// kg CO2 for the whole flight
    pub total_emissions: f64,
    /// kg CO2 per passenger
    pub per_passenger_emissions: f64,
    pub metrics: EmissionMetrics,
}

/// Why a [`FlightDescription`] cannot be evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidFlight {
    /// The flight carries no passengers
    NoPassengers,
    /// The distance is not strictly positive
    Distance,
}

impl std::error::Error for InvalidFlight {}

impl std::fmt::Display for InvalidFlight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPassengers => f.write_str("flight carries no passengers"),
            Self::Distance => f.write_str("flight distance must be a positive number of nautical miles"),
        }
    }
}

/// Payload utilization of the flight. Bounded below at 0.8 (an aircraft is
/// never "zero efficient" near-empty) and reaches 1.0 at rated maximum
/// payload. Intentionally not clamped above 1.0: an overloaded flight shows
/// up as an inflated emission figure, not as an error.
pub(crate) fn load_factor(flight: &FlightDescription) -> f64 {
    let passenger_weight = flight.passengers as f64 * PASSENGER_WEIGHT_KG;
    let total_weight = passenger_weight + flight.cargo_weight;
    let max_weight = flight.aircraft.max_passengers as f64 * PASSENGER_WEIGHT_KG
        + flight.aircraft.max_cargo_weight;

    0.8 + 0.2 * (total_weight / max_weight)
}

/// Shorter flights are less efficient per mile because takeoff and landing
/// dominate; long cruises gain. Exactly 1000 and 5000 NM fall in the neutral
/// band.
fn distance_factor(distance_nm: f64) -> f64 {
    if distance_nm < 500.0 {
        1.2
    } else if distance_nm < 1000.0 {
        1.1
    } else if distance_nm > 5000.0 {
        0.9
    } else {
        1.0
    }
}

/// Returns the emission estimate of `flight`.
/// # Error
/// Errors if the flight has no passengers or a non-positive distance; no
/// partial result is produced.
pub fn calculate_emissions(flight: &FlightDescription) -> Result<EmissionResult, InvalidFlight> {
    if flight.passengers == 0 {
        return Err(InvalidFlight::NoPassengers);
    }
    // also rejects NaN
    if !(flight.distance_nm > 0.0) {
        return Err(InvalidFlight::Distance);
    }

    let load_factor = load_factor(flight);
    let distance_factor = distance_factor(flight.distance_nm);
    let base_emissions = flight.distance_nm * flight.aircraft.base_emission_rate;

    let total_emissions =
        base_emissions * flight.aircraft.fuel_efficiency_factor * load_factor * distance_factor;

    let passengers = flight.passengers as f64;
    let per_passenger_per_mile = total_emissions / (passengers * flight.distance_nm);

    Ok(EmissionResult {
        total_emissions,
        per_passenger_emissions: total_emissions / passengers,
        metrics: EmissionMetrics {
            load_factor,
            distance_factor,
            efficiency_score: per_passenger_per_mile * flight.aircraft.fuel_efficiency_factor,
        },
    })
}
