use std::error::Error;

use flight_emissions::{
    calculate_emissions, load_aircraft_registry, suggest_optimizations, AircraftProfile,
    FlightDescription,
};

fn abs_difference(x: f64, y: f64) -> f64 {
    if x < y {
        y - x
    } else {
        x - y
    }
}

/// Verifies the documented A320neo mid-haul example end to end: registry
/// lookup, calculation against the closed-form formulas, and the proposal of
/// the larger, more efficient seeded airframe.
#[test]
fn acceptance_a320neo_mid_haul() -> Result<(), Box<dyn Error>> {
    let registry = load_aircraft_registry()?;
    let aircraft = registry.get("A320neo").expect("A320neo to be seeded").clone();

    let flight = FlightDescription {
        distance_nm: 1500.0,
        passengers: 150,
        cargo_weight: 5000.0,
        aircraft,
    };
    let result = calculate_emissions(&flight)?;

    let load_factor = 0.8 + 0.2 * ((150.0 * 100.0 + 5000.0) / (180.0 * 100.0 + 16600.0));
    assert!(abs_difference(result.metrics.load_factor, load_factor) < 1e-12);
    assert_eq!(result.metrics.distance_factor, 1.0);
    assert!(abs_difference(result.total_emissions, 1500.0 * 11.5 * 0.85 * load_factor) < 1e-9);
    assert!(abs_difference(result.per_passenger_emissions * 150.0, result.total_emissions) < 1e-9);

    // the seeded B787-9 is strictly more efficient and has the seats
    assert_eq!(
        suggest_optimizations(&flight, &registry),
        vec!["Consider using B787-9 for better fuel efficiency".to_string()]
    );
    Ok(())
}

/// A hypothetical unregistered airframe can be evaluated as-is, and the
/// engine proposes the first seeded substitute able to carry the passengers.
#[test]
fn acceptance_hypothetical_airframe() -> Result<(), Box<dyn Error>> {
    let registry = load_aircraft_registry()?;
    let aircraft = AircraftProfile {
        type_: "Fokker 100".into(),
        base_emission_rate: 14.0,
        max_passengers: 109,
        max_cargo_weight: 9200.0,
        fuel_efficiency_factor: 0.95,
    };
    assert!(registry.get("Fokker 100").is_none());

    let flight = FlightDescription {
        distance_nm: 420.0,
        passengers: 100,
        cargo_weight: 1000.0,
        aircraft,
    };
    let result = calculate_emissions(&flight)?;
    assert_eq!(result.metrics.distance_factor, 1.2);

    assert_eq!(
        suggest_optimizations(&flight, &registry),
        vec![
            "Short-haul flight: Consider alternative transport methods for better efficiency"
                .to_string(),
            "Consider using A320neo for better fuel efficiency".to_string(),
        ]
    );
    Ok(())
}

/// A route given as geo-points feeds the same short-haul policy
#[test]
fn acceptance_route_distance() -> Result<(), Box<dyn Error>> {
    let registry = load_aircraft_registry()?;
    let berlin = (52.3650, 13.5010);
    let brussels = (50.9008, 4.4865);

    let aircraft = registry.get("A320neo").expect("A320neo to be seeded").clone();
    let flight = FlightDescription::over_route(berlin, brussels, 150, 0.0, aircraft);

    // ~600 km, well under the 500 NM short-haul threshold
    assert!(flight.distance_nm < 500.0);
    let result = calculate_emissions(&flight)?;
    assert_eq!(result.metrics.distance_factor, 1.2);

    assert!(suggest_optimizations(&flight, &registry).contains(
        &"Short-haul flight: Consider alternative transport methods for better efficiency"
            .to_string()
    ));
    Ok(())
}
