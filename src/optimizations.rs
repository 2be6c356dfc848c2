use crate::emissions::load_factor;
use crate::{AircraftRegistry, FlightDescription};

/// Returns advisory suggestions for `flight`, in a fixed order: load
/// consolidation, short-haul alternatives, aircraft substitution.
///
/// The substitution scan walks the registry in registration order and settles
/// for the first strictly more efficient profile with enough seats, not for
/// the global optimum.
pub fn suggest_optimizations(
    flight: &FlightDescription,
    registry: &AircraftRegistry,
) -> Vec<String> {
    let mut suggestions = vec![];

    if load_factor(flight) < 0.85 {
        suggestions
            .push("Consider consolidating flights to improve passenger load factor".to_string());
    }

    if flight.distance_nm < 500.0 {
        suggestions.push(
            "Short-haul flight: Consider alternative transport methods for better efficiency"
                .to_string(),
        );
    }

    let substitute = registry.iter().find(|candidate| {
        candidate.fuel_efficiency_factor < flight.aircraft.fuel_efficiency_factor
            && candidate.max_passengers >= flight.passengers
    });
    if let Some(candidate) = substitute {
        suggestions.push(format!(
            "Consider using {} for better fuel efficiency",
            candidate.type_
        ));
    }

    suggestions
}
