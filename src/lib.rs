#[forbid(unsafe_code)]
pub mod aircraft;
pub(crate) mod csv;
mod emissions;
mod optimizations;
mod recommender;

pub use aircraft::*;
pub use emissions::*;
pub use optimizations::*;
pub use recommender::*;

const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;

/// Returns the great-circle distance between two geo-points in nautical miles
pub fn distance_nm(from: (f64, f64), to: (f64, f64)) -> f64 {
    let from = geoutils::Location::new(from.0, from.1);
    let to = geoutils::Location::new(to.0, to.1);
    from.haversine_distance_to(&to).meters() / METERS_PER_NAUTICAL_MILE
}
