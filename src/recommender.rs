//! Destination recommendation on top of external weather, events and
//! prediction collaborators. The prediction backend is a hard boundary: this
//! crate only enriches preferences and post-processes the ranked results.
use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// What a traveller is looking for
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TravelPreference {
    /// Free-form destination name (e.g. `Lisbon`)
    pub destination: String,
    /// Budget in the traveller's currency
    pub budget: f64,
    /// Duration of the stay in days
    pub duration_days: u32,
    pub interests: Vec<String>,
}

/// One day of a weather forecast
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub date: time::Date,
    /// Mean air temperature in Celsius
    pub temperature: f64,
}

/// An upcoming event at a destination
#[derive(Debug, Clone, PartialEq)]
pub struct LocalEvent {
    pub name: String,
    pub date: time::Date,
}

/// A ranked destination returned by the prediction backend
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Destination {
    pub name: String,
    /// Ranking score; higher is better
    pub score: f64,
    /// The backend's confidence in `[0, 1]`
    pub confidence: f64,
}

/// A [`TravelPreference`] enriched with destination context
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedPreferences {
    pub preference: TravelPreference,
    pub weather: Vec<ForecastDay>,
    pub local_events: Vec<LocalEvent>,
    /// Standard deviation of the forecast's monthly mean temperatures
    pub seasonality: f64,
}

/// An object that can forecast the weather at a destination
#[async_trait]
pub trait WeatherProvider {
    type Error: std::error::Error + Send;
    async fn forecast(&self, destination: &str) -> Result<Vec<ForecastDay>, Self::Error>;
}

/// An object that can list upcoming events at a destination
#[async_trait]
pub trait EventsProvider {
    type Error: std::error::Error + Send;
    async fn upcoming(&self, destination: &str) -> Result<Vec<LocalEvent>, Self::Error>;
}

/// An object that can rank destinations for enriched preferences.
/// Implementations typically call an external model; this crate never does.
#[async_trait]
pub trait DestinationPredictor {
    type Error: std::error::Error + Send;
    async fn predict(
        &self,
        preferences: &EnrichedPreferences,
    ) -> Result<Vec<Destination>, Self::Error>;
}

/// A failure of one of the recommender's collaborators
#[derive(Debug)]
pub enum RecommendError<W, E, P>
where
    W: std::error::Error + Send,
    E: std::error::Error + Send,
    P: std::error::Error + Send,
{
    /// An error originating from the weather provider
    Weather(W),
    /// An error originating from the events provider
    Events(E),
    /// An error originating from the prediction backend
    Predict(P),
}

impl<W, E, P> std::error::Error for RecommendError<W, E, P>
where
    W: std::error::Error + Send,
    E: std::error::Error + Send,
    P: std::error::Error + Send,
{
}

impl<W, E, P> std::fmt::Display for RecommendError<W, E, P>
where
    W: std::error::Error + Send,
    E: std::error::Error + Send,
    P: std::error::Error + Send,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weather(e) => std::fmt::Display::fmt(&e, f),
            Self::Events(e) => std::fmt::Display::fmt(&e, f),
            Self::Predict(e) => std::fmt::Display::fmt(&e, f),
        }
    }
}

/// Recommendations below this confidence are discarded
const MIN_CONFIDENCE: f64 = 0.8;

/// How many destinations are returned when the caller does not say
const DEFAULT_LIMIT: usize = 5;

/// Recommends destinations by enriching traveller preferences with weather
/// and local events and delegating the ranking to a prediction backend.
pub struct TravelRecommender<W, E, P> {
    weather: W,
    events: E,
    predictor: P,
}

impl<W, E, P> TravelRecommender<W, E, P>
where
    W: WeatherProvider,
    E: EventsProvider,
    P: DestinationPredictor,
{
    pub fn new(weather: W, events: E, predictor: P) -> Self {
        Self {
            weather,
            events,
            predictor,
        }
    }

    /// Returns up to `limit` (default 5) destinations with confidence above
    /// 0.8, most promising first.
    /// # Error
    /// Errors if any collaborator fails; enrichment failures are never
    /// swallowed.
    pub async fn recommend_destinations(
        &self,
        preferences: &TravelPreference,
        limit: Option<usize>,
    ) -> Result<Vec<Destination>, RecommendError<W::Error, E::Error, P::Error>> {
        let enriched = self.enrich(preferences).await?;

        log::info!("predict({})", preferences.destination);
        let mut recommendations = self
            .predictor
            .predict(&enriched)
            .await
            .map_err(RecommendError::Predict)?;

        recommendations.retain(|r| r.confidence > MIN_CONFIDENCE);
        recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));
        recommendations.truncate(limit.unwrap_or(DEFAULT_LIMIT));
        Ok(recommendations)
    }

    /// The two lookups are independent and are awaited together
    async fn enrich(
        &self,
        preferences: &TravelPreference,
    ) -> Result<EnrichedPreferences, RecommendError<W::Error, E::Error, P::Error>> {
        log::info!("enrich({})", preferences.destination);
        let (weather, local_events) = futures::join!(
            self.weather.forecast(&preferences.destination),
            self.events.upcoming(&preferences.destination)
        );
        let weather = weather.map_err(RecommendError::Weather)?;
        let local_events = local_events.map_err(RecommendError::Events)?;

        let seasonality = seasonality(&weather);
        Ok(EnrichedPreferences {
            preference: preferences.clone(),
            weather,
            local_events,
            seasonality,
        })
    }
}

/// Spread of the forecast across the year: the standard deviation of its
/// monthly mean temperatures. 0.0 for an empty forecast.
fn seasonality(forecast: &[ForecastDay]) -> f64 {
    let mut by_month = HashMap::<u8, (f64, u32)>::new();
    for day in forecast {
        let entry = by_month.entry(day.date.month() as u8).or_insert((0.0, 0));
        entry.0 += day.temperature;
        entry.1 += 1;
    }
    if by_month.is_empty() {
        return 0.0;
    }

    let means = by_month
        .values()
        .map(|(sum, days)| sum / *days as f64)
        .collect::<Vec<_>>();
    let mean = means.iter().sum::<f64>() / means.len() as f64;
    let variance = means.iter().map(|m| (m - mean) * (m - mean)).sum::<f64>() / means.len() as f64;
    variance.sqrt()
}
