use thiserror::Error;

/// Failures of a single journey estimation.
#[derive(Debug, Error)]
pub enum JourneyError {
    #[error("unknown location `{name}`, expected one of: {known}")]
    NotFound { name: String, known: String },

    #[error("{field} is {value}, expected {min}..={max}")]
    InvalidInput { field: &'static str, value: f64, min: f64, max: f64 },

    #[error("journey data unavailable")]
    RouteUnavailable(#[from] RouteFailure),

    #[error("`{0}` is both the origin and the destination")]
    SameLocation(&'static str),
}

impl JourneyError {
    pub const fn is_route_unavailable(&self) -> bool {
        matches!(self, Self::RouteUnavailable(_))
    }
}

/// Why the routing service could not provide a leg.
#[derive(Debug, Error)]
pub enum RouteFailure {
    #[error("routing service request failed")]
    Transport(#[from] reqwest::Error),

    #[error("routing service returned no route")]
    NoRoute,

    #[error("route has no distance or duration summary")]
    MissingSummary,

    #[error("route summary is negative or not finite: {distance} m, {duration} s")]
    InvalidSummary { distance: f64, duration: f64 },
}

/// Reject values outside `min..=max`, including `NaN`.
pub fn ensure_within(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<f64, JourneyError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(JourneyError::InvalidInput { field, value, min, max })
    }
}
